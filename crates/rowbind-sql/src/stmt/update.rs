use super::{Assignment, Statement};

#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub table: String,

    /// SET list
    pub assignments: Vec<Assignment>,

    /// AND-joined primary key equalities. Empty updates every row.
    pub filter: Vec<Assignment>,
}

impl From<Update> for Statement {
    fn from(src: Update) -> Self {
        Self::Update(src)
    }
}
