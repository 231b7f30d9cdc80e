use super::{Assignment, Statement};

#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    pub table: String,

    /// AND-joined equality predicates. Empty deletes every row.
    pub filter: Vec<Assignment>,
}

impl From<Delete> for Statement {
    fn from(src: Delete) -> Self {
        Self::Delete(src)
    }
}
