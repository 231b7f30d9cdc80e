use super::{Assignment, Statement};

#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub table: String,

    /// Columns to insert, each with its bound value
    pub values: Vec<Assignment>,
}

impl From<Insert> for Statement {
    fn from(src: Insert) -> Self {
        Self::Insert(src)
    }
}
