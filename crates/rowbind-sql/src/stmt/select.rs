use super::{Assignment, Statement};

#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub table: String,

    pub projection: Projection,

    /// AND-joined equality predicates. Empty selects every row.
    pub filter: Vec<Assignment>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Projection {
    /// `*`
    All,

    /// An explicit column list
    Columns(Vec<String>),
}

impl From<Select> for Statement {
    fn from(src: Select) -> Self {
        Self::Select(src)
    }
}
