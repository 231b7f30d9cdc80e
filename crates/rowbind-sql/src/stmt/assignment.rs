use super::Value;

/// A column paired with the value bound for it.
///
/// Serialized as `column = @column` in SET and WHERE clauses, or split into
/// the column and VALUES lists of an insert. The parameter takes the column's
/// name.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub column: String,
    pub value: Value,
}

impl Assignment {
    pub fn new(column: impl Into<String>, value: impl Into<Value>) -> Assignment {
        Assignment {
            column: column.into(),
            value: value.into(),
        }
    }
}
