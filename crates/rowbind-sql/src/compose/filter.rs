use crate::stmt::{Assignment, Value};

use rowbind_core::{Model, Register, Result};

/// An ordered set of `column = value` predicates, AND-joined into a WHERE
/// clause.
///
/// An empty filter produces no WHERE clause at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    conditions: Vec<Assignment>,
}

impl Filter {
    pub fn new() -> Filter {
        Filter::default()
    }

    /// Adds `column = value`.
    pub fn eq(mut self, column: impl Into<String>, value: impl Into<Value>) -> Filter {
        self.conditions.push(Assignment::new(column, value));
        self
    }

    /// One predicate per declared field of `model`, null fields included.
    ///
    /// Fields are matched by their own names with their raw values. Skip
    /// flags, renames and conversion rules do not apply to a where object.
    pub fn from_model<M: Model>(model: &M) -> Result<Filter> {
        let schema = <M as Register>::schema();
        schema.verify()?;

        Ok(schema
            .fields
            .iter()
            .map(|field| (field.name.as_str(), model.field(field.index)))
            .collect())
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Assignment> + '_ {
        self.conditions.iter()
    }

    pub(super) fn to_vec(&self) -> Vec<Assignment> {
        self.conditions.clone()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Filter {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Filter {
        Filter {
            conditions: iter
                .into_iter()
                .map(|(column, value)| Assignment::new(column, value))
                .collect(),
        }
    }
}
