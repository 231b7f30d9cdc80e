//! Resolved, direction-scoped field catalogs.

use super::{Direction, Result};
use crate::{convert::Rule, stmt::Value, Register};

/// The resolved catalog of one model type for one direction.
///
/// Built fresh on every resolution; callers that want caching keep the
/// value around themselves.
#[derive(Debug, Clone)]
pub struct Mapping {
    /// Name of the model type the catalog was resolved for
    pub model: String,

    /// Direction the catalog was resolved for
    pub direction: Direction,

    /// Descriptors in primary-model declaration order
    pub fields: Vec<Field>,
}

/// A single resolved field descriptor.
#[derive(Debug, Clone)]
pub struct Field {
    /// The model field's own name
    pub field_name: String,

    /// Accessor slot on the primary model. Supplemental metadata never
    /// changes this.
    pub index: usize,

    /// External column or parameter name
    pub name: String,

    /// True if the field is part of the primary key
    pub primary_key: bool,

    /// Conversion applied in this direction
    pub rule: Option<Rule>,
}

impl Mapping {
    /// Resolves the catalog for `M`, layering `supplemental` on top of the
    /// type's default metadata.
    pub fn of<M: Register>(
        direction: Direction,
        supplemental: Option<&super::Model>,
    ) -> Result<Mapping> {
        Mapping::resolve(&M::schema(), direction, supplemental)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Field> + '_ {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Finds a descriptor by its resolved name.
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Resolved names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.iter().map(|field| field.name.as_str())
    }
}

impl Field {
    /// Runs the descriptor's conversion rule on `value`.
    ///
    /// Null input is passed through untouched unless the rule substitutes a
    /// default for nulls.
    pub fn convert(&self, value: Value) -> Result<Value> {
        match &self.rule {
            Some(rule) if !value.is_null() || rule.handles_null() => rule.apply(value),
            _ => Ok(value),
        }
    }
}

impl<'a> IntoIterator for &'a Mapping {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
