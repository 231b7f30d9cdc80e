//! Row sources consumed by the read-direction converter.

use crate::stmt::Value;

use indexmap::IndexMap;

/// Anything that exposes named column values.
///
/// A column that holds a null and a column that is not present are
/// indistinguishable to the converter.
pub trait RowSource {
    /// Column names in result order.
    fn column_names(&self) -> Vec<&str>;

    /// Returns the value of `name`, or `None` if the column is absent.
    fn value_of(&self, name: &str) -> Option<Value>;
}

/// An ordered column to value map, as returned by drivers.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Row {
    columns: IndexMap<String, Value>,
}

impl Row {
    pub fn new() -> Row {
        Row::default()
    }

    /// Adds a column, replacing any previous value of the same name.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Row {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.columns.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        // Column names coming back from a server are not always cased the
        // way the mapping declares them.
        self.columns.get(name).or_else(|| {
            self.columns
                .iter()
                .find(|(column, _)| column.eq_ignore_ascii_case(name))
                .map(|(_, value)| value)
        })
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.columns
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Returns the first column's value, used for scalar results.
    pub fn first(&self) -> Option<&Value> {
        self.columns.first().map(|(_, value)| value)
    }
}

impl RowSource for Row {
    fn column_names(&self) -> Vec<&str> {
        self.columns.keys().map(String::as_str).collect()
    }

    fn value_of(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Row {
        Row {
            columns: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}
