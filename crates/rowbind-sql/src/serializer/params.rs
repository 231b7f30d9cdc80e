use super::{Flavor, Formatter, ToSql};

use rowbind_core::{driver::Param, stmt::Value};

pub trait Params {
    /// Binds `value` under `name` and returns its placeholder.
    fn push(&mut self, name: &str, value: &Value) -> Placeholder;
}

/// A named parameter value, as attached to the executed statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub name: String,
    pub value: Value,
}

pub struct Placeholder {
    pub name: String,

    /// 1-based position of the parameter
    pub position: usize,
}

impl Binding {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Binding {
        Binding {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl From<Binding> for Param {
    fn from(binding: Binding) -> Param {
        Param::input(binding.name, binding.value)
    }
}

impl Params for Vec<Binding> {
    fn push(&mut self, name: &str, value: &Value) -> Placeholder {
        let name = placeholder_name(name, self);
        Vec::push(self, Binding::new(name.clone(), value.clone()));
        Placeholder {
            name,
            position: self.len(),
        }
    }
}

/// Derives a placeholder name from a column name.
///
/// Quoted columns may contain any character but placeholders may not:
/// anything outside `[A-Za-z0-9_]` becomes `_`. A name already bound in the
/// statement gets a `_2`, `_3`, ... suffix.
fn placeholder_name(column: &str, bound: &[Binding]) -> String {
    let mut base: String = column
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();

    if !base.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_') {
        base.insert(0, 'p');
    }

    let taken = |name: &str| bound.iter().any(|binding| binding.name == name);
    if !taken(&base) {
        return base;
    }

    let mut n = 2;
    loop {
        let name = format!("{base}_{n}");
        if !taken(&name) {
            return name;
        }
        n += 1;
    }
}

impl ToSql for Placeholder {
    fn to_sql<P: super::Params>(self, f: &mut Formatter<'_, P>) {
        match f.serializer.flavor {
            Flavor::SqlServer => {
                f.dst.push('@');
                f.dst.push_str(&self.name);
            }
            Flavor::Postgresql => {
                f.dst.push('$');
                f.dst.push_str(&self.position.to_string());
            }
            Flavor::Sqlite => {
                f.dst.push(':');
                f.dst.push_str(&self.name);
            }
        }
    }
}
