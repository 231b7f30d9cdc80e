use super::{Access, Field, Model, Result};
use crate::convert::Rule;

/// Declares a model's field table without the derive macro.
///
/// Fields receive accessor indices in the order they are declared.
///
/// ```
/// use rowbind_core::{schema, Rule};
///
/// let model = schema::Builder::new("Order")
///     .field("id", |f| f.primary_key())
///     .field("tags", |f| f.rule(Rule::join_ints()).rule(Rule::split_ints()))
///     .build()
///     .unwrap();
///
/// assert_eq!(model.fields.len(), 2);
/// ```
#[derive(Debug)]
pub struct Builder {
    model: Model,
}

/// Configures a single field declared through [`Builder::field`].
#[derive(Debug)]
pub struct FieldBuilder {
    field: Field,
}

impl Builder {
    pub fn new(name: impl Into<String>) -> Builder {
        Builder {
            model: Model::new(name),
        }
    }

    pub fn field(
        mut self,
        name: impl Into<String>,
        f: impl FnOnce(FieldBuilder) -> FieldBuilder,
    ) -> Builder {
        let index = self.model.fields.len();
        let builder = f(FieldBuilder {
            field: Field::new(name, index),
        });
        self.model.fields.push(builder.field);
        self
    }

    /// Declares the default supplemental metadata for the model.
    pub fn metadata(mut self, metadata: fn() -> Model) -> Builder {
        self.model.metadata = Some(metadata);
        self
    }

    /// Verifies the declared table and returns it.
    pub fn build(self) -> Result<Model> {
        self.model.verify()?;
        Ok(self.model)
    }
}

impl FieldBuilder {
    pub fn primary_key(mut self) -> Self {
        self.field.primary_key = true;
        self
    }

    /// Uses `name` in both directions.
    pub fn rename(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.field.column_name = Some(name.clone());
        self.field.param_name = Some(name);
        self
    }

    pub fn column(mut self, name: impl Into<String>) -> Self {
        self.field.column_name = Some(name.into());
        self
    }

    pub fn param(mut self, name: impl Into<String>) -> Self {
        self.field.param_name = Some(name.into());
        self
    }

    pub fn skip_result(mut self) -> Self {
        self.field.skip_result = true;
        self
    }

    pub fn skip_param(mut self) -> Self {
        self.field.skip_param = true;
        self
    }

    pub fn readonly(mut self) -> Self {
        self.field.access = Access::READ_ONLY;
        self
    }

    pub fn writeonly(mut self) -> Self {
        self.field.access = Access::WRITE_ONLY;
        self
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.field.rules.push(rule);
        self
    }
}
