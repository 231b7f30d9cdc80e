use super::{Field, Result};

/// The statically declared field table of one type.
#[derive(Debug, Clone)]
pub struct Model {
    /// Type name, used in error messages
    pub name: String,

    /// Fields in declaration order
    pub fields: Vec<Field>,

    /// Default supplemental metadata, layered before any per-call metadata.
    pub metadata: Option<fn() -> Model>,
}

impl Model {
    pub fn new(name: impl Into<String>) -> Model {
        Model {
            name: name.into(),
            fields: vec![],
            metadata: None,
        }
    }

    /// Looks up a declared field by its own name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Returns the default supplemental metadata table, if declared.
    pub fn default_metadata(&self) -> Option<Model> {
        self.metadata.map(|metadata| metadata())
    }

    /// Checks the registration-time invariants of the table.
    pub fn verify(&self) -> Result<()> {
        super::verify::verify(self)
    }
}
