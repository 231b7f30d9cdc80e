use crate::{schema, stmt::Value, Result};

/// A type that declares mapping metadata.
///
/// Implemented by `#[derive(Model)]` for mapped records and by
/// `#[derive(Metadata)]` for supplemental metadata types, which carry rules
/// but no storage.
pub trait Register {
    /// Returns the statically declared field table for this type.
    fn schema() -> schema::Model;
}

/// A record that can be populated from rows and extracted into parameters.
///
/// Fields are addressed by the accessor index recorded in the type's
/// [`schema::Field`] declarations.
pub trait Model: Register + Default {
    /// Reads the current value of the field at `index`.
    fn field(&self, index: usize) -> Value;

    /// Writes `value` into the field at `index`.
    fn set_field(&mut self, index: usize, value: Value) -> Result<()>;
}
