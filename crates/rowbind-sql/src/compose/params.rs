use super::{Composer, Fields};
use crate::Binding;

use rowbind_core::{convert, Direction, Model, Result};

impl Composer {
    /// Binds the non-null fields of `model` as input parameters, for
    /// hand-written statements and stored procedures.
    pub fn params<M: Model>(&self, model: &M, fields: &Fields) -> Result<Vec<Binding>> {
        let mapping = self.mapping::<M>(Direction::ModelToParameter)?;

        let mut bindings = vec![];
        convert::extract(model, &mapping, true, |name, value, _| {
            if fields.contains(name) {
                bindings.push(Binding::new(name, value));
            }
        })?;

        Ok(bindings)
    }
}
