use super::{Composer, Fields};
use crate::stmt::{Assignment, Insert, Statement};

use rowbind_core::{bail, convert, Direction, Model, Result};
use tracing::debug;

impl Composer {
    /// Builds `INSERT INTO table (...) VALUES (...)` from `model`.
    ///
    /// Null fields are left out of both lists rather than inserted as NULL.
    pub fn insert<M: Model>(&self, table: &str, model: &M, fields: &Fields) -> Result<Statement> {
        let mapping = self.mapping::<M>(Direction::ModelToParameter)?;

        let mut values = vec![];
        convert::extract(model, &mapping, true, |name, value, _| {
            if fields.contains(name) {
                values.push(Assignment::new(name, value));
            }
        })?;

        if values.is_empty() {
            bail!("INSERT INTO {table} has no columns with a value");
        }

        debug!(table, columns = values.len(), "composed insert");

        Ok(Insert {
            table: table.to_string(),
            values,
        }
        .into())
    }
}
