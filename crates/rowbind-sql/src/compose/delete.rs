use super::{Composer, Filter};
use crate::stmt::{Delete, Statement};

use rowbind_core::Result;
use tracing::debug;

impl Composer {
    /// Builds `DELETE FROM table WHERE ...`.
    ///
    /// An empty filter deletes every row; that is reported as a hazard.
    pub fn delete(&self, table: &str, filter: &Filter) -> Result<Statement> {
        if filter.is_empty() {
            self.hazard(format!("DELETE FROM {table} has no WHERE clause"))?;
        }

        debug!(table, filter = filter.len(), "composed delete");

        Ok(Delete {
            table: table.to_string(),
            filter: filter.to_vec(),
        }
        .into())
    }
}
