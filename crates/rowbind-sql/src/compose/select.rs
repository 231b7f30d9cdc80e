use super::{Composer, Fields, Filter};
use crate::stmt::{Projection, Select, Statement};

use rowbind_core::{Direction, Register, Result};
use tracing::debug;

impl Composer {
    /// Builds `SELECT ... FROM table WHERE ...` for `M`.
    ///
    /// Without `exclude`, an `include` list is used as the column list as
    /// given, without consulting `M`'s metadata. With `exclude`, the column
    /// list is `M`'s result-direction mapping, filtered by both lists.
    pub fn select<M: Register>(
        &self,
        table: &str,
        fields: &Fields,
        filter: &Filter,
    ) -> Result<Statement> {
        let projection = match (&fields.include, &fields.exclude) {
            (None, None) => Projection::All,
            (Some(include), None) => Projection::Columns(include.clone()),
            (_, Some(_)) => {
                let mapping = self.mapping::<M>(Direction::ResultToModel)?;
                Projection::Columns(
                    mapping
                        .names()
                        .filter(|name| fields.contains(name))
                        .map(str::to_string)
                        .collect(),
                )
            }
        };

        debug!(table, filter = filter.len(), "composed select");

        Ok(Select {
            table: table.to_string(),
            projection,
            filter: filter.to_vec(),
        }
        .into())
    }
}
