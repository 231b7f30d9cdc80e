//! Builds single-table statements from resolved mappings.
//!
//! Every value is carried as a bound parameter. Only table names and
//! resolved field names are written into statement text.

mod delete;

mod fields;
pub use fields::Fields;

mod filter;
pub use filter::Filter;

mod insert;
mod params;
mod select;

mod update;
pub use update::UpdateOptions;

use rowbind_core::{schema, Direction, Error, Mapping, Register, Result};
use tracing::warn;

#[derive(Debug, Clone, Default)]
pub struct Composer {
    /// When set, statements that would affect every row of a table are
    /// rejected instead of logged.
    strict: bool,

    /// Supplemental metadata layered over each model's own metadata.
    metadata: Option<schema::Model>,
}

impl Composer {
    pub fn new() -> Composer {
        Composer::default()
    }

    pub fn strict(mut self, strict: bool) -> Composer {
        self.strict = strict;
        self
    }

    pub fn metadata(mut self, metadata: schema::Model) -> Composer {
        self.metadata = Some(metadata);
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Resolves `M` for `direction` against this composer's supplemental
    /// metadata.
    pub fn mapping<M: Register>(&self, direction: Direction) -> Result<Mapping> {
        Mapping::of::<M>(direction, self.metadata.as_ref())
    }

    /// Reports a statement that runs against the whole table.
    fn hazard(&self, message: String) -> Result<()> {
        if self.strict {
            return Err(Error::unsafe_statement(message));
        }

        warn!(strict = false, "{message}");
        Ok(())
    }
}
