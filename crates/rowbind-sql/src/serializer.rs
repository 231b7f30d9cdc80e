#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited, Period};

mod flavor;
pub use flavor::Flavor;

mod ident;
use ident::{Ident, Name};

mod params;
pub use params::{Binding, Params, Placeholder};

mod statement;

use crate::stmt::Statement;

/// Serialize a statement to a SQL string
#[derive(Debug, Clone, Copy, Default)]
pub struct Serializer {
    /// The database flavor handles the differences between SQL dialects
    flavor: Flavor,
}

/// Statement text together with the parameters it references.
#[derive(Debug, Clone, PartialEq)]
pub struct Sql {
    pub text: String,
    pub bindings: Vec<Binding>,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl Serializer {
    pub fn new(flavor: Flavor) -> Serializer {
        Serializer { flavor }
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// Writes `stmt` as SQL text, pushing every bound value into `params`.
    ///
    /// Values never appear in the returned text; only identifiers and
    /// placeholders do.
    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
        };

        stmt.to_sql(&mut fmt);

        ret
    }

    /// Serializes `stmt` into its text and binding list.
    pub fn sql(&self, stmt: &Statement) -> Sql {
        let mut bindings = vec![];
        let text = self.serialize(stmt, &mut bindings);
        Sql { text, bindings }
    }

    /// Quotes a single identifier for this flavor.
    pub fn quote(&self, ident: &str) -> String {
        let mut ret = String::new();
        let mut params: Vec<Binding> = vec![];
        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params: &mut params,
        };
        Ident(ident).to_sql(&mut fmt);
        ret
    }
}
