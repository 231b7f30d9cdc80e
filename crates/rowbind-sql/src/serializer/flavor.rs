use super::Serializer;

use rowbind_core::Error;

use std::{fmt, str::FromStr};

/// SQL dialect differences that matter to single-table statements:
/// identifier quoting and parameter placeholders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Flavor {
    /// `[ident]` and `@name`
    #[default]
    SqlServer,

    /// `"ident"` and `$n`
    Postgresql,

    /// `"ident"` and `:name`
    Sqlite,
}

impl Serializer {
    pub fn sql_server() -> Serializer {
        Serializer::new(Flavor::SqlServer)
    }

    pub fn postgresql() -> Serializer {
        Serializer::new(Flavor::Postgresql)
    }

    pub fn sqlite() -> Serializer {
        Serializer::new(Flavor::Sqlite)
    }
}

impl FromStr for Flavor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Flavor, Error> {
        match s.to_ascii_lowercase().as_str() {
            "sqlserver" | "sql_server" | "mssql" => Ok(Flavor::SqlServer),
            "postgresql" | "postgres" | "pg" => Ok(Flavor::Postgresql),
            "sqlite" => Ok(Flavor::Sqlite),
            _ => Err(rowbind_core::err!("unknown SQL flavor `{s}`")),
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Flavor::SqlServer => "sqlserver",
            Flavor::Postgresql => "postgresql",
            Flavor::Sqlite => "sqlite",
        })
    }
}
