use crate::{Flavor, Result};

use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

const ENV_PREFIX: &str = "ROWBIND_";

/// Connection and composition settings.
///
/// ```json
/// {
///   "connection_strings": { "main": "Server=db;Database=app" },
///   "connection_string_name": "main",
///   "flavor": "sqlserver",
///   "strict": true
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Named connection strings, in declaration order
    pub connection_strings: IndexMap<String, String>,

    /// Picks the default connection string out of `connection_strings`
    pub connection_string_name: Option<String>,

    /// Default connection string, used when no name is given
    pub connection_string: Option<String>,

    /// SQL dialect: `sqlserver`, `postgresql` or `sqlite`
    pub flavor: Option<String>,

    /// Reject statements that would affect every row of a table
    pub strict: bool,
}

impl Config {
    /// Load configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json).map_err(anyhow::Error::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Read configuration from `ROWBIND_*` environment variables.
    ///
    /// Named connection strings are read from
    /// `ROWBIND_CONNECTION_STRINGS__<NAME>`.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(std::env::vars())
    }

    pub(crate) fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> Result<Self> {
        let mut config = Config::default();

        let mut vars: Vec<_> = vars
            .into_iter()
            .filter_map(|(key, value)| Some((key.strip_prefix(ENV_PREFIX)?.to_string(), value)))
            .collect();
        vars.sort();

        for (key, value) in vars {
            if let Some(name) = key.strip_prefix("CONNECTION_STRINGS__") {
                config
                    .connection_strings
                    .insert(name.to_ascii_lowercase(), value);
                continue;
            }

            match key.as_str() {
                "CONNECTION_STRING" => config.connection_string = Some(value),
                "CONNECTION_STRING_NAME" => {
                    config.connection_string_name = Some(value.to_ascii_lowercase())
                }
                "FLAVOR" => config.flavor = Some(value),
                "STRICT" => {
                    config.strict = match value.to_ascii_lowercase().as_str() {
                        "true" | "yes" | "1" => true,
                        "false" | "no" | "0" | "" => false,
                        _ => return Err(crate::err!("invalid ROWBIND_STRICT value `{value}`")),
                    }
                }
                _ => {}
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        self.flavor()?;
        self.default_connection_string()?;
        Ok(())
    }

    pub fn flavor(&self) -> Result<Flavor> {
        match &self.flavor {
            Some(flavor) => flavor.parse(),
            None => Ok(Flavor::default()),
        }
    }

    /// Resolves the default connection target: the named entry, then the
    /// explicit string, then the first declared entry, then an empty string.
    pub fn default_connection_string(&self) -> Result<&str> {
        if let Some(name) = self.connection_string_name.as_deref().filter(|n| !n.is_empty()) {
            return self
                .connection_strings
                .get(name)
                .map(String::as_str)
                .ok_or_else(|| crate::err!("no connection string named `{name}`"));
        }

        if let Some(connection_string) = self.connection_string.as_deref().filter(|s| !s.is_empty()) {
            return Ok(connection_string);
        }

        Ok(self
            .connection_strings
            .values()
            .next()
            .map(String::as_str)
            .unwrap_or(""))
    }
}
