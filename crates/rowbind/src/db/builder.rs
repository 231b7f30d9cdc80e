use super::{Db, Shared};
use crate::{driver::Driver, schema, Composer, Config, Flavor, Register, Result, Serializer};

use tracing::debug;

#[derive(Debug, Default)]
pub struct Builder {
    flavor: Flavor,
    strict: bool,
    metadata: Option<schema::Model>,
    config: Option<Config>,
}

impl Builder {
    /// Set the SQL dialect statements are written in
    pub fn flavor(&mut self, flavor: Flavor) -> &mut Self {
        self.flavor = flavor;
        self
    }

    /// Reject statements that would affect every row of a table
    pub fn strict(&mut self, strict: bool) -> &mut Self {
        self.strict = strict;
        self
    }

    /// Layer `T`'s metadata over every model's own metadata
    pub fn metadata<T: Register>(&mut self) -> &mut Self {
        self.metadata = Some(T::schema());
        self
    }

    /// Take flavor and strictness from `config`, and remember it for
    /// [`connect`](Self::connect).
    pub fn config(&mut self, config: Config) -> Result<&mut Self> {
        config.validate()?;
        self.flavor = config.flavor()?;
        self.strict = config.strict;
        self.config = Some(config);
        Ok(self)
    }

    pub fn build(&mut self, driver: impl Driver) -> Result<Db> {
        let mut composer = Composer::new().strict(self.strict);

        if let Some(metadata) = self.metadata.take() {
            metadata.verify()?;
            composer = composer.metadata(metadata);
        }

        debug!(flavor = %self.flavor, strict = self.strict, "building db");

        Ok(Db::new(Shared {
            driver: Box::new(driver),
            composer,
            serializer: Serializer::new(self.flavor),
        }))
    }

    /// Builds a driver for the configured default connection string and
    /// returns the handle.
    pub fn connect<D, F>(&mut self, open: F) -> Result<Db>
    where
        D: Driver,
        F: FnOnce(&str) -> Result<D>,
    {
        let driver = match &self.config {
            Some(config) => open(config.default_connection_string()?)?,
            None => open("")?,
        };

        self.build(driver)
    }
}
