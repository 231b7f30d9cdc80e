mod config;
pub use config::Config;

pub mod db;
pub use db::{Builder, Command, Db, Session};

pub use rowbind_core::{
    async_trait, bail, convert, driver, err, schema, stmt, Convert, Direction, Error, Mapping,
    Model, Register, Result, Row, RowSource, Rule,
};

pub use rowbind_sql::{Binding, Composer, Fields, Filter, Flavor, Serializer, Sql, UpdateOptions};

pub use rowbind_macros::{Metadata, Model};

#[doc(hidden)]
pub mod codegen_support {
    pub use rowbind_core::{schema, stmt, Direction, Error, Model, Register, Result, Rule};
}
