pub mod convert;
pub use convert::{Convert, Rule, RuleKind};

pub mod driver;
pub use driver::{Connection, Driver};

mod error;
pub use error::{Error, IntoError};

mod model;
pub use model::{Model, Register};

pub mod row;
pub use row::{Row, RowSource};

pub mod schema;
pub use schema::{Direction, Mapping};

pub mod stmt;

/// A Result type alias that uses rowbind's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
