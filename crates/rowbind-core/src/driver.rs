//! The execution collaborator: drivers own connections and run statements.

pub mod operation;
pub use operation::{CommandType, Exec, Operation, Param, ParamDirection, Query, Transaction};

mod response;
pub use response::{Response, Rows};

use crate::{async_trait, Result};

use std::fmt::Debug;

#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Opens a new connection to the data source.
    async fn connect(&self) -> Result<Box<dyn Connection>>;
}

/// An open connection. Drivers synchronize access internally, so a
/// connection can be shared by the code running against it and the scope
/// that releases it.
#[async_trait]
pub trait Connection: Debug + Send + Sync {
    /// Execute a database operation
    async fn exec(&self, op: Operation) -> Result<Response>;

    /// Releases the connection. Called exactly once, on every exit path of
    /// a scoped acquisition.
    async fn close(&self) -> Result<()>;
}
