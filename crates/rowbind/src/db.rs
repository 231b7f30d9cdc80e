mod builder;
pub use builder::Builder;

mod command;
pub use command::Command;

mod session;
pub use session::Session;

use crate::{
    convert,
    driver::{Connection, Driver, Query},
    Composer, Direction, Fields, Filter, Model, Result, Row, Serializer, UpdateOptions,
};

use std::{future::Future, sync::Arc};
use tracing::{debug, warn};

/// Shared state between all `Db` clones.
#[derive(Debug)]
pub(crate) struct Shared {
    pub(crate) driver: Box<dyn Driver>,
    pub(crate) composer: Composer,
    pub(crate) serializer: Serializer,
}

/// A database handle.
///
/// Each operation acquires its own connection and releases it before
/// returning. Use [`Db::with_connection`] to run several operations on one
/// connection.
#[derive(Debug, Clone)]
pub struct Db {
    shared: Arc<Shared>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub(crate) fn new(shared: Shared) -> Db {
        Db {
            shared: Arc::new(shared),
        }
    }

    pub fn composer(&self) -> &Composer {
        &self.shared.composer
    }

    pub fn serializer(&self) -> &Serializer {
        &self.shared.serializer
    }

    /// Opens a connection, runs `f` against it and closes the connection on
    /// every exit path.
    ///
    /// If `f` succeeds but closing fails, the close error is returned. If
    /// both fail, `f`'s error wins and the close error is logged.
    pub async fn with_connection<T, F, Fut>(&self, f: F) -> Result<T>
    where
        F: FnOnce(Session) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let conn: Arc<dyn Connection> = Arc::from(self.shared.driver.connect().await?);
        debug!("connection opened");

        let result = f(Session::new(self.shared.clone(), conn.clone())).await;
        let closed = conn.close().await;
        debug!(ok = closed.is_ok(), "connection closed");

        match (result, closed) {
            (Ok(value), Ok(())) => Ok(value),
            (Ok(_), Err(err)) => Err(err),
            (Err(err), Ok(())) => Err(err),
            (Err(err), Err(close)) => {
                warn!(error = %close, "failed to close connection after error");
                Err(err)
            }
        }
    }

    /// Reads the first row of `table` matching `filter`.
    pub async fn get_model<M: Model>(
        &self,
        table: &str,
        filter: &Filter,
        fields: &Fields,
    ) -> Result<Option<M>> {
        self.with_connection(|session| async move {
            session.get_model::<M>(table, filter, fields).await
        })
        .await
    }

    /// Reads every row of `table`.
    pub async fn get_model_list<M: Model>(&self, table: &str, fields: &Fields) -> Result<Vec<M>> {
        self.with_connection(|session| async move { session.get_model_list::<M>(table, fields).await })
            .await
    }

    pub async fn insert_model<M: Model>(&self, table: &str, model: &M, fields: &Fields) -> Result<u64> {
        self.with_connection(|session| async move {
            session.insert_model(table, model, fields).await
        })
        .await
    }

    pub async fn update_model<M: Model>(
        &self,
        table: &str,
        model: &M,
        options: &UpdateOptions,
    ) -> Result<u64> {
        self.with_connection(|session| async move {
            session.update_model(table, model, options).await
        })
        .await
    }

    pub async fn delete_model(&self, table: &str, filter: &Filter) -> Result<u64> {
        self.with_connection(|session| async move { session.delete_model(table, filter).await })
            .await
    }

    /// Runs `query` and loads each returned row into `M`. Columns outside
    /// `fields` are treated as absent.
    pub async fn query_models<M: Model>(&self, query: Query, fields: &Fields) -> Result<Vec<M>> {
        self.with_connection(|session| async move { session.query_models::<M>(query, fields).await })
            .await
    }

    /// Converts rows that were fetched elsewhere into models.
    pub fn load_rows<M: Model>(&self, rows: &[Row]) -> Result<Vec<M>> {
        load_rows(&self.shared, rows)
    }

    /// Starts a hand-written statement that acquires its own connection.
    pub fn command(&self, sql: impl Into<String>) -> Command<'_> {
        Command::new(command::Target::Db(self), sql.into())
    }

    /// Runs `f` inside a transaction on a fresh connection.
    ///
    /// See [`Session::transaction`].
    pub async fn transaction<T, F, Fut>(&self, f: F) -> Result<T>
    where
        F: FnOnce(Session) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        self.with_connection(|session| async move { session.transaction(f).await })
            .await
    }
}

fn load_rows<M: Model>(shared: &Shared, rows: &[Row]) -> Result<Vec<M>> {
    let mapping = shared.composer.mapping::<M>(Direction::ResultToModel)?;
    convert::load_all(rows, &mapping)
}
