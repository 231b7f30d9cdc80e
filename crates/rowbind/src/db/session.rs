use super::{Command, Shared};
use crate::{
    convert,
    driver::{Connection, Exec, Operation, Param, Query, Response, Transaction},
    Direction, Fields, Filter, Model, Result, Row, UpdateOptions,
};

use rowbind_sql::Statement;
use std::{future::Future, sync::Arc};
use tracing::{debug, warn};

/// Operations bound to one open connection.
///
/// Handed out by [`Db::with_connection`](super::Db::with_connection) and
/// [`Db::transaction`](super::Db::transaction). Cloning shares the
/// connection.
#[derive(Debug, Clone)]
pub struct Session {
    shared: Arc<Shared>,
    conn: Arc<dyn Connection>,
}

impl Session {
    pub(super) fn new(shared: Arc<Shared>, conn: Arc<dyn Connection>) -> Session {
        Session { shared, conn }
    }

    pub(super) fn shared(&self) -> &Shared {
        &self.shared
    }

    /// Execute a raw driver operation
    pub async fn exec(&self, op: Operation) -> Result<Response> {
        if let Operation::Query(query) = &op {
            debug!(sql = %query.sql, params = query.params.len(), exec = ?query.exec, "exec");
        } else {
            debug!(?op, "exec");
        }

        self.conn.exec(op).await
    }

    async fn exec_statement(&self, stmt: &Statement, exec: Exec) -> Result<Response> {
        let sql = self.shared.serializer.sql(stmt);
        debug!(table = stmt.table(), "serialized statement");

        let mut query = Query::new(sql.text, exec);
        query.params = sql.bindings.into_iter().map(Param::from).collect();

        self.exec(query.into()).await
    }

    pub async fn get_model<M: Model>(
        &self,
        table: &str,
        filter: &Filter,
        fields: &Fields,
    ) -> Result<Option<M>> {
        let stmt = self.shared.composer.select::<M>(table, fields, filter)?;
        let rows = self.exec_statement(&stmt, Exec::Rows).await?.rows.into_values()?;

        match rows.first() {
            Some(row) => Ok(Some(self.load_row(row, &Fields::all())?)),
            None => Ok(None),
        }
    }

    pub async fn get_model_list<M: Model>(&self, table: &str, fields: &Fields) -> Result<Vec<M>> {
        let stmt = self.shared.composer.select::<M>(table, fields, &Filter::new())?;
        let rows = self.exec_statement(&stmt, Exec::Rows).await?.rows.into_values()?;
        super::load_rows(&self.shared, &rows)
    }

    /// Inserts the non-null fields of `model`. Returns the affected row count.
    pub async fn insert_model<M: Model>(&self, table: &str, model: &M, fields: &Fields) -> Result<u64> {
        let stmt = self.shared.composer.insert(table, model, fields)?;
        self.exec_statement(&stmt, Exec::NonQuery)
            .await?
            .rows
            .into_count()
    }

    pub async fn update_model<M: Model>(
        &self,
        table: &str,
        model: &M,
        options: &UpdateOptions,
    ) -> Result<u64> {
        let stmt = self.shared.composer.update(table, model, options)?;
        self.exec_statement(&stmt, Exec::NonQuery)
            .await?
            .rows
            .into_count()
    }

    pub async fn delete_model(&self, table: &str, filter: &Filter) -> Result<u64> {
        let stmt = self.shared.composer.delete(table, filter)?;
        self.exec_statement(&stmt, Exec::NonQuery)
            .await?
            .rows
            .into_count()
    }

    pub async fn query_models<M: Model>(&self, mut query: Query, fields: &Fields) -> Result<Vec<M>> {
        query.exec = Exec::Rows;
        let rows = self.exec(query.into()).await?.rows.into_values()?;

        rows.iter().map(|row| self.load_row(row, fields)).collect()
    }

    pub fn load_rows<M: Model>(&self, rows: &[Row]) -> Result<Vec<M>> {
        super::load_rows(&self.shared, rows)
    }

    /// Starts a hand-written statement on this connection.
    pub fn command(&self, sql: impl Into<String>) -> Command<'_> {
        Command::new(super::command::Target::Session(self), sql.into())
    }

    /// Runs `f` between a transaction start and commit.
    ///
    /// If `f` or the commit fails, the transaction is rolled back and the
    /// original error is returned. A failed rollback is logged, not
    /// returned.
    pub async fn transaction<T, F, Fut>(&self, f: F) -> Result<T>
    where
        F: FnOnce(Session) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        self.exec(Transaction::Start.into()).await?;

        let result = match f(self.clone()).await {
            Ok(value) => self.exec(Transaction::Commit.into()).await.map(|_| value),
            Err(err) => Err(err),
        };

        if let Err(err) = &result {
            debug!(error = %err, "rolling back transaction");
            if let Err(rollback) = self.exec(Transaction::Rollback.into()).await {
                warn!(error = %rollback, "failed to roll back transaction");
            }
        }

        result
    }

    /// Loads one row, treating columns outside `fields` as absent.
    pub(super) fn load_row<M: Model>(&self, row: &Row, fields: &Fields) -> Result<M> {
        let mapping = self.shared.composer.mapping::<M>(Direction::ResultToModel)?;
        convert::populate(&mapping, |name| {
            if fields.contains(name) {
                row.get(name).cloned()
            } else {
                None
            }
        })
    }
}
