use super::{Db, Session, Shared};
use crate::{
    driver::{CommandType, Exec, Param, Query, Response},
    stmt::Value,
    Fields, Model, Result, Row,
};

/// A hand-written statement or stored procedure call.
///
/// ```ignore
/// let total = db
///     .command("dbo.CountOrders")
///     .stored_procedure()
///     .bind("CustomerId", 7)
///     .bind_out("Total")
///     .exec()
///     .await?
///     .output("Total")
///     .cloned();
/// ```
#[derive(Debug)]
pub struct Command<'a> {
    target: Target<'a>,
    query: Query,
}

#[derive(Debug)]
pub(super) enum Target<'a> {
    /// Acquire a connection for this command alone
    Db(&'a Db),

    /// Run on an already open connection
    Session(&'a Session),
}

impl<'a> Command<'a> {
    pub(super) fn new(target: Target<'a>, sql: String) -> Command<'a> {
        Command {
            target,
            query: Query::new(sql, Exec::NonQuery),
        }
    }

    fn shared(&self) -> &Shared {
        match self.target {
            Target::Db(db) => &db.shared,
            Target::Session(session) => session.shared(),
        }
    }

    /// Treat the command text as a stored procedure name.
    pub fn stored_procedure(mut self) -> Self {
        self.query.command_type = CommandType::StoredProcedure;
        self
    }

    /// Binds an input parameter.
    pub fn bind(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.query.params.push(Param::input(name, value));
        self
    }

    /// Declares an output parameter, read back with [`Response::output`].
    pub fn bind_out(mut self, name: impl Into<String>) -> Self {
        self.query.params.push(Param::output(name));
        self
    }

    /// Declares the procedure's return value parameter.
    pub fn bind_return(mut self, name: impl Into<String>) -> Self {
        self.query.params.push(Param::return_value(name));
        self
    }

    /// Binds the non-null fields of `model` as input parameters.
    pub fn bind_model<M: Model>(mut self, model: &M, fields: &Fields) -> Result<Self> {
        let bindings = self.shared().composer.params(model, fields)?;
        self.query
            .params
            .extend(bindings.into_iter().map(Param::from));
        Ok(self)
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Runs the command and returns the full response, including output
    /// parameters.
    pub async fn exec(self) -> Result<Response> {
        let op = self.query.into();

        match self.target {
            Target::Db(db) => {
                db.with_connection(|session| async move { session.exec(op).await })
                    .await
            }
            Target::Session(session) => session.exec(op).await,
        }
    }

    /// Returns the number of affected rows.
    pub async fn exec_non_query(mut self) -> Result<u64> {
        self.query.exec = Exec::NonQuery;
        self.exec().await?.rows.into_count()
    }

    /// Returns the first column of the first row, or null.
    pub async fn exec_scalar(mut self) -> Result<Value> {
        self.query.exec = Exec::Scalar;
        self.exec().await?.rows.into_scalar()
    }

    pub async fn exec_rows(mut self) -> Result<Vec<Row>> {
        self.query.exec = Exec::Rows;
        self.exec().await?.rows.into_values()
    }

    /// Loads each returned row into `M`. Columns outside `fields` are
    /// treated as absent.
    pub async fn exec_models<M: Model>(self, fields: &Fields) -> Result<Vec<M>> {
        match self.target {
            Target::Db(db) => db.query_models(self.query, fields).await,
            Target::Session(session) => session.query_models(self.query, fields).await,
        }
    }
}
