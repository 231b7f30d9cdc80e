use crate::stmt::Value;

#[derive(Debug, Clone)]
pub enum Operation {
    /// Run a statement or stored procedure
    Query(Query),

    /// Execute a transaction lifecycle op
    Transaction(Transaction),
}

#[derive(Debug, Clone)]
pub struct Query {
    /// Statement text, or the procedure name for stored procedures
    pub sql: String,

    /// Bound parameters, in binding order
    pub params: Vec<Param>,

    pub command_type: CommandType,

    /// What the caller expects back
    pub exec: Exec,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CommandType {
    #[default]
    Text,
    StoredProcedure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exec {
    /// Return the result rows
    Rows,

    /// Return the number of affected rows
    NonQuery,

    /// Return the first column of the first row
    Scalar,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub value: Value,
    pub direction: ParamDirection,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParamDirection {
    #[default]
    In,
    Out,
    ReturnValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    /// Start a transaction
    Start,

    /// Commit a transaction
    Commit,

    /// Rollback a transaction
    Rollback,
}

impl Query {
    pub fn new(sql: impl Into<String>, exec: Exec) -> Query {
        Query {
            sql: sql.into(),
            params: vec![],
            command_type: CommandType::Text,
            exec,
        }
    }
}

impl Param {
    pub fn input(name: impl Into<String>, value: impl Into<Value>) -> Param {
        Param {
            name: name.into(),
            value: value.into(),
            direction: ParamDirection::In,
        }
    }

    pub fn output(name: impl Into<String>) -> Param {
        Param {
            name: name.into(),
            value: Value::Null,
            direction: ParamDirection::Out,
        }
    }

    pub fn return_value(name: impl Into<String>) -> Param {
        Param {
            name: name.into(),
            value: Value::Null,
            direction: ParamDirection::ReturnValue,
        }
    }
}

impl From<Query> for Operation {
    fn from(value: Query) -> Operation {
        Operation::Query(value)
    }
}

impl From<Transaction> for Operation {
    fn from(value: Transaction) -> Operation {
        Operation::Transaction(value)
    }
}
