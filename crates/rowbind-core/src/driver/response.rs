use super::{operation::ParamDirection, Param};
use crate::{row::Row, stmt::Value, Error, Result};

#[derive(Debug, Default)]
pub struct Response {
    pub rows: Rows,

    /// Output and return-value parameters, as filled in by the driver
    pub params: Vec<Param>,
}

#[derive(Debug, Default)]
pub enum Rows {
    /// Number of rows impacted by the operation
    Count(u64),

    /// Operation result rows
    Values(Vec<Row>),

    /// A single value
    Scalar(Value),

    /// The operation produces no result (transaction lifecycle ops)
    #[default]
    Empty,
}

impl Response {
    pub fn count(count: u64) -> Self {
        Self {
            rows: Rows::Count(count),
            params: vec![],
        }
    }

    pub fn values(rows: impl Into<Vec<Row>>) -> Self {
        Self {
            rows: Rows::Values(rows.into()),
            params: vec![],
        }
    }

    pub fn scalar(value: impl Into<Value>) -> Self {
        Self {
            rows: Rows::Scalar(value.into()),
            params: vec![],
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_params(mut self, params: Vec<Param>) -> Self {
        self.params = params;
        self
    }

    /// Finds an output or return-value parameter by name.
    pub fn output(&self, name: &str) -> Option<&Value> {
        self.params
            .iter()
            .filter(|param| param.direction != ParamDirection::In)
            .find(|param| param.name == name)
            .map(|param| &param.value)
    }
}

impl Rows {
    fn kind(&self) -> &'static str {
        match self {
            Rows::Count(_) => "Count",
            Rows::Values(_) => "Values",
            Rows::Scalar(_) => "Scalar",
            Rows::Empty => "Empty",
        }
    }

    pub fn into_count(self) -> Result<u64> {
        match self {
            Rows::Count(count) => Ok(count),
            _ => Err(Error::invalid_result(format!(
                "expected Count, got {}",
                self.kind()
            ))),
        }
    }

    pub fn into_values(self) -> Result<Vec<Row>> {
        match self {
            Rows::Values(rows) => Ok(rows),
            _ => Err(Error::invalid_result(format!(
                "expected Values, got {}",
                self.kind()
            ))),
        }
    }

    /// Drivers may answer a scalar request with either a value or a row set;
    /// a row set yields its first column of its first row.
    pub fn into_scalar(self) -> Result<Value> {
        match self {
            Rows::Scalar(value) => Ok(value),
            Rows::Values(rows) => Ok(rows
                .first()
                .and_then(Row::first)
                .cloned()
                .unwrap_or_default()),
            _ => Err(Error::invalid_result(format!(
                "expected Scalar, got {}",
                self.kind()
            ))),
        }
    }
}
