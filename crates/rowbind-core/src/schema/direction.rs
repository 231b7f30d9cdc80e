use std::fmt;

/// Which way values flow through a mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Reading a result row into a model.
    ResultToModel,

    /// Extracting a model's fields as bound statement parameters.
    ModelToParameter,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResultToModel => f.write_str("result->model"),
            Self::ModelToParameter => f.write_str("model->parameter"),
        }
    }
}
