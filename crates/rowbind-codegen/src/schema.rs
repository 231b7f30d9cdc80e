mod convert;
pub(crate) use convert::{Convert, ConvertKind, Direction};

mod error;
pub(crate) use error::ErrorSet;

mod field;
pub(crate) use field::{Access, Field};

mod model;
pub(crate) use model::{Model, ModelKind};

mod model_attr;
pub(crate) use model_attr::ModelAttr;

mod rename;
pub(crate) use rename::RenameRule;
