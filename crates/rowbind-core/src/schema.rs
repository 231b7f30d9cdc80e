mod builder;
pub use builder::{Builder, FieldBuilder};

mod direction;
pub use direction::Direction;

mod field;
pub use field::{Access, Field};

pub mod mapping;
pub use mapping::Mapping;

mod model;
pub use model::Model;

mod resolve;

mod verify;

use crate::Result;
