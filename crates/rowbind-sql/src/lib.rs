pub mod compose;
pub use compose::{Composer, Fields, Filter, UpdateOptions};

pub mod serializer;
pub use serializer::{Binding, Flavor, Params, Serializer, Sql};

pub mod stmt;
pub use stmt::Statement;
