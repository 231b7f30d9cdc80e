//! Value conversion rules and the model / row converter.

mod extract;
pub use extract::extract;

mod list;

mod load;
pub use load::{load, load_all, populate};

mod rule;
pub use rule::{Convert, Rule, RuleKind};
