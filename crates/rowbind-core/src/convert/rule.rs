use super::list;
use crate::{schema::Direction, stmt::Value, Result};

use std::{fmt, sync::Arc};

/// A user supplied conversion function.
pub trait Convert: fmt::Debug + Send + Sync {
    fn convert(&self, value: Value) -> Result<Value>;
}

/// A directional conversion attached to a single field.
#[derive(Debug, Clone)]
pub struct Rule {
    pub direction: Direction,
    pub kind: RuleKind,
}

#[derive(Debug, Clone)]
pub enum RuleKind {
    /// Substitute the given value for null; pass anything else through.
    DefaultIfNull(Value),

    /// Encode a list of integers as a comma separated string.
    JoinInts,

    /// Encode a list of strings as a comma separated string.
    JoinStrings,

    /// Decode a comma separated string into a list of integers. Segments
    /// that are empty or do not parse are dropped.
    SplitInts,

    /// Decode a comma separated string into a list of trimmed, non-empty
    /// strings.
    SplitStrings,

    /// A user supplied conversion.
    Custom(Arc<dyn Convert>),
}

impl Rule {
    /// Substitutes `default` for null results.
    pub fn default_if_null(default: impl Into<Value>) -> Rule {
        Rule {
            direction: Direction::ResultToModel,
            kind: RuleKind::DefaultIfNull(default.into()),
        }
    }

    pub fn join_ints() -> Rule {
        Rule {
            direction: Direction::ModelToParameter,
            kind: RuleKind::JoinInts,
        }
    }

    pub fn join_strings() -> Rule {
        Rule {
            direction: Direction::ModelToParameter,
            kind: RuleKind::JoinStrings,
        }
    }

    pub fn split_ints() -> Rule {
        Rule {
            direction: Direction::ResultToModel,
            kind: RuleKind::SplitInts,
        }
    }

    pub fn split_strings() -> Rule {
        Rule {
            direction: Direction::ResultToModel,
            kind: RuleKind::SplitStrings,
        }
    }

    pub fn custom(direction: Direction, convert: impl Convert + 'static) -> Rule {
        Rule {
            direction,
            kind: RuleKind::Custom(Arc::new(convert)),
        }
    }

    /// Overrides the rule's default direction.
    pub fn with_direction(mut self, direction: Direction) -> Rule {
        self.direction = direction;
        self
    }

    /// Returns `true` if the rule should see null input.
    pub fn handles_null(&self) -> bool {
        matches!(self.kind, RuleKind::DefaultIfNull(_))
    }

    pub fn name(&self) -> &'static str {
        match self.kind {
            RuleKind::DefaultIfNull(_) => "default_if_null",
            RuleKind::JoinInts => "join_ints",
            RuleKind::JoinStrings => "join_strings",
            RuleKind::SplitInts => "split_ints",
            RuleKind::SplitStrings => "split_strings",
            RuleKind::Custom(_) => "custom",
        }
    }

    pub fn apply(&self, value: Value) -> Result<Value> {
        match &self.kind {
            RuleKind::DefaultIfNull(default) => Ok(if value.is_null() {
                default.clone()
            } else {
                value
            }),
            RuleKind::JoinInts => list::join_ints(value),
            RuleKind::JoinStrings => list::join_strings(value),
            RuleKind::SplitInts => list::split_ints(value),
            RuleKind::SplitStrings => list::split_strings(value),
            RuleKind::Custom(convert) => convert.convert(value),
        }
    }
}
