use super::Direction;
use crate::convert::Rule;

/// A field as declared on a model or supplemental metadata type.
#[derive(Debug, Clone)]
pub struct Field {
    /// The field's own name. Supplemental metadata is matched on this.
    pub name: String,

    /// Accessor slot on the owning model.
    pub index: usize,

    /// Whether the field can be read and / or written.
    pub access: Access,

    /// True if the field is part of the primary key
    pub primary_key: bool,

    /// True if the field is never populated from result rows.
    pub skip_result: bool,

    /// True if the field is never bound as an input parameter.
    pub skip_param: bool,

    /// Column name used when reading results, if it differs from `name`.
    pub column_name: Option<String>,

    /// Parameter name used when binding, if it differs from `name`.
    pub param_name: Option<String>,

    /// Declared conversion rules, at most one per direction.
    pub rules: Vec<Rule>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Access {
    pub readable: bool,
    pub writable: bool,
}

impl Access {
    pub const READ_WRITE: Access = Access {
        readable: true,
        writable: true,
    };

    pub const READ_ONLY: Access = Access {
        readable: true,
        writable: false,
    };

    pub const WRITE_ONLY: Access = Access {
        readable: false,
        writable: true,
    };
}

impl Default for Access {
    fn default() -> Self {
        Self::READ_WRITE
    }
}

impl Field {
    pub fn new(name: impl Into<String>, index: usize) -> Field {
        Field {
            name: name.into(),
            index,
            access: Access::READ_WRITE,
            primary_key: false,
            skip_result: false,
            skip_param: false,
            column_name: None,
            param_name: None,
            rules: vec![],
        }
    }

    /// Returns `true` if the field takes part in mappings for `direction`.
    pub fn qualifies(&self, direction: Direction) -> bool {
        match direction {
            Direction::ResultToModel => self.access.writable && !self.skip_result,
            Direction::ModelToParameter => self.access.readable && !self.skip_param,
        }
    }

    /// The external name for `direction`.
    pub fn resolved_name(&self, direction: Direction) -> &str {
        let name = match direction {
            Direction::ResultToModel => self.column_name.as_deref(),
            Direction::ModelToParameter => self.param_name.as_deref(),
        };
        name.unwrap_or(&self.name)
    }

    /// The conversion rule declared for `direction`, if any.
    pub fn rule(&self, direction: Direction) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.direction == direction)
    }
}
