use super::Error;

/// Error raised in strict mode when a composed statement would affect every
/// row of its table.
///
/// This occurs when:
/// - An update resolves no primary key and no explicit key list was given
/// - A delete is composed with an empty filter
#[derive(Debug)]
pub(super) struct UnsafeStatement {
    message: Box<str>,
}

impl std::error::Error for UnsafeStatement {}

impl core::fmt::Display for UnsafeStatement {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsafe statement: {}", self.message)
    }
}

impl Error {
    /// Creates an unsafe statement error.
    pub fn unsafe_statement(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsafeStatement(UnsafeStatement {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an unsafe statement error.
    pub fn is_unsafe_statement(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::UnsafeStatement(_)))
    }
}
