use super::Error;

/// Error when a conversion rule cannot process the value it was given.
#[derive(Debug)]
pub(super) struct ConversionError {
    rule: &'static str,
    message: Box<str>,
}

impl std::error::Error for ConversionError {}

impl core::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "conversion `{}` failed: {}", self.rule, self.message)
    }
}

impl Error {
    /// Creates a conversion error for the named rule.
    pub fn conversion(rule: &'static str, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Conversion(ConversionError {
            rule,
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error was raised while converting a value,
    /// either by a conversion rule or by a typed field accessor.
    pub fn is_conversion(&self) -> bool {
        self.any_kind(|kind| {
            matches!(
                kind,
                super::ErrorKind::Conversion(_) | super::ErrorKind::TypeConversion(_)
            )
        })
    }
}
