use super::Error;

/// Error when declared model metadata is malformed or contradictory.
///
/// This occurs when:
/// - A model declares the same field name twice
/// - A field declares more than one conversion rule for the same direction
/// - Two fields resolve to the same external name
/// - A supplemental metadata type names a field the model does not have
///
/// These errors surface at registration or resolution time and are never
/// skipped over.
#[derive(Debug)]
pub(super) struct ConfigurationError {
    model: Box<str>,
    field: Option<Box<str>>,
    message: Box<str>,
}

impl std::error::Error for ConfigurationError {}

impl core::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.field {
            Some(field) => write!(
                f,
                "invalid metadata on `{}.{}`: {}",
                self.model, field, self.message
            ),
            None => write!(f, "invalid metadata on `{}`: {}", self.model, self.message),
        }
    }
}

impl Error {
    /// Creates a configuration error naming the offending model and field.
    pub fn configuration(
        model: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::Configuration(ConfigurationError {
            model: model.into().into(),
            field: Some(field.into().into()),
            message: message.into().into(),
        }))
    }

    /// Creates a configuration error that concerns a model as a whole.
    pub fn model_configuration(model: impl Into<String>, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Configuration(ConfigurationError {
            model: model.into().into(),
            field: None,
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a configuration error.
    pub fn is_configuration(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::Configuration(_)))
    }
}
