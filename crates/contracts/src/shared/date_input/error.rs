use thiserror::Error;

/// The bound value type is outside the supported set. Raised once, when the
/// converter is built; it is an integration mistake, not bad user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("The type '{type_name}' is not a supported date type.")]
    UnsupportedType { type_name: &'static str },
}

/// A raw value could not be turned into the bound type.
///
/// `message` is the field's parsing message with the display name filled in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
