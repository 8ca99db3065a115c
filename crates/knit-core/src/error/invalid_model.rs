use super::Error;

/// Error when a model cannot be resolved or loaded.
///
/// This occurs when:
/// - A query handle has no model attached
/// - A row is missing a column the model requires
#[derive(Debug)]
pub(super) struct InvalidModel {
    pub(super) message: Box<str>,
}

impl std::error::Error for InvalidModel {}

impl core::fmt::Display for InvalidModel {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid model: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid model error.
    pub fn invalid_model(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidModel(InvalidModel {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid model error.
    pub fn is_invalid_model(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidModel(_))
    }
}
