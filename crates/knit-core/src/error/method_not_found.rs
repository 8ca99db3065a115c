use super::Error;

/// Error when a call is forwarded to a target that cannot handle it.
///
/// Relations raise it when no query handle is configured; the query handle
/// raises it for method names it does not know.
#[derive(Debug)]
pub(super) struct MethodNotFound {
    pub(super) receiver: Box<str>,
    pub(super) method: Box<str>,
}

impl std::error::Error for MethodNotFound {}

impl core::fmt::Display for MethodNotFound {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "method not found: {}::{}", self.receiver, self.method)
    }
}

impl Error {
    /// Creates a method-not-found error naming the receiver type and method.
    pub fn method_not_found(receiver: impl Into<String>, method: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MethodNotFound(MethodNotFound {
            receiver: receiver.into().into(),
            method: method.into().into(),
        }))
    }

    /// Returns `true` if this error is a method-not-found error.
    pub fn is_method_not_found(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MethodNotFound(_))
    }
}
