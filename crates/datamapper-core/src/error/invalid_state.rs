use super::Error;

/// Error when an operation is requested on a model in the wrong lifecycle
/// state.
///
/// This occurs when:
/// - `create` is called on a model that already has a primary key value
/// - `update` or `delete_by_pk` is called on a model that was never created
///
/// The message is fixed per operation and is displayed verbatim.
#[derive(Debug)]
pub(super) struct InvalidStateError {
    message: Box<str>,
}

impl std::error::Error for InvalidStateError {}

impl core::fmt::Display for InvalidStateError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error {
    /// Creates an invalid state error.
    pub fn invalid_state(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidState(InvalidStateError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid state error.
    pub fn is_invalid_state(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidState(_))
    }
}
