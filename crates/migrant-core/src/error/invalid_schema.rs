use super::{Error, ErrorKind};

/// Error when a structure declaration is invalid.
///
/// This occurs when:
/// - A field is declared with an empty name
/// - A field's type cannot be inferred from its example value
/// - A field name collides with a `belongs_to` association
/// - Single-table inheritance forms a cycle or names an unknown parent
///
/// These errors are raised when the registry is built, before any mock is generated.
#[derive(Debug)]
pub(super) struct InvalidSchemaError {
    message: Box<str>,
}

impl std::error::Error for InvalidSchemaError {}

impl core::fmt::Display for InvalidSchemaError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid schema: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid schema error.
    pub fn invalid_schema(message: impl Into<String>) -> Error {
        Error::from(ErrorKind::InvalidSchema(InvalidSchemaError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid schema error.
    pub fn is_invalid_schema(&self) -> bool {
        self.any_kind(|kind| matches!(kind, ErrorKind::InvalidSchema(_)))
    }
}
