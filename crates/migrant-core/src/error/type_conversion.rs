use super::{Error, ErrorKind};
use crate::Value;

/// Error when a [`Value`] cannot be converted into the requested Rust type.
#[derive(Debug)]
pub(super) struct TypeConversionError {
    from: &'static str,
    to: &'static str,
}

impl std::error::Error for TypeConversionError {}

impl core::fmt::Display for TypeConversionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "cannot convert {} to {}", self.from, self.to)
    }
}

impl Error {
    /// Creates a type conversion error for `value` being read as `to`.
    pub fn type_conversion(value: &Value, to: &'static str) -> Error {
        Error::from(ErrorKind::TypeConversion(TypeConversionError {
            from: value.ty_name(),
            to,
        }))
    }

    /// Returns `true` if this error is a type conversion error.
    pub fn is_type_conversion(&self) -> bool {
        self.any_kind(|kind| matches!(kind, ErrorKind::TypeConversion(_)))
    }
}
