use super::{Error, ErrorKind};

/// Error when a mock is requested for a model that never declared a structure.
#[derive(Debug)]
pub(super) struct MissingStructureError {
    model: Box<str>,
}

impl std::error::Error for MissingStructureError {}

impl core::fmt::Display for MissingStructureError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "model `{}` has no structure; declare one with `structure` or `no_structure`",
            self.model
        )
    }
}

impl Error {
    /// Creates a missing structure error for `model`.
    pub fn missing_structure(model: impl Into<String>) -> Error {
        Error::from(ErrorKind::MissingStructure(MissingStructureError {
            model: model.into().into(),
        }))
    }

    /// Returns `true` if this error is a missing structure error.
    pub fn is_missing_structure(&self) -> bool {
        self.any_kind(|kind| matches!(kind, ErrorKind::MissingStructure(_)))
    }
}
