use super::{Error, ErrorKind};

/// Error when an instance is constructed without an attribute it requires.
#[derive(Debug)]
pub(super) struct MissingAttributeError {
    name: Box<str>,
}

/// Error when an instance is constructed with attributes it does not know.
#[derive(Debug)]
pub(super) struct UnknownAttributeError {
    names: Vec<String>,
}

impl std::error::Error for MissingAttributeError {}

impl core::fmt::Display for MissingAttributeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "missing attribute `{}`", self.name)
    }
}

impl std::error::Error for UnknownAttributeError {}

impl core::fmt::Display for UnknownAttributeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.names[..] {
            [name] => write!(f, "unknown attribute `{name}`"),
            names => {
                f.write_str("unknown attributes: ")?;
                for (i, name) in names.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "`{name}`")?;
                }
                Ok(())
            }
        }
    }
}

impl Error {
    /// Creates a missing attribute error.
    pub fn missing_attribute(name: impl Into<String>) -> Error {
        Error::from(ErrorKind::MissingAttribute(MissingAttributeError {
            name: name.into().into(),
        }))
    }

    /// Returns `true` if this error is a missing attribute error.
    pub fn is_missing_attribute(&self) -> bool {
        self.any_kind(|kind| matches!(kind, ErrorKind::MissingAttribute(_)))
    }

    /// Creates an unknown attribute error listing every unexpected name.
    pub fn unknown_attribute<I>(names: I) -> Error
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Error::from(ErrorKind::UnknownAttribute(UnknownAttributeError {
            names: names.into_iter().map(Into::into).collect(),
        }))
    }

    /// Returns `true` if this error is an unknown attribute error.
    pub fn is_unknown_attribute(&self) -> bool {
        self.any_kind(|kind| matches!(kind, ErrorKind::UnknownAttribute(_)))
    }
}
