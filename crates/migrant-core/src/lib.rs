mod error;
pub use error::{Error, IntoError};

pub mod schema;
pub use schema::Schema;

pub mod value;
pub use value::{Attributes, Instance, Value};

/// A Result type alias that uses Migrant's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
