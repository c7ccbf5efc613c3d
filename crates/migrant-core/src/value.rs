mod attributes;
pub use attributes::Attributes;

mod convert;

mod instance;
pub use instance::Instance;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

/// A single attribute value, as synthesized by a mock or supplied as an
/// override.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Signed 64-bit integer
    I64(i64),

    /// 64-bit floating point number
    F64(f64),

    /// Fixed-precision decimal
    Decimal(Decimal),

    /// String value
    String(String),

    /// Calendar date
    Date(NaiveDate),

    /// Point in time, in UTC
    DateTime(DateTime<Utc>),

    /// A nested model instance, populated through an association
    Instance(Box<Instance>),

    /// Null value
    #[default]
    Null,
}

impl Value {
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub const fn is_instance(&self) -> bool {
        matches!(self, Self::Instance(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    #[track_caller]
    pub fn expect_instance(&self) -> &Instance {
        match self {
            Self::Instance(instance) => instance,
            _ => panic!("expected instance, but was {self:?}"),
        }
    }

    /// Human readable name of the value's type, used in error messages.
    pub fn ty_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "boolean",
            Self::I64(_) => "integer",
            Self::F64(_) => "float",
            Self::Decimal(_) => "decimal",
            Self::String(_) => "string",
            Self::Date(_) => "date",
            Self::DateTime(_) => "datetime",
            Self::Instance(_) => "instance",
            Self::Null => "null",
        }
    }
}

impl From<Instance> for Value {
    fn from(value: Instance) -> Self {
        Self::Instance(Box::new(value))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Self::Null,
        }
    }
}
