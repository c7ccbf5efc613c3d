use super::Value;
use crate::Error;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

macro_rules! impl_conversions {
    ($ty:ty, $name:ident, $lit:literal) => {
        impl From<$ty> for Value {
            fn from(value: $ty) -> Self {
                Self::$name(value)
            }
        }

        impl TryFrom<Value> for $ty {
            type Error = Error;

            fn try_from(value: Value) -> Result<Self, Self::Error> {
                match value {
                    Value::$name(value) => Ok(value),
                    _ => Err(Error::type_conversion(&value, $lit)),
                }
            }
        }
    };
}

impl_conversions!(bool, Bool, "bool");
impl_conversions!(i64, I64, "i64");
impl_conversions!(f64, F64, "f64");
impl_conversions!(Decimal, Decimal, "Decimal");
impl_conversions!(String, String, "String");
impl_conversions!(NaiveDate, Date, "NaiveDate");
impl_conversions!(DateTime<Utc>, DateTime, "DateTime<Utc>");

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::I64(value.into())
    }
}

impl TryFrom<Value> for i32 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::I64(v) => i32::try_from(v).map_err(|_| Error::type_conversion(&value, "i32")),
            _ => Err(Error::type_conversion(&value, "i32")),
        }
    }
}

impl TryFrom<Value> for u32 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::I64(v) => u32::try_from(v).map_err(|_| Error::type_conversion(&value, "u32")),
            _ => Err(Error::type_conversion(&value, "u32")),
        }
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::I64(value.into())
    }
}
