use crate::Value;

use chrono::{DateTime, NaiveDate};
use fake::faker::lorem::en::{Paragraph, Words};
use fake::Fake;
use rand::Rng;
use rust_decimal::Decimal;
use std::fmt;

/// Days from 0001-01-01 (CE) to 2000-01-01.
const MOCK_EPOCH_DAYS: i32 = 730_120;

/// Unix timestamp of 2000-01-01T00:00:00Z.
const MOCK_EPOCH_SECONDS: i64 = 946_684_800;

/// Width of the window mock dates and timestamps are drawn from.
const MOCK_WINDOW_DAYS: i32 = 10_000;

/// The type of a declared field.
///
/// Every variant other than the foreign key types knows how to synthesize a
/// representative value of itself with [`DataType::mock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Boolean,
    Integer,
    Float,
    Decimal,
    String,
    Text,
    Date,
    DateTime,

    /// Key column backing a `belongs_to` association.
    ForeignKey,

    /// Type column of a polymorphic `belongs_to` association.
    Polymorphic,
}

impl DataType {
    /// Returns true for the columns that are populated through an association
    /// rather than synthesized directly.
    pub fn is_foreign_key(self) -> bool {
        matches!(self, Self::ForeignKey | Self::Polymorphic)
    }

    /// Synthesize a representative value, or `None` for foreign key types.
    pub fn mock<R: Rng>(self, rng: &mut R) -> Option<Value> {
        let value = match self {
            Self::Boolean => Value::Bool(rng.gen_bool(0.5)),
            Self::Integer => Value::I64(rng.gen_range(0..1000)),
            Self::Float => Value::F64(rng.gen_range(0.0..1000.0)),
            Self::Decimal => Value::Decimal(Decimal::new(rng.gen_range(0..100_000), 2)),
            Self::String => {
                let words: Vec<String> = Words(1..4).fake_with_rng(rng);
                Value::String(words.join(" "))
            }
            Self::Text => Value::String(Paragraph(1..3).fake_with_rng(rng)),
            Self::Date => {
                let days = MOCK_EPOCH_DAYS + rng.gen_range(0..MOCK_WINDOW_DAYS);
                Value::Date(NaiveDate::from_num_days_from_ce_opt(days)?)
            }
            Self::DateTime => {
                let seconds = rng.gen_range(0..i64::from(MOCK_WINDOW_DAYS) * 86_400);
                Value::DateTime(DateTime::from_timestamp(MOCK_EPOCH_SECONDS + seconds, 0)?)
            }
            Self::ForeignKey | Self::Polymorphic => return None,
        };

        Some(value)
    }

    /// Infer a data type from an example value.
    pub fn infer(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(_) => Some(Self::Boolean),
            Value::I64(_) => Some(Self::Integer),
            Value::F64(_) => Some(Self::Float),
            Value::Decimal(_) => Some(Self::Decimal),
            Value::String(_) => Some(Self::String),
            Value::Date(_) => Some(Self::Date),
            Value::DateTime(_) => Some(Self::DateTime),
            Value::Instance(_) | Value::Null => None,
        }
    }

    /// Returns true if `value` is assignable to a field of this type.
    pub fn accepts(self, value: &Value) -> bool {
        match (self, value) {
            (_, Value::Null) => true,
            (Self::Text, Value::String(_)) => true,
            (Self::Polymorphic, Value::String(_)) => true,
            (Self::ForeignKey, Value::I64(_)) => true,
            (Self::Float, Value::I64(_)) => true,
            _ => Self::infer(value) == Some(self),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Decimal => "decimal",
            Self::String => "string",
            Self::Text => "text",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::ForeignKey => "foreign_key",
            Self::Polymorphic => "polymorphic",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
