use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Value produced by a formatter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FakeValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Uuid(String),
    Date(NaiveDate),
    Time(NaiveTime),
    Timestamp(DateTime<FixedOffset>),
    List(Vec<FakeValue>),
}

impl FakeValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FakeValue::Null)
    }

    /// Canonical comparable form used by uniqueness ledgers.
    ///
    /// The variant tag is part of the key, so `Int(1)` and `Text("1")` are
    /// distinct entries.
    pub fn ledger_key(&self) -> String {
        // Serializing this enum cannot fail: every payload is a plain value and
        // non-finite floats are written as `null`.
        serde_json::to_string(self).unwrap_or_else(|_| format!("{self:?}"))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FakeValue::Text(value) | FakeValue::Uuid(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FakeValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FakeValue::Int(value) => Some(*value as f64),
            FakeValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FakeValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Calendar date of a date or timestamp value.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FakeValue::Date(value) => Some(*value),
            FakeValue::Timestamp(value) => Some(value.date_naive()),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<DateTime<FixedOffset>> {
        match self {
            FakeValue::Timestamp(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for FakeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FakeValue::Null => Ok(()),
            FakeValue::Bool(value) => write!(f, "{value}"),
            FakeValue::Int(value) => write!(f, "{value}"),
            FakeValue::Float(value) => write!(f, "{value}"),
            FakeValue::Text(value) | FakeValue::Uuid(value) => f.write_str(value),
            FakeValue::Date(value) => write!(f, "{}", value.format("%Y-%m-%d")),
            FakeValue::Time(value) => write!(f, "{}", value.format("%H:%M:%S")),
            FakeValue::Timestamp(value) => {
                write!(f, "{}", value.format("%Y-%m-%dT%H:%M:%S%:z"))
            }
            FakeValue::List(values) => {
                for (idx, value) in values.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for FakeValue {
    fn from(value: &str) -> Self {
        FakeValue::Text(value.to_string())
    }
}

impl From<String> for FakeValue {
    fn from(value: String) -> Self {
        FakeValue::Text(value)
    }
}

impl From<i64> for FakeValue {
    fn from(value: i64) -> Self {
        FakeValue::Int(value)
    }
}

impl From<i32> for FakeValue {
    fn from(value: i32) -> Self {
        FakeValue::Int(i64::from(value))
    }
}

impl From<u32> for FakeValue {
    fn from(value: u32) -> Self {
        FakeValue::Int(i64::from(value))
    }
}

impl From<f64> for FakeValue {
    fn from(value: f64) -> Self {
        FakeValue::Float(value)
    }
}

impl From<bool> for FakeValue {
    fn from(value: bool) -> Self {
        FakeValue::Bool(value)
    }
}

impl From<NaiveDate> for FakeValue {
    fn from(value: NaiveDate) -> Self {
        FakeValue::Date(value)
    }
}

impl From<DateTime<FixedOffset>> for FakeValue {
    fn from(value: DateTime<FixedOffset>) -> Self {
        FakeValue::Timestamp(value)
    }
}

impl<T: Into<FakeValue>> From<Option<T>> for FakeValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FakeValue::Null, Into::into)
    }
}

impl<T: Into<FakeValue>> From<Vec<T>> for FakeValue {
    fn from(values: Vec<T>) -> Self {
        FakeValue::List(values.into_iter().map(Into::into).collect())
    }
}
