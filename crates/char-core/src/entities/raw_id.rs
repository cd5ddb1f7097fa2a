use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An identifier as it arrives from the store: a JSON number or a string.
///
/// Postgres `bigint` keys come through as numbers, text keys and UUIDs as
/// strings. View-models want numeric keys where possible, so [`as_number`]
/// parses both shapes.
///
/// [`as_number`]: RawId::as_number
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(untagged)]
pub enum RawId {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl RawId {
    /// Non-negative integral value of this id, if it has one.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn as_number(&self) -> Option<u64> {
        match self {
            Self::Integer(n) => u64::try_from(*n).ok(),
            Self::Float(f) if f.is_finite() && *f >= 0.0 && f.fract() == 0.0 && *f < 2f64.powi(64) => {
                Some(*f as u64)
            }
            Self::Float(_) => None,
            Self::Text(text) => text.trim().parse::<u64>().ok(),
        }
    }

    /// Whether the id carries no usable text (blank string).
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(text) if text.trim().is_empty())
    }
}

impl fmt::Display for RawId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(text) => f.write_str(text.trim()),
        }
    }
}
