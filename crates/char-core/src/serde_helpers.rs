//! Serde helpers for tolerant deserialization of store records.
//!
//! The hosted store returns `null` for empty JSON aggregates (`json_agg` over
//! zero rows), mixes scalars with arrays for multi-valued columns, and is fed
//! by hand-edited sheets, so a column may carry the wrong JSON type. A bad
//! field degrades to `None` (or an empty list) and a bad list element is
//! skipped; the rest of the record still decodes.
//!
//! # Example
//! ```ignore
//! use char_core::serde_helpers;
//!
//! #[derive(Deserialize)]
//! struct Record {
//!     #[serde(default, deserialize_with = "serde_helpers::lenient")]
//!     pub name: Option<String>,
//!     #[serde(default, deserialize_with = "serde_helpers::lenient_list")]
//!     pub items: Vec<String>,
//! }
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize an optional field, reading `null` or a value of the wrong
/// type as `None`.
///
/// Combine with `#[serde(default)]` so a missing key behaves the same way.
pub fn lenient<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(d)?;
    Ok(value.and_then(|v| T::deserialize(v).ok()))
}

/// [`lenient`] for required fields: a mismatch becomes `T::default()`.
pub fn lenient_or_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(lenient(d)?.unwrap_or_default())
}

/// Deserialize a list, skipping elements that don't decode.
///
/// `null` and non-list values become an empty list.
pub fn lenient_list<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Value::Array(items) = Value::deserialize(d)? else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| T::deserialize(item).ok())
        .collect())
}

/// Returns the trimmed text if it contains anything but whitespace.
#[must_use]
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
