//! Serde helpers for the API's timestamp format.
//!
//! Timestamps look like `2024-03-01 12:30:45.123`: local server time, no
//! zone, millisecond precision. Parsing also accepts values without the
//! fractional part.
//!
//! ```rust
//! use chrono::NaiveDateTime;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Row {
//!     #[serde(default, with = "moysklad::rest::datetime::option")]
//!     updated: Option<NaiveDateTime>,
//! }
//!
//! let row: Row = serde_json::from_str(r#"{"updated": "2024-03-01 12:30:45.123"}"#).unwrap();
//! assert_eq!(row.updated.unwrap().to_string(), "2024-03-01 12:30:45.123");
//! ```

use chrono::NaiveDateTime;

/// Output format.
pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

// `%.f` makes the fraction optional when parsing.
const PARSE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Parses an API timestamp.
///
/// # Errors
///
/// Returns a [`chrono::ParseError`] if `value` is not in the API format.
pub fn parse(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value, PARSE_FORMAT)
}

/// Formats a timestamp in the API format.
#[must_use]
pub fn format(value: &NaiveDateTime) -> String {
    value.format(FORMAT).to_string()
}

/// `#[serde(with = "...")]` module for `NaiveDateTime` fields.
pub mod required {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    /// Serializes in the API format.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format(value))
    }

    /// Deserializes from the API format.
    ///
    /// # Errors
    ///
    /// Fails if the string is not a valid API timestamp.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse(&raw).map_err(de::Error::custom)
    }
}

/// `#[serde(with = "...")]` module for `Option<NaiveDateTime>` fields.
pub mod option {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    /// Serializes in the API format, or `null`.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => serializer.serialize_str(&super::format(value)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserializes from the API format or `null`.
    ///
    /// # Errors
    ///
    /// Fails if a present string is not a valid API timestamp.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| super::parse(&raw).map_err(de::Error::custom))
            .transpose()
    }
}
