//! Validated newtype wrappers for configuration values.

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ConfigError;

/// A validated API base URL.
///
/// The URL must carry an `http://` or `https://` scheme. Trailing slashes
/// are removed so that paths can be appended with a single `/`.
///
/// # Example
///
/// ```rust
/// use moysklad::BaseUrl;
///
/// let url = BaseUrl::new("https://api.moysklad.ru/api/remap/1.2/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.moysklad.ru/api/remap/1.2");
///
/// assert!(BaseUrl::new("api.moysklad.ru").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// The public MoySklad JSON API endpoint.
    pub const DEFAULT: &'static str = "https://api.moysklad.ru/api/remap/1.2";

    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no HTTP scheme
    /// or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let rest = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"));

        match rest {
            Some(rest) if !rest.trim_matches('/').is_empty() => {
                Ok(Self(url.trim_end_matches('/').to_string()))
            }
            _ => Err(ConfigError::InvalidBaseUrl { url }),
        }
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for BaseUrl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for BaseUrl {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_accepts_https_and_http() {
        assert!(BaseUrl::new("https://example.com").is_ok());
        assert!(BaseUrl::new("http://localhost:8080/api").is_ok());
    }

    #[test]
    fn test_base_url_strips_trailing_slashes() {
        let url = BaseUrl::new("http://localhost:8080//").unwrap();
        assert_eq!(url.as_ref(), "http://localhost:8080");
    }

    #[test]
    fn test_base_url_rejects_missing_scheme_or_host() {
        for bad in ["", "example.com", "ftp://example.com", "https://", "https:///"] {
            assert!(
                matches!(BaseUrl::new(bad), Err(ConfigError::InvalidBaseUrl { .. })),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_base_url_default() {
        assert_eq!(BaseUrl::default().as_ref(), BaseUrl::DEFAULT);
    }

    #[test]
    fn test_base_url_serde_validates() {
        let url: BaseUrl = serde_json::from_str(r#""https://example.com/""#).unwrap();
        assert_eq!(url.as_ref(), "https://example.com");
        assert_eq!(serde_json::to_string(&url).unwrap(), r#""https://example.com""#);

        let bad: Result<BaseUrl, _> = serde_json::from_str(r#""example.com""#);
        assert!(bad.is_err());
    }
}
