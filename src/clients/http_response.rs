//! HTTP response types for the MoySklad API SDK.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::clients::HttpError;

/// Rate limit information parsed from the `X-RateLimit-*` headers.
///
/// # Example
///
/// ```rust
/// use moysklad::clients::RateLimitInfo;
///
/// let info = RateLimitInfo::parse(Some("45"), Some("44")).unwrap();
/// assert_eq!(info.limit, 45);
/// assert_eq!(info.remaining, 44);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimitInfo {
    /// Requests allowed in the current window.
    pub limit: u32,
    /// Requests left in the current window.
    pub remaining: u32,
}

impl RateLimitInfo {
    /// Parses the limit and remaining header values.
    ///
    /// Returns `None` unless both are present and numeric.
    #[must_use]
    pub fn parse(limit: Option<&str>, remaining: Option<&str>) -> Option<Self> {
        Some(Self {
            limit: limit?.trim().parse().ok()?,
            remaining: remaining?.trim().parse().ok()?,
        })
    }
}

/// A raw HTTP response.
///
/// Header names are stored lowercased; a header may have multiple values.
/// The body is kept as text so failed responses can be inspected before
/// any JSON parsing.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub status: u16,
    /// The canonical reason phrase for the status (e.g. `Bad Request`).
    pub status_text: String,
    /// Response headers.
    pub headers: HashMap<String, Vec<String>>,
    /// The response body as text.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, lowercasing header names.
    #[must_use]
    pub fn new(
        status: u16,
        status_text: impl Into<String>,
        headers: HashMap<String, Vec<String>>,
        body: impl Into<String>,
    ) -> Self {
        let headers = headers
            .into_iter()
            .map(|(k, v)| (k.to_ascii_lowercase(), v))
            .collect();
        Self {
            status,
            status_text: status_text.into(),
            headers,
            body: body.into(),
        }
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status >= 200 && self.status <= 299
    }

    /// Returns the first value of a header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `Content-Type` header, if present.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Returns `true` if the media type of `Content-Type` is `application/json`.
    ///
    /// Parameters such as `charset` are ignored.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.content_type().is_some_and(|ct| {
            ct.split(';')
                .next()
                .is_some_and(|media| media.trim().eq_ignore_ascii_case("application/json"))
        })
    }

    /// Returns rate limit information, if the server sent it.
    #[must_use]
    pub fn rate_limit(&self) -> Option<RateLimitInfo> {
        RateLimitInfo::parse(
            self.header("x-ratelimit-limit"),
            self.header("x-ratelimit-remaining"),
        )
    }

    /// Deserializes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Json`] if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, HttpError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}
