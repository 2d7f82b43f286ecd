//! HTTP request types for the MoySklad API SDK.
//!
//! This module provides the [`HttpRequest`] type and its builder, plus
//! [`RequestPath`] for addressing either a path under the base URL or an
//! absolute URL.

use std::collections::HashMap;
use std::fmt;

use crate::query::SearchParameters;

/// HTTP methods supported by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving entities.
    Get,
    /// HTTP POST method for creating entities.
    Post,
    /// HTTP PUT method for updating entities.
    Put,
    /// HTTP DELETE method for removing entities.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// Where a request goes: a single path or URL, or a list of segments.
///
/// A value whose first part starts with `http` is an absolute URL;
/// anything else is resolved against the client's base URL.
///
/// # Example
///
/// ```rust
/// use moysklad::clients::RequestPath;
///
/// let single: RequestPath = "entity/product".into();
/// let segments: RequestPath = ["entity", "product", "metadata"].into();
/// assert_eq!(segments.joined(), "entity/product/metadata");
/// assert!(!single.is_absolute());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestPath {
    /// A single path or absolute URL.
    Single(String),
    /// Path segments, joined with `/`.
    Segments(Vec<String>),
}

impl RequestPath {
    /// Returns the path with segments joined by `/`.
    #[must_use]
    pub fn joined(&self) -> String {
        match self {
            Self::Single(path) => path.clone(),
            Self::Segments(segments) => segments.join("/"),
        }
    }

    /// Returns `true` if the path (or its first segment) is an absolute URL.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        let first = match self {
            Self::Single(path) => path.as_str(),
            Self::Segments(segments) => segments.first().map_or("", String::as_str),
        };
        first.starts_with("http")
    }
}

impl From<&str> for RequestPath {
    fn from(path: &str) -> Self {
        Self::Single(path.to_string())
    }
}

impl From<String> for RequestPath {
    fn from(path: String) -> Self {
        Self::Single(path)
    }
}

impl From<&String> for RequestPath {
    fn from(path: &String) -> Self {
        Self::Single(path.clone())
    }
}

impl From<Vec<String>> for RequestPath {
    fn from(segments: Vec<String>) -> Self {
        Self::Segments(segments)
    }
}

impl From<Vec<&str>> for RequestPath {
    fn from(segments: Vec<&str>) -> Self {
        Self::Segments(segments.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for RequestPath {
    fn from(segments: &[&str]) -> Self {
        Self::Segments(segments.iter().map(|s| (*s).to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for RequestPath {
    fn from(segments: [&str; N]) -> Self {
        Self::Segments(segments.iter().map(|s| (*s).to_string()).collect())
    }
}

/// An HTTP request to be sent to the API.
///
/// Use [`HttpRequest::builder`] to construct requests.
///
/// # Example
///
/// ```rust
/// use moysklad::clients::{HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let request = HttpRequest::builder(HttpMethod::Post, "entity/product")
///     .body(json!({"name": "Chair"}))
///     .header("X-Lognex-Precision", "true")
///     .build();
///
/// assert_eq!(request.method, HttpMethod::Post);
/// assert!(request.body.is_some());
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The path or URL for this request.
    pub path: RequestPath,
    /// The JSON request body, if any.
    pub body: Option<serde_json::Value>,
    /// Additional headers. Fixed client headers take precedence.
    pub headers: Option<HashMap<String, String>>,
    /// Query parameters to append to the URL.
    pub search_parameters: Option<SearchParameters>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<RequestPath>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path.into())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    method: HttpMethod,
    path: RequestPath,
    body: Option<serde_json::Value>,
    headers: Option<HashMap<String, String>>,
    search_parameters: Option<SearchParameters>,
}

impl HttpRequestBuilder {
    const fn new(method: HttpMethod, path: RequestPath) -> Self {
        Self {
            method,
            path,
            body: None,
            headers: None,
            search_parameters: None,
        }
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets all extra headers at once.
    #[must_use]
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Sets the query parameters.
    #[must_use]
    pub fn search_parameters(mut self, params: SearchParameters) -> Self {
        self.search_parameters = Some(params);
        self
    }

    /// Sets the query parameters if `params` is `Some`.
    #[must_use]
    pub fn maybe_search_parameters(mut self, params: Option<SearchParameters>) -> Self {
        self.search_parameters = params;
        self
    }

    /// Builds the [`HttpRequest`].
    #[must_use]
    pub fn build(self) -> HttpRequest {
        HttpRequest {
            method: self.method,
            path: self.path,
            body: self.body,
            headers: self.headers,
            search_parameters: self.search_parameters,
        }
    }
}
