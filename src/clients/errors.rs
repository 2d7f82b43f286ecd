//! HTTP-specific error types for the MoySklad API SDK.
//!
//! # Error Handling
//!
//! Failed responses are classified into one of two domain errors:
//!
//! - [`GenericError`]: transport or protocol level failures (missing or
//!   unexpected content type, empty body, unrecognized error payload)
//! - [`ApiError`]: a structured business error reported by the server
//!
//! Both carry the HTTP status. [`HttpError`] is the unified error type that
//! also covers network, JSON, query composition and batch task failures.
//! Nothing is retried; every failure is returned to the caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use moysklad::clients::HttpError;
//!
//! match client.get("entity/product", None).await {
//!     Ok(response) => println!("Products: {}", response.body),
//!     Err(HttpError::Api(e)) => {
//!         println!("API error {} ({}): {}", e.code, e.status, e.message);
//!     }
//!     Err(HttpError::Generic(e)) => {
//!         println!("HTTP {}: {}", e.status, e.message);
//!     }
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::query::QueryError;

/// A failed response that carries no structured API error.
///
/// # Example
///
/// ```rust
/// use moysklad::clients::GenericError;
///
/// let error = GenericError::new("Response body is empty", 400);
/// assert_eq!(error.to_string(), "Response body is empty");
/// assert_eq!(error.status, 400);
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct GenericError {
    /// Human-readable description of the failure.
    pub message: String,
    /// The HTTP status code of the response.
    pub status: u16,
}

impl GenericError {
    /// Creates a generic error.
    #[must_use]
    pub fn new(message: impl Into<String>, status: u16) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }
}

/// A structured error reported by the API.
///
/// Only the first entry of the response's `errors` array is surfaced.
///
/// # Example
///
/// ```rust
/// use moysklad::clients::ApiError;
///
/// let error = ApiError {
///     message: "Entity not found".to_string(),
///     status: 404,
///     code: 1021,
///     more_info: "https://dev.moysklad.ru/doc/api/remap/1.2/#error_1021".to_string(),
/// };
/// assert_eq!(error.to_string(), "Entity not found");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    /// Error message from the server.
    pub message: String,
    /// The HTTP status code of the response.
    pub status: u16,
    /// API error code.
    pub code: i64,
    /// Link to documentation about this error.
    pub more_info: String,
}

/// Unified error type for all request-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A non-2xx response without a recognizable API error.
    #[error(transparent)]
    Generic(#[from] GenericError),

    /// A non-2xx response carrying a structured API error.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A request body could not be serialized or a response body decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Request options could not be turned into query parameters.
    #[error(transparent)]
    Query(#[from] QueryError),

    /// A batch page task panicked or was cancelled.
    #[error("Batch task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl HttpError {
    /// Returns the HTTP status code for response errors.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Generic(e) => Some(e.status),
            Self::Api(e) => Some(e.status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
