//! HTTP client types for MoySklad API communication.
//!
//! This module provides the request layer every entity wrapper is built on.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client with `get`, `post`, `put`, `delete`
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A raw response from the API
//! - [`RequestPath`]: A path under the base URL, an absolute URL, or segments
//! - [`classify_error`]: Maps a failed response to [`GenericError`] or [`ApiError`]
//! - [`HttpError`]: Unified error type for everything that can go wrong
//!
//! # Example
//!
//! ```rust,ignore
//! use moysklad::clients::{HttpClient, HttpMethod, HttpRequest};
//!
//! let client = HttpClient::new(config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, ["entity", "product", id])
//!     .build();
//! let response = client.request(request).await?;
//! let product: serde_json::Value = response.json()?;
//! ```
//!
//! # Failure Behavior
//!
//! Every call issues exactly one HTTP request. Non-2xx responses are always
//! returned as errors; nothing is retried.

mod classify;
mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use classify::classify_error;
pub use errors::{ApiError, GenericError, HttpError};
pub use http_client::{build_url, HttpClient};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder, RequestPath};
pub use http_response::{HttpResponse, RateLimitInfo};
