//! Error types for SDK configuration.
//!
//! Configuration constructors return `Result<T, ConfigError>` so that an
//! invalid client can never be built. Request-time failures live in
//! [`crate::clients::HttpError`].
//!
//! # Example
//!
//! ```rust
//! use moysklad::{AuthCredential, ConfigError};
//!
//! let result = AuthCredential::token("");
//! assert!(matches!(result, Err(ConfigError::EmptyToken)));
//! ```

use thiserror::Error;

/// Errors that can occur while building a client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid MoySklad access token.")]
    EmptyToken,

    /// Login cannot be empty for basic authentication.
    #[error("Login cannot be empty. Please provide a valid MoySklad login.")]
    EmptyLogin,

    /// User agent cannot be empty.
    #[error("User agent cannot be empty.")]
    EmptyUserAgent,

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide an absolute URL with scheme (e.g., 'https://api.moysklad.ru/api/remap/1.2').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A batch option is out of range.
    #[error("Invalid batch option '{field}': {reason}")]
    InvalidBatchOption {
        /// The name of the offending option.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
