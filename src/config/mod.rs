//! Configuration types for the MoySklad API SDK.
//!
//! This module provides the configuration a client is constructed from.
//!
//! # Overview
//!
//! - [`ClientConfig`]: All settings for one client instance
//! - [`ClientConfigBuilder`]: A builder for constructing [`ClientConfig`] instances
//! - [`BatchOptions`]: Page sizes and concurrency for whole-collection fetches
//! - [`BaseUrl`]: A validated API base URL
//!
//! # Example
//!
//! ```rust
//! use moysklad::{AuthCredential, BatchOptions, ClientConfig};
//!
//! let config = ClientConfig::builder()
//!     .auth(AuthCredential::token("my-token").unwrap())
//!     .batch_options(BatchOptions::new(500, 50, 2).unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.batch_options().concurrency_limit(), 2);
//! ```

mod newtypes;

pub use newtypes::BaseUrl;

use std::time::Duration;

use crate::auth::AuthCredential;
use crate::error::ConfigError;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the default `User-Agent` string sent with every request.
#[must_use]
pub fn default_user_agent() -> String {
    format!("moysklad-api-rust/{SDK_VERSION}")
}

/// Page sizes and concurrency used when fetching an entire collection.
///
/// Every value is at least 1.
///
/// # Defaults
///
/// - `page_limit`: 1000
/// - `expanded_page_limit`: 100 (responses with expanded relations are heavier)
/// - `concurrency_limit`: 3
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BatchOptions {
    page_limit: u32,
    expanded_page_limit: u32,
    concurrency_limit: usize,
}

impl BatchOptions {
    /// Creates validated batch options.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBatchOption`] if any value is zero.
    pub fn new(
        page_limit: u32,
        expanded_page_limit: u32,
        concurrency_limit: usize,
    ) -> Result<Self, ConfigError> {
        if page_limit == 0 {
            return Err(invalid_option("page_limit"));
        }
        if expanded_page_limit == 0 {
            return Err(invalid_option("expanded_page_limit"));
        }
        if concurrency_limit == 0 {
            return Err(invalid_option("concurrency_limit"));
        }
        Ok(Self {
            page_limit,
            expanded_page_limit,
            concurrency_limit,
        })
    }

    /// Page size for collections fetched without `expand`.
    #[must_use]
    pub const fn page_limit(&self) -> u32 {
        self.page_limit
    }

    /// Page size for collections fetched with `expand`.
    #[must_use]
    pub const fn expanded_page_limit(&self) -> u32 {
        self.expanded_page_limit
    }

    /// Maximum number of page requests in flight at once.
    #[must_use]
    pub const fn concurrency_limit(&self) -> usize {
        self.concurrency_limit
    }

    /// Selects the page size for a fetch.
    #[must_use]
    pub const fn limit_for(&self, uses_expand: bool) -> u32 {
        if uses_expand {
            self.expanded_page_limit
        } else {
            self.page_limit
        }
    }
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            page_limit: 1000,
            expanded_page_limit: 100,
            concurrency_limit: 3,
        }
    }
}

fn invalid_option(field: &'static str) -> ConfigError {
    ConfigError::InvalidBatchOption {
        field,
        reason: "must be at least 1".to_string(),
    }
}

/// Configuration for one API client.
///
/// All fields are immutable once built. Clients keep their own
/// configuration; nothing is stored globally.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    base_url: BaseUrl,
    user_agent: String,
    auth: AuthCredential,
    batch_options: BatchOptions,
    request_timeout: Option<Duration>,
}

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the `User-Agent` header value.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Returns the authentication credential.
    #[must_use]
    pub const fn auth(&self) -> &AuthCredential {
        &self.auth
    }

    /// Returns the batch fetch options.
    #[must_use]
    pub const fn batch_options(&self) -> &BatchOptions {
        &self.batch_options
    }

    /// Returns the per-request timeout, if one is configured.
    ///
    /// `None` means requests wait indefinitely.
    #[must_use]
    pub const fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }
}

// Verify ClientConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

/// Builder for constructing [`ClientConfig`] instances.
///
/// Only `auth` is required.
///
/// # Defaults
///
/// - `base_url`: [`BaseUrl::DEFAULT`]
/// - `user_agent`: `moysklad-api-rust/<version>`
/// - `batch_options`: [`BatchOptions::default`]
/// - `request_timeout`: `None`
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    base_url: Option<BaseUrl>,
    user_agent: Option<String>,
    auth: Option<AuthCredential>,
    batch_options: Option<BatchOptions>,
    request_timeout: Option<Duration>,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets the `User-Agent` header value.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets the authentication credential (required).
    #[must_use]
    pub fn auth(mut self, auth: AuthCredential) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Sets the batch fetch options.
    #[must_use]
    pub const fn batch_options(mut self, options: BatchOptions) -> Self {
        self.batch_options = Some(options);
        self
    }

    /// Sets a timeout applied to every request.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Builds the [`ClientConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `auth` is not set and
    /// [`ConfigError::EmptyUserAgent`] if an empty user agent was supplied.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let auth = self
            .auth
            .ok_or(ConfigError::MissingRequiredField { field: "auth" })?;

        let user_agent = match self.user_agent {
            Some(ua) if ua.trim().is_empty() => return Err(ConfigError::EmptyUserAgent),
            Some(ua) => ua,
            None => default_user_agent(),
        };

        Ok(ClientConfig {
            base_url: self.base_url.unwrap_or_default(),
            user_agent,
            auth,
            batch_options: self.batch_options.unwrap_or_default(),
            request_timeout: self.request_timeout,
        })
    }
}
