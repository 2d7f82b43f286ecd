//! # MoySklad API Rust SDK
//!
//! A Rust SDK for the MoySklad JSON API (`api/remap/1.2`), providing
//! type-safe configuration, authentication, an async HTTP client with typed
//! errors, a query composer and concurrent retrieval of whole collections.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`ClientConfig`] and [`ClientConfigBuilder`]
//! - Basic (login/password) and bearer token authentication via [`AuthCredential`]
//! - An async HTTP client, [`HttpClient`], that classifies failed responses
//!   into [`GenericError`] or [`ApiError`]
//! - Translation of pagination, expand, filter, order and search options into
//!   query parameters via [`query`]
//! - Concurrency-limited fetching of every page of a collection via [`batch`]
//! - Typed entities with CRUD operations via [`rest`]
//!
//! ## Quick Start
//!
//! ```rust
//! use moysklad::{AuthCredential, BatchOptions, ClientConfig, HttpClient};
//!
//! let config = ClientConfig::builder()
//!     .auth(AuthCredential::basic("admin@company", "secret").unwrap())
//!     .batch_options(BatchOptions::new(1000, 100, 5).unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = HttpClient::new(config).unwrap();
//! assert_eq!(
//!     client.build_url("entity/product"),
//!     "https://api.moysklad.ru/api/remap/1.2/entity/product"
//! );
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use moysklad::query::{compose_search_parameters, Filter, PageRequestOptions};
//!
//! let options = PageRequestOptions::new()
//!     .limit(100)
//!     .filter(Filter::equals("archived", false));
//! let params = compose_search_parameters(&options)?;
//!
//! let response = client.get("entity/product", params).await?;
//! let page: moysklad::batch::Page<serde_json::Value> = response.json()?;
//! ```
//!
//! ## Fetching Whole Collections
//!
//! ```rust,ignore
//! use moysklad::rest::{resources::Product, Entity};
//! use moysklad::query::PageRequestOptions;
//!
//! // First page, then the remaining pages concurrently, rows in order
//! let products = Product::all(&client, &PageRequestOptions::new()).await?;
//! println!("{} products", products.rows.len());
//! ```
//!
//! ## Error Handling
//!
//! ```rust,ignore
//! use moysklad::HttpError;
//!
//! match client.get(["entity", "product", "missing"], None).await {
//!     Ok(response) => println!("{}", response.body),
//!     Err(HttpError::Api(err)) => println!("{} (code {})", err.message, err.code),
//!     Err(HttpError::Generic(err)) => println!("{}", err.message),
//!     Err(other) => println!("{other}"),
//! }
//! ```
//!
//! ## Logging
//!
//! The SDK emits `tracing` events at debug level for every request, failed
//! response and batch fetch. It never installs a subscriber.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **No retries**: Every call issues exactly one HTTP request per page

pub mod auth;
pub mod batch;
pub mod clients;
pub mod config;
pub mod error;
pub mod query;
pub mod rest;

// Re-export public types at crate root for convenience
pub use auth::AuthCredential;
pub use config::{BaseUrl, BatchOptions, ClientConfig, ClientConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiError, GenericError, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, RequestPath,
};

// Re-export query and batch entry points
pub use batch::{batch_get, CollectionResult, Page};
pub use query::{compose_search_parameters, PageRequestOptions, QueryError};
