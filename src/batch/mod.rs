//! Concurrent retrieval of whole collections.
//!
//! List endpoints return at most one page per request. This module fetches
//! the first page, reads the total size from its metadata, then fetches the
//! rest concurrently and reassembles the rows in order.
//!
//! # Overview
//!
//! - [`batch_get`]: Fetches every page through a caller-supplied page fetcher
//! - [`TaskRunner`]: Runs independent tasks in chunks of a bounded size
//! - [`Page`] / [`PageMeta`]: One page of a list response
//! - [`CollectionResult`]: All rows plus the first page's context
//!
//! # Example
//!
//! ```rust,ignore
//! use moysklad::batch::Page;
//! use serde_json::Value;
//!
//! let result = client
//!     .batch_get(
//!         |limit, offset| {
//!             let client = client.clone();
//!             async move {
//!                 let params = /* limit and offset */;
//!                 client.get("entity/product", Some(params)).await?.json::<Page<Value>>()
//!             }
//!         },
//!         false,
//!     )
//!     .await?;
//! ```

mod fetch;
mod page;
mod runner;

pub use fetch::batch_get;
pub use page::{CollectionResult, Page, PageMeta};
pub use runner::{task, Task, TaskRunner};
