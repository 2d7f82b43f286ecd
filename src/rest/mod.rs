//! Typed entity access on top of the request client.
//!
//! # Overview
//!
//! - [`Entity`]: Trait giving an entity type `list`, `all`, `get`, `create`,
//!   `update`, `delete` and `metadata`
//! - [`list_page`] / [`fetch_all`]: The same operations for any path, with
//!   any row type
//! - [`EntityMeta`] / [`EntityRef`]: The `meta` object and entity references
//! - [`datetime`]: Serde helpers for the API's timestamp format
//! - [`resources`]: Entity types ([`resources::Product`],
//!   [`resources::Counterparty`])
//!
//! # Example
//!
//! ```rust,ignore
//! use moysklad::rest::{resources::Counterparty, Entity};
//! use moysklad::query::{ExpandTree, PageRequestOptions};
//!
//! let page = Counterparty::list(&client, &PageRequestOptions::new().limit(10)).await?;
//! let everything = Counterparty::all(&client, &PageRequestOptions::new()).await?;
//!
//! let expand = ExpandTree::new().field("owner", true);
//! let one = Counterparty::get(&client, "12a8b923", Some(&expand)).await?;
//! ```

pub mod datetime;
mod entity;
mod meta;
pub mod resources;

pub use entity::{fetch_all, list_page, Entity};
pub use meta::{EntityMeta, EntityRef};
