//! Entity types with their endpoints.
//!
//! Each entity implements [`Entity`](crate::rest::Entity). Fields the server
//! owns are marked read-only and never serialized, so an entity value can be
//! sent back as a create or update body.

mod counterparty;
mod product;

pub use counterparty::{CompanyType, Counterparty};
pub use product::{Product, SalePrice};
