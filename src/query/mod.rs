//! Query composition for list and get requests.
//!
//! This module turns structured request options into the canonical query
//! parameters the API understands.
//!
//! # Overview
//!
//! - [`PageRequestOptions`]: pagination, expand, filter, order and search for one call
//! - [`ExpandTree`]: nested selection of related entities to inline
//! - [`Filter`] and [`Order`]: filter conditions and sort keys
//! - [`SearchParameters`]: the resulting ordered parameter set
//! - [`compose_search_parameters`]: the translation itself
//!
//! # Rules
//!
//! - `limit` and `offset` are emitted only when set and non-zero
//! - expand trees flatten to dotted paths joined with `,`; nesting deeper
//!   than [`MAX_EXPAND_DEPTH`] is an error
//! - filters and sort keys are joined with `;`
//! - options that produce no parameter yield `None`, not an empty string

mod errors;
mod expand;
mod filter;
mod options;
mod search_parameters;

pub use errors::QueryError;
pub use expand::{ExpandNode, ExpandTree, MAX_EXPAND_DEPTH};
pub use filter::{Filter, FilterOperator, Order, OrderDirection};
pub use options::{compose_search_parameters, PageRequestOptions, Pagination};
pub use search_parameters::SearchParameters;
