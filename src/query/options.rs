//! Per-call request options and their translation into query parameters.

use crate::query::filter::join_conditions;
use crate::query::{ExpandTree, Filter, Order, QueryError, SearchParameters};

/// Page window of a list request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pagination {
    /// Maximum number of rows to return.
    pub limit: Option<u32>,
    /// Number of rows to skip.
    pub offset: Option<u32>,
}

/// Options for a single list or get request.
///
/// # Example
///
/// ```rust
/// use moysklad::query::{compose_search_parameters, ExpandTree, Filter, Order, PageRequestOptions};
///
/// let options = PageRequestOptions::new()
///     .limit(100)
///     .offset(200)
///     .expand(ExpandTree::new().field("agent", true))
///     .filter(Filter::equals("archived", false))
///     .order(Order::desc("updated"));
///
/// let params = compose_search_parameters(&options).unwrap().unwrap();
/// assert_eq!(params.get("limit"), Some("100"));
/// assert_eq!(params.get("offset"), Some("200"));
/// assert_eq!(params.get("expand"), Some("agent"));
/// assert_eq!(params.get("filter"), Some("archived=false"));
/// assert_eq!(params.get("order"), Some("updated,desc"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageRequestOptions {
    /// Page window.
    pub pagination: Option<Pagination>,
    /// Related entities to inline.
    pub expand: Option<ExpandTree>,
    /// Filter conditions, combined with AND.
    pub filter: Vec<Filter>,
    /// Sort keys, most significant first.
    pub order: Vec<Order>,
    /// Full-text search string.
    pub search: Option<String>,
    /// Additional raw parameters, appended last.
    pub extra: Vec<(String, String)>,
}

impl PageRequestOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page limit.
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.pagination.get_or_insert_with(Pagination::default).limit = Some(limit);
        self
    }

    /// Sets the page offset.
    #[must_use]
    pub fn offset(mut self, offset: u32) -> Self {
        self.pagination.get_or_insert_with(Pagination::default).offset = Some(offset);
        self
    }

    /// Sets the expand tree.
    #[must_use]
    pub fn expand(mut self, expand: ExpandTree) -> Self {
        self.expand = Some(expand);
        self
    }

    /// Adds a filter condition.
    #[must_use]
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter.push(filter);
        self
    }

    /// Adds a sort key.
    #[must_use]
    pub fn order(mut self, order: Order) -> Self {
        self.order.push(order);
        self
    }

    /// Sets the search string.
    #[must_use]
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Adds a raw query parameter.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.push((key.into(), value.into()));
        self
    }

    /// Returns `true` if the options request any expansion.
    #[must_use]
    pub fn uses_expand(&self) -> bool {
        self.expand.as_ref().is_some_and(|tree| !tree.is_empty())
    }
}

/// Translates request options into query parameters.
///
/// Zero and unset pagination values are omitted. Returns `Ok(None)` when
/// no parameter would be produced.
///
/// # Errors
///
/// Returns [`QueryError::ExpandTooDeep`] if the expand tree is nested too
/// deeply.
pub fn compose_search_parameters(
    options: &PageRequestOptions,
) -> Result<Option<SearchParameters>, QueryError> {
    let mut params = SearchParameters::new();

    if let Some(pagination) = options.pagination {
        if let Some(limit) = pagination.limit.filter(|l| *l > 0) {
            params.push("limit", limit.to_string());
        }
        if let Some(offset) = pagination.offset.filter(|o| *o > 0) {
            params.push("offset", offset.to_string());
        }
    }

    if let Some(expand) = &options.expand {
        let paths = expand.paths()?;
        if !paths.is_empty() {
            params.push("expand", paths.join(","));
        }
    }

    if !options.filter.is_empty() {
        params.push("filter", join_conditions(&options.filter));
    }

    if !options.order.is_empty() {
        params.push("order", join_conditions(&options.order));
    }

    if let Some(search) = options.search.as_deref().filter(|s| !s.is_empty()) {
        params.push("search", search);
    }

    params.extend(options.extra.iter().cloned());

    Ok((!params.is_empty()).then_some(params))
}
