//! Page and collection types returned by list endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Metadata of a list response.
///
/// `size` is the total number of rows in the collection, not in this page.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Total collection size.
    pub size: u32,
    /// Page size used for this response.
    #[serde(default)]
    pub limit: u32,
    /// Offset of the first row of this page.
    #[serde(default)]
    pub offset: u32,
    /// URL of this page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Entity type of the rows.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    /// Media type of the response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    /// URL of the next page, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_href: Option<String>,
    /// URL of the previous page, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_href: Option<String>,
}

/// One page of a collection.
///
/// # Example
///
/// ```rust
/// use moysklad::batch::Page;
/// use serde_json::{json, Value};
///
/// let page: Page<Value> = serde_json::from_value(json!({
///     "context": {"employee": {"meta": {"href": "..."}}},
///     "meta": {"size": 1, "limit": 1000, "offset": 0},
///     "rows": [{"name": "Chair"}]
/// }))
/// .unwrap();
///
/// assert_eq!(page.meta.size, 1);
/// assert_eq!(page.rows[0]["name"], "Chair");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    /// Page-independent metadata about the request (e.g. the employee).
    #[serde(default)]
    pub context: Value,
    /// Collection metadata.
    pub meta: PageMeta,
    /// Rows of this page, in server order.
    #[serde(default = "Vec::new")]
    pub rows: Vec<T>,
}

/// Every row of a collection, gathered page by page.
///
/// `context` is taken from the first page.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CollectionResult<T> {
    /// All rows in ascending offset order.
    pub rows: Vec<T>,
    /// Context of the first page.
    pub context: Value,
}
