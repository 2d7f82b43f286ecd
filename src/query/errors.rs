//! Errors raised while composing query parameters.

use thiserror::Error;

/// Error returned when request options cannot be turned into a query string.
///
/// # Example
///
/// ```rust
/// use moysklad::query::QueryError;
///
/// let error = QueryError::ExpandTooDeep {
///     path: "a.b.c.d".to_string(),
///     max_depth: 3,
/// };
/// assert!(error.to_string().contains("a.b.c.d"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The expand tree is nested deeper than the server allows.
    #[error("Expand path '{path}' exceeds the maximum nesting depth of {max_depth}.")]
    ExpandTooDeep {
        /// The first dotted path that is too deep.
        path: String,
        /// The maximum supported depth.
        max_depth: usize,
    },

    /// An expand value is neither a boolean nor a nested object.
    #[error("Invalid expand value at '{path}': expected a boolean or an object.")]
    InvalidExpand {
        /// The dotted path of the offending value (empty for the root).
        path: String,
    },
}
