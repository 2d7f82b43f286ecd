//! Expand trees: which related entities the server should inline.
//!
//! An expand tree is a nested map of field names. A `true` leaf selects the
//! field; a non-empty subtree selects fields of the related entity. The tree
//! flattens into dotted paths (`owner.group`) joined with `,`.

use serde_json::Value;

use crate::query::QueryError;

/// Maximum nesting depth the API accepts for `expand`.
pub const MAX_EXPAND_DEPTH: usize = 3;

/// A node of an [`ExpandTree`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExpandNode {
    /// A plain leaf. `false` leaves are skipped.
    Flag(bool),
    /// A nested subtree. An empty subtree behaves like a `true` leaf.
    Tree(ExpandTree),
}

/// An ordered tree of fields to expand.
///
/// Entries keep insertion order, so the composed parameter is deterministic.
///
/// # Example
///
/// ```rust
/// use moysklad::query::ExpandTree;
///
/// let tree = ExpandTree::new()
///     .nested("owner", ExpandTree::new().field("group", true))
///     .field("agent", true);
///
/// assert_eq!(tree.paths().unwrap(), vec!["owner.group", "agent"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpandTree {
    entries: Vec<(String, ExpandNode)>,
}

impl ExpandTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a leaf field. An existing entry with the same name is replaced.
    #[must_use]
    pub fn field(self, name: impl Into<String>, enabled: bool) -> Self {
        self.insert(name.into(), ExpandNode::Flag(enabled))
    }

    /// Sets a nested subtree. An existing entry with the same name is replaced.
    #[must_use]
    pub fn nested(self, name: impl Into<String>, tree: Self) -> Self {
        self.insert(name.into(), ExpandNode::Tree(tree))
    }

    fn insert(mut self, name: String, node: ExpandNode) -> Self {
        if let Some(entry) = self.entries.iter_mut().find(|(key, _)| *key == name) {
            entry.1 = node;
        } else {
            self.entries.push((name, node));
        }
        self
    }

    /// Returns `true` if the tree has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the top-level entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ExpandNode)> {
        self.entries.iter().map(|(key, node)| (key.as_str(), node))
    }

    /// Flattens the tree into dotted paths.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::ExpandTooDeep`] if a selected path is nested
    /// deeper than [`MAX_EXPAND_DEPTH`].
    pub fn paths(&self) -> Result<Vec<String>, QueryError> {
        let mut paths = Vec::new();
        collect_paths(self, None, 1, &mut paths)?;
        Ok(paths)
    }
}

fn collect_paths(
    tree: &ExpandTree,
    prefix: Option<&str>,
    depth: usize,
    out: &mut Vec<String>,
) -> Result<(), QueryError> {
    for (key, node) in &tree.entries {
        let path = prefix.map_or_else(|| key.clone(), |p| format!("{p}.{key}"));
        match node {
            ExpandNode::Flag(false) => {}
            _ if depth > MAX_EXPAND_DEPTH => {
                return Err(QueryError::ExpandTooDeep {
                    path,
                    max_depth: MAX_EXPAND_DEPTH,
                });
            }
            ExpandNode::Tree(sub) if !sub.is_empty() => {
                collect_paths(sub, Some(&path), depth + 1, out)?;
            }
            _ => out.push(path),
        }
    }
    Ok(())
}

impl TryFrom<&Value> for ExpandTree {
    type Error = QueryError;

    /// Builds a tree from a JSON object such as `{"owner": {"group": true}}`.
    ///
    /// `null` counts as `false`.
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        from_json(value, "")
    }
}

fn from_json(value: &Value, path: &str) -> Result<ExpandTree, QueryError> {
    let Value::Object(map) = value else {
        return Err(QueryError::InvalidExpand {
            path: path.to_string(),
        });
    };

    let mut tree = ExpandTree::new();
    for (key, child) in map {
        let child_path = if path.is_empty() {
            key.clone()
        } else {
            format!("{path}.{key}")
        };
        tree = match child {
            Value::Bool(enabled) => tree.field(key.as_str(), *enabled),
            Value::Null => tree.field(key.as_str(), false),
            Value::Object(_) => tree.nested(key.as_str(), from_json(child, &child_path)?),
            _ => return Err(QueryError::InvalidExpand { path: child_path }),
        };
    }
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_leaf_becomes_dotted_path() {
        let tree = ExpandTree::new().nested("owner", ExpandTree::new().field("group", true));
        assert_eq!(tree.paths().unwrap(), vec!["owner.group"]);
    }

    #[test]
    fn test_siblings_keep_insertion_order() {
        let tree = ExpandTree::new()
            .field("b", true)
            .field("a", true)
            .field("c", true);
        assert_eq!(tree.paths().unwrap(), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_false_leaves_are_skipped() {
        let tree = ExpandTree::new()
            .field("a", false)
            .field("b", true)
            .nested("c", ExpandTree::new().field("d", false));
        // "c" has only falsy children, so it contributes nothing
        assert_eq!(tree.paths().unwrap(), vec!["b"]);
    }

    #[test]
    fn test_empty_subtree_counts_as_leaf() {
        let tree = ExpandTree::new().nested("owner", ExpandTree::new());
        assert_eq!(tree.paths().unwrap(), vec!["owner"]);
    }

    #[test]
    fn test_replacing_an_entry_keeps_position() {
        let tree = ExpandTree::new()
            .field("a", true)
            .field("b", true)
            .field("a", false);
        assert_eq!(tree.paths().unwrap(), vec!["b"]);
        assert_eq!(tree.iter().next().map(|(k, _)| k), Some("a"));
    }

    #[test]
    fn test_three_levels_is_allowed() {
        let tree = ExpandTree::new().nested(
            "a",
            ExpandTree::new().nested("b", ExpandTree::new().field("c", true)),
        );
        assert_eq!(tree.paths().unwrap(), vec!["a.b.c"]);
    }

    #[test]
    fn test_four_levels_is_rejected() {
        let tree = ExpandTree::new().nested(
            "a",
            ExpandTree::new().nested(
                "b",
                ExpandTree::new().nested("c", ExpandTree::new().field("d", true)),
            ),
        );
        assert_eq!(
            tree.paths(),
            Err(QueryError::ExpandTooDeep {
                path: "a.b.c.d".to_string(),
                max_depth: MAX_EXPAND_DEPTH,
            })
        );
    }

    #[test]
    fn test_false_leaf_below_max_depth_is_ignored() {
        let tree = ExpandTree::new().nested(
            "a",
            ExpandTree::new().nested(
                "b",
                ExpandTree::new().nested("c", ExpandTree::new().field("d", false)),
            ),
        );
        assert_eq!(tree.paths().unwrap(), vec!["a.b.c"]);
    }

    #[test]
    fn test_from_json() {
        let tree = ExpandTree::try_from(&json!({"owner": {"group": true}, "agent": null}))
            .unwrap();
        assert_eq!(tree.paths().unwrap(), vec!["owner.group"]);
    }

    #[test]
    fn test_from_json_rejects_non_boolean_leaves() {
        let result = ExpandTree::try_from(&json!({"owner": {"group": 1}}));
        assert_eq!(
            result,
            Err(QueryError::InvalidExpand {
                path: "owner.group".to_string()
            })
        );

        let result = ExpandTree::try_from(&json!(true));
        assert_eq!(
            result,
            Err(QueryError::InvalidExpand {
                path: String::new()
            })
        );
    }
}
