//! Filter and sort conditions.
//!
//! Conditions serialize to the API's compact syntax: filters are joined with
//! `;` (`name=Chair;archived=false`), sort keys likewise
//! (`name,asc;updated,desc`).

use std::fmt;

/// Comparison operator of a [`Filter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterOperator {
    /// `=`
    Eq,
    /// `!=`
    Ne,
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `~` (value contains)
    Like,
    /// `~=` (value starts with)
    StartsWith,
    /// `=~` (value ends with)
    EndsWith,
}

impl FilterOperator {
    /// Returns the operator as it appears on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "!=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Like => "~",
            Self::StartsWith => "~=",
            Self::EndsWith => "=~",
        }
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single filter condition.
///
/// # Example
///
/// ```rust
/// use moysklad::query::{Filter, FilterOperator};
///
/// let filter = Filter::new("name", FilterOperator::StartsWith, "Chair");
/// assert_eq!(filter.to_string(), "name~=Chair");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Filter {
    /// Field name, or a field href for reference filters.
    pub field: String,
    /// Comparison operator.
    pub operator: FilterOperator,
    /// Right-hand value, already rendered as text.
    pub value: String,
}

impl Filter {
    /// Creates a filter condition.
    #[must_use]
    pub fn new(field: impl Into<String>, operator: FilterOperator, value: impl ToString) -> Self {
        Self {
            field: field.into(),
            operator,
            value: value.to_string(),
        }
    }

    /// Shorthand for an equality condition.
    #[must_use]
    pub fn equals(field: impl Into<String>, value: impl ToString) -> Self {
        Self::new(field, FilterOperator::Eq, value)
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.field, self.operator, self.value)
    }
}

/// Sort direction of an [`Order`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OrderDirection {
    /// Ascending.
    #[default]
    Asc,
    /// Descending.
    Desc,
}

impl fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => f.write_str("asc"),
            Self::Desc => f.write_str("desc"),
        }
    }
}

/// A sort key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Order {
    /// Field to sort by.
    pub field: String,
    /// Sort direction.
    pub direction: OrderDirection,
}

impl Order {
    /// Ascending order by `field`.
    #[must_use]
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: OrderDirection::Asc,
        }
    }

    /// Descending order by `field`.
    #[must_use]
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: OrderDirection::Desc,
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.field, self.direction)
    }
}

/// Joins displayable conditions with `;`.
pub(crate) fn join_conditions<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(";")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_wire_format() {
        let ops = [
            (FilterOperator::Eq, "="),
            (FilterOperator::Ne, "!="),
            (FilterOperator::Gt, ">"),
            (FilterOperator::Ge, ">="),
            (FilterOperator::Lt, "<"),
            (FilterOperator::Le, "<="),
            (FilterOperator::Like, "~"),
            (FilterOperator::StartsWith, "~="),
            (FilterOperator::EndsWith, "=~"),
        ];
        for (op, expected) in ops {
            assert_eq!(op.as_str(), expected);
        }
    }

    #[test]
    fn test_filters_join_with_semicolon() {
        let filters = [
            Filter::equals("archived", false),
            Filter::new("updated", FilterOperator::Ge, "2024-01-01 00:00:00"),
        ];
        assert_eq!(
            join_conditions(&filters),
            "archived=false;updated>=2024-01-01 00:00:00"
        );
    }

    #[test]
    fn test_orders_join_with_semicolon() {
        let orders = [Order::asc("name"), Order::desc("updated")];
        assert_eq!(join_conditions(&orders), "name,asc;updated,desc");
    }
}
