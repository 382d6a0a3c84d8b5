use std::cmp::Ordering;
use std::ops::Not;

use super::{Entity, Value};

/// Predicate over the fields of an entity.
///
/// In-memory evaluation follows SQL three-valued logic so that both
/// repository backends return the same rows: comparisons against null are
/// unknown, and unknown never matches.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter<F> {
    Eq(F, Value),
    Ne(F, Value),
    Gt(F, Value),
    Lt(F, Value),
    /// Case-insensitive substring match.
    Contains(F, String),
    In(F, Vec<Value>),
    IsNull(F),
    All(Vec<Filter<F>>),
    Any(Vec<Filter<F>>),
    Not(Box<Filter<F>>),
}

impl<F: Copy> Filter<F> {
    pub fn eq(field: F, value: impl Into<Value>) -> Self {
        Filter::Eq(field, value.into())
    }

    pub fn ne(field: F, value: impl Into<Value>) -> Self {
        Filter::Ne(field, value.into())
    }

    pub fn gt(field: F, value: impl Into<Value>) -> Self {
        Filter::Gt(field, value.into())
    }

    pub fn lt(field: F, value: impl Into<Value>) -> Self {
        Filter::Lt(field, value.into())
    }

    pub fn contains(field: F, needle: impl Into<String>) -> Self {
        Filter::Contains(field, needle.into())
    }

    pub fn is_in<V: Into<Value>>(field: F, values: impl IntoIterator<Item = V>) -> Self {
        Filter::In(field, values.into_iter().map(Into::into).collect())
    }

    pub fn is_null(field: F) -> Self {
        Filter::IsNull(field)
    }

    pub fn is_not_null(field: F) -> Self {
        !Filter::IsNull(field)
    }

    /// Conjunction, flattening nested `All`s.
    pub fn and(self, other: Filter<F>) -> Self {
        match (self, other) {
            (Filter::All(mut left), Filter::All(right)) => {
                left.extend(right);
                Filter::All(left)
            }
            (Filter::All(mut left), right) => {
                left.push(right);
                Filter::All(left)
            }
            (left, right) => Filter::All(vec![left, right]),
        }
    }

    /// Disjunction, flattening nested `Any`s.
    pub fn or(self, other: Filter<F>) -> Self {
        match (self, other) {
            (Filter::Any(mut left), Filter::Any(right)) => {
                left.extend(right);
                Filter::Any(left)
            }
            (Filter::Any(mut left), right) => {
                left.push(right);
                Filter::Any(left)
            }
            (left, right) => Filter::Any(vec![left, right]),
        }
    }

    /// Combines optional filters with `and`; `None` when nothing is left.
    pub fn all_of(filters: impl IntoIterator<Item = Option<Filter<F>>>) -> Option<Self> {
        filters
            .into_iter()
            .flatten()
            .reduce(|acc, next| acc.and(next))
    }
}

impl<F: Copy + Eq> Filter<F> {
    /// Whether `entity` satisfies the filter.
    pub fn matches<E: Entity<Field = F>>(&self, entity: &E) -> bool {
        self.eval(entity) == Some(true)
    }

    /// Three-valued evaluation: `None` is SQL's unknown.
    fn eval<E: Entity<Field = F>>(&self, entity: &E) -> Option<bool> {
        match self {
            Filter::Eq(field, Value::Null) | Filter::IsNull(field) => {
                Some(entity.value_of(*field).is_null())
            }
            Filter::Ne(field, Value::Null) => Some(!entity.value_of(*field).is_null()),
            Filter::Eq(field, value) => compare(entity, *field, value).map(Ordering::is_eq),
            Filter::Ne(field, value) => compare(entity, *field, value).map(Ordering::is_ne),
            Filter::Gt(field, value) => compare(entity, *field, value).map(Ordering::is_gt),
            Filter::Lt(field, value) => compare(entity, *field, value).map(Ordering::is_lt),
            Filter::Contains(field, needle) => match entity.value_of(*field) {
                Value::Text(haystack) => Some(
                    haystack
                        .to_lowercase()
                        .contains(needle.to_lowercase().as_str()),
                ),
                _ => None,
            },
            Filter::In(field, values) => {
                let current = entity.value_of(*field);
                if current.is_null() {
                    return None;
                }
                Some(
                    values
                        .iter()
                        .any(|candidate| current.sql_cmp(candidate) == Some(Ordering::Equal)),
                )
            }
            Filter::All(filters) => {
                let mut unknown = false;
                for filter in filters {
                    match filter.eval(entity) {
                        Some(false) => return Some(false),
                        None => unknown = true,
                        Some(true) => {}
                    }
                }
                if unknown { None } else { Some(true) }
            }
            Filter::Any(filters) => {
                let mut unknown = false;
                for filter in filters {
                    match filter.eval(entity) {
                        Some(true) => return Some(true),
                        None => unknown = true,
                        Some(false) => {}
                    }
                }
                if unknown { None } else { Some(false) }
            }
            Filter::Not(inner) => inner.eval(entity).map(|matched| !matched),
        }
    }
}

fn compare<E: Entity>(entity: &E, field: E::Field, value: &Value) -> Option<Ordering> {
    entity.value_of(field).sql_cmp(value)
}

impl<F> Not for Filter<F> {
    type Output = Filter<F>;

    fn not(self) -> Self::Output {
        Filter::Not(Box::new(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::test_support::{Row, RowField};

    #[test]
    fn equality_and_substring() {
        let row = Row::new(1, "Hello World", Some(3));

        assert!(Filter::eq(RowField::Name, "Hello World").matches(&row));
        assert!(Filter::contains(RowField::Name, "WORLD").matches(&row));
        assert!(!Filter::contains(RowField::Name, "planet").matches(&row));
    }

    #[test]
    fn comparisons_against_null_never_match() {
        let row = Row::new(1, "a", None);

        assert!(!Filter::eq(RowField::Rank, 3).matches(&row));
        assert!(!Filter::ne(RowField::Rank, 3).matches(&row));
        assert!(!Filter::gt(RowField::Rank, 0).matches(&row));
        assert!(!(!Filter::eq(RowField::Rank, 3)).matches(&row));
        assert!(Filter::is_null(RowField::Rank).matches(&row));
        assert!(Filter::eq(RowField::Rank, Value::Null).matches(&row));
    }

    #[test]
    fn any_with_unknown_branch_can_still_match() {
        let row = Row::new(1, "alpha", None);
        let filter = Filter::gt(RowField::Rank, 1).or(Filter::eq(RowField::Name, "alpha"));

        assert!(filter.matches(&row));
    }

    #[test]
    fn in_list_ignores_null_candidates() {
        let row = Row::new(4, "x", Some(2));

        assert!(Filter::is_in(RowField::Id, [1, 4, 9]).matches(&row));
        assert!(!Filter::is_in(RowField::Id, Vec::<i32>::new()).matches(&row));
        assert!(!Filter::In(RowField::Rank, vec![Value::Null]).matches(&row));
    }

    #[test]
    fn all_of_skips_missing_parts() {
        assert_eq!(Filter::<RowField>::all_of([None, None]), None);

        let single = Filter::all_of([None, Some(Filter::eq(RowField::Id, 1))]);
        assert_eq!(single, Some(Filter::Eq(RowField::Id, Value::Int(1))));

        let both = Filter::all_of([
            Some(Filter::eq(RowField::Id, 1)),
            Some(Filter::is_null(RowField::Rank)),
        ]);
        assert!(matches!(both, Some(Filter::All(parts)) if parts.len() == 2));
    }
}
