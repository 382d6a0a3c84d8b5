use std::cmp::Ordering;

use super::Entity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

/// A non-empty sort specification.
///
/// Backends append the entity's identity column ascending after the listed
/// keys so paging is deterministic when sort keys tie.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy<F> {
    keys: Vec<(F, Direction)>,
}

impl<F: Copy + Eq> OrderBy<F> {
    pub fn asc(field: F) -> Self {
        Self {
            keys: vec![(field, Direction::Asc)],
        }
    }

    pub fn desc(field: F) -> Self {
        Self {
            keys: vec![(field, Direction::Desc)],
        }
    }

    pub fn then_asc(mut self, field: F) -> Self {
        self.keys.push((field, Direction::Asc));
        self
    }

    pub fn then_desc(mut self, field: F) -> Self {
        self.keys.push((field, Direction::Desc));
        self
    }

    /// Sort keys including the trailing identity tie-breaker.
    pub fn keys_with_tiebreak(&self, id: F) -> Vec<(F, Direction)> {
        let mut keys = self.keys.clone();
        if !keys.iter().any(|(field, _)| *field == id) {
            keys.push((id, Direction::Asc));
        }
        keys
    }

    /// In-memory comparator matching the SQL translation. Nulls sort first
    /// ascending and last descending.
    pub fn compare<E: Entity<Field = F>>(&self, a: &E, b: &E) -> Ordering {
        for (field, direction) in self.keys_with_tiebreak(E::ID) {
            let ordering = a.value_of(field).total_cmp(&b.value_of(field));
            let ordering = match direction {
                Direction::Asc => ordering,
                Direction::Desc => ordering.reverse(),
            };
            if ordering.is_ne() {
                return ordering;
            }
        }
        Ordering::Equal
    }
}
