//! In-memory repository used when no database is configured, and by tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use studio_core::error::RepoError;
use studio_core::ports::Repository;
use studio_core::query::{Entity, Filter, OrderBy, Page, PageRequest};

type KeyFn<T> = Box<dyn Fn(&T) -> String + Send + Sync>;

struct Store<T> {
    rows: BTreeMap<i32, T>,
    next_id: i32,
}

/// Process-local repository with the same query semantics as the SQL one.
///
/// Unique keys registered with [`with_unique`](Self::with_unique) are
/// enforced on insert and update. Referential integrity is left to the
/// services, which delete and detach dependents explicitly.
/// Note: data is lost on process restart.
pub struct InMemoryRepository<T> {
    store: RwLock<Store<T>>,
    unique: Vec<(&'static str, KeyFn<T>)>,
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
            unique: Vec::new(),
        }
    }

    /// Adds a uniqueness constraint named `name` over the key `key` extracts.
    pub fn with_unique(
        mut self,
        name: &'static str,
        key: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> Self {
        self.unique.push((name, Box::new(key)));
        self
    }

    fn check_unique(&self, rows: &BTreeMap<i32, T>, entity: &T) -> Result<(), RepoError> {
        for (name, key) in &self.unique {
            let wanted = key(entity);
            let clash = rows
                .values()
                .any(|row| row.id() != entity.id() && key(row) == wanted);
            if clash {
                return Err(RepoError::Constraint(format!(
                    "duplicate value for {}.{name}: {wanted}",
                    T::NAME
                )));
            }
        }
        Ok(())
    }

    fn select(
        rows: &BTreeMap<i32, T>,
        filter: Option<&Filter<T::Field>>,
        order: &OrderBy<T::Field>,
    ) -> Vec<T> {
        let mut matched: Vec<T> = rows
            .values()
            .filter(|row| filter.is_none_or(|filter| filter.matches(*row)))
            .cloned()
            .collect();
        matched.sort_by(|a, b| order.compare(a, b));
        matched
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    async fn get_by_id(&self, id: i32) -> Result<Option<T>, RepoError> {
        let store = self.store.read().await;
        Ok(store.rows.get(&id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<T>, RepoError> {
        let store = self.store.read().await;
        Ok(store.rows.values().cloned().collect())
    }

    async fn first_or_default(&self, filter: Filter<T::Field>) -> Result<Option<T>, RepoError> {
        let store = self.store.read().await;
        Ok(store.rows.values().find(|row| filter.matches(*row)).cloned())
    }

    async fn list(
        &self,
        filter: Option<Filter<T::Field>>,
        order: OrderBy<T::Field>,
        limit: Option<u64>,
    ) -> Result<Vec<T>, RepoError> {
        let store = self.store.read().await;
        let mut rows = Self::select(&store.rows, filter.as_ref(), &order);
        if let Some(limit) = limit {
            rows.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        }
        Ok(rows)
    }

    async fn add(&self, mut entity: T) -> Result<T, RepoError> {
        let mut store = self.store.write().await;
        if entity.id() != 0 && store.rows.contains_key(&entity.id()) {
            return Err(RepoError::Constraint(format!(
                "duplicate primary key for {}: {}",
                T::NAME,
                entity.id()
            )));
        }
        if entity.id() == 0 {
            entity.set_id(store.next_id);
        }
        self.check_unique(&store.rows, &entity)?;

        store.next_id = store.next_id.max(entity.id() + 1);
        store.rows.insert(entity.id(), entity.clone());
        tracing::info!(entity = T::NAME, id = entity.id(), "Inserted");
        Ok(entity)
    }

    async fn update(&self, entity: T) -> Result<T, RepoError> {
        let mut store = self.store.write().await;
        if !store.rows.contains_key(&entity.id()) {
            return Err(RepoError::NotFound);
        }
        self.check_unique(&store.rows, &entity)?;

        store.rows.insert(entity.id(), entity.clone());
        tracing::info!(entity = T::NAME, id = entity.id(), "Updated");
        Ok(entity)
    }

    async fn delete(&self, entity: T) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store
            .rows
            .remove(&entity.id())
            .ok_or(RepoError::NotFound)?;
        tracing::info!(entity = T::NAME, id = entity.id(), "Deleted");
        Ok(())
    }

    async fn count(&self, filter: Option<Filter<T::Field>>) -> Result<u64, RepoError> {
        let store = self.store.read().await;
        let count = match filter {
            Some(filter) => store.rows.values().filter(|row| filter.matches(*row)).count(),
            None => store.rows.len(),
        };
        Ok(count as u64)
    }

    async fn get_paged(
        &self,
        page: PageRequest,
        filter: Option<Filter<T::Field>>,
        order: OrderBy<T::Field>,
    ) -> Result<Page<T>, RepoError> {
        let store = self.store.read().await;
        let rows = Self::select(&store.rows, filter.as_ref(), &order);
        Ok(Page::from_sorted(rows, page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use studio_core::domain::{BlogTag, BlogTagField};

    fn tag(name: &str) -> BlogTag {
        BlogTag {
            name: name.to_string(),
            slug: name.to_lowercase(),
            ..Default::default()
        }
    }

    fn tags() -> InMemoryRepository<BlogTag> {
        InMemoryRepository::new().with_unique("slug", |t: &BlogTag| t.slug.clone())
    }

    #[tokio::test]
    async fn add_assigns_increasing_ids() {
        let repo = tags();
        let a = repo.add(tag("Rust")).await.unwrap();
        let b = repo.add(tag("Go")).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(repo.get_by_id(2).await.unwrap(), Some(b));
    }

    #[tokio::test]
    async fn duplicate_unique_key_is_a_constraint_error() {
        let repo = tags();
        repo.add(tag("Rust")).await.unwrap();
        let err = repo.add(tag("Rust")).await.unwrap_err();
        assert!(matches!(err, RepoError::Constraint(_)));
    }

    #[tokio::test]
    async fn update_may_keep_its_own_unique_key() {
        let repo = tags();
        let mut rust = repo.add(tag("Rust")).await.unwrap();
        rust.name = "Rust Lang".to_string();
        let updated = repo.update(rust).await.unwrap();
        assert_eq!(updated.name, "Rust Lang");
    }

    #[tokio::test]
    async fn update_of_missing_row_is_not_found() {
        let repo = tags();
        let mut ghost = tag("Ghost");
        ghost.id = 42;
        assert!(matches!(
            repo.update(ghost).await.unwrap_err(),
            RepoError::NotFound
        ));
    }

    #[tokio::test]
    async fn paging_filters_before_the_window() {
        let repo = tags();
        for name in ["Alpha", "Beta", "Gamma", "Delta", "Epsilon"] {
            repo.add(tag(name)).await.unwrap();
        }
        let filter = Filter::contains(BlogTagField::Name, "a");
        let page = repo
            .get_paged(
                PageRequest::new(2, 2).unwrap(),
                Some(filter),
                OrderBy::asc(BlogTagField::Name),
            )
            .await
            .unwrap();

        // Alpha, Beta, Delta, Gamma match; Epsilon does not.
        assert_eq!(page.total_count, 4);
        let names: Vec<_> = page.items.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Delta", "Gamma"]);
    }

    #[tokio::test]
    async fn delete_then_lookup_is_absent() {
        let repo = tags();
        let rust = repo.add(tag("Rust")).await.unwrap();
        repo.delete(rust.clone()).await.unwrap();
        assert_eq!(repo.get_by_id(rust.id).await.unwrap(), None);
        assert!(matches!(
            repo.delete(rust).await.unwrap_err(),
            RepoError::NotFound
        ));
    }
}
