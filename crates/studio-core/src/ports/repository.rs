use async_trait::async_trait;

use crate::error::RepoError;
use crate::query::{Entity, Filter, OrderBy, Page, PageRequest};

/// Generic data access over one entity family.
///
/// Every mutation is persisted before the call returns. Lookups of missing
/// identities are `Ok(None)`, never an error.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Find an entity by its identity.
    async fn get_by_id(&self, id: i32) -> Result<Option<T>, RepoError>;

    /// Every row, ascending by identity.
    async fn get_all(&self) -> Result<Vec<T>, RepoError>;

    /// The lowest-identity row matching `filter`.
    async fn first_or_default(&self, filter: Filter<T::Field>) -> Result<Option<T>, RepoError>;

    /// Filtered, ordered listing with an optional row limit.
    async fn list(
        &self,
        filter: Option<Filter<T::Field>>,
        order: OrderBy<T::Field>,
        limit: Option<u64>,
    ) -> Result<Vec<T>, RepoError>;

    /// Insert a new entity and return it with its assigned identity.
    async fn add(&self, entity: T) -> Result<T, RepoError>;

    /// Overwrite the stored row with `entity`. Fails with
    /// [`RepoError::NotFound`] when the row no longer exists.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Remove the row with `entity`'s identity.
    async fn delete(&self, entity: T) -> Result<(), RepoError>;

    async fn count(&self, filter: Option<Filter<T::Field>>) -> Result<u64, RepoError>;

    /// One page of matches. The filter is applied before the window and
    /// `total_count` covers every match.
    async fn get_paged(
        &self,
        page: PageRequest,
        filter: Option<Filter<T::Field>>,
        order: OrderBy<T::Field>,
    ) -> Result<Page<T>, RepoError>;
}
