use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::sea_query::{NullOrdering, Order};
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DbConn, IntoActiveModel, PaginatorTrait,
    PrimaryKeyTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use studio_core::error::RepoError;
use studio_core::ports::Repository;
use studio_core::query::{Direction, Entity as DomainEntity, Filter, OrderBy, Page, PageRequest};

use super::mapping::{FieldOf, MappedEntity, condition, repo_err};

/// Repository backed by a SeaORM connection pool.
///
/// One generic implementation serves every table; the entity's
/// [`MappedEntity`] impl supplies the column mapping. Every repository on
/// the same backend shares one pool handle.
pub struct SeaOrmRepository<E> {
    db: Arc<DbConn>,
    _entity: PhantomData<E>,
}

impl<E> SeaOrmRepository<E> {
    pub fn new(db: Arc<DbConn>) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

impl<E: MappedEntity> SeaOrmRepository<E> {
    fn select(&self, filter: Option<&Filter<FieldOf<E>>>) -> Select<E> {
        match filter {
            Some(filter) => E::find().filter(condition::<E>(filter)),
            None => E::find(),
        }
    }
}

/// Applies the sort keys plus identity tie-breaker. Null placement is spelled
/// out so every backend agrees with in-memory ordering.
fn ordered<E: MappedEntity>(mut query: Select<E>, order: &OrderBy<FieldOf<E>>) -> Select<E> {
    for (field, direction) in order.keys_with_tiebreak(E::Domain::ID) {
        let (order, nulls) = match direction {
            Direction::Asc => (Order::Asc, NullOrdering::First),
            Direction::Desc => (Order::Desc, NullOrdering::Last),
        };
        query = query.order_by_with_nulls(E::column(field), order, nulls);
    }
    query
}

#[async_trait]
impl<E> Repository<E::Domain> for SeaOrmRepository<E>
where
    E: MappedEntity,
    E::Model: Into<E::Domain> + IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::Domain: Into<E::ActiveModel>,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i32>,
{
    async fn get_by_id(&self, id: i32) -> Result<Option<E::Domain>, RepoError> {
        tracing::debug!(entity = E::Domain::NAME, id, "Finding by id");
        let model = E::find_by_id(id).one(self.db.as_ref()).await.map_err(repo_err)?;
        Ok(model.map(Into::into))
    }

    async fn get_all(&self) -> Result<Vec<E::Domain>, RepoError> {
        let query = ordered(self.select(None), &OrderBy::asc(E::Domain::ID));
        let models = query.all(self.db.as_ref()).await.map_err(repo_err)?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn first_or_default(
        &self,
        filter: Filter<FieldOf<E>>,
    ) -> Result<Option<E::Domain>, RepoError> {
        tracing::debug!(entity = E::Domain::NAME, ?filter, "Finding first match");
        let query = ordered(self.select(Some(&filter)), &OrderBy::asc(E::Domain::ID));
        let model = query.one(self.db.as_ref()).await.map_err(repo_err)?;
        Ok(model.map(Into::into))
    }

    async fn list(
        &self,
        filter: Option<Filter<FieldOf<E>>>,
        order: OrderBy<FieldOf<E>>,
        limit: Option<u64>,
    ) -> Result<Vec<E::Domain>, RepoError> {
        tracing::debug!(entity = E::Domain::NAME, ?filter, ?limit, "Listing");
        let mut query = ordered(self.select(filter.as_ref()), &order);
        if let Some(limit) = limit {
            query = query.limit(limit);
        }
        let models = query.all(self.db.as_ref()).await.map_err(repo_err)?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn add(&self, entity: E::Domain) -> Result<E::Domain, RepoError> {
        let active: E::ActiveModel = entity.into();
        let model = active.insert(self.db.as_ref()).await.map_err(repo_err)?;
        let entity: E::Domain = model.into();
        tracing::info!(entity = E::Domain::NAME, id = entity.id(), "Inserted");
        Ok(entity)
    }

    async fn update(&self, entity: E::Domain) -> Result<E::Domain, RepoError> {
        let id = entity.id();
        if id == 0 {
            return Err(RepoError::NotFound);
        }
        let active: E::ActiveModel = entity.into();
        let model = active.update(self.db.as_ref()).await.map_err(repo_err)?;
        tracing::info!(entity = E::Domain::NAME, id, "Updated");
        Ok(model.into())
    }

    async fn delete(&self, entity: E::Domain) -> Result<(), RepoError> {
        let id = entity.id();
        let result = E::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(repo_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }
        tracing::info!(entity = E::Domain::NAME, id, "Deleted");
        Ok(())
    }

    async fn count(&self, filter: Option<Filter<FieldOf<E>>>) -> Result<u64, RepoError> {
        self.select(filter.as_ref())
            .count(self.db.as_ref())
            .await
            .map_err(repo_err)
    }

    async fn get_paged(
        &self,
        page: PageRequest,
        filter: Option<Filter<FieldOf<E>>>,
        order: OrderBy<FieldOf<E>>,
    ) -> Result<Page<E::Domain>, RepoError> {
        tracing::debug!(
            entity = E::Domain::NAME,
            page = page.number(),
            size = page.size(),
            ?filter,
            "Paged query"
        );
        let query = self.select(filter.as_ref());
        let total_count = query.clone().count(self.db.as_ref()).await.map_err(repo_err)?;

        // Past the end; the offset may not even fit the driver's integer type.
        let offset = page.offset();
        if offset >= total_count {
            return Ok(Page::new(Vec::new(), total_count, page));
        }

        let models = ordered(query, &order)
            .offset(offset)
            .limit(page.size().min(total_count - offset))
            .all(self.db.as_ref())
            .await
            .map_err(repo_err)?;

        let items = models.into_iter().map(Into::into).collect();
        Ok(Page::new(items, total_count, page))
    }
}
