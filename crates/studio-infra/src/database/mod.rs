//! Repository implementations and their wiring.

mod memory;

#[cfg(feature = "database")]
mod connections;
#[cfg(feature = "database")]
pub mod entity;
#[cfg(feature = "database")]
mod mapping;
#[cfg(feature = "database")]
mod repository;

use std::sync::Arc;

use studio_core::domain::{
    BlogCategory, BlogComment, BlogPost, BlogPostTag, BlogTag, ContactSubmission, Course,
    CourseLesson, Portfolio, PortfolioCategory,
};
use studio_core::ports::Repository;
use studio_core::services::BlogRepositories;

pub use memory::InMemoryRepository;

#[cfg(feature = "database")]
pub use connections::DatabaseConfig;
#[cfg(feature = "database")]
pub use mapping::MappedEntity;
#[cfg(feature = "database")]
pub use repository::SeaOrmRepository;

/// One repository per entity family, all on the same backend.
#[derive(Clone)]
pub struct Repositories {
    pub posts: Arc<dyn Repository<BlogPost>>,
    pub categories: Arc<dyn Repository<BlogCategory>>,
    pub comments: Arc<dyn Repository<BlogComment>>,
    pub tags: Arc<dyn Repository<BlogTag>>,
    pub post_tags: Arc<dyn Repository<BlogPostTag>>,
    pub portfolios: Arc<dyn Repository<Portfolio>>,
    pub portfolio_categories: Arc<dyn Repository<PortfolioCategory>>,
    pub courses: Arc<dyn Repository<Course>>,
    pub lessons: Arc<dyn Repository<CourseLesson>>,
    pub submissions: Arc<dyn Repository<ContactSubmission>>,
}

impl Repositories {
    /// Process-local storage with the same unique keys as the schema.
    pub fn in_memory() -> Self {
        Self {
            posts: Arc::new(
                InMemoryRepository::new().with_unique("slug", |p: &BlogPost| p.slug.clone()),
            ),
            categories: Arc::new(
                InMemoryRepository::new().with_unique("slug", |c: &BlogCategory| c.slug.clone()),
            ),
            comments: Arc::new(InMemoryRepository::new()),
            tags: Arc::new(
                InMemoryRepository::new().with_unique("slug", |t: &BlogTag| t.slug.clone()),
            ),
            post_tags: Arc::new(InMemoryRepository::new().with_unique(
                "post_id_tag_id",
                |pt: &BlogPostTag| format!("{}:{}", pt.post_id, pt.tag_id),
            )),
            portfolios: Arc::new(
                InMemoryRepository::new().with_unique("slug", |p: &Portfolio| p.slug.clone()),
            ),
            portfolio_categories: Arc::new(
                InMemoryRepository::new()
                    .with_unique("slug", |c: &PortfolioCategory| c.slug.clone()),
            ),
            courses: Arc::new(
                InMemoryRepository::new().with_unique("slug", |c: &Course| c.slug.clone()),
            ),
            lessons: Arc::new(InMemoryRepository::new().with_unique(
                "course_id_slug",
                |l: &CourseLesson| format!("{}:{}", l.course_id, l.slug),
            )),
            submissions: Arc::new(InMemoryRepository::new()),
        }
    }

    /// SeaORM-backed repositories sharing one pool.
    #[cfg(feature = "database")]
    pub fn sea_orm(db: Arc<sea_orm::DbConn>) -> Self {
        Self {
            posts: Arc::new(SeaOrmRepository::<entity::blog_post::Entity>::new(db.clone())),
            categories: Arc::new(SeaOrmRepository::<entity::blog_category::Entity>::new(
                db.clone(),
            )),
            comments: Arc::new(SeaOrmRepository::<entity::blog_comment::Entity>::new(
                db.clone(),
            )),
            tags: Arc::new(SeaOrmRepository::<entity::blog_tag::Entity>::new(db.clone())),
            post_tags: Arc::new(SeaOrmRepository::<entity::blog_post_tag::Entity>::new(
                db.clone(),
            )),
            portfolios: Arc::new(SeaOrmRepository::<entity::portfolio::Entity>::new(
                db.clone(),
            )),
            portfolio_categories: Arc::new(
                SeaOrmRepository::<entity::portfolio_category::Entity>::new(db.clone()),
            ),
            courses: Arc::new(SeaOrmRepository::<entity::course::Entity>::new(db.clone())),
            lessons: Arc::new(SeaOrmRepository::<entity::course_lesson::Entity>::new(
                db.clone(),
            )),
            submissions: Arc::new(SeaOrmRepository::<entity::contact_submission::Entity>::new(
                db,
            )),
        }
    }

    pub fn blog(&self) -> BlogRepositories {
        BlogRepositories {
            posts: self.posts.clone(),
            categories: self.categories.clone(),
            comments: self.comments.clone(),
            tags: self.tags.clone(),
            post_tags: self.post_tags.clone(),
        }
    }
}

#[cfg(all(test, feature = "database"))]
mod tests;
