//! Blog post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use studio_core::domain::{BlogPost, BlogPostField};

use crate::database::mapping::{MappedEntity, identity};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blog_posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub summary: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub featured_image: Option<String>,
    pub is_published: bool,
    pub created_at: DateTimeWithTimeZone,
    pub published_at: Option<DateTimeWithTimeZone>,
    pub updated_at: Option<DateTimeWithTimeZone>,
    pub author: String,
    pub view_count: i32,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    pub category_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::blog_category::Entity",
        from = "Column::CategoryId",
        to = "super::blog_category::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Category,
    #[sea_orm(has_many = "super::blog_comment::Entity")]
    Comments,
}

impl Related<super::blog_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::blog_comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl MappedEntity for Entity {
    type Domain = BlogPost;

    fn column(field: BlogPostField) -> Column {
        match field {
            BlogPostField::Id => Column::Id,
            BlogPostField::Title => Column::Title,
            BlogPostField::Slug => Column::Slug,
            BlogPostField::Summary => Column::Summary,
            BlogPostField::Content => Column::Content,
            BlogPostField::IsPublished => Column::IsPublished,
            BlogPostField::CreatedAt => Column::CreatedAt,
            BlogPostField::PublishedAt => Column::PublishedAt,
            BlogPostField::UpdatedAt => Column::UpdatedAt,
            BlogPostField::Author => Column::Author,
            BlogPostField::ViewCount => Column::ViewCount,
            BlogPostField::CategoryId => Column::CategoryId,
        }
    }
}

impl From<Model> for BlogPost {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            slug: model.slug,
            summary: model.summary,
            content: model.content,
            featured_image: model.featured_image,
            is_published: model.is_published,
            created_at: model.created_at.into(),
            published_at: model.published_at.map(Into::into),
            updated_at: model.updated_at.map(Into::into),
            author: model.author,
            view_count: model.view_count,
            meta_title: model.meta_title,
            meta_description: model.meta_description,
            meta_keywords: model.meta_keywords,
            category_id: model.category_id,
        }
    }
}

impl From<BlogPost> for ActiveModel {
    fn from(post: BlogPost) -> Self {
        Self {
            id: identity(post.id),
            title: Set(post.title),
            slug: Set(post.slug),
            summary: Set(post.summary),
            content: Set(post.content),
            featured_image: Set(post.featured_image),
            is_published: Set(post.is_published),
            created_at: Set(post.created_at.into()),
            published_at: Set(post.published_at.map(Into::into)),
            updated_at: Set(post.updated_at.map(Into::into)),
            author: Set(post.author),
            view_count: Set(post.view_count),
            meta_title: Set(post.meta_title),
            meta_description: Set(post.meta_description),
            meta_keywords: Set(post.meta_keywords),
            category_id: Set(post.category_id),
        }
    }
}
