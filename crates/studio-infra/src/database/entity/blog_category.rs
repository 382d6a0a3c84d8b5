use sea_orm::Set;
use sea_orm::entity::prelude::*;

use studio_core::domain::{BlogCategory, BlogCategoryField};

use crate::database::mapping::{MappedEntity, identity};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blog_categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::blog_post::Entity")]
    Posts,
}

impl Related<super::blog_post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Posts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl MappedEntity for Entity {
    type Domain = BlogCategory;

    fn column(field: BlogCategoryField) -> Column {
        match field {
            BlogCategoryField::Id => Column::Id,
            BlogCategoryField::Name => Column::Name,
            BlogCategoryField::Slug => Column::Slug,
            BlogCategoryField::CreatedAt => Column::CreatedAt,
        }
    }
}

impl From<Model> for BlogCategory {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            slug: model.slug,
            description: model.description,
            color: model.color,
            created_at: model.created_at.into(),
        }
    }
}

impl From<BlogCategory> for ActiveModel {
    fn from(category: BlogCategory) -> Self {
        Self {
            id: identity(category.id),
            name: Set(category.name),
            slug: Set(category.slug),
            description: Set(category.description),
            color: Set(category.color),
            created_at: Set(category.created_at.into()),
        }
    }
}
