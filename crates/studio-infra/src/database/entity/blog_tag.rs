use sea_orm::Set;
use sea_orm::entity::prelude::*;

use studio_core::domain::{BlogTag, BlogTagField};

use crate::database::mapping::{MappedEntity, identity};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blog_tags")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl MappedEntity for Entity {
    type Domain = BlogTag;

    fn column(field: BlogTagField) -> Column {
        match field {
            BlogTagField::Id => Column::Id,
            BlogTagField::Name => Column::Name,
            BlogTagField::Slug => Column::Slug,
        }
    }
}

impl From<Model> for BlogTag {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            slug: model.slug,
            created_at: model.created_at.into(),
        }
    }
}

impl From<BlogTag> for ActiveModel {
    fn from(tag: BlogTag) -> Self {
        Self {
            id: identity(tag.id),
            name: Set(tag.name),
            slug: Set(tag.slug),
            created_at: Set(tag.created_at.into()),
        }
    }
}
