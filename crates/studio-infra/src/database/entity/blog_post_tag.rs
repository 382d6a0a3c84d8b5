//! Join table between posts and tags.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use studio_core::domain::{BlogPostTag, BlogPostTagField};

use crate::database::mapping::{MappedEntity, identity};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blog_post_tags")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub post_id: i32,
    pub tag_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::blog_post::Entity",
        from = "Column::PostId",
        to = "super::blog_post::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Post,
    #[sea_orm(
        belongs_to = "super::blog_tag::Entity",
        from = "Column::TagId",
        to = "super::blog_tag::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Tag,
}

impl ActiveModelBehavior for ActiveModel {}

impl MappedEntity for Entity {
    type Domain = BlogPostTag;

    fn column(field: BlogPostTagField) -> Column {
        match field {
            BlogPostTagField::Id => Column::Id,
            BlogPostTagField::PostId => Column::PostId,
            BlogPostTagField::TagId => Column::TagId,
        }
    }
}

impl From<Model> for BlogPostTag {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            post_id: model.post_id,
            tag_id: model.tag_id,
        }
    }
}

impl From<BlogPostTag> for ActiveModel {
    fn from(link: BlogPostTag) -> Self {
        Self {
            id: identity(link.id),
            post_id: Set(link.post_id),
            tag_id: Set(link.tag_id),
        }
    }
}
