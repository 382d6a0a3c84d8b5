use sea_orm::Set;
use sea_orm::entity::prelude::*;

use studio_core::domain::{BlogComment, BlogCommentField};

use crate::database::mapping::{MappedEntity, identity};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blog_comments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub post_id: i32,
    pub author_name: String,
    pub author_email: String,
    pub author_website: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_at: DateTimeWithTimeZone,
    pub is_approved: bool,
    pub parent_comment_id: Option<i32>,
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
        belongs_to = "Entity",
        from = "Column::ParentCommentId",
        to = "Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Parent,
}

impl Related<super::blog_post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl MappedEntity for Entity {
    type Domain = BlogComment;

    fn column(field: BlogCommentField) -> Column {
        match field {
            BlogCommentField::Id => Column::Id,
            BlogCommentField::PostId => Column::PostId,
            BlogCommentField::CreatedAt => Column::CreatedAt,
            BlogCommentField::IsApproved => Column::IsApproved,
            BlogCommentField::ParentCommentId => Column::ParentCommentId,
        }
    }
}

impl From<Model> for BlogComment {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            post_id: model.post_id,
            author_name: model.author_name,
            author_email: model.author_email,
            author_website: model.author_website,
            content: model.content,
            created_at: model.created_at.into(),
            is_approved: model.is_approved,
            parent_comment_id: model.parent_comment_id,
        }
    }
}

impl From<BlogComment> for ActiveModel {
    fn from(comment: BlogComment) -> Self {
        Self {
            id: identity(comment.id),
            post_id: Set(comment.post_id),
            author_name: Set(comment.author_name),
            author_email: Set(comment.author_email),
            author_website: Set(comment.author_website),
            content: Set(comment.content),
            created_at: Set(comment.created_at.into()),
            is_approved: Set(comment.is_approved),
            parent_comment_id: Set(comment.parent_comment_id),
        }
    }
}
