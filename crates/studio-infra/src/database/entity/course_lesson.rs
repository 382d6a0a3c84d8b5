use sea_orm::Set;
use sea_orm::entity::prelude::*;

use studio_core::domain::{CourseLesson, CourseLessonField};

use crate::database::mapping::{MappedEntity, identity};

/// Lesson slugs are unique per course, enforced by a composite index.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "course_lessons")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub course_id: i32,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub content: Option<String>,
    pub video_url: Option<String>,
    pub attachment_url: Option<String>,
    pub order_index: i32,
    pub duration: Option<String>,
    pub is_published: bool,
    pub is_free: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Course,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl MappedEntity for Entity {
    type Domain = CourseLesson;

    fn column(field: CourseLessonField) -> Column {
        match field {
            CourseLessonField::Id => Column::Id,
            CourseLessonField::CourseId => Column::CourseId,
            CourseLessonField::Title => Column::Title,
            CourseLessonField::Slug => Column::Slug,
            CourseLessonField::OrderIndex => Column::OrderIndex,
            CourseLessonField::IsPublished => Column::IsPublished,
            CourseLessonField::IsFree => Column::IsFree,
            CourseLessonField::CreatedAt => Column::CreatedAt,
        }
    }
}

impl From<Model> for CourseLesson {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            course_id: model.course_id,
            title: model.title,
            slug: model.slug,
            description: model.description,
            content: model.content,
            video_url: model.video_url,
            attachment_url: model.attachment_url,
            order_index: model.order_index,
            duration: model.duration,
            is_published: model.is_published,
            is_free: model.is_free,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.map(Into::into),
        }
    }
}

impl From<CourseLesson> for ActiveModel {
    fn from(lesson: CourseLesson) -> Self {
        Self {
            id: identity(lesson.id),
            course_id: Set(lesson.course_id),
            title: Set(lesson.title),
            slug: Set(lesson.slug),
            description: Set(lesson.description),
            content: Set(lesson.content),
            video_url: Set(lesson.video_url),
            attachment_url: Set(lesson.attachment_url),
            order_index: Set(lesson.order_index),
            duration: Set(lesson.duration),
            is_published: Set(lesson.is_published),
            is_free: Set(lesson.is_free),
            created_at: Set(lesson.created_at.into()),
            updated_at: Set(lesson.updated_at.map(Into::into)),
        }
    }
}
