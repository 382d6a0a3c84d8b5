use sea_orm::Set;
use sea_orm::entity::prelude::*;

use studio_core::domain::{Course, CourseField};

use crate::database::mapping::{MappedEntity, identity};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub description: String,
    pub featured_image: Option<String>,
    pub icon: Option<String>,
    /// Minor currency units.
    pub price: i64,
    pub discount_price: Option<i64>,
    pub currency: String,
    pub duration: Option<String>,
    pub level: Option<String>,
    pub is_published: bool,
    pub is_featured: bool,
    pub created_at: DateTimeWithTimeZone,
    pub published_at: Option<DateTimeWithTimeZone>,
    pub updated_at: Option<DateTimeWithTimeZone>,
    pub enrollment_count: i32,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course_lesson::Entity")]
    Lessons,
}

impl Related<super::course_lesson::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lessons.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl MappedEntity for Entity {
    type Domain = Course;

    fn column(field: CourseField) -> Column {
        match field {
            CourseField::Id => Column::Id,
            CourseField::Title => Column::Title,
            CourseField::Slug => Column::Slug,
            CourseField::Price => Column::Price,
            CourseField::IsPublished => Column::IsPublished,
            CourseField::IsFeatured => Column::IsFeatured,
            CourseField::CreatedAt => Column::CreatedAt,
            CourseField::PublishedAt => Column::PublishedAt,
            CourseField::UpdatedAt => Column::UpdatedAt,
            CourseField::EnrollmentCount => Column::EnrollmentCount,
        }
    }
}

impl From<Model> for Course {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            slug: model.slug,
            description: model.description,
            featured_image: model.featured_image,
            icon: model.icon,
            price: model.price,
            discount_price: model.discount_price,
            currency: model.currency,
            duration: model.duration,
            level: model.level,
            is_published: model.is_published,
            is_featured: model.is_featured,
            created_at: model.created_at.into(),
            published_at: model.published_at.map(Into::into),
            updated_at: model.updated_at.map(Into::into),
            enrollment_count: model.enrollment_count,
            meta_title: model.meta_title,
            meta_description: model.meta_description,
        }
    }
}

impl From<Course> for ActiveModel {
    fn from(course: Course) -> Self {
        Self {
            id: identity(course.id),
            title: Set(course.title),
            slug: Set(course.slug),
            description: Set(course.description),
            featured_image: Set(course.featured_image),
            icon: Set(course.icon),
            price: Set(course.price),
            discount_price: Set(course.discount_price),
            currency: Set(course.currency),
            duration: Set(course.duration),
            level: Set(course.level),
            is_published: Set(course.is_published),
            is_featured: Set(course.is_featured),
            created_at: Set(course.created_at.into()),
            published_at: Set(course.published_at.map(Into::into)),
            updated_at: Set(course.updated_at.map(Into::into)),
            enrollment_count: Set(course.enrollment_count),
            meta_title: Set(course.meta_title),
            meta_description: Set(course.meta_description),
        }
    }
}
