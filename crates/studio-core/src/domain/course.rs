use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::publish::Publishable;
use super::validation::Validator;
use crate::error::DomainError;
use crate::query::{Entity, Value};

pub const DEFAULT_CURRENCY: &str = "GHS";

/// A paid or free course. Prices are in minor currency units.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub featured_image: Option<String>,
    pub icon: Option<String>,
    pub price: i64,
    pub discount_price: Option<i64>,
    pub currency: String,
    pub duration: Option<String>,
    pub level: Option<String>,
    pub is_published: bool,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub enrollment_count: i32,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseField {
    Id,
    Title,
    Slug,
    Price,
    IsPublished,
    IsFeatured,
    CreatedAt,
    PublishedAt,
    UpdatedAt,
    EnrollmentCount,
}

impl Entity for Course {
    type Field = CourseField;
    const NAME: &'static str = "course";
    const ID: CourseField = CourseField::Id;

    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }

    fn value_of(&self, field: CourseField) -> Value {
        match field {
            CourseField::Id => self.id.into(),
            CourseField::Title => (&self.title).into(),
            CourseField::Slug => (&self.slug).into(),
            CourseField::Price => self.price.into(),
            CourseField::IsPublished => self.is_published.into(),
            CourseField::IsFeatured => self.is_featured.into(),
            CourseField::CreatedAt => self.created_at.into(),
            CourseField::PublishedAt => self.published_at.into(),
            CourseField::UpdatedAt => self.updated_at.into(),
            CourseField::EnrollmentCount => self.enrollment_count.into(),
        }
    }
}

impl Publishable for Course {
    fn is_published(&self) -> bool {
        self.is_published
    }

    fn published_at(&self) -> Option<DateTime<Utc>> {
        self.published_at
    }

    fn set_published_at(&mut self, at: DateTime<Utc>) {
        self.published_at = Some(at);
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseForm {
    pub title: String,
    pub slug: String,
    pub description: String,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub price: i64,
    #[serde(default)]
    pub discount_price: Option<i64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
}

impl CourseForm {
    pub fn validate(&self) -> Result<(), DomainError> {
        let currency_ok = self
            .currency
            .as_deref()
            .is_none_or(|c| c.len() == 3 && c.chars().all(|ch| ch.is_ascii_uppercase()));

        Validator::new()
            .required("Title", &self.title, 200)
            .slug("Slug", &self.slug, 250)
            .required("Description", &self.description, 500)
            .optional("Featured image", self.featured_image.as_deref(), 500)
            .optional("Icon", self.icon.as_deref(), 100)
            .optional("Duration", self.duration.as_deref(), 50)
            .optional("Level", self.level.as_deref(), 50)
            .optional("Meta title", self.meta_title.as_deref(), 200)
            .optional("Meta description", self.meta_description.as_deref(), 500)
            .check(self.price >= 0, "Price cannot be negative")
            .check(
                self.discount_price
                    .is_none_or(|discount| (0..=self.price).contains(&discount)),
                "Discount price must be between zero and the price",
            )
            .check(currency_ok, "Currency must be a three-letter ISO code")
            .finish()
    }

    pub fn apply_to(&self, course: &mut Course) {
        course.title = self.title.trim().to_owned();
        course.slug = self.slug.trim().to_owned();
        course.description = self.description.clone();
        course.featured_image = self.featured_image.clone();
        course.icon = self.icon.clone();
        course.price = self.price;
        course.discount_price = self.discount_price;
        course.currency = self
            .currency
            .clone()
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_owned());
        course.duration = self.duration.clone();
        course.level = self.level.clone();
        course.is_published = self.is_published;
        course.is_featured = self.is_featured;
        course.meta_title = self.meta_title.clone();
        course.meta_description = self.meta_description.clone();
    }

    pub fn to_course(&self, now: DateTime<Utc>) -> Course {
        let mut course = Course {
            created_at: now,
            ..Course::default()
        };
        self.apply_to(&mut course);
        course
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseLesson {
    pub id: i32,
    pub course_id: i32,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub content: Option<String>,
    pub video_url: Option<String>,
    pub attachment_url: Option<String>,
    pub order_index: i32,
    pub duration: Option<String>,
    pub is_published: bool,
    pub is_free: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseLessonField {
    Id,
    CourseId,
    Title,
    Slug,
    OrderIndex,
    IsPublished,
    IsFree,
    CreatedAt,
}

impl Entity for CourseLesson {
    type Field = CourseLessonField;
    const NAME: &'static str = "course_lesson";
    const ID: CourseLessonField = CourseLessonField::Id;

    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }

    fn value_of(&self, field: CourseLessonField) -> Value {
        match field {
            CourseLessonField::Id => self.id.into(),
            CourseLessonField::CourseId => self.course_id.into(),
            CourseLessonField::Title => (&self.title).into(),
            CourseLessonField::Slug => (&self.slug).into(),
            CourseLessonField::OrderIndex => self.order_index.into(),
            CourseLessonField::IsPublished => self.is_published.into(),
            CourseLessonField::IsFree => self.is_free.into(),
            CourseLessonField::CreatedAt => self.created_at.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseLessonForm {
    pub course_id: i32,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub attachment_url: Option<String>,
    #[serde(default)]
    pub order_index: i32,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub is_free: bool,
}

impl CourseLessonForm {
    pub fn validate(&self) -> Result<(), DomainError> {
        Validator::new()
            .check(self.course_id > 0, "Course is required")
            .required("Title", &self.title, 200)
            .slug("Slug", &self.slug, 250)
            .optional("Description", self.description.as_deref(), 1000)
            .optional("Video URL", self.video_url.as_deref(), 500)
            .optional("Attachment URL", self.attachment_url.as_deref(), 500)
            .optional("Duration", self.duration.as_deref(), 50)
            .check(self.order_index >= 0, "Order index cannot be negative")
            .finish()
    }

    pub fn apply_to(&self, lesson: &mut CourseLesson) {
        lesson.course_id = self.course_id;
        lesson.title = self.title.trim().to_owned();
        lesson.slug = self.slug.trim().to_owned();
        lesson.description = self.description.clone();
        lesson.content = self.content.clone();
        lesson.video_url = self.video_url.clone();
        lesson.attachment_url = self.attachment_url.clone();
        lesson.order_index = self.order_index;
        lesson.duration = self.duration.clone();
        lesson.is_published = self.is_published;
        lesson.is_free = self.is_free;
    }

    pub fn to_lesson(&self, now: DateTime<Utc>) -> CourseLesson {
        let mut lesson = CourseLesson {
            created_at: now,
            ..CourseLesson::default()
        };
        self.apply_to(&mut lesson);
        lesson
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> CourseForm {
        CourseForm {
            title: "Rust for the Web".into(),
            slug: "rust-for-the-web".into(),
            description: "From zero to deployed".into(),
            price: 50_000,
            ..CourseForm::default()
        }
    }

    #[test]
    fn currency_defaults_to_cedi() {
        let course = form().to_course(Utc::now());
        assert_eq!(course.currency, DEFAULT_CURRENCY);
    }

    #[test]
    fn discount_above_price_is_rejected() {
        let form = CourseForm {
            discount_price: Some(60_000),
            ..form()
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn lesson_requires_course() {
        let form = CourseLessonForm {
            title: "Intro".into(),
            slug: "intro".into(),
            ..CourseLessonForm::default()
        };
        assert!(form.validate().is_err());
    }
}
