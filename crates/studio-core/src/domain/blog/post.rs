use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::publish::Publishable;
use crate::domain::validation::Validator;
use crate::error::DomainError;
use crate::query::{Entity, Value};

/// Blog post.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub summary: String,
    pub content: String,
    pub featured_image: Option<String>,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub author: String,
    pub view_count: i32,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub meta_keywords: Option<String>,
    pub category_id: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlogPostField {
    Id,
    Title,
    Slug,
    Summary,
    Content,
    IsPublished,
    CreatedAt,
    PublishedAt,
    UpdatedAt,
    Author,
    ViewCount,
    CategoryId,
}

impl Entity for BlogPost {
    type Field = BlogPostField;
    const NAME: &'static str = "blog_post";
    const ID: BlogPostField = BlogPostField::Id;

    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }

    fn value_of(&self, field: BlogPostField) -> Value {
        match field {
            BlogPostField::Id => self.id.into(),
            BlogPostField::Title => (&self.title).into(),
            BlogPostField::Slug => (&self.slug).into(),
            BlogPostField::Summary => (&self.summary).into(),
            BlogPostField::Content => (&self.content).into(),
            BlogPostField::IsPublished => self.is_published.into(),
            BlogPostField::CreatedAt => self.created_at.into(),
            BlogPostField::PublishedAt => self.published_at.into(),
            BlogPostField::UpdatedAt => self.updated_at.into(),
            BlogPostField::Author => (&self.author).into(),
            BlogPostField::ViewCount => self.view_count.into(),
            BlogPostField::CategoryId => self.category_id.into(),
        }
    }
}

impl Publishable for BlogPost {
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

/// Editable fields of a post as submitted by the admin UI.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlogPostForm {
    pub title: String,
    pub slug: String,
    pub summary: String,
    pub content: String,
    #[serde(default)]
    pub featured_image: Option<String>,
    pub author: String,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub meta_keywords: Option<String>,
    #[serde(default)]
    pub category_id: Option<i32>,
    #[serde(default)]
    pub tag_ids: Vec<i32>,
}

impl BlogPostForm {
    pub fn validate(&self) -> Result<(), DomainError> {
        Validator::new()
            .required("Title", &self.title, 200)
            .slug("Slug", &self.slug, 250)
            .required("Summary", &self.summary, 500)
            .required("Content", &self.content, usize::MAX)
            .required("Author", &self.author, 100)
            .optional("Featured image", self.featured_image.as_deref(), 500)
            .optional("Meta title", self.meta_title.as_deref(), 200)
            .optional("Meta description", self.meta_description.as_deref(), 500)
            .optional("Meta keywords", self.meta_keywords.as_deref(), 500)
            .finish()
    }

    pub fn apply_to(&self, post: &mut BlogPost) {
        post.title = self.title.trim().to_owned();
        post.slug = self.slug.trim().to_owned();
        post.summary = self.summary.clone();
        post.content = self.content.clone();
        post.featured_image = self.featured_image.clone();
        post.author = self.author.trim().to_owned();
        post.is_published = self.is_published;
        post.meta_title = self.meta_title.clone();
        post.meta_description = self.meta_description.clone();
        post.meta_keywords = self.meta_keywords.clone();
        post.category_id = self.category_id;
    }

    /// A new, unsaved post built from this form.
    pub fn to_post(&self, now: DateTime<Utc>) -> BlogPost {
        let mut post = BlogPost {
            created_at: now,
            ..BlogPost::default()
        };
        self.apply_to(&mut post);
        post
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> BlogPostForm {
        BlogPostForm {
            title: "Hello".into(),
            slug: "hello".into(),
            summary: "Short".into(),
            content: "Body".into(),
            author: "Kofi".into(),
            ..BlogPostForm::default()
        }
    }

    #[test]
    fn first_publish_is_stamped_once() {
        let first = Utc::now();
        let mut post = BlogPostForm {
            is_published: true,
            ..form()
        }
        .to_post(first);

        post.stamp_publication(first);
        assert_eq!(post.published_at, Some(first));

        post.stamp_publication(first + chrono::Duration::days(1));
        assert_eq!(post.published_at, Some(first));
    }

    #[test]
    fn drafts_are_not_stamped() {
        let mut post = form().to_post(Utc::now());
        post.stamp_publication(Utc::now());
        assert_eq!(post.published_at, None);
    }

    #[test]
    fn form_does_not_touch_counters() {
        let mut post = form().to_post(Utc::now());
        post.view_count = 42;
        form().apply_to(&mut post);
        assert_eq!(post.view_count, 42);
    }

    #[test]
    fn missing_title_fails_validation() {
        let form = BlogPostForm {
            title: String::new(),
            ..form()
        };
        assert!(matches!(form.validate(), Err(DomainError::Validation(_))));
    }
}
