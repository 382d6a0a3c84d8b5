use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::validation::Validator;
use crate::error::DomainError;
use crate::query::{Entity, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogTag {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlogTagField {
    Id,
    Name,
    Slug,
}

impl Entity for BlogTag {
    type Field = BlogTagField;
    const NAME: &'static str = "blog_tag";
    const ID: BlogTagField = BlogTagField::Id;

    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }

    fn value_of(&self, field: BlogTagField) -> Value {
        match field {
            BlogTagField::Id => self.id.into(),
            BlogTagField::Name => (&self.name).into(),
            BlogTagField::Slug => (&self.slug).into(),
        }
    }
}

/// Join row linking a post to a tag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogPostTag {
    pub id: i32,
    pub post_id: i32,
    pub tag_id: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlogPostTagField {
    Id,
    PostId,
    TagId,
}

impl Entity for BlogPostTag {
    type Field = BlogPostTagField;
    const NAME: &'static str = "blog_post_tag";
    const ID: BlogPostTagField = BlogPostTagField::Id;

    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }

    fn value_of(&self, field: BlogPostTagField) -> Value {
        match field {
            BlogPostTagField::Id => self.id.into(),
            BlogPostTagField::PostId => self.post_id.into(),
            BlogPostTagField::TagId => self.tag_id.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlogTagForm {
    pub name: String,
    pub slug: String,
}

impl BlogTagForm {
    pub fn validate(&self) -> Result<(), DomainError> {
        Validator::new()
            .required("Name", &self.name, 50)
            .slug("Slug", &self.slug, 100)
            .finish()
    }

    pub fn to_tag(&self, now: DateTime<Utc>) -> BlogTag {
        BlogTag {
            id: 0,
            name: self.name.trim().to_owned(),
            slug: self.slug.trim().to_owned(),
            created_at: now,
        }
    }
}
