use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::validation::Validator;
use crate::error::DomainError;
use crate::query::{Entity, Value};

pub const DEFAULT_CATEGORY_COLOR: &str = "#3b82f6";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogCategory {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlogCategoryField {
    Id,
    Name,
    Slug,
    CreatedAt,
}

impl Entity for BlogCategory {
    type Field = BlogCategoryField;
    const NAME: &'static str = "blog_category";
    const ID: BlogCategoryField = BlogCategoryField::Id;

    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }

    fn value_of(&self, field: BlogCategoryField) -> Value {
        match field {
            BlogCategoryField::Id => self.id.into(),
            BlogCategoryField::Name => (&self.name).into(),
            BlogCategoryField::Slug => (&self.slug).into(),
            BlogCategoryField::CreatedAt => self.created_at.into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlogCategoryForm {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    DEFAULT_CATEGORY_COLOR.to_owned()
}

impl Default for BlogCategoryForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            slug: String::new(),
            description: None,
            color: default_color(),
        }
    }
}

impl BlogCategoryForm {
    pub fn validate(&self) -> Result<(), DomainError> {
        Validator::new()
            .required("Name", &self.name, 100)
            .slug("Slug", &self.slug, 150)
            .optional("Description", self.description.as_deref(), 500)
            .check(is_hex_color(&self.color), "Color must be a hex value like #3b82f6")
            .finish()
    }

    pub fn apply_to(&self, category: &mut BlogCategory) {
        category.name = self.name.trim().to_owned();
        category.slug = self.slug.trim().to_owned();
        category.description = self.description.clone();
        category.color = Some(self.color.clone());
    }

    pub fn to_category(&self, now: DateTime<Utc>) -> BlogCategory {
        let mut category = BlogCategory {
            created_at: now,
            ..BlogCategory::default()
        };
        self.apply_to(&mut category);
        category
    }
}

fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_defaults_when_omitted() {
        let form: BlogCategoryForm =
            serde_json::from_str(r#"{"name":"Design Tips","slug":"design-tips"}"#).unwrap();
        assert_eq!(form.color, DEFAULT_CATEGORY_COLOR);
        assert!(form.validate().is_ok());
    }

    #[test]
    fn rejects_bad_color() {
        let form = BlogCategoryForm {
            name: "SEO".into(),
            slug: "seo".into(),
            color: "blue".into(),
            ..BlogCategoryForm::default()
        };
        assert!(form.validate().is_err());
    }
}
