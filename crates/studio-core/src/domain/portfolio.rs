use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::Validator;
use crate::error::DomainError;
use crate::query::{Entity, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub full_description: Option<String>,
    pub featured_image: String,
    pub client_name: Option<String>,
    pub client_website: Option<String>,
    pub project_url: Option<String>,
    pub completed_date: Option<DateTime<Utc>>,
    pub technologies: Option<String>,
    pub is_published: bool,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub view_count: i32,
    pub category_id: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortfolioField {
    Id,
    Title,
    Slug,
    IsPublished,
    IsFeatured,
    CreatedAt,
    UpdatedAt,
    CompletedDate,
    ViewCount,
    CategoryId,
}

impl Entity for Portfolio {
    type Field = PortfolioField;
    const NAME: &'static str = "portfolio";
    const ID: PortfolioField = PortfolioField::Id;

    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }

    fn value_of(&self, field: PortfolioField) -> Value {
        match field {
            PortfolioField::Id => self.id.into(),
            PortfolioField::Title => (&self.title).into(),
            PortfolioField::Slug => (&self.slug).into(),
            PortfolioField::IsPublished => self.is_published.into(),
            PortfolioField::IsFeatured => self.is_featured.into(),
            PortfolioField::CreatedAt => self.created_at.into(),
            PortfolioField::UpdatedAt => self.updated_at.into(),
            PortfolioField::CompletedDate => self.completed_date.into(),
            PortfolioField::ViewCount => self.view_count.into(),
            PortfolioField::CategoryId => self.category_id.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PortfolioForm {
    pub title: String,
    pub slug: String,
    pub description: String,
    #[serde(default)]
    pub full_description: Option<String>,
    pub featured_image: String,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub client_website: Option<String>,
    #[serde(default)]
    pub project_url: Option<String>,
    #[serde(default)]
    pub completed_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub technologies: Option<String>,
    #[serde(default)]
    pub category_id: Option<i32>,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub is_featured: bool,
}

impl PortfolioForm {
    pub fn validate(&self) -> Result<(), DomainError> {
        Validator::new()
            .required("Title", &self.title, 200)
            .slug("Slug", &self.slug, 250)
            .required("Description", &self.description, 500)
            .required("Featured image", &self.featured_image, 500)
            .optional("Client name", self.client_name.as_deref(), 500)
            .optional("Client website", self.client_website.as_deref(), 500)
            .optional("Project URL", self.project_url.as_deref(), 500)
            .optional("Technologies", self.technologies.as_deref(), 1000)
            .finish()
    }

    pub fn apply_to(&self, portfolio: &mut Portfolio) {
        portfolio.title = self.title.trim().to_owned();
        portfolio.slug = self.slug.trim().to_owned();
        portfolio.description = self.description.clone();
        portfolio.full_description = self.full_description.clone();
        portfolio.featured_image = self.featured_image.clone();
        portfolio.client_name = self.client_name.clone();
        portfolio.client_website = self.client_website.clone();
        portfolio.project_url = self.project_url.clone();
        portfolio.completed_date = self.completed_date;
        portfolio.technologies = self.technologies.clone();
        portfolio.category_id = self.category_id;
        portfolio.is_published = self.is_published;
        portfolio.is_featured = self.is_featured;
    }

    pub fn to_portfolio(&self, now: DateTime<Utc>) -> Portfolio {
        let mut portfolio = Portfolio {
            created_at: now,
            ..Portfolio::default()
        };
        self.apply_to(&mut portfolio);
        portfolio
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioCategory {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortfolioCategoryField {
    Id,
    Name,
    Slug,
}

impl Entity for PortfolioCategory {
    type Field = PortfolioCategoryField;
    const NAME: &'static str = "portfolio_category";
    const ID: PortfolioCategoryField = PortfolioCategoryField::Id;

    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }

    fn value_of(&self, field: PortfolioCategoryField) -> Value {
        match field {
            PortfolioCategoryField::Id => self.id.into(),
            PortfolioCategoryField::Name => (&self.name).into(),
            PortfolioCategoryField::Slug => (&self.slug).into(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PortfolioCategoryForm {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

impl PortfolioCategoryForm {
    pub fn validate(&self) -> Result<(), DomainError> {
        Validator::new()
            .required("Name", &self.name, 100)
            .slug("Slug", &self.slug, 150)
            .optional("Description", self.description.as_deref(), 500)
            .optional("Icon", self.icon.as_deref(), 100)
            .finish()
    }

    pub fn apply_to(&self, category: &mut PortfolioCategory) {
        category.name = self.name.trim().to_owned();
        category.slug = self.slug.trim().to_owned();
        category.description = self.description.clone();
        category.icon = self.icon.clone();
    }

    pub fn to_category(&self, now: DateTime<Utc>) -> PortfolioCategory {
        let mut category = PortfolioCategory {
            created_at: now,
            ..PortfolioCategory::default()
        };
        self.apply_to(&mut category);
        category
    }
}
