use sea_orm::Set;
use sea_orm::entity::prelude::*;

use studio_core::domain::{Portfolio, PortfolioField};

use crate::database::mapping::{MappedEntity, identity};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "portfolios")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub description: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub full_description: Option<String>,
    pub featured_image: String,
    pub client_name: Option<String>,
    pub client_website: Option<String>,
    pub project_url: Option<String>,
    pub completed_date: Option<DateTimeWithTimeZone>,
    pub technologies: Option<String>,
    pub is_published: bool,
    pub is_featured: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: Option<DateTimeWithTimeZone>,
    pub view_count: i32,
    pub category_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::portfolio_category::Entity",
        from = "Column::CategoryId",
        to = "super::portfolio_category::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Category,
}

impl Related<super::portfolio_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl MappedEntity for Entity {
    type Domain = Portfolio;

    fn column(field: PortfolioField) -> Column {
        match field {
            PortfolioField::Id => Column::Id,
            PortfolioField::Title => Column::Title,
            PortfolioField::Slug => Column::Slug,
            PortfolioField::IsPublished => Column::IsPublished,
            PortfolioField::IsFeatured => Column::IsFeatured,
            PortfolioField::CreatedAt => Column::CreatedAt,
            PortfolioField::UpdatedAt => Column::UpdatedAt,
            PortfolioField::CompletedDate => Column::CompletedDate,
            PortfolioField::ViewCount => Column::ViewCount,
            PortfolioField::CategoryId => Column::CategoryId,
        }
    }
}

impl From<Model> for Portfolio {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            slug: model.slug,
            description: model.description,
            full_description: model.full_description,
            featured_image: model.featured_image,
            client_name: model.client_name,
            client_website: model.client_website,
            project_url: model.project_url,
            completed_date: model.completed_date.map(Into::into),
            technologies: model.technologies,
            is_published: model.is_published,
            is_featured: model.is_featured,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.map(Into::into),
            view_count: model.view_count,
            category_id: model.category_id,
        }
    }
}

impl From<Portfolio> for ActiveModel {
    fn from(portfolio: Portfolio) -> Self {
        Self {
            id: identity(portfolio.id),
            title: Set(portfolio.title),
            slug: Set(portfolio.slug),
            description: Set(portfolio.description),
            full_description: Set(portfolio.full_description),
            featured_image: Set(portfolio.featured_image),
            client_name: Set(portfolio.client_name),
            client_website: Set(portfolio.client_website),
            project_url: Set(portfolio.project_url),
            completed_date: Set(portfolio.completed_date.map(Into::into)),
            technologies: Set(portfolio.technologies),
            is_published: Set(portfolio.is_published),
            is_featured: Set(portfolio.is_featured),
            created_at: Set(portfolio.created_at.into()),
            updated_at: Set(portfolio.updated_at.map(Into::into)),
            view_count: Set(portfolio.view_count),
            category_id: Set(portfolio.category_id),
        }
    }
}
