use sea_orm::Set;
use sea_orm::entity::prelude::*;

use studio_core::domain::{PortfolioCategory, PortfolioCategoryField};

use crate::database::mapping::{MappedEntity, identity};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "portfolio_categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::portfolio::Entity")]
    Portfolios,
}

impl Related<super::portfolio::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Portfolios.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl MappedEntity for Entity {
    type Domain = PortfolioCategory;

    fn column(field: PortfolioCategoryField) -> Column {
        match field {
            PortfolioCategoryField::Id => Column::Id,
            PortfolioCategoryField::Name => Column::Name,
            PortfolioCategoryField::Slug => Column::Slug,
        }
    }
}

impl From<Model> for PortfolioCategory {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            slug: model.slug,
            description: model.description,
            icon: model.icon,
            created_at: model.created_at.into(),
        }
    }
}

impl From<PortfolioCategory> for ActiveModel {
    fn from(category: PortfolioCategory) -> Self {
        Self {
            id: identity(category.id),
            name: Set(category.name),
            slug: Set(category.slug),
            description: Set(category.description),
            icon: Set(category.icon),
            created_at: Set(category.created_at.into()),
        }
    }
}
