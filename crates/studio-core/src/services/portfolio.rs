use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;

use super::{Visibility, require_slug};
use crate::domain::{
    Portfolio, PortfolioCategory, PortfolioCategoryField, PortfolioCategoryForm, PortfolioField,
    PortfolioForm,
};
use crate::error::DomainError;
use crate::ports::Repository;
use crate::query::{Entity, Filter, OrderBy};

const FEATURED_PORTFOLIO_LIMIT: u64 = 6;

#[derive(Debug, Clone, Serialize)]
pub struct PortfolioDetails {
    #[serde(flatten)]
    pub portfolio: Portfolio,
    pub category: Option<PortfolioCategory>,
}

#[derive(Clone)]
pub struct PortfolioService {
    portfolios: Arc<dyn Repository<Portfolio>>,
    categories: Arc<dyn Repository<PortfolioCategory>>,
}

impl PortfolioService {
    pub fn new(
        portfolios: Arc<dyn Repository<Portfolio>>,
        categories: Arc<dyn Repository<PortfolioCategory>>,
    ) -> Self {
        Self {
            portfolios,
            categories,
        }
    }

    fn visibility(scope: Visibility) -> Option<Filter<PortfolioField>> {
        scope
            .published_only()
            .then(|| Filter::eq(PortfolioField::IsPublished, true))
    }

    fn newest_first() -> OrderBy<PortfolioField> {
        OrderBy::desc(PortfolioField::CreatedAt)
    }

    pub async fn portfolio_by_id(&self, id: i32) -> Result<Option<PortfolioDetails>, DomainError> {
        match self.portfolios.get_by_id(id).await? {
            Some(portfolio) => Ok(Some(self.with_category(portfolio).await?)),
            None => Ok(None),
        }
    }

    pub async fn portfolio_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<PortfolioDetails>, DomainError> {
        let slug = require_slug(slug)?;
        match self
            .portfolios
            .first_or_default(Filter::eq(PortfolioField::Slug, slug))
            .await?
        {
            Some(portfolio) => Ok(Some(self.with_category(portfolio).await?)),
            None => Ok(None),
        }
    }

    pub async fn all_portfolios(&self, scope: Visibility) -> Result<Vec<Portfolio>, DomainError> {
        Ok(self
            .portfolios
            .list(Self::visibility(scope), Self::newest_first(), None)
            .await?)
    }

    pub async fn featured_portfolios(&self) -> Result<Vec<Portfolio>, DomainError> {
        let filter = Filter::eq(PortfolioField::IsPublished, true)
            .and(Filter::eq(PortfolioField::IsFeatured, true));
        Ok(self
            .portfolios
            .list(
                Some(filter),
                Self::newest_first(),
                Some(FEATURED_PORTFOLIO_LIMIT),
            )
            .await?)
    }

    pub async fn portfolios_by_category(
        &self,
        category_id: i32,
        scope: Visibility,
    ) -> Result<Vec<Portfolio>, DomainError> {
        let filter = Filter::all_of([
            Some(Filter::eq(PortfolioField::CategoryId, category_id)),
            Self::visibility(scope),
        ]);
        Ok(self
            .portfolios
            .list(filter, Self::newest_first(), None)
            .await?)
    }

    pub async fn portfolio_count(&self, scope: Visibility) -> Result<u64, DomainError> {
        Ok(self.portfolios.count(Self::visibility(scope)).await?)
    }

    pub async fn create_portfolio(&self, form: &PortfolioForm) -> Result<Portfolio, DomainError> {
        form.validate()?;
        self.ensure_category(form.category_id).await?;

        let portfolio = self.portfolios.add(form.to_portfolio(Utc::now())).await?;
        tracing::info!(portfolio_id = portfolio.id, slug = %portfolio.slug, "Portfolio created");
        Ok(portfolio)
    }

    pub async fn update_portfolio(
        &self,
        id: i32,
        form: &PortfolioForm,
    ) -> Result<Portfolio, DomainError> {
        form.validate()?;
        let mut portfolio = self
            .portfolios
            .get_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(Portfolio::NAME, id))?;
        self.ensure_category(form.category_id).await?;

        form.apply_to(&mut portfolio);
        portfolio.updated_at = Some(Utc::now());
        Ok(self.portfolios.update(portfolio).await?)
    }

    pub async fn delete_portfolio(&self, id: i32) -> Result<bool, DomainError> {
        let Some(portfolio) = self.portfolios.get_by_id(id).await? else {
            return Ok(false);
        };
        self.portfolios.delete(portfolio).await?;
        tracing::info!(portfolio_id = id, "Portfolio deleted");
        Ok(true)
    }

    pub async fn increment_view_count(&self, id: i32) -> Result<bool, DomainError> {
        let Some(mut portfolio) = self.portfolios.get_by_id(id).await? else {
            return Ok(false);
        };
        portfolio.view_count = portfolio.view_count.saturating_add(1);
        self.portfolios.update(portfolio).await?;
        Ok(true)
    }

    // --- categories ---

    pub async fn all_categories(&self) -> Result<Vec<PortfolioCategory>, DomainError> {
        Ok(self.categories.get_all().await?)
    }

    pub async fn category_by_id(&self, id: i32) -> Result<Option<PortfolioCategory>, DomainError> {
        Ok(self.categories.get_by_id(id).await?)
    }

    pub async fn category_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<PortfolioCategory>, DomainError> {
        let slug = require_slug(slug)?;
        Ok(self
            .categories
            .first_or_default(Filter::eq(PortfolioCategoryField::Slug, slug))
            .await?)
    }

    pub async fn create_category(
        &self,
        form: &PortfolioCategoryForm,
    ) -> Result<PortfolioCategory, DomainError> {
        form.validate()?;
        let category = self.categories.add(form.to_category(Utc::now())).await?;
        tracing::info!(category_id = category.id, "Portfolio category created");
        Ok(category)
    }

    pub async fn update_category(
        &self,
        id: i32,
        form: &PortfolioCategoryForm,
    ) -> Result<PortfolioCategory, DomainError> {
        form.validate()?;
        let mut category = self
            .categories
            .get_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(PortfolioCategory::NAME, id))?;
        form.apply_to(&mut category);
        Ok(self.categories.update(category).await?)
    }

    /// Deletes the category; its projects become uncategorised.
    pub async fn delete_category(&self, id: i32) -> Result<bool, DomainError> {
        let Some(category) = self.categories.get_by_id(id).await? else {
            return Ok(false);
        };

        let portfolios = self
            .portfolios
            .list(
                Some(Filter::eq(PortfolioField::CategoryId, id)),
                OrderBy::asc(PortfolioField::Id),
                None,
            )
            .await?;
        for mut portfolio in portfolios {
            portfolio.category_id = None;
            self.portfolios.update(portfolio).await?;
        }

        self.categories.delete(category).await?;
        tracing::info!(category_id = id, "Portfolio category deleted");
        Ok(true)
    }

    async fn with_category(&self, portfolio: Portfolio) -> Result<PortfolioDetails, DomainError> {
        let category = match portfolio.category_id {
            Some(id) => self.categories.get_by_id(id).await?,
            None => None,
        };
        Ok(PortfolioDetails {
            portfolio,
            category,
        })
    }

    async fn ensure_category(&self, category_id: Option<i32>) -> Result<(), DomainError> {
        if let Some(id) = category_id {
            if self.categories.get_by_id(id).await?.is_none() {
                return Err(DomainError::invalid("Category does not exist"));
            }
        }
        Ok(())
    }
}
