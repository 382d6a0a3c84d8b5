//! Public portfolio showcase.

use actix_web::{HttpResponse, web};
use studio_core::services::Visibility;
use studio_shared::ApiResponse;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/portfolio")
            .route("", web::get().to(list_portfolios))
            .route("/featured", web::get().to(featured_portfolios))
            .route("/categories", web::get().to(list_categories))
            .route("/categories/{slug}", web::get().to(portfolios_in_category))
            .route("/{slug}", web::get().to(get_portfolio)),
    );
}

pub async fn list_portfolios(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let items = state
        .portfolios
        .all_portfolios(Visibility::PublishedOnly)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(items)))
}

pub async fn featured_portfolios(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let items = state.portfolios.featured_portfolios().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(items)))
}

pub async fn list_categories(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::ok(state.portfolios.all_categories().await?)))
}

pub async fn portfolios_in_category(
    state: web::Data<AppState>,
    slug: web::Path<String>,
) -> AppResult<HttpResponse> {
    let category = state
        .portfolios
        .category_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Portfolio category '{slug}'")))?;
    let items = state
        .portfolios
        .portfolios_by_category(category.id, Visibility::PublishedOnly)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(items)))
}

/// GET /api/portfolio/{slug}; counts a view.
pub async fn get_portfolio(
    state: web::Data<AppState>,
    slug: web::Path<String>,
) -> AppResult<HttpResponse> {
    let details = state
        .portfolios
        .portfolio_by_slug(&slug)
        .await?
        .filter(|details| details.portfolio.is_published)
        .ok_or_else(|| AppError::not_found(format!("Portfolio '{slug}'")))?;
    state
        .portfolios
        .increment_view_count(details.portfolio.id)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(details)))
}
