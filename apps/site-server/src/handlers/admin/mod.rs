//! Admin JSON API. Every handler takes the [`Admin`] guard.

mod blog;
mod catalog;
mod inbox;
mod uploads;

use actix_web::{HttpResponse, web};
use studio_shared::ApiResponse;

use super::SITEMAP_CACHE_KEY;
use crate::middleware::auth::Admin;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .route("/dashboard", web::get().to(dashboard))
            .configure(blog::configure)
            .configure(catalog::configure)
            .configure(inbox::configure)
            .configure(uploads::configure),
    );
}

/// GET /api/admin/dashboard
pub async fn dashboard(_admin: Admin, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::ok(state.dashboard.summary().await?)))
}

/// Drops the cached sitemap after public content changed.
async fn content_changed(state: &AppState) {
    if let Err(e) = state.cache.invalidate(SITEMAP_CACHE_KEY).await {
        tracing::warn!(error = %e, "Failed to invalidate sitemap cache");
    }
}

/// Maps the `false` of a delete or state change on a missing row to 404.
fn found(done: bool, what: &str, id: i32) -> AppResult<()> {
    if done {
        Ok(())
    } else {
        Err(AppError::not_found(format!("{what} {id}")))
    }
}

fn no_content() -> HttpResponse {
    HttpResponse::NoContent().finish()
}
