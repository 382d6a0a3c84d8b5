//! HTTP handlers and route configuration.

mod admin;
mod blog;
mod contact;
mod courses;
mod health;
mod portfolio;
mod sitemap;
mod uploads;

#[cfg(test)]
mod tests;

use actix_web::{HttpRequest, http::header, web};
use studio_core::DomainError;
use studio_core::domain::ClientInfo;
use studio_core::query::{Page, PageRequest};
use studio_shared::PagedResponse;
use studio_shared::dto::PageQuery;

use crate::middleware::error::AppResult;

pub use sitemap::SITEMAP_CACHE_KEY;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .route("/sitemap.xml", web::get().to(sitemap::sitemap_xml))
        .route("/uploads/{path:.*}", web::get().to(uploads::serve_upload))
        .service(
            web::scope("/api")
                .configure(admin::configure)
                .configure(blog::configure)
                .configure(courses::configure)
                .configure(portfolio::configure)
                .route("/contact", web::post().to(contact::submit)),
        );
}

fn page_request(query: &PageQuery) -> AppResult<PageRequest> {
    Ok(PageRequest::new(query.page(), query.page_size()).map_err(DomainError::from)?)
}

fn paged<T>(page: Page<T>) -> PagedResponse<T> {
    PagedResponse::new(page.items, page.total_count, page.page_number, page.page_size)
}

fn client_info(req: &HttpRequest) -> ClientInfo {
    ClientInfo {
        ip_address: req.connection_info().realip_remote_addr().map(str::to_owned),
        user_agent: req
            .headers()
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned),
    }
}
