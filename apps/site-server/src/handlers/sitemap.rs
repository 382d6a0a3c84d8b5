use actix_web::{HttpResponse, web};
use studio_infra::render_sitemap;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

pub const SITEMAP_CACHE_KEY: &str = "sitemap.xml";

/// GET /sitemap.xml, served from the output cache while fresh.
pub async fn sitemap_xml(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    if let Some(xml) = state.cache.get(SITEMAP_CACHE_KEY).await {
        return Ok(xml_response(xml));
    }

    let urls = state.sitemap.urls().await?;
    let xml = render_sitemap(&urls).map_err(|e| AppError::Internal(e.to_string()))?;

    if let Err(e) = state
        .cache
        .set(SITEMAP_CACHE_KEY, &xml, Some(state.sitemap_ttl))
        .await
    {
        tracing::warn!(error = %e, "Failed to cache sitemap");
    }
    tracing::info!(urls = urls.len(), "Sitemap generated");
    Ok(xml_response(xml))
}

fn xml_response(xml: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/xml; charset=utf-8")
        .body(xml)
}
