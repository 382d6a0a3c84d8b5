use actix_web::{HttpResponse, web};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Uploaded files never run script when opened directly; SVG can carry it.
const UPLOAD_CSP: &str = "default-src 'none'; style-src 'unsafe-inline'; sandbox";

/// GET /uploads/{path}, read back from the file store.
pub async fn serve_upload(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let public_path = format!("/uploads/{path}");
    let bytes = state
        .files
        .read_file(&public_path)
        .await?
        .ok_or_else(|| AppError::not_found(public_path.clone()))?;

    Ok(HttpResponse::Ok()
        .content_type(content_type(&public_path))
        .insert_header(("Cache-Control", "public, max-age=604800"))
        .insert_header(("Content-Security-Policy", UPLOAD_CSP))
        .body(bytes))
}

fn content_type(path: &str) -> &'static str {
    let extension = path.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
