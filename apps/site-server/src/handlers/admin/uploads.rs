//! Media uploads. The file is the raw request body; name and folder come
//! from the query string.

use actix_web::{HttpResponse, web};
use serde::Deserialize;
use studio_shared::ApiResponse;
use studio_shared::dto::{UploadQuery, UploadResponse};

use super::no_content;
use crate::middleware::auth::Admin;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/uploads", web::post().to(upload_image))
        .route("/uploads", web::get().to(upload_info))
        .route("/uploads", web::delete().to(delete_upload));
}

#[derive(Debug, Deserialize)]
pub struct UploadPathQuery {
    pub path: String,
}

/// POST /api/admin/uploads?file_name=logo.png&folder=images
pub async fn upload_image(
    _admin: Admin,
    state: web::Data<AppState>,
    query: web::Query<UploadQuery>,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    if body.is_empty() {
        return Err(AppError::BadRequest("No file uploaded".to_string()));
    }
    let path = state
        .files
        .upload_image(&body, &query.file_name, &query.folder)
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::ok(UploadResponse {
        path,
        size: body.len() as u64,
    })))
}

/// GET /api/admin/uploads?path=/uploads/images/...
pub async fn upload_info(
    _admin: Admin,
    state: web::Data<AppState>,
    query: web::Query<UploadPathQuery>,
) -> AppResult<HttpResponse> {
    if !state.files.file_exists(&query.path).await {
        return Err(AppError::not_found(query.path.clone()));
    }
    let size = state.files.file_size(&query.path).await;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(UploadResponse {
        path: query.path.clone(),
        size,
    })))
}

/// DELETE /api/admin/uploads?path=/uploads/images/...
pub async fn delete_upload(
    _admin: Admin,
    state: web::Data<AppState>,
    query: web::Query<UploadPathQuery>,
) -> AppResult<HttpResponse> {
    if state.files.delete_file(&query.path).await? {
        Ok(no_content())
    } else {
        Err(AppError::not_found(query.path.clone()))
    }
}
