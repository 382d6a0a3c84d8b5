//! Contact inbox.

use actix_web::{HttpResponse, web};
use serde::Serialize;
use studio_shared::ApiResponse;
use studio_shared::dto::{AdminNotesRequest, InboxQuery};

use super::{found, no_content};
use crate::handlers::{page_request, paged};
use crate::middleware::auth::Admin;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/contact", web::get().to(list_submissions))
        .route("/contact/unread-count", web::get().to(unread_count))
        .route("/contact/{id}", web::get().to(get_submission))
        .route("/contact/{id}", web::delete().to(delete_submission))
        .route("/contact/{id}/read", web::post().to(mark_read))
        .route("/contact/{id}/replied", web::post().to(mark_replied))
        .route("/contact/{id}/notes", web::put().to(update_notes));
}

#[derive(Serialize)]
pub struct UnreadCount {
    pub unread: u64,
}

/// GET /api/admin/contact?is_read=
pub async fn list_submissions(
    _admin: Admin,
    state: web::Data<AppState>,
    query: web::Query<InboxQuery>,
) -> AppResult<HttpResponse> {
    let page = state
        .contact
        .paged_submissions(page_request(&query.paging())?, query.is_read)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(paged(page))))
}

pub async fn unread_count(_admin: Admin, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let unread = state.contact.unread_count().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(UnreadCount { unread })))
}

/// Opening a submission marks it read.
pub async fn get_submission(
    _admin: Admin,
    state: web::Data<AppState>,
    id: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = id.into_inner();
    found(state.contact.mark_as_read(id).await?, "Submission", id)?;
    let submission = state
        .contact
        .submission_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Submission {id}")))?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(submission)))
}

pub async fn mark_read(
    _admin: Admin,
    state: web::Data<AppState>,
    id: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = id.into_inner();
    found(state.contact.mark_as_read(id).await?, "Submission", id)?;
    Ok(no_content())
}

pub async fn mark_replied(
    _admin: Admin,
    state: web::Data<AppState>,
    id: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = id.into_inner();
    found(state.contact.mark_as_replied(id).await?, "Submission", id)?;
    Ok(no_content())
}

pub async fn update_notes(
    _admin: Admin,
    state: web::Data<AppState>,
    id: web::Path<i32>,
    body: web::Json<AdminNotesRequest>,
) -> AppResult<HttpResponse> {
    let id = id.into_inner();
    let notes = body.into_inner().notes;
    found(
        state.contact.update_admin_notes(id, notes).await?,
        "Submission",
        id,
    )?;
    Ok(no_content())
}

pub async fn delete_submission(
    _admin: Admin,
    state: web::Data<AppState>,
    id: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = id.into_inner();
    found(state.contact.delete_submission(id).await?, "Submission", id)?;
    Ok(no_content())
}
