use actix_web::{HttpResponse, web};
use studio_core::domain::{BlogCategoryForm, BlogPostForm, BlogTagForm};
use studio_core::services::Visibility;
use studio_shared::ApiResponse;
use studio_shared::dto::{CommentQuery, PageQuery};

use super::{content_changed, found, no_content};
use crate::handlers::{page_request, paged};
use crate::middleware::auth::Admin;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/posts", web::get().to(list_posts))
        .route("/posts", web::post().to(create_post))
        .route("/posts/{id}", web::get().to(get_post))
        .route("/posts/{id}", web::put().to(update_post))
        .route("/posts/{id}", web::delete().to(delete_post))
        .route("/categories", web::post().to(create_category))
        .route("/categories/{id}", web::get().to(get_category))
        .route("/categories/{id}", web::put().to(update_category))
        .route("/categories/{id}", web::delete().to(delete_category))
        .route("/tags", web::get().to(list_tags))
        .route("/tags", web::post().to(create_tag))
        .route("/comments", web::get().to(list_comments))
        .route("/comments/pending", web::get().to(pending_comments))
        .route("/comments/{id}/approve", web::post().to(approve_comment))
        .route("/comments/{id}", web::delete().to(delete_comment));
}

/// Drafts included, newest first.
pub async fn list_posts(
    _admin: Admin,
    state: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let page = state
        .blog
        .paged_posts(page_request(&query)?, None, Visibility::All)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(paged(page))))
}

pub async fn get_post(
    _admin: Admin,
    state: web::Data<AppState>,
    id: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = id.into_inner();
    let details = state
        .blog
        .post_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Post {id}")))?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(details)))
}

pub async fn create_post(
    _admin: Admin,
    state: web::Data<AppState>,
    body: web::Json<BlogPostForm>,
) -> AppResult<HttpResponse> {
    let post = state.blog.create_post(&body).await?;
    content_changed(&state).await;
    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(post, "Post created")))
}

pub async fn update_post(
    _admin: Admin,
    state: web::Data<AppState>,
    id: web::Path<i32>,
    body: web::Json<BlogPostForm>,
) -> AppResult<HttpResponse> {
    let post = state.blog.update_post(id.into_inner(), &body).await?;
    content_changed(&state).await;
    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(post, "Post updated")))
}

pub async fn delete_post(
    _admin: Admin,
    state: web::Data<AppState>,
    id: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = id.into_inner();
    found(state.blog.delete_post(id).await?, "Post", id)?;
    content_changed(&state).await;
    Ok(no_content())
}

pub async fn get_category(
    _admin: Admin,
    state: web::Data<AppState>,
    id: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = id.into_inner();
    let category = state
        .blog
        .category_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Category {id}")))?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(category)))
}

pub async fn create_category(
    _admin: Admin,
    state: web::Data<AppState>,
    body: web::Json<BlogCategoryForm>,
) -> AppResult<HttpResponse> {
    let category = state.blog.create_category(&body).await?;
    content_changed(&state).await;
    Ok(HttpResponse::Created().json(ApiResponse::ok(category)))
}

pub async fn update_category(
    _admin: Admin,
    state: web::Data<AppState>,
    id: web::Path<i32>,
    body: web::Json<BlogCategoryForm>,
) -> AppResult<HttpResponse> {
    let category = state.blog.update_category(id.into_inner(), &body).await?;
    content_changed(&state).await;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(category)))
}

/// Posts in the category become uncategorised.
pub async fn delete_category(
    _admin: Admin,
    state: web::Data<AppState>,
    id: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = id.into_inner();
    found(state.blog.delete_category(id).await?, "Category", id)?;
    content_changed(&state).await;
    Ok(no_content())
}

pub async fn list_tags(_admin: Admin, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::ok(state.blog.all_tags().await?)))
}

pub async fn create_tag(
    _admin: Admin,
    state: web::Data<AppState>,
    body: web::Json<BlogTagForm>,
) -> AppResult<HttpResponse> {
    let tag = state.blog.create_tag(&body).await?;
    Ok(HttpResponse::Created().json(ApiResponse::ok(tag)))
}

pub async fn list_comments(
    _admin: Admin,
    state: web::Data<AppState>,
    query: web::Query<CommentQuery>,
) -> AppResult<HttpResponse> {
    let comments = state.blog.all_comments(query.approved_only).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(comments)))
}

pub async fn pending_comments(
    _admin: Admin,
    state: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::ok(state.blog.pending_comments().await?)))
}

pub async fn approve_comment(
    _admin: Admin,
    state: web::Data<AppState>,
    id: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = id.into_inner();
    found(state.blog.approve_comment(id).await?, "Comment", id)?;
    Ok(no_content())
}

/// Replies go with their parent.
pub async fn delete_comment(
    _admin: Admin,
    state: web::Data<AppState>,
    id: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = id.into_inner();
    found(state.blog.delete_comment(id).await?, "Comment", id)?;
    Ok(no_content())
}
