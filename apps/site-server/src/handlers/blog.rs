//! Public blog endpoints.

use actix_web::{HttpResponse, web};
use serde::Deserialize;
use studio_core::domain::BlogCommentForm;
use studio_core::services::{PostDetails, Visibility};
use studio_shared::ApiResponse;
use studio_shared::dto::{PostListQuery, SearchQuery};

use super::{page_request, paged};
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const DEFAULT_RECENT: u64 = 5;
const MAX_RECENT: u64 = 20;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/posts")
            .route("", web::get().to(list_posts))
            .route("/search", web::get().to(search_posts))
            .route("/recent", web::get().to(recent_posts))
            .route("/featured", web::get().to(featured_posts))
            .route("/{slug}", web::get().to(get_post))
            .route("/{slug}/comments", web::get().to(list_comments))
            .route("/{slug}/comments", web::post().to(add_comment)),
    )
    .route("/categories", web::get().to(list_categories))
    .route("/tags", web::get().to(list_tags))
    .route("/tags/{slug}/posts", web::get().to(posts_by_tag));
}

#[derive(Debug, Deserialize)]
pub struct RecentQuery {
    pub count: Option<u64>,
}

async fn published_post(state: &AppState, slug: &str) -> AppResult<PostDetails> {
    state
        .blog
        .post_by_slug(slug)
        .await?
        .filter(|details| details.post.is_published)
        .ok_or_else(|| AppError::not_found(format!("Post '{slug}'")))
}

/// GET /api/posts?page=&page_size=&category=
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<PostListQuery>,
) -> AppResult<HttpResponse> {
    let category_id = match query.category.as_deref() {
        Some(slug) => Some(
            state
                .blog
                .category_by_slug(slug)
                .await?
                .ok_or_else(|| AppError::not_found(format!("Category '{slug}'")))?
                .id,
        ),
        None => None,
    };

    let page = state
        .blog
        .paged_posts(
            page_request(&query.paging())?,
            category_id,
            Visibility::PublishedOnly,
        )
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(paged(page))))
}

/// GET /api/posts/search?q=
pub async fn search_posts(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> AppResult<HttpResponse> {
    let page = state
        .blog
        .search_posts(
            &query.q,
            page_request(&query.paging())?,
            Visibility::PublishedOnly,
        )
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(paged(page))))
}

pub async fn recent_posts(
    state: web::Data<AppState>,
    query: web::Query<RecentQuery>,
) -> AppResult<HttpResponse> {
    let count = query.count.unwrap_or(DEFAULT_RECENT).clamp(1, MAX_RECENT);
    let posts = state
        .blog
        .recent_posts(count, Visibility::PublishedOnly)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(posts)))
}

pub async fn featured_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.blog.featured_posts(Visibility::PublishedOnly).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(posts)))
}

/// GET /api/posts/{slug}
///
/// Counts a view on every successful read.
pub async fn get_post(
    state: web::Data<AppState>,
    slug: web::Path<String>,
) -> AppResult<HttpResponse> {
    let details = published_post(&state, &slug).await?;
    state.blog.increment_view_count(details.post.id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(details)))
}

pub async fn list_comments(
    state: web::Data<AppState>,
    slug: web::Path<String>,
) -> AppResult<HttpResponse> {
    let details = published_post(&state, &slug).await?;
    let threads = state.blog.post_comments(details.post.id, true).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(threads)))
}

/// POST /api/posts/{slug}/comments
pub async fn add_comment(
    state: web::Data<AppState>,
    slug: web::Path<String>,
    body: web::Json<BlogCommentForm>,
) -> AppResult<HttpResponse> {
    let details = published_post(&state, &slug).await?;
    let mut form = body.into_inner();
    form.post_id = details.post.id;

    let comment = state.blog.add_comment(&form).await?;
    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        comment,
        "Thank you! Your comment will appear once it has been approved.",
    )))
}

pub async fn list_categories(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::ok(state.blog.all_categories().await?)))
}

pub async fn list_tags(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::ok(state.blog.all_tags().await?)))
}

pub async fn posts_by_tag(
    state: web::Data<AppState>,
    slug: web::Path<String>,
) -> AppResult<HttpResponse> {
    let tag = state
        .blog
        .tag_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Tag '{slug}'")))?;
    let posts = state
        .blog
        .posts_by_tag(&tag.slug, Visibility::PublishedOnly)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(posts)))
}
