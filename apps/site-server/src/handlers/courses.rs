//! Public course catalog.

use actix_web::{HttpResponse, web};
use studio_core::services::{CourseDetails, Visibility};
use studio_shared::ApiResponse;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/courses")
            .route("", web::get().to(list_courses))
            .route("/featured", web::get().to(featured_courses))
            .route("/{slug}", web::get().to(get_course))
            .route("/{slug}/lessons/{lesson}", web::get().to(get_lesson)),
    );
}

async fn published_course(state: &AppState, slug: &str) -> AppResult<CourseDetails> {
    state
        .courses
        .course_by_slug(slug)
        .await?
        .filter(|details| details.course.is_published)
        .ok_or_else(|| AppError::not_found(format!("Course '{slug}'")))
}

pub async fn list_courses(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let courses = state.courses.all_courses(Visibility::PublishedOnly).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(courses)))
}

pub async fn featured_courses(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::ok(state.courses.featured_courses().await?)))
}

/// GET /api/courses/{slug} with its published lessons.
pub async fn get_course(
    state: web::Data<AppState>,
    slug: web::Path<String>,
) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::ok(published_course(&state, &slug).await?)))
}

pub async fn get_lesson(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> AppResult<HttpResponse> {
    let (course_slug, lesson_slug) = path.into_inner();
    let course = published_course(&state, &course_slug).await?;
    let lesson = state
        .courses
        .lesson_by_slug(course.course.id, &lesson_slug)
        .await?
        .filter(|lesson| lesson.is_published)
        .ok_or_else(|| AppError::not_found(format!("Lesson '{lesson_slug}'")))?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(lesson)))
}
