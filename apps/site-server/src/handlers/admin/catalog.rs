//! Portfolio and course administration.

use actix_web::{HttpResponse, web};
use studio_core::domain::{CourseForm, CourseLessonForm, PortfolioCategoryForm, PortfolioForm};
use studio_core::services::Visibility;
use studio_shared::ApiResponse;

use super::{content_changed, found, no_content};
use crate::middleware::auth::Admin;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/portfolios", web::get().to(list_portfolios))
        .route("/portfolios", web::post().to(create_portfolio))
        .route("/portfolios/{id}", web::get().to(get_portfolio))
        .route("/portfolios/{id}", web::put().to(update_portfolio))
        .route("/portfolios/{id}", web::delete().to(delete_portfolio))
        .route("/portfolio-categories", web::get().to(list_portfolio_categories))
        .route("/portfolio-categories", web::post().to(create_portfolio_category))
        .route("/portfolio-categories/{id}", web::put().to(update_portfolio_category))
        .route("/portfolio-categories/{id}", web::delete().to(delete_portfolio_category))
        .route("/courses", web::get().to(list_courses))
        .route("/courses", web::post().to(create_course))
        .route("/courses/{id}", web::get().to(get_course))
        .route("/courses/{id}", web::put().to(update_course))
        .route("/courses/{id}", web::delete().to(delete_course))
        .route("/courses/{id}/lessons", web::get().to(list_lessons))
        .route("/lessons", web::post().to(create_lesson))
        .route("/lessons/{id}", web::get().to(get_lesson))
        .route("/lessons/{id}", web::put().to(update_lesson))
        .route("/lessons/{id}", web::delete().to(delete_lesson));
}

// --- portfolios ---

pub async fn list_portfolios(_admin: Admin, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let items = state.portfolios.all_portfolios(Visibility::All).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(items)))
}

pub async fn get_portfolio(
    _admin: Admin,
    state: web::Data<AppState>,
    id: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = id.into_inner();
    let details = state
        .portfolios
        .portfolio_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Portfolio {id}")))?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(details)))
}

pub async fn create_portfolio(
    _admin: Admin,
    state: web::Data<AppState>,
    body: web::Json<PortfolioForm>,
) -> AppResult<HttpResponse> {
    let item = state.portfolios.create_portfolio(&body).await?;
    content_changed(&state).await;
    Ok(HttpResponse::Created().json(ApiResponse::ok(item)))
}

pub async fn update_portfolio(
    _admin: Admin,
    state: web::Data<AppState>,
    id: web::Path<i32>,
    body: web::Json<PortfolioForm>,
) -> AppResult<HttpResponse> {
    let item = state
        .portfolios
        .update_portfolio(id.into_inner(), &body)
        .await?;
    content_changed(&state).await;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(item)))
}

pub async fn delete_portfolio(
    _admin: Admin,
    state: web::Data<AppState>,
    id: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = id.into_inner();
    found(state.portfolios.delete_portfolio(id).await?, "Portfolio", id)?;
    content_changed(&state).await;
    Ok(no_content())
}

pub async fn list_portfolio_categories(
    _admin: Admin,
    state: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::ok(state.portfolios.all_categories().await?)))
}

pub async fn create_portfolio_category(
    _admin: Admin,
    state: web::Data<AppState>,
    body: web::Json<PortfolioCategoryForm>,
) -> AppResult<HttpResponse> {
    let category = state.portfolios.create_category(&body).await?;
    Ok(HttpResponse::Created().json(ApiResponse::ok(category)))
}

pub async fn update_portfolio_category(
    _admin: Admin,
    state: web::Data<AppState>,
    id: web::Path<i32>,
    body: web::Json<PortfolioCategoryForm>,
) -> AppResult<HttpResponse> {
    let category = state
        .portfolios
        .update_category(id.into_inner(), &body)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(category)))
}

pub async fn delete_portfolio_category(
    _admin: Admin,
    state: web::Data<AppState>,
    id: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = id.into_inner();
    found(
        state.portfolios.delete_category(id).await?,
        "Portfolio category",
        id,
    )?;
    Ok(no_content())
}

// --- courses ---

pub async fn list_courses(_admin: Admin, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        state.courses.all_courses(Visibility::All).await?,
    )))
}

/// The course plus its published lessons; see `list_lessons` for drafts.
pub async fn get_course(
    _admin: Admin,
    state: web::Data<AppState>,
    id: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = id.into_inner();
    let details = state
        .courses
        .course_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Course {id}")))?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(details)))
}

pub async fn create_course(
    _admin: Admin,
    state: web::Data<AppState>,
    body: web::Json<CourseForm>,
) -> AppResult<HttpResponse> {
    let course = state.courses.create_course(&body).await?;
    content_changed(&state).await;
    Ok(HttpResponse::Created().json(ApiResponse::ok(course)))
}

pub async fn update_course(
    _admin: Admin,
    state: web::Data<AppState>,
    id: web::Path<i32>,
    body: web::Json<CourseForm>,
) -> AppResult<HttpResponse> {
    let course = state.courses.update_course(id.into_inner(), &body).await?;
    content_changed(&state).await;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(course)))
}

/// Lessons are deleted with the course.
pub async fn delete_course(
    _admin: Admin,
    state: web::Data<AppState>,
    id: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = id.into_inner();
    found(state.courses.delete_course(id).await?, "Course", id)?;
    content_changed(&state).await;
    Ok(no_content())
}

pub async fn list_lessons(
    _admin: Admin,
    state: web::Data<AppState>,
    id: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let lessons = state
        .courses
        .course_lessons(id.into_inner(), Visibility::All)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(lessons)))
}

pub async fn get_lesson(
    _admin: Admin,
    state: web::Data<AppState>,
    id: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = id.into_inner();
    let lesson = state
        .courses
        .lesson_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Lesson {id}")))?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(lesson)))
}

pub async fn create_lesson(
    _admin: Admin,
    state: web::Data<AppState>,
    body: web::Json<CourseLessonForm>,
) -> AppResult<HttpResponse> {
    let lesson = state.courses.create_lesson(&body).await?;
    Ok(HttpResponse::Created().json(ApiResponse::ok(lesson)))
}

pub async fn update_lesson(
    _admin: Admin,
    state: web::Data<AppState>,
    id: web::Path<i32>,
    body: web::Json<CourseLessonForm>,
) -> AppResult<HttpResponse> {
    let lesson = state.courses.update_lesson(id.into_inner(), &body).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(lesson)))
}

pub async fn delete_lesson(
    _admin: Admin,
    state: web::Data<AppState>,
    id: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = id.into_inner();
    found(state.courses.delete_lesson(id).await?, "Lesson", id)?;
    Ok(no_content())
}
