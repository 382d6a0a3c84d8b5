mod common;

use common::{course_form, hours_ago, portfolio_form, services};
use studio_core::DomainError;
use studio_core::domain::{CourseLessonForm, PortfolioCategoryForm};
use studio_core::services::Visibility;

fn lesson_form(course_id: i32, slug: &str, order_index: i32, published: bool) -> CourseLessonForm {
    CourseLessonForm {
        course_id,
        title: format!("Lesson {slug}"),
        slug: slug.to_string(),
        order_index,
        is_published: published,
        ..Default::default()
    }
}

#[tokio::test]
async fn course_details_list_published_lessons_in_order() {
    let s = services();
    let course = s.courses.create_course(&course_form("web-basics", true)).await.unwrap();
    assert_eq!(course.currency, "GHS");
    assert!(course.published_at.is_some());

    s.courses
        .create_lesson(&lesson_form(course.id, "third", 3, true))
        .await
        .unwrap();
    s.courses
        .create_lesson(&lesson_form(course.id, "first", 1, true))
        .await
        .unwrap();
    s.courses
        .create_lesson(&lesson_form(course.id, "draft", 2, false))
        .await
        .unwrap();

    let details = s.courses.course_by_slug("web-basics").await.unwrap().unwrap();
    let slugs: Vec<_> = details.lessons.iter().map(|l| l.slug.as_str()).collect();
    assert_eq!(slugs, ["first", "third"]);

    let all = s.courses.course_lessons(course.id, Visibility::All).await.unwrap();
    assert_eq!(all.len(), 3);
    assert!(s
        .courses
        .lesson_by_slug(course.id, "draft")
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn lesson_slugs_are_unique_per_course() {
    let s = services();
    let a = s.courses.create_course(&course_form("a", true)).await.unwrap();
    let b = s.courses.create_course(&course_form("b", true)).await.unwrap();

    s.courses.create_lesson(&lesson_form(a.id, "intro", 1, true)).await.unwrap();
    s.courses.create_lesson(&lesson_form(b.id, "intro", 1, true)).await.unwrap();
    let err = s
        .courses
        .create_lesson(&lesson_form(a.id, "intro", 2, true))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Repository(_)));
}

#[tokio::test]
async fn lesson_needs_an_existing_course() {
    let s = services();
    let err = s
        .courses
        .create_lesson(&lesson_form(12, "intro", 1, true))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
}

#[tokio::test]
async fn deleting_course_removes_lessons() {
    let s = services();
    let course = s.courses.create_course(&course_form("gone", true)).await.unwrap();
    let lesson = s
        .courses
        .create_lesson(&lesson_form(course.id, "intro", 1, true))
        .await
        .unwrap();

    assert!(s.courses.delete_course(course.id).await.unwrap());
    assert_eq!(s.courses.lesson_by_id(lesson.id).await.unwrap(), None);
    assert!(s.courses.course_by_id(course.id).await.unwrap().is_none());
    assert!(!s.courses.delete_course(course.id).await.unwrap());
}

#[tokio::test]
async fn discount_above_price_is_invalid() {
    let s = services();
    let mut form = course_form("sale", true);
    form.discount_price = Some(form.price + 1);
    assert!(matches!(
        s.courses.create_course(&form).await.unwrap_err(),
        DomainError::Validation(_)
    ));
}

#[tokio::test]
async fn featured_courses_are_published_and_flagged() {
    let s = services();
    let mut featured = course_form("featured", true);
    featured.is_featured = true;
    let mut hidden = course_form("hidden", false);
    hidden.is_featured = true;
    s.courses.create_course(&featured).await.unwrap();
    s.courses.create_course(&hidden).await.unwrap();
    s.courses.create_course(&course_form("plain", true)).await.unwrap();

    let courses = s.courses.featured_courses().await.unwrap();
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].slug, "featured");
    assert_eq!(s.courses.course_count(Visibility::PublishedOnly).await.unwrap(), 2);
}

#[tokio::test]
async fn portfolio_category_deletion_detaches_projects() {
    let s = services();
    let web = s
        .portfolios
        .create_category(&PortfolioCategoryForm {
            name: "Web".into(),
            slug: "web".into(),
            ..Default::default()
        })
        .await
        .unwrap();
    let mut form = portfolio_form("shop", true);
    form.category_id = Some(web.id);
    let project = s.portfolios.create_portfolio(&form).await.unwrap();

    let details = s.portfolios.portfolio_by_slug("shop").await.unwrap().unwrap();
    assert_eq!(details.category.map(|c| c.id), Some(web.id));
    assert_eq!(
        s.portfolios
            .portfolios_by_category(web.id, Visibility::PublishedOnly)
            .await
            .unwrap()
            .len(),
        1
    );

    assert!(s.portfolios.delete_category(web.id).await.unwrap());
    let details = s.portfolios.portfolio_by_id(project.id).await.unwrap().unwrap();
    assert_eq!(details.portfolio.category_id, None);
    assert!(details.category.is_none());
}

#[tokio::test]
async fn featured_portfolios_are_newest_first_and_capped() {
    let s = services();
    for i in 0..8 {
        let mut form = portfolio_form(&format!("p{i}"), true);
        form.is_featured = true;
        let mut project = s.portfolios.create_portfolio(&form).await.unwrap();
        project.created_at = hours_ago(20 - i);
        s.repos.portfolios.update(project).await.unwrap();
    }

    let featured = s.portfolios.featured_portfolios().await.unwrap();
    assert_eq!(featured.len(), 6);
    assert_eq!(featured[0].slug, "p7");
    assert_eq!(featured[5].slug, "p2");
}

#[tokio::test]
async fn portfolio_views_and_deletion() {
    let s = services();
    let project = s
        .portfolios
        .create_portfolio(&portfolio_form("counted", true))
        .await
        .unwrap();
    assert!(s.portfolios.increment_view_count(project.id).await.unwrap());
    let details = s.portfolios.portfolio_by_id(project.id).await.unwrap().unwrap();
    assert_eq!(details.portfolio.view_count, 1);

    assert!(s.portfolios.delete_portfolio(project.id).await.unwrap());
    assert!(s.portfolios.portfolio_by_slug("counted").await.unwrap().is_none());
    assert!(!s.portfolios.increment_view_count(project.id).await.unwrap());
}
