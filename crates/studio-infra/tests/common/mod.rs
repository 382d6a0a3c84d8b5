#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};

use studio_core::domain::{BlogPostForm, CourseForm, PortfolioForm};
use studio_core::services::{BlogService, CourseService, PortfolioService};
use studio_infra::Repositories;

pub struct Services {
    pub repos: Repositories,
    pub blog: BlogService,
    pub courses: CourseService,
    pub portfolios: PortfolioService,
}

pub fn services() -> Services {
    let repos = Repositories::in_memory();
    Services {
        blog: BlogService::new(repos.blog()),
        courses: CourseService::new(repos.courses.clone(), repos.lessons.clone()),
        portfolios: PortfolioService::new(
            repos.portfolios.clone(),
            repos.portfolio_categories.clone(),
        ),
        repos,
    }
}

/// A fixed instant `hours` before noon on 2024-06-01.
pub fn hours_ago(hours: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap() - Duration::hours(hours)
}

pub fn post_form(slug: &str, published: bool) -> BlogPostForm {
    BlogPostForm {
        title: format!("Post {slug}"),
        slug: slug.to_string(),
        summary: "A short summary".to_string(),
        content: "Body text".to_string(),
        author: "Kwame".to_string(),
        is_published: published,
        ..Default::default()
    }
}

pub fn course_form(slug: &str, published: bool) -> CourseForm {
    CourseForm {
        title: format!("Course {slug}"),
        slug: slug.to_string(),
        description: "Learn things".to_string(),
        price: 50_000,
        is_published: published,
        ..Default::default()
    }
}

pub fn portfolio_form(slug: &str, published: bool) -> PortfolioForm {
    PortfolioForm {
        title: format!("Project {slug}"),
        slug: slug.to_string(),
        description: "A client site".to_string(),
        featured_image: "/uploads/images/shot.png".to_string(),
        is_published: published,
        ..Default::default()
    }
}
