mod common;

use chrono::NaiveDate;

use common::{course_form, hours_ago, portfolio_form, post_form, services};
use studio_core::domain::{BlogCategoryForm, ClientInfo, ContactForm};
use studio_core::services::{ContactService, DashboardService, SitemapService};
use studio_infra::render_sitemap;

#[tokio::test]
async fn sitemap_lists_static_routes_and_published_content() {
    let s = services();

    let mut post = s.blog.create_post(&post_form("hello", true)).await.unwrap();
    post.created_at = hours_ago(48);
    post.updated_at = None;
    s.repos.posts.update(post).await.unwrap();
    s.blog.create_post(&post_form("draft", false)).await.unwrap();

    let category: BlogCategoryForm =
        serde_json::from_value(serde_json::json!({ "name": "News", "slug": "news" })).unwrap();
    s.blog.create_category(&category).await.unwrap();

    s.portfolios
        .create_portfolio(&portfolio_form("shop", true))
        .await
        .unwrap();
    s.courses.create_course(&course_form("rust", true)).await.unwrap();
    s.courses.create_course(&course_form("secret", false)).await.unwrap();

    let sitemap = SitemapService::new(
        "https://studio.test/",
        s.blog.clone(),
        s.portfolios.clone(),
        s.courses.clone(),
    );
    let urls = sitemap.urls().await.unwrap();
    let locs: Vec<_> = urls.iter().map(|u| u.loc.as_str()).collect();

    assert_eq!(
        locs,
        [
            "https://studio.test/",
            "https://studio.test/blog",
            "https://studio.test/courses",
            "https://studio.test/pricing",
            "https://studio.test/contact",
            "https://studio.test/blog/hello",
            "https://studio.test/blog?category=news",
            "https://studio.test/portfolio/shop",
            "https://studio.test/courses/rust",
        ]
    );
    let post_url = &urls[5];
    assert_eq!(post_url.lastmod, NaiveDate::from_ymd_opt(2024, 5, 30));
    assert_eq!(urls[6].lastmod, None);

    let xml = render_sitemap(&urls).unwrap();
    assert_eq!(xml.matches("<url>").count(), 9);
    assert!(xml.contains("<lastmod>2024-05-30</lastmod>"));
}

#[tokio::test]
async fn dashboard_summarises_every_area() {
    let s = services();
    s.blog.create_post(&post_form("live", true)).await.unwrap();
    s.blog.create_post(&post_form("draft", false)).await.unwrap();
    s.portfolios
        .create_portfolio(&portfolio_form("shop", false))
        .await
        .unwrap();
    s.courses.create_course(&course_form("rust", false)).await.unwrap();

    let contact = ContactService::new(s.repos.submissions.clone());
    for i in 0..6 {
        contact
            .submit(
                &ContactForm {
                    full_name: "Yaw".into(),
                    email: "yaw@example.com".into(),
                    subject: format!("Hello {i}"),
                    message: "Hi".into(),
                    ..Default::default()
                },
                ClientInfo::default(),
            )
            .await
            .unwrap();
    }

    let dashboard = DashboardService::new(
        s.blog.clone(),
        s.portfolios.clone(),
        s.courses.clone(),
        contact,
    );
    let summary = dashboard.summary().await.unwrap();

    assert_eq!(summary.total_posts, 2);
    assert_eq!(summary.published_posts, 1);
    assert_eq!(summary.pending_comments, 0);
    assert_eq!(summary.total_portfolios, 1);
    assert_eq!(summary.total_courses, 1);
    assert_eq!(summary.unread_messages, 6);
    assert_eq!(summary.recent_submissions.len(), 5);
}
