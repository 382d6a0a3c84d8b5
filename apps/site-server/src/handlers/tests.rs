use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};
use studio_infra::Repositories;

use super::configure_routes;
use crate::config::AppConfig;
use crate::state::AppState;

const TOKEN: &str = "test-admin-token";
const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

macro_rules! app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::from_repositories(
                    Repositories::in_memory(),
                    &AppConfig::for_tests(TOKEN),
                )))
                .configure(configure_routes),
        )
        .await
    };
}

fn admin(req: test::TestRequest) -> test::TestRequest {
    req.insert_header(("Authorization", format!("Bearer {TOKEN}")))
}

fn post_body(slug: &str, published: bool) -> Value {
    json!({
        "title": format!("Post {slug}"),
        "slug": slug,
        "summary": "Summary",
        "content": "Body",
        "author": "Kwame",
        "is_published": published,
    })
}

#[actix_web::test]
async fn health_reports_in_memory_mode() {
    let app = app!();
    let res = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "in_memory");
}

#[actix_web::test]
async fn admin_routes_need_the_token() {
    let app = app!();

    let req = test::TestRequest::get().uri("/api/admin/dashboard").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["title"], "Unauthorized");

    let req = test::TestRequest::get()
        .uri("/api/admin/dashboard")
        .insert_header(("Authorization", "Bearer wrong"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

    let req = admin(test::TestRequest::get().uri("/api/admin/dashboard")).to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["data"]["total_posts"], 0);
}

#[actix_web::test]
async fn published_posts_are_public_and_drafts_are_not() {
    let app = app!();
    for (slug, published) in [("live", true), ("draft", false)] {
        let req = admin(test::TestRequest::post().uri("/api/admin/posts"))
            .set_json(post_body(slug, published))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);
    }

    let res = test::call_service(&app, test::TestRequest::get().uri("/api/posts/live").to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["data"]["slug"], "live");
    assert!(body["data"]["published_at"].is_string());

    let res = test::call_service(&app, test::TestRequest::get().uri("/api/posts/draft").to_request()).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = test::call_service(&app, test::TestRequest::get().uri("/api/posts?page_size=5").to_request()).await;
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["data"]["total_count"], 1);
    assert_eq!(body["data"]["page_size"], 5);

    let req = admin(test::TestRequest::get().uri("/api/admin/posts")).to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["total_count"], 2);
}

#[actix_web::test]
async fn huge_page_number_returns_an_empty_page() {
    let app = app!();
    let req = admin(test::TestRequest::post().uri("/api/admin/posts"))
        .set_json(post_body("only", true))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get()
        .uri("/api/posts?page=200000000000000000")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["data"]["items"].as_array().map(Vec::len), Some(0));
    assert_eq!(body["data"]["total_count"], 1);
    assert_eq!(body["data"]["has_next"], false);
}

#[actix_web::test]
async fn invalid_and_duplicate_posts_are_rejected() {
    let app = app!();

    let req = admin(test::TestRequest::post().uri("/api/admin/posts"))
        .set_json(json!({ "title": "", "slug": "Not A Slug", "summary": "s", "content": "c", "author": "a" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = test::read_body_json(res).await;
    assert!(body["errors"].as_array().is_some_and(|errors| errors.len() >= 2));

    for expected in [StatusCode::CREATED, StatusCode::CONFLICT] {
        let req = admin(test::TestRequest::post().uri("/api/admin/posts"))
            .set_json(post_body("same", true))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), expected);
    }

    let req = admin(test::TestRequest::delete().uri("/api/admin/posts/999")).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn comments_wait_for_moderation() {
    let app = app!();
    let req = admin(test::TestRequest::post().uri("/api/admin/posts"))
        .set_json(post_body("hello", true))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/posts/hello/comments")
        .set_json(json!({
            "author_name": "Ama",
            "author_email": "ama@example.com",
            "content": "Great post",
        }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["data"]["is_approved"], false);
    let comment_id = body["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::get().uri("/api/posts/hello/comments").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(0));

    let req = admin(test::TestRequest::post().uri(&format!(
        "/api/admin/comments/{comment_id}/approve"
    )))
    .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get().uri("/api/posts/hello/comments").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"][0]["content"], "Great post");
}

#[actix_web::test]
async fn contact_submissions_reach_the_inbox() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/api/contact")
        .insert_header(("User-Agent", "integration-test"))
        .set_json(json!({
            "full_name": "Efua Mensah",
            "email": "efua@example.com",
            "subject": "Quote",
            "message": "I need a website",
        }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(res).await;
    let id = body["data"]["id"].as_i64().unwrap();

    let req = admin(test::TestRequest::get().uri("/api/admin/contact/unread-count")).to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["unread"], 1);

    let req = admin(test::TestRequest::get().uri(&format!("/api/admin/contact/{id}"))).to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["is_read"], true);
    assert_eq!(body["data"]["user_agent"], "integration-test");

    let req = admin(test::TestRequest::get().uri("/api/admin/contact?is_read=false")).to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["total_count"], 0);

    let req = test::TestRequest::post()
        .uri("/api/contact")
        .set_json(json!({ "full_name": "", "email": "nope", "subject": "", "message": "" }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNPROCESSABLE_ENTITY
    );
}

#[actix_web::test]
async fn sitemap_is_cached_until_content_changes() {
    let app = app!();
    let req = admin(test::TestRequest::post().uri("/api/admin/posts"))
        .set_json(post_body("first", true))
        .to_request();
    test::call_service(&app, req).await;

    let res = test::call_service(&app, test::TestRequest::get().uri("/sitemap.xml").to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(
        res.headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("application/xml"))
    );
    let xml = String::from_utf8(test::read_body(res).await.to_vec()).unwrap();
    assert!(xml.contains("<loc>https://studio.test/blog/first</loc>"));

    let req = admin(test::TestRequest::post().uri("/api/admin/posts"))
        .set_json(post_body("second", true))
        .to_request();
    test::call_service(&app, req).await;

    let res = test::call_service(&app, test::TestRequest::get().uri("/sitemap.xml").to_request()).await;
    let xml = String::from_utf8(test::read_body(res).await.to_vec()).unwrap();
    assert!(xml.contains("<loc>https://studio.test/blog/second</loc>"));
}

#[actix_web::test]
async fn uploaded_images_are_served_back() {
    let app = app!();

    let req = admin(test::TestRequest::post().uri("/api/admin/uploads?file_name=Logo.png&folder=images"))
        .set_payload(PNG)
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(res).await;
    let path = body["data"]["path"].as_str().unwrap().to_owned();
    assert!(path.starts_with("/uploads/images/logo_"));

    let res = test::call_service(&app, test::TestRequest::get().uri(&path).to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers().get("content-type").and_then(|v| v.to_str().ok()),
        Some("image/png")
    );
    assert_eq!(test::read_body(res).await.as_ref(), PNG);

    let req = admin(test::TestRequest::get().uri(&format!("/api/admin/uploads?path={path}"))).to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["size"], PNG.len());

    let req = admin(test::TestRequest::post().uri("/api/admin/uploads?file_name=run.sh"))
        .set_payload(&b"#!/bin/sh"[..])
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

    let req = admin(test::TestRequest::delete().uri(&format!("/api/admin/uploads?path={path}"))).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

    let req = admin(test::TestRequest::get().uri(&format!("/api/admin/uploads?path={path}"))).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn svg_uploads_are_served_sandboxed() {
    let app = app!();
    let svg = br#"<svg xmlns="http://www.w3.org/2000/svg"><script>alert(1)</script></svg>"#;
    let req = admin(test::TestRequest::post().uri("/api/admin/uploads?file_name=icon.svg&folder=icons"))
        .set_payload(&svg[..])
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let path = body["data"]["path"].as_str().unwrap().to_owned();

    let res = test::call_service(&app, test::TestRequest::get().uri(&path).to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers().get("content-type").and_then(|v| v.to_str().ok()),
        Some("image/svg+xml")
    );
    let csp = res
        .headers()
        .get("content-security-policy")
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert!(csp.contains("default-src 'none'"));
    assert!(csp.contains("sandbox"));
}

#[actix_web::test]
async fn course_pages_show_published_lessons() {
    let app = app!();
    let req = admin(test::TestRequest::post().uri("/api/admin/courses"))
        .set_json(json!({
            "title": "Rust for the Web",
            "slug": "rust-web",
            "description": "Build sites in Rust",
            "price": 150_000,
            "is_published": true,
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["currency"], "GHS");
    let course_id = body["data"]["id"].as_i64().unwrap();

    for (slug, order, published) in [("intro", 1, true), ("wip", 2, false)] {
        let req = admin(test::TestRequest::post().uri("/api/admin/lessons"))
            .set_json(json!({
                "course_id": course_id,
                "title": slug,
                "slug": slug,
                "order_index": order,
                "is_published": published,
            }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get().uri("/api/courses/rust-web").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["lessons"].as_array().map(Vec::len), Some(1));

    let req = test::TestRequest::get().uri("/api/courses/rust-web/lessons/wip").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}
