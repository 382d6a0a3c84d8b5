use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseBackend, DbConn, MockDatabase};

use studio_core::domain::{BlogComment, BlogPost, BlogPostField, BlogTag, BlogTagField};
use studio_core::error::RepoError;
use studio_core::ports::Repository;
use studio_core::query::{Filter, OrderBy, PageRequest};

use super::entity::{blog_comment, blog_post, blog_tag};
use super::SeaOrmRepository;

fn post(slug: &str, hours_ago: i64) -> BlogPost {
    let created = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap() - Duration::hours(hours_ago);
    BlogPost {
        title: slug.replace('-', " "),
        slug: slug.to_string(),
        summary: "Summary".to_string(),
        content: "Body".to_string(),
        author: "Admin".to_string(),
        created_at: created,
        ..Default::default()
    }
}

async fn sqlite() -> Arc<DbConn> {
    let opts = ConnectOptions::new("sqlite::memory:")
        .max_connections(1)
        .sqlx_logging(false)
        .to_owned();
    let db = Database::connect(opts).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    Arc::new(db)
}

async fn seeded_tags() -> SeaOrmRepository<blog_tag::Entity> {
    let repo = SeaOrmRepository::<blog_tag::Entity>::new(sqlite().await);
    for name in ["Alpha", "Beta", "Gamma", "Delta", "Epsilon"] {
        repo.add(BlogTag {
            name: name.to_string(),
            slug: name.to_lowercase(),
            created_at: Utc::now(),
            ..Default::default()
        })
        .await
        .unwrap();
    }
    repo
}

#[tokio::test]
async fn mock_get_by_id_maps_model_to_domain() {
    let now = Utc::now();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![blog_tag::Model {
            id: 7,
            name: "Rust".to_owned(),
            slug: "rust".to_owned(),
            created_at: now.into(),
        }]])
        .into_connection();

    let repo = SeaOrmRepository::<blog_tag::Entity>::new(Arc::new(db));
    let tag: BlogTag = repo.get_by_id(7).await.unwrap().unwrap();

    assert_eq!(tag.id, 7);
    assert_eq!(tag.slug, "rust");
    assert_eq!(tag.created_at, now);
}

#[tokio::test]
async fn mock_list_spells_out_null_ordering_and_tiebreak() {
    let db = Arc::new(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<blog_post::Model>::new()])
            .into_connection(),
    );

    let repo = SeaOrmRepository::<blog_post::Entity>::new(db.clone());
    repo.list(
        Some(Filter::eq(BlogPostField::IsPublished, true)),
        OrderBy::desc(BlogPostField::PublishedAt),
        Some(5),
    )
    .await
    .unwrap();
    drop(repo);

    let log = Arc::into_inner(db).unwrap().into_transaction_log();
    let sql = &log[0].statements()[0].sql;
    assert!(sql.contains(r#""blog_posts"."published_at" DESC NULLS LAST"#), "{sql}");
    assert!(sql.contains(r#""blog_posts"."id" ASC NULLS FIRST"#), "{sql}");
    assert!(sql.contains("LIMIT"), "{sql}");
}

#[tokio::test]
async fn sqlite_round_trips_and_assigns_ids() {
    let repo = SeaOrmRepository::<blog_post::Entity>::new(sqlite().await);

    let first = repo.add(post("first", 2)).await.unwrap();
    let second = repo.add(post("second", 1)).await.unwrap();
    assert!(first.id > 0);
    assert_ne!(first.id, second.id);

    let found = repo.get_by_id(first.id).await.unwrap().unwrap();
    assert_eq!(found.slug, "first");
    assert_eq!(found.created_at, first.created_at);
    assert_eq!(repo.count(None).await.unwrap(), 2);
}

#[tokio::test]
async fn sqlite_duplicate_slug_is_a_constraint_violation() {
    let repo = SeaOrmRepository::<blog_post::Entity>::new(sqlite().await);

    repo.add(post("same", 1)).await.unwrap();
    let err = repo.add(post("same", 2)).await.unwrap_err();
    assert!(matches!(err, RepoError::Constraint(_)), "{err:?}");
}

#[tokio::test]
async fn sqlite_update_and_delete_of_missing_rows_are_not_found() {
    let repo = SeaOrmRepository::<blog_post::Entity>::new(sqlite().await);

    let mut ghost = post("ghost", 1);
    ghost.id = 404;
    assert!(matches!(
        repo.update(ghost.clone()).await.unwrap_err(),
        RepoError::NotFound
    ));
    assert!(matches!(
        repo.delete(ghost).await.unwrap_err(),
        RepoError::NotFound
    ));
}

#[tokio::test]
async fn sqlite_nulls_sort_last_when_descending() {
    let repo = SeaOrmRepository::<blog_post::Entity>::new(sqlite().await);

    let mut published = post("published", 3);
    published.is_published = true;
    published.published_at = Some(published.created_at);
    repo.add(post("draft", 1)).await.unwrap();
    repo.add(published).await.unwrap();

    let rows = repo
        .list(None, OrderBy::desc(BlogPostField::PublishedAt), None)
        .await
        .unwrap();
    let slugs: Vec<_> = rows.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, ["published", "draft"]);
}

#[tokio::test]
async fn sqlite_paging_filters_then_windows() {
    let repo = seeded_tags().await;

    let page = repo
        .get_paged(
            PageRequest::new(2, 2).unwrap(),
            Some(Filter::contains(BlogTagField::Name, "A")),
            OrderBy::asc(BlogTagField::Name),
        )
        .await
        .unwrap();

    assert_eq!(page.total_count, 4);
    let names: Vec<_> = page.items.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["Delta", "Gamma"]);
}

#[tokio::test]
async fn sqlite_page_past_the_end_is_empty_with_total() {
    let repo = seeded_tags().await;

    let page = repo
        .get_paged(
            PageRequest::new(4, 2).unwrap(),
            None,
            OrderBy::asc(BlogTagField::Name),
        )
        .await
        .unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.total_count, 5);
    assert_eq!(page.page_number, 4);
}

#[tokio::test]
async fn sqlite_huge_page_number_is_empty_not_a_driver_error() {
    let repo = seeded_tags().await;

    let page = repo
        .get_paged(
            PageRequest::new(u64::MAX / 50, 100).unwrap(),
            None,
            OrderBy::asc(BlogTagField::Name),
        )
        .await
        .unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.total_count, 5);

    let page = repo
        .get_paged(
            PageRequest::new(1, u64::MAX).unwrap(),
            None,
            OrderBy::asc(BlogTagField::Name),
        )
        .await
        .unwrap();
    assert_eq!(page.items.len(), 5);
}

#[tokio::test]
async fn sqlite_deleting_a_post_cascades_to_comments() {
    let db = sqlite().await;
    let posts = SeaOrmRepository::<blog_post::Entity>::new(db.clone());
    let comments = SeaOrmRepository::<blog_comment::Entity>::new(db);

    let post = posts.add(post("with-comments", 1)).await.unwrap();
    comments
        .add(BlogComment {
            post_id: post.id,
            author_name: "Ama".to_string(),
            author_email: "ama@example.com".to_string(),
            content: "Nice".to_string(),
            created_at: Utc::now(),
            ..Default::default()
        })
        .await
        .unwrap();

    posts.delete(post).await.unwrap();
    assert_eq!(comments.count(None).await.unwrap(), 0);
}
