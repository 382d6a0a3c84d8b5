//! Default blog taxonomy for a fresh site.

use studio_core::DomainError;
use studio_core::domain::{BlogCategoryForm, BlogTagForm};
use studio_core::services::BlogService;

const CATEGORIES: [(&str, &str, &str, &str); 3] = [
    (
        "Web Development",
        "web-development",
        "Latest trends and tips in web development",
        "#3b82f6",
    ),
    (
        "SEO & Marketing",
        "seo-marketing",
        "Search engine optimization and digital marketing strategies",
        "#10b981",
    ),
    (
        "Design Tips",
        "design-tips",
        "UI/UX design best practices and inspiration",
        "#f59e0b",
    ),
];

const TAGS: [(&str, &str); 6] = [
    ("Rust", "rust"),
    ("Web Apps", "web-apps"),
    ("SEO", "seo"),
    ("UI/UX", "ui-ux"),
    ("E-commerce", "ecommerce"),
    ("Mobile", "mobile"),
];

/// Creates the default categories and tags, each set only when its table is
/// empty. Safe to run on every start.
pub async fn seed_blog(blog: &BlogService) -> Result<(), DomainError> {
    if blog.all_categories().await?.is_empty() {
        for (name, slug, description, color) in CATEGORIES {
            blog.create_category(&BlogCategoryForm {
                name: name.to_string(),
                slug: slug.to_string(),
                description: Some(description.to_string()),
                color: color.to_string(),
            })
            .await?;
        }
        tracing::info!(count = CATEGORIES.len(), "Seeded blog categories");
    }

    if blog.all_tags().await?.is_empty() {
        for (name, slug) in TAGS {
            blog.create_tag(&BlogTagForm {
                name: name.to_string(),
                slug: slug.to_string(),
            })
            .await?;
        }
        tracing::info!(count = TAGS.len(), "Seeded blog tags");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use studio_infra::Repositories;

    #[tokio::test]
    async fn seeding_is_idempotent() {
        let blog = BlogService::new(Repositories::in_memory().blog());
        seed_blog(&blog).await.unwrap();
        seed_blog(&blog).await.unwrap();

        assert_eq!(blog.all_categories().await.unwrap().len(), 3);
        assert_eq!(blog.all_tags().await.unwrap().len(), 6);
        let seo = blog.category_by_slug("seo-marketing").await.unwrap().unwrap();
        assert_eq!(seo.color.as_deref(), Some("#10b981"));
    }
}
