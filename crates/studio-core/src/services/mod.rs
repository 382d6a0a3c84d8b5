//! Application services composed from repositories and ports.

mod blog;
mod contact;
mod course;
mod dashboard;
mod portfolio;
mod sitemap;

pub use blog::{BlogRepositories, BlogService, PostDetails, PostSummary};
pub use contact::{ContactNotifier, ContactService};
pub use course::{CourseDetails, CourseService};
pub use dashboard::{DashboardService, DashboardSummary};
pub use portfolio::{PortfolioDetails, PortfolioService};
pub use sitemap::SitemapService;

use crate::error::DomainError;

/// Whether listings include drafts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    PublishedOnly,
    All,
}

impl Visibility {
    pub fn published_only(self) -> bool {
        matches!(self, Visibility::PublishedOnly)
    }
}

fn require_slug(slug: &str) -> Result<&str, DomainError> {
    let slug = slug.trim();
    if slug.is_empty() {
        return Err(DomainError::invalid("Slug is required"));
    }
    Ok(slug)
}

/// Removes duplicates while keeping first-seen order.
fn dedup_ids(ids: &[i32]) -> Vec<i32> {
    let mut seen = Vec::with_capacity(ids.len());
    for id in ids {
        if !seen.contains(id) {
            seen.push(*id);
        }
    }
    seen
}
