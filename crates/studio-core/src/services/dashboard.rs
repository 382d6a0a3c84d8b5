use serde::Serialize;

use super::{BlogService, ContactService, CourseService, PortfolioService, Visibility};
use crate::domain::ContactSubmission;
use crate::error::DomainError;

const RECENT_SUBMISSIONS: u64 = 5;

/// Headline numbers for the admin landing page.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub total_posts: u64,
    pub published_posts: u64,
    pub pending_comments: u64,
    pub total_portfolios: u64,
    pub total_courses: u64,
    pub unread_messages: u64,
    pub recent_submissions: Vec<ContactSubmission>,
}

#[derive(Clone)]
pub struct DashboardService {
    blog: BlogService,
    portfolios: PortfolioService,
    courses: CourseService,
    contact: ContactService,
}

impl DashboardService {
    pub fn new(
        blog: BlogService,
        portfolios: PortfolioService,
        courses: CourseService,
        contact: ContactService,
    ) -> Self {
        Self {
            blog,
            portfolios,
            courses,
            contact,
        }
    }

    pub async fn summary(&self) -> Result<DashboardSummary, DomainError> {
        Ok(DashboardSummary {
            total_posts: self.blog.post_count(Visibility::All).await?,
            published_posts: self.blog.post_count(Visibility::PublishedOnly).await?,
            pending_comments: self.blog.pending_comment_count().await?,
            total_portfolios: self.portfolios.portfolio_count(Visibility::All).await?,
            total_courses: self.courses.course_count(Visibility::All).await?,
            unread_messages: self.contact.unread_count().await?,
            recent_submissions: self.contact.recent_submissions(RECENT_SUBMISSIONS).await?,
        })
    }
}
