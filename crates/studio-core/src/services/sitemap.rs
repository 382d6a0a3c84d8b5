use chrono::{DateTime, NaiveDate, Utc};

use super::{BlogService, CourseService, PortfolioService, Visibility};
use crate::domain::{ChangeFrequency, SitemapUrl};
use crate::error::DomainError;

const STATIC_ROUTES: [(&str, f32, ChangeFrequency); 5] = [
    ("/", 1.0, ChangeFrequency::Daily),
    ("/blog", 0.9, ChangeFrequency::Daily),
    ("/courses", 0.8, ChangeFrequency::Weekly),
    ("/pricing", 0.8, ChangeFrequency::Monthly),
    ("/contact", 0.7, ChangeFrequency::Monthly),
];

/// Collects every public URL of the site.
#[derive(Clone)]
pub struct SitemapService {
    base_url: String,
    blog: BlogService,
    portfolios: PortfolioService,
    courses: CourseService,
}

impl SitemapService {
    pub fn new(
        base_url: impl Into<String>,
        blog: BlogService,
        portfolios: PortfolioService,
        courses: CourseService,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self {
            base_url,
            blog,
            portfolios,
            courses,
        }
    }

    pub async fn urls(&self) -> Result<Vec<SitemapUrl>, DomainError> {
        let mut urls: Vec<SitemapUrl> = STATIC_ROUTES
            .iter()
            .map(|(path, priority, freq)| SitemapUrl::new(self.loc(path), *priority, *freq))
            .collect();

        for summary in self.blog.all_posts(Visibility::PublishedOnly).await? {
            let post = summary.post;
            urls.push(
                SitemapUrl::new(
                    self.loc(&format!("/blog/{}", post.slug)),
                    0.8,
                    ChangeFrequency::Weekly,
                )
                .with_lastmod(last_modified(post.updated_at, post.created_at)),
            );
        }

        for category in self.blog.all_categories().await? {
            urls.push(SitemapUrl::new(
                self.loc(&format!("/blog?category={}", category.slug)),
                0.7,
                ChangeFrequency::Weekly,
            ));
        }

        for portfolio in self.portfolios.all_portfolios(Visibility::PublishedOnly).await? {
            urls.push(
                SitemapUrl::new(
                    self.loc(&format!("/portfolio/{}", portfolio.slug)),
                    0.7,
                    ChangeFrequency::Monthly,
                )
                .with_lastmod(last_modified(portfolio.updated_at, portfolio.created_at)),
            );
        }

        for course in self.courses.all_courses(Visibility::PublishedOnly).await? {
            urls.push(
                SitemapUrl::new(
                    self.loc(&format!("/courses/{}", course.slug)),
                    0.8,
                    ChangeFrequency::Weekly,
                )
                .with_lastmod(last_modified(course.updated_at, course.created_at)),
            );
        }

        tracing::debug!(count = urls.len(), "Sitemap URLs collected");
        Ok(urls)
    }

    fn loc(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn last_modified(updated_at: Option<DateTime<Utc>>, created_at: DateTime<Utc>) -> NaiveDate {
    updated_at.unwrap_or(created_at).date_naive()
}
