use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFrequency::Always => "always",
            ChangeFrequency::Hourly => "hourly",
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
            ChangeFrequency::Never => "never",
        }
    }
}

/// One `<url>` entry of a sitemap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitemapUrl {
    pub loc: String,
    pub priority: f32,
    pub changefreq: ChangeFrequency,
    pub lastmod: Option<NaiveDate>,
}

impl SitemapUrl {
    pub fn new(loc: impl Into<String>, priority: f32, changefreq: ChangeFrequency) -> Self {
        Self {
            loc: loc.into(),
            priority,
            changefreq,
            lastmod: None,
        }
    }

    pub fn with_lastmod(mut self, lastmod: NaiveDate) -> Self {
        self.lastmod = Some(lastmod);
        self
    }

    /// `lastmod` rendered as `YYYY-MM-DD`.
    pub fn lastmod_text(&self) -> Option<String> {
        self.lastmod.map(|date| date.format("%Y-%m-%d").to_string())
    }

    /// Priority rendered with one decimal place, e.g. `0.8`.
    pub fn priority_text(&self) -> String {
        format!("{:.1}", self.priority)
    }
}
