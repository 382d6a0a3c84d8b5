use chrono::{DateTime, Utc};

/// Content with a published flag and a first-publication timestamp.
pub trait Publishable {
    fn is_published(&self) -> bool;

    fn published_at(&self) -> Option<DateTime<Utc>>;

    fn set_published_at(&mut self, at: DateTime<Utc>);

    /// Records the first publication. Later saves keep the original time.
    fn stamp_publication(&mut self, now: DateTime<Utc>) {
        if self.is_published() && self.published_at().is_none() {
            self.set_published_at(now);
        }
    }
}
