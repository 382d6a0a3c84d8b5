//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod cache;
mod file_store;
mod mailer;
mod rate_limit;
mod repository;

pub use cache::{Cache, CacheError};
pub use file_store::{FileStore, UploadError};
pub use mailer::{MailError, Mailer};
pub use rate_limit::{RateLimitError, RateLimitResult, RateLimiter};
pub use repository::Repository;
