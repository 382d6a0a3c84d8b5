//! # Studio Infrastructure
//!
//! Concrete implementations of the ports defined in `studio-core`:
//! repositories (SeaORM and in-memory), the output cache, rate limiting,
//! mail, upload storage and sitemap rendering.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - In-memory repositories only, no database driver
//! - `database` - SeaORM repositories for PostgreSQL and SQLite
//! - `rate-limit` - Per-client rate limiting via governor

pub mod cache;
pub mod database;
pub mod mail;
pub mod sitemap;
pub mod storage;

#[cfg(feature = "rate-limit")]
pub mod rate_limit;

pub use cache::InMemoryCache;
pub use database::{InMemoryRepository, Repositories};
pub use mail::LogMailer;
pub use sitemap::{SitemapRenderError, render_sitemap};
pub use storage::LocalFileStore;

#[cfg(feature = "database")]
pub use database::{DatabaseConfig, SeaOrmRepository};

#[cfg(feature = "rate-limit")]
pub use rate_limit::{InMemoryRateLimiter, RateLimitConfig};
