//! Rate limiting port.

use async_trait::async_trait;
use std::time::Duration;

/// Per-client request budget.
#[async_trait]
pub trait RateLimiter: Send + Sync {
    /// Consume one request from `key`'s budget.
    async fn check(&self, key: &str) -> Result<RateLimitResult, RateLimitError>;
}

/// Result of a rate limit check.
#[derive(Debug, Clone)]
pub struct RateLimitResult {
    pub allowed: bool,
    pub limit: u32,
    /// How long until the next request would be allowed. Zero when allowed.
    pub retry_after: Duration,
}

#[derive(Debug, thiserror::Error)]
pub enum RateLimitError {
    #[error("Backend error: {0}")]
    Backend(String),
}
