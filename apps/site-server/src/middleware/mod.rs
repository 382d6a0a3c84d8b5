//! Middleware and request guards.

pub mod auth;
pub mod error;
pub mod rate_limit;
