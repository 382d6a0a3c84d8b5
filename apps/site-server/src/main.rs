//! # Studio Site Server
//!
//! Actix-web entry point: JSON API, sitemap, uploads and the admin API.

use actix_web::middleware::{Compress, DefaultHeaders};
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod observability;
mod seed;
mod state;
mod telemetry;

use config::AppConfig;
use middleware::rate_limit::RateLimitMiddleware;
use observability::RequestIdMiddleware;
use state::AppState;
use telemetry::{TelemetryConfig, init_telemetry};

/// Room on top of the upload limit for the rest of the request.
const PAYLOAD_HEADROOM: usize = 64 * 1024;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(host = %config.host, port = config.port, "Starting site server");

    let state = AppState::new(&config).await;

    if config.seed_content {
        if let Err(e) = seed::seed_blog(&state.blog).await {
            tracing::error!(error = %e, "Content seeding failed");
        }
    }

    let rate_limit = rate_limiter(&config)?;
    let payload_limit = usize::try_from(config.uploads.max_mb)?
        .saturating_mul(1024 * 1024)
        .saturating_add(PAYLOAD_HEADROOM);

    let state = web::Data::new(state);
    HttpServer::new(move || {
        App::new()
            .wrap(rate_limit.build())
            .wrap(Compress::default())
            .wrap(security_headers())
            .wrap(RequestIdMiddleware)
            .wrap(TracingLogger::default())
            .app_data(state.clone())
            .app_data(web::PayloadConfig::new(payload_limit))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}

fn security_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("X-Content-Type-Options", "nosniff"))
        .add(("X-Frame-Options", "SAMEORIGIN"))
        .add(("X-XSS-Protection", "1; mode=block"))
        .add(("Referrer-Policy", "strict-origin-when-cross-origin"))
}

/// Builds one middleware per worker around a shared limiter.
#[derive(Clone)]
struct RateLimitFactory(Option<std::sync::Arc<dyn studio_core::ports::RateLimiter>>);

impl RateLimitFactory {
    fn build(&self) -> RateLimitMiddleware {
        match &self.0 {
            Some(limiter) => RateLimitMiddleware::new(limiter.clone()),
            None => RateLimitMiddleware::disabled(),
        }
    }
}

#[cfg(feature = "rate-limit")]
fn rate_limiter(config: &AppConfig) -> anyhow::Result<RateLimitFactory> {
    use studio_infra::{InMemoryRateLimiter, RateLimitConfig};

    let limiter = InMemoryRateLimiter::new(RateLimitConfig {
        max_requests: config.rate_limit.max_requests,
        window: config.rate_limit.window,
    })?;
    tracing::info!(
        max_requests = config.rate_limit.max_requests,
        window_secs = config.rate_limit.window.as_secs(),
        "Rate limiting enabled"
    );
    Ok(RateLimitFactory(Some(std::sync::Arc::new(limiter))))
}

#[cfg(not(feature = "rate-limit"))]
fn rate_limiter(_config: &AppConfig) -> anyhow::Result<RateLimitFactory> {
    tracing::info!("Running without rate-limit feature");
    Ok(RateLimitFactory(None))
}
