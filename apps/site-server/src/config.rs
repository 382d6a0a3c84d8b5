//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` runs on in-memory repositories.
    pub database: Option<DatabaseSettings>,
    pub site: SiteSettings,
    pub mail: MailSettings,
    pub uploads: UploadSettings,
    pub rate_limit: RateLimitSettings,
    /// Create default blog categories and tags when none exist.
    pub seed_content: bool,
}

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub auto_migrate: bool,
}

#[derive(Debug, Clone)]
pub struct SiteSettings {
    pub name: String,
    pub base_url: String,
    /// Bearer token for `/api/admin`. Admin routes reject everything when unset.
    pub admin_token: Option<String>,
    pub sitemap_ttl: Duration,
}

#[derive(Debug, Clone)]
pub struct MailSettings {
    pub admin_email: String,
    pub from_email: String,
    pub from_name: String,
}

#[derive(Debug, Clone)]
pub struct UploadSettings {
    pub root: PathBuf,
    pub max_mb: u64,
}

#[derive(Debug, Clone)]
pub struct RateLimitSettings {
    pub max_requests: u32,
    pub window: Duration,
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn flag(key: &str, default: bool) -> bool {
    env::var(key)
        .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(default)
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .map(|url| DatabaseSettings {
                url,
                max_connections: parse_or("DB_MAX_CONNECTIONS", 20),
                min_connections: parse_or("DB_MIN_CONNECTIONS", 2),
                auto_migrate: flag("DB_AUTO_MIGRATE", true),
            });

        let site_name = var_or("SITE_NAME", "Website Designer Ghana");

        Self {
            host: var_or("HOST", "127.0.0.1"),
            port: parse_or("PORT", 8080),
            database,
            site: SiteSettings {
                base_url: var_or("SITE_BASE_URL", "http://localhost:8080"),
                admin_token: env::var("ADMIN_API_TOKEN")
                    .ok()
                    .filter(|token| !token.is_empty()),
                sitemap_ttl: Duration::from_secs(parse_or("SITEMAP_CACHE_SECS", 3600)),
                name: site_name.clone(),
            },
            mail: MailSettings {
                admin_email: var_or("ADMIN_EMAIL", "admin@localhost"),
                from_email: var_or("MAIL_FROM_EMAIL", "noreply@localhost"),
                from_name: env::var("MAIL_FROM_NAME").unwrap_or(site_name),
            },
            uploads: UploadSettings {
                root: PathBuf::from(var_or("UPLOAD_ROOT", "uploads")),
                max_mb: parse_or("UPLOAD_MAX_MB", 10),
            },
            rate_limit: RateLimitSettings {
                max_requests: parse_or("RATE_LIMIT_MAX_REQUESTS", 200),
                window: Duration::from_secs(parse_or("RATE_LIMIT_WINDOW_SECS", 60)),
            },
            seed_content: flag("SEED_CONTENT", true),
        }
    }
}

#[cfg(test)]
impl AppConfig {
    /// In-memory settings with a fixed admin token and a throwaway upload root.
    pub(crate) fn for_tests(admin_token: &str) -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 0,
            database: None,
            site: SiteSettings {
                name: "Studio".into(),
                base_url: "https://studio.test".into(),
                admin_token: Some(admin_token.into()),
                sitemap_ttl: Duration::from_secs(3600),
            },
            mail: MailSettings {
                admin_email: "owner@studio.test".into(),
                from_email: "noreply@studio.test".into(),
                from_name: "Studio".into(),
            },
            uploads: UploadSettings {
                root: env::temp_dir().join(format!("site-server-{}", uuid::Uuid::new_v4())),
                max_mb: 1,
            },
            rate_limit: RateLimitSettings {
                max_requests: 200,
                window: Duration::from_secs(60),
            },
            seed_content: false,
        }
    }
}
