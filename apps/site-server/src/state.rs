//! Application state - shared across all handlers.

use std::sync::Arc;
use std::time::Duration;

use studio_core::ports::{Cache, FileStore};
use studio_core::services::{
    BlogService, ContactNotifier, ContactService, CourseService, DashboardService,
    PortfolioService, SitemapService,
};
use studio_infra::{InMemoryCache, LocalFileStore, LogMailer, Repositories};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub blog: BlogService,
    pub portfolios: PortfolioService,
    pub courses: CourseService,
    pub contact: ContactService,
    pub sitemap: SitemapService,
    pub dashboard: DashboardService,
    pub cache: Arc<dyn Cache>,
    pub files: Arc<dyn FileStore>,
    pub admin_token: Option<Arc<str>>,
    pub sitemap_ttl: Duration,
    #[cfg(feature = "database")]
    pub db: Option<Arc<sea_orm::DbConn>>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        #[cfg(feature = "database")]
        {
            let (repos, db) = match connect(config).await {
                Some(db) => {
                    let db = Arc::new(db);
                    (Repositories::sea_orm(db.clone()), Some(db))
                }
                None => (Repositories::in_memory(), None),
            };
            let mut state = Self::from_repositories(repos, config);
            state.db = db;
            state
        }

        #[cfg(not(feature = "database"))]
        {
            tracing::info!("Running without database feature - using in-memory repositories");
            Self::from_repositories(Repositories::in_memory(), config)
        }
    }

    /// Wires every service onto one set of repositories.
    pub fn from_repositories(repos: Repositories, config: &AppConfig) -> Self {
        let blog = BlogService::new(repos.blog());
        let portfolios =
            PortfolioService::new(repos.portfolios.clone(), repos.portfolio_categories.clone());
        let courses = CourseService::new(repos.courses.clone(), repos.lessons.clone());

        let mailer = Arc::new(LogMailer::new(
            config.mail.from_email.clone(),
            config.mail.from_name.clone(),
        ));
        let contact = ContactService::new(repos.submissions.clone()).with_notifier(
            ContactNotifier::new(mailer, config.mail.admin_email.clone(), config.site.name.clone()),
        );

        let sitemap = SitemapService::new(
            config.site.base_url.clone(),
            blog.clone(),
            portfolios.clone(),
            courses.clone(),
        );
        let dashboard = DashboardService::new(
            blog.clone(),
            portfolios.clone(),
            courses.clone(),
            contact.clone(),
        );

        if config.site.admin_token.is_none() {
            tracing::warn!("ADMIN_API_TOKEN not set. Admin API is disabled.");
        }

        Self {
            blog,
            portfolios,
            courses,
            contact,
            sitemap,
            dashboard,
            cache: Arc::new(InMemoryCache::new()),
            files: Arc::new(LocalFileStore::new(
                config.uploads.root.clone(),
                config.uploads.max_mb,
            )),
            admin_token: config.site.admin_token.as_deref().map(Arc::from),
            sitemap_ttl: config.site.sitemap_ttl,
            #[cfg(feature = "database")]
            db: None,
        }
    }
}

/// Opens the pool and applies migrations. Any failure falls back to the
/// in-memory repositories so the site still serves.
#[cfg(feature = "database")]
async fn connect(config: &AppConfig) -> Option<sea_orm::DbConn> {
    use migration::{Migrator, MigratorTrait};
    use studio_infra::DatabaseConfig;

    let Some(settings) = &config.database else {
        tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        return None;
    };

    let db_config = DatabaseConfig {
        url: settings.url.clone(),
        max_connections: settings.max_connections,
        min_connections: settings.min_connections,
    };
    let db = match db_config.connect().await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!(error = %e, "Failed to connect to database. Using in-memory fallback.");
            return None;
        }
    };

    if settings.auto_migrate {
        if let Err(e) = Migrator::up(&db, None).await {
            tracing::error!(error = %e, "Database migration failed. Using in-memory fallback.");
            return None;
        }
        tracing::info!("Database migrations applied");
    }
    Some(db)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseSettings;

    fn sqlite_config() -> AppConfig {
        let mut config = AppConfig::for_tests("secret");
        config.database = Some(DatabaseSettings {
            url: "sqlite::memory:".into(),
            max_connections: 1,
            min_connections: 1,
            auto_migrate: true,
        });
        config
    }

    #[cfg(feature = "database")]
    #[actix_web::test]
    async fn database_feature_connects_and_migrates() {
        let state = AppState::new(&sqlite_config()).await;
        assert!(state.db.is_some());

        let category = state
            .blog
            .create_category(&studio_core::domain::BlogCategoryForm {
                name: "Design".into(),
                slug: "design".into(),
                description: None,
                color: "#f59e0b".into(),
            })
            .await
            .unwrap();
        assert!(category.id > 0);
    }

    #[cfg(not(feature = "database"))]
    #[actix_web::test]
    async fn minimal_build_ignores_database_settings() {
        let state = AppState::new(&sqlite_config()).await;
        assert!(state.blog.all_categories().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn unreachable_database_falls_back_to_memory() {
        let mut config = sqlite_config();
        if let Some(db) = config.database.as_mut() {
            db.url = "sqlite:///no/such/dir/studio.db".into();
        }
        let state = AppState::new(&config).await;
        #[cfg(feature = "database")]
        assert!(state.db.is_none());
        assert_eq!(state.contact.unread_count().await.unwrap(), 0);
    }
}
