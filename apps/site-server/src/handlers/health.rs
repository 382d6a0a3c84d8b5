//! Health check endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
    pub database: DatabaseHealth,
}

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DatabaseHealth {
    Up,
    Down,
    /// Running on in-memory repositories.
    InMemory,
}

/// GET /health
///
/// 503 when a configured database does not answer.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let database = database_health(&state).await;
    let (status, mut builder) = match database {
        DatabaseHealth::Down => ("degraded", HttpResponse::ServiceUnavailable()),
        DatabaseHealth::Up | DatabaseHealth::InMemory => ("ok", HttpResponse::Ok()),
    };

    builder.json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
        database,
    })
}

#[cfg(feature = "database")]
async fn database_health(state: &AppState) -> DatabaseHealth {
    match &state.db {
        Some(db) => match db.ping().await {
            Ok(()) => DatabaseHealth::Up,
            Err(e) => {
                tracing::error!(error = %e, "Database health check failed");
                DatabaseHealth::Down
            }
        },
        None => DatabaseHealth::InMemory,
    }
}

#[cfg(not(feature = "database"))]
async fn database_health(_state: &AppState) -> DatabaseHealth {
    DatabaseHealth::InMemory
}
