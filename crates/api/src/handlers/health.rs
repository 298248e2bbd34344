//! Service health reporting.

use axum::extract::State;
use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::response::DataResponse;
use crate::state::AppState;

/// Health check response payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` when the database answers, `degraded` otherwise.
    pub status: &'static str,
    /// Time of the check, RFC 3339 with millisecond precision.
    pub timestamp: String,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the database is reachable.
    pub db_healthy: bool,
}

/// Probe the database and build a health report.
pub async fn report(pool: &cms_db::DbPool) -> HealthResponse {
    let db_healthy = cms_db::health_check(pool).await.is_ok();

    HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    }
}

/// GET /rpc/healthcheck
pub async fn healthcheck(State(state): State<AppState>) -> Json<DataResponse<HealthResponse>> {
    Json(DataResponse {
        data: report(&state.pool).await,
    })
}
