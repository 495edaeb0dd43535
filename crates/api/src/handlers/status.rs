//! Liveness and runtime statistics.
//!
//! `/health` is always mounted. `/metrics` only exists when
//! `ENABLE_METRICS` is set, see [`routes::status`](crate::routes::status).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// `"up"` if `SELECT 1` succeeds on a pooled connection, else `"down"`.
    pub database: &'static str,
}

/// GET /health
///
/// Answers 503 when the database cannot be reached so that a load balancer
/// stops routing to this instance.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (code, status, database) = match carfleet_db::health_check(&state.pool).await {
        Ok(()) => (StatusCode::OK, "ok", "up"),
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not reach the database");
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", "down")
        }
    };

    (
        code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            database,
        }),
    )
}

/// Connection pool occupancy at the time of the request.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PoolStats {
    pub size: u32,
    pub idle: usize,
    pub in_use: usize,
}

#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    pub version: &'static str,
    pub pool: PoolStats,
    pub max_build_age_years: u32,
    pub request_timeout_secs: u64,
}

/// GET /metrics
pub async fn metrics(State(state): State<AppState>) -> Json<MetricsResponse> {
    let size = state.pool.size();
    let idle = state.pool.num_idle();

    Json(MetricsResponse {
        version: env!("CARGO_PKG_VERSION"),
        pool: PoolStats {
            size,
            idle,
            in_use: (size as usize).saturating_sub(idle),
        },
        max_build_age_years: state.config.max_build_age_years,
        request_timeout_secs: state.config.request_timeout_secs,
    })
}
