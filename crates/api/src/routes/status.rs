use axum::routing::get;
use axum::Router;

use crate::config::ServerConfig;
use crate::handlers::status;
use crate::state::AppState;

/// `/health`, plus `/metrics` when enabled in `config`.
pub fn router(config: &ServerConfig) -> Router<AppState> {
    let router = Router::new().route("/health", get(status::health));

    if config.enable_metrics {
        router.route("/metrics", get(status::metrics))
    } else {
        router
    }
}
