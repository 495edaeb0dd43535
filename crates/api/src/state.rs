use std::sync::Arc;

use crate::config::ServerConfig;
use crate::service::CarService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: carfleet_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Car validation and persistence.
    pub cars: CarService,
}
