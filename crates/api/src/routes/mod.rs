pub mod cars;
pub mod status;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the application route tree (everything except `/health` and `/metrics`).
///
/// ```text
/// /                 service index
/// /cars             list, create
/// /car/{id}         get, delete
/// /colours          list
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::index::index))
        .merge(cars::router())
}
