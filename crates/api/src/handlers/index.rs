use axum::Json;
use serde::Serialize;

/// Service description returned at `/`.
///
/// `GET /metrics` is listed even when disabled, in which case it answers 404.
#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub name: &'static str,
    pub version: &'static str,
    pub routes: &'static [&'static str],
}

const ROUTES: &[&str] = &[
    "GET /health",
    "GET /metrics",
    "GET /colours",
    "GET /cars",
    "POST /cars",
    "GET /car/{id}",
    "DELETE /car/{id}",
];

/// GET /
pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        name: "Car Registry API",
        version: env!("CARGO_PKG_VERSION"),
        routes: ROUTES,
    })
}
