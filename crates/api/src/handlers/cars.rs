//! Handlers for the `/cars` and `/car/{id}` resources.
//!
//! Thin adapters over [`CarService`](crate::service::CarService): they
//! decode input, call the service, and choose the status code.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use carfleet_core::car::NewCar;
use carfleet_core::types::DbId;
use carfleet_db::models::car::Car;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Body returned by a successful delete.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// GET /cars
///
/// List every car with its colour. An empty store answers 404.
pub async fn list_cars(State(state): State<AppState>) -> AppResult<Json<Vec<Car>>> {
    let cars = state.cars.list_all().await?;

    if cars.is_empty() {
        return Err(AppError::NotFound("No cars found".into()));
    }

    Ok(Json(cars))
}

/// POST /cars
///
/// Create a batch of cars. Every car must pass validation or nothing is
/// stored. Responds 201 with an empty body.
pub async fn create_cars(
    State(state): State<AppState>,
    payload: Result<Json<Vec<NewCar>>, JsonRejection>,
) -> AppResult<StatusCode> {
    let Json(cars) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "Unparseable car batch");
        AppError::BadRequest("Error parsing request body".into())
    })?;

    state.cars.create_many(&cars).await?;

    Ok(StatusCode::CREATED)
}

/// GET /car/{id}
pub async fn get_car(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Car>> {
    let id = parse_car_id(&raw_id)?;
    let car = state.cars.get_one(id).await?;
    Ok(Json(car))
}

/// DELETE /car/{id}
pub async fn delete_car(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_car_id(&raw_id)?;
    state.cars.delete_one(id).await?;
    Ok(Json(MessageResponse {
        message: "Vehicle deleted successfully",
    }))
}

/// GET|DELETE /car/
///
/// The id segment is present in the route but blank.
pub async fn missing_car_id() -> AppError {
    tracing::warn!("Missing param id on /car/{{id}}");
    empty_id()
}

/// Parse the `{id}` path segment, rejecting blank or non-integer values.
pub fn parse_car_id(raw: &str) -> AppResult<DbId> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(empty_id());
    }
    trimmed.parse::<DbId>().map_err(|_| {
        AppError::BadRequest(format!("Parameter 'id' must be an integer, got '{trimmed}'"))
    })
}

fn empty_id() -> AppError {
    AppError::BadRequest("Parameter 'id' cannot be empty".into())
}
