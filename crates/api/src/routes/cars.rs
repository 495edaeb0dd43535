//! Route definitions for cars and colours.

use axum::routing::get;
use axum::Router;

use crate::handlers::{cars, colours};
use crate::state::AppState;

/// Car and colour routes, mounted at the root.
///
/// ```text
/// GET    /cars        -> list_cars
/// POST   /cars        -> create_cars
/// GET    /car/{id}    -> get_car
/// DELETE /car/{id}    -> delete_car
/// GET    /car/        -> missing_car_id (400)
/// DELETE /car/        -> missing_car_id (400)
/// GET    /colours     -> list_colours
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/cars", get(cars::list_cars).post(cars::create_cars))
        .route("/car/{id}", get(cars::get_car).delete(cars::delete_car))
        .route(
            "/car/",
            get(cars::missing_car_id).delete(cars::missing_car_id),
        )
        .route("/colours", get(colours::list_colours))
}
