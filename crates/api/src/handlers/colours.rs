//! Handlers for the read-only `/colours` resource.

use axum::extract::State;
use axum::Json;
use carfleet_db::models::colour::Colour;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /colours
///
/// List the colour catalog ordered by id.
pub async fn list_colours(State(state): State<AppState>) -> AppResult<Json<Vec<Colour>>> {
    let colours = state.cars.list_colours().await?;
    Ok(Json(colours))
}
