//! Car models.
//!
//! Reads always join `colours`, so a car leaves the store with its colour
//! name attached rather than a bare foreign key.

use carfleet_core::types::DbId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::colour::Colour;

/// Flat result of the `cars JOIN colours` query.
#[derive(Debug, Clone, FromRow)]
pub struct CarRow {
    pub id: DbId,
    pub make: String,
    pub model: String,
    pub build_date: NaiveDate,
    pub colour_id: DbId,
    pub colour_name: String,
}

/// A stored car as returned to clients.
///
/// Serializes as `{id, make, model, buildDate, colour: {id, name}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: DbId,
    pub make: String,
    pub model: String,
    pub build_date: NaiveDate,
    pub colour: Colour,
}

impl From<CarRow> for Car {
    fn from(row: CarRow) -> Self {
        Self {
            id: row.id,
            make: row.make,
            model: row.model,
            build_date: row.build_date,
            colour: Colour {
                id: row.colour_id,
                name: row.colour_name,
            },
        }
    }
}
