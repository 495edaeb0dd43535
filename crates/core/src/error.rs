use chrono::NaiveDate;

use crate::types::DbId;

/// Domain-level error surfaced by the vehicle service.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Reasons a candidate car is rejected before anything is written.
///
/// The `Display` text is returned verbatim to HTTP clients.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Field '{field}' is required")]
    MissingField { field: &'static str },

    #[error("Colour validation failed - colour id {colour_id} does not exist")]
    UnknownColour { colour_id: DbId },

    #[error("Build date '{value}' is not a valid YYYY-MM-DD date: {reason}")]
    MalformedDate { value: String, reason: String },

    #[error("Vehicle build date ({build_date}) is older than the maximum allowed ({max_years} years)")]
    TooOld { build_date: NaiveDate, max_years: u32 },
}

/// Infrastructure failure while talking to the record store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read from store: {0}")]
    ReadFailure(String),

    #[error("Failed to write to store: {0}")]
    WriteFailure(String),
}
