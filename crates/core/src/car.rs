//! Candidate car submissions.
//!
//! A [`NewCar`] is what a client posts before validation: every field is
//! optional at the type level so that absent, `null` and empty values all
//! reach the validator and are reported as a missing field rather than
//! rejected by the JSON decoder.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// A car submission that has not been validated or persisted yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCar {
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    /// Textual `YYYY-MM-DD` date, parsed during validation.
    #[serde(default)]
    pub build_date: Option<String>,
    #[serde(default)]
    pub colour_id: Option<DbId>,
}

impl NewCar {
    pub fn new(make: &str, model: &str, build_date: &str, colour_id: DbId) -> Self {
        Self {
            make: Some(make.to_string()),
            model: Some(model.to_string()),
            build_date: Some(build_date.to_string()),
            colour_id: Some(colour_id),
        }
    }

    /// Make, or the empty string when absent.
    pub fn make_str(&self) -> &str {
        self.make.as_deref().unwrap_or_default()
    }

    /// Model, or the empty string when absent.
    pub fn model_str(&self) -> &str {
        self.model.as_deref().unwrap_or_default()
    }

    /// Build date text, or the empty string when absent.
    pub fn build_date_str(&self) -> &str {
        self.build_date.as_deref().unwrap_or_default()
    }

    /// Colour id, or zero when absent.
    pub fn colour_id_or_zero(&self) -> DbId {
        self.colour_id.unwrap_or_default()
    }
}

/// A candidate that passed every validation check, with its date parsed.
///
/// Only values of this type can be handed to the store, so an unchecked
/// submission never reaches an `INSERT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedCar {
    pub make: String,
    pub model: String,
    pub build_date: NaiveDate,
    pub colour_id: DbId,
}
