//! Candidate car validation: pure logic, no database access.
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. required fields, in the order `make`, `model`, `buildDate`, `colourId`
//! 2. the colour id exists in the [`ColourCatalog`] snapshot
//! 3. the build date parses as `YYYY-MM-DD` and is not older than the
//!    configured maximum age
//!
//! Age is measured in approximate years (`elapsed days / 365.25`), not in
//! calendar years. Only ages strictly greater than the limit are rejected.

use chrono::{NaiveDate, NaiveTime};

use crate::car::{NewCar, ValidatedCar};
use crate::colour::ColourCatalog;
use crate::error::ValidationError;
use crate::types::Timestamp;

/// Default freshness limit in whole years.
pub const DEFAULT_MAX_BUILD_AGE_YEARS: u32 = 4;

/// `chrono` format string for build dates.
pub const BUILD_DATE_FORMAT: &str = "%Y-%m-%d";

/// Length of a `YYYY-MM-DD` string.
const BUILD_DATE_LEN: usize = 10;

/// Average year length used by the age approximation.
///
/// Four years come to exactly 1461 days, so a car built exactly `max` years
/// of 365.25 days ago is still accepted and one more second rejects it.
/// Leap days in the calendar between the two dates are not counted.
pub const DAYS_PER_YEAR: f64 = 365.25;

const SECONDS_PER_DAY: f64 = 86_400.0;

type Presence = fn(&NewCar) -> bool;

/// Required fields and how to tell whether each one was supplied.
///
/// Order matters: the first missing entry is the one reported.
const REQUIRED_FIELDS: &[(&str, Presence)] = &[
    ("make", has_make),
    ("model", has_model),
    ("buildDate", has_build_date),
    ("colourId", has_colour_id),
];

fn has_make(car: &NewCar) -> bool {
    !car.make_str().is_empty()
}

fn has_model(car: &NewCar) -> bool {
    !car.model_str().is_empty()
}

fn has_build_date(car: &NewCar) -> bool {
    !car.build_date_str().is_empty()
}

fn has_colour_id(car: &NewCar) -> bool {
    car.colour_id_or_zero() != 0
}

/// A rejected batch: which candidate failed and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedCar {
    /// Zero-based position of the failing candidate in the batch.
    pub index: usize,
    pub error: ValidationError,
}

/// Stateless validator configured with the freshness limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarValidator {
    max_age_years: u32,
}

impl Default for CarValidator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_BUILD_AGE_YEARS)
    }
}

impl CarValidator {
    pub fn new(max_age_years: u32) -> Self {
        Self { max_age_years }
    }

    pub fn max_age_years(&self) -> u32 {
        self.max_age_years
    }

    /// Validate a single candidate as if the current time were `now`.
    pub fn validate_at(
        &self,
        car: &NewCar,
        colours: &ColourCatalog,
        now: Timestamp,
    ) -> Result<ValidatedCar, ValidationError> {
        check_required(car)?;

        let colour_id = car.colour_id_or_zero();
        if !colours.contains(colour_id) {
            return Err(ValidationError::UnknownColour { colour_id });
        }

        let build_date = parse_build_date(car.build_date_str())?;
        self.check_build_age(build_date, now)?;

        Ok(ValidatedCar {
            make: car.make_str().to_string(),
            model: car.model_str().to_string(),
            build_date,
            colour_id,
        })
    }

    /// Validate every candidate in a batch; the first failure rejects all.
    pub fn validate_batch_at(
        &self,
        cars: &[NewCar],
        colours: &ColourCatalog,
        now: Timestamp,
    ) -> Result<Vec<ValidatedCar>, RejectedCar> {
        cars.iter()
            .enumerate()
            .map(|(index, car)| {
                self.validate_at(car, colours, now)
                    .map_err(|error| RejectedCar { index, error })
            })
            .collect()
    }

    /// Reject build dates more than `max_age_years` approximate years old.
    pub fn check_build_age(
        &self,
        build_date: NaiveDate,
        now: Timestamp,
    ) -> Result<(), ValidationError> {
        if build_age_years(build_date, now) > f64::from(self.max_age_years) {
            return Err(ValidationError::TooOld {
                build_date,
                max_years: self.max_age_years,
            });
        }
        Ok(())
    }
}

/// Return the first missing required field, if any.
pub fn check_required(car: &NewCar) -> Result<(), ValidationError> {
    match REQUIRED_FIELDS.iter().find(|(_, present)| !present(car)) {
        Some(&(field, _)) => Err(ValidationError::MissingField { field }),
        None => Ok(()),
    }
}

/// Parse a strict `YYYY-MM-DD` build date.
pub fn parse_build_date(value: &str) -> Result<NaiveDate, ValidationError> {
    let malformed = |reason: String| ValidationError::MalformedDate {
        value: value.to_string(),
        reason,
    };

    // chrono skips leading whitespace and accepts signed years, so the
    // shape is checked byte by byte before parsing.
    if value.len() != BUILD_DATE_LEN {
        return Err(malformed("expected exactly 10 characters".to_string()));
    }
    if !has_date_shape(value) {
        return Err(malformed("expected digits in the form YYYY-MM-DD".to_string()));
    }

    NaiveDate::parse_from_str(value, BUILD_DATE_FORMAT).map_err(|e| malformed(e.to_string()))
}

fn has_date_shape(value: &str) -> bool {
    value.bytes().enumerate().all(|(i, b)| match i {
        4 | 7 => b == b'-',
        _ => b.is_ascii_digit(),
    })
}

/// Approximate age in years of a car built at midnight UTC on `build_date`.
///
/// Negative for dates in the future.
pub fn build_age_years(build_date: NaiveDate, now: Timestamp) -> f64 {
    let built_at = build_date.and_time(NaiveTime::MIN).and_utc();
    let elapsed = now.signed_duration_since(built_at);
    elapsed.num_seconds() as f64 / SECONDS_PER_DAY / DAYS_PER_YEAR
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::{Duration, TimeZone, Utc};

    use super::*;
    use crate::colour::SEED_COLOURS;

    fn catalog() -> ColourCatalog {
        ColourCatalog::from_ids(SEED_COLOURS.iter().map(|&(id, _)| id))
    }

    fn now() -> Timestamp {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn valid_car() -> NewCar {
        NewCar::new("BMW", "3 Series", "2023-01-20", 2)
    }

    // -- required fields ------------------------------------------------------

    #[test]
    fn accepts_complete_candidate() {
        let validated = CarValidator::default()
            .validate_at(&valid_car(), &catalog(), now())
            .unwrap();
        assert_eq!(validated.make, "BMW");
        assert_eq!(validated.model, "3 Series");
        assert_eq!(validated.build_date, NaiveDate::from_ymd_opt(2023, 1, 20).unwrap());
        assert_eq!(validated.colour_id, 2);
    }

    #[test]
    fn missing_model_is_reported() {
        let car = NewCar {
            model: None,
            ..valid_car()
        };
        assert_eq!(
            check_required(&car),
            Err(ValidationError::MissingField { field: "model" })
        );
    }

    #[test]
    fn empty_string_counts_as_missing() {
        let car = NewCar {
            make: Some(String::new()),
            ..valid_car()
        };
        assert_eq!(
            check_required(&car),
            Err(ValidationError::MissingField { field: "make" })
        );
    }

    #[test]
    fn zero_colour_id_counts_as_missing() {
        let car = NewCar {
            colour_id: Some(0),
            ..valid_car()
        };
        assert_eq!(
            check_required(&car),
            Err(ValidationError::MissingField { field: "colourId" })
        );
    }

    #[test]
    fn first_missing_field_wins() {
        let car = NewCar {
            make: Some("BMW".to_string()),
            ..NewCar::default()
        };
        assert_eq!(
            check_required(&car),
            Err(ValidationError::MissingField { field: "model" })
        );
        assert_eq!(
            check_required(&NewCar::default()),
            Err(ValidationError::MissingField { field: "make" })
        );
    }

    #[test]
    fn missing_field_checked_before_colour() {
        let car = NewCar {
            build_date: None,
            colour_id: Some(99),
            ..valid_car()
        };
        assert_matches!(
            CarValidator::default().validate_at(&car, &catalog(), now()),
            Err(ValidationError::MissingField { field: "buildDate" })
        );
    }

    // -- colour ---------------------------------------------------------------

    #[test]
    fn unknown_colour_rejected() {
        let car = NewCar {
            colour_id: Some(42),
            ..valid_car()
        };
        assert_eq!(
            CarValidator::default().validate_at(&car, &catalog(), now()),
            Err(ValidationError::UnknownColour { colour_id: 42 })
        );
    }

    #[test]
    fn colour_checked_before_date() {
        let car = NewCar {
            build_date: Some("not-a-date".to_string()),
            colour_id: Some(42),
            ..valid_car()
        };
        assert_matches!(
            CarValidator::default().validate_at(&car, &catalog(), now()),
            Err(ValidationError::UnknownColour { colour_id: 42 })
        );
    }

    // -- build date -----------------------------------------------------------

    #[test]
    fn malformed_dates_rejected() {
        for value in [
            "20-01-2020",
            "2020/01/20",
            "2020-1-20",
            "2020-02-30",
            "yesterday",
            " 2020-1-20",
            "2020-01- 5",
            "2020- 1-20",
            "+202-01-20",
            "2020-01-5 ",
        ] {
            assert_matches!(
                parse_build_date(value),
                Err(ValidationError::MalformedDate { .. }),
                "{value} should be malformed"
            );
        }
    }

    #[test]
    fn signed_year_is_malformed_not_too_old() {
        let car = NewCar {
            build_date: Some("+202-01-20".to_string()),
            ..valid_car()
        };
        assert_matches!(
            CarValidator::default().validate_at(&car, &catalog(), now()),
            Err(ValidationError::MalformedDate { value, .. }) if value == "+202-01-20"
        );
    }

    #[test]
    fn padded_date_is_not_stored_as_valid() {
        let car = NewCar {
            build_date: Some(" 2024-1-20".to_string()),
            ..valid_car()
        };
        assert_matches!(
            CarValidator::default().validate_batch_at(&[car], &catalog(), now()),
            Err(RejectedCar {
                index: 0,
                error: ValidationError::MalformedDate { .. },
            })
        );
    }

    #[test]
    fn malformed_date_message_names_value() {
        let err = parse_build_date("2020/01/20").unwrap_err();
        assert!(err.to_string().contains("2020/01/20"));
    }

    #[test]
    fn recent_date_accepted() {
        let validator = CarValidator::default();
        let date = NaiveDate::from_ymd_opt(2022, 1, 20).unwrap();
        assert!(validator.check_build_age(date, now()).is_ok());
    }

    #[test]
    fn old_date_rejected() {
        let validator = CarValidator::default();
        let date = NaiveDate::from_ymd_opt(2018, 1, 20).unwrap();
        assert_eq!(
            validator.check_build_age(date, now()),
            Err(ValidationError::TooOld {
                build_date: date,
                max_years: 4,
            })
        );
    }

    #[test]
    fn future_date_accepted() {
        let date = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        assert!(build_age_years(date, now()) < 0.0);
        assert!(CarValidator::default().check_build_age(date, now()).is_ok());
    }

    #[test]
    fn age_exactly_at_limit_accepted() {
        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        // 4 * 365.25 days is exactly four approximate years.
        let at_limit = date.and_time(NaiveTime::MIN).and_utc() + Duration::days(1461);
        assert_eq!(build_age_years(date, at_limit), 4.0);
        assert!(CarValidator::default().check_build_age(date, at_limit).is_ok());
    }

    #[test]
    fn age_just_past_limit_rejected() {
        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let past_limit =
            date.and_time(NaiveTime::MIN).and_utc() + Duration::days(1461) + Duration::seconds(1);
        assert_matches!(
            CarValidator::default().check_build_age(date, past_limit),
            Err(ValidationError::TooOld { max_years: 4, .. })
        );
    }

    #[test]
    fn custom_limit_is_honoured() {
        let validator = CarValidator::new(1);
        let date = NaiveDate::from_ymd_opt(2022, 6, 1).unwrap();
        assert_matches!(
            validator.check_build_age(date, now()),
            Err(ValidationError::TooOld { max_years: 1, .. })
        );
    }

    #[test]
    fn too_old_message() {
        let err = ValidationError::TooOld {
            build_date: NaiveDate::from_ymd_opt(2018, 1, 20).unwrap(),
            max_years: 4,
        };
        assert_eq!(
            err.to_string(),
            "Vehicle build date (2018-01-20) is older than the maximum allowed (4 years)"
        );
    }

    // -- batches --------------------------------------------------------------

    #[test]
    fn batch_reports_first_failing_index() {
        let cars = vec![
            valid_car(),
            NewCar {
                colour_id: Some(9),
                ..valid_car()
            },
            NewCar::default(),
        ];
        let rejected = CarValidator::default()
            .validate_batch_at(&cars, &catalog(), now())
            .unwrap_err();
        assert_eq!(rejected.index, 1);
        assert_eq!(rejected.error, ValidationError::UnknownColour { colour_id: 9 });
    }

    #[test]
    fn batch_of_valid_cars_keeps_order() {
        let cars = vec![valid_car(), NewCar::new("Audi", "A4", "2024-05-31", 4)];
        let validated = CarValidator::default()
            .validate_batch_at(&cars, &catalog(), now())
            .unwrap();
        assert_eq!(validated.len(), 2);
        assert_eq!(validated[1].make, "Audi");
    }

    #[test]
    fn empty_batch_is_valid() {
        let validated = CarValidator::default()
            .validate_batch_at(&[], &catalog(), now())
            .unwrap();
        assert!(validated.is_empty());
    }
}
