//! Vehicle service: the single entry point for car reads and writes.
//!
//! Handlers never call the repositories directly. The service validates
//! batches against a fresh colour snapshot, persists them in one
//! transaction, and turns empty lookups into [`CoreError::NotFound`].

use carfleet_core::car::NewCar;
use carfleet_core::error::{CoreError, StoreError};
use carfleet_core::types::{DbId, Timestamp};
use carfleet_core::validation::CarValidator;
use carfleet_db::models::car::Car;
use carfleet_db::models::colour::Colour;
use carfleet_db::repositories::{CarRepo, ColourRepo};
use carfleet_db::DbPool;
use chrono::Utc;

/// Entity name used in not-found errors.
const CAR_ENTITY: &str = "Car";

/// Stateless orchestration over the car store. Cheap to clone.
#[derive(Clone)]
pub struct CarService {
    pool: DbPool,
    validator: CarValidator,
}

impl CarService {
    pub fn new(pool: DbPool, validator: CarValidator) -> Self {
        Self { pool, validator }
    }

    /// Validate and persist a batch of candidates.
    ///
    /// Returns the new ids in submission order; their count is the number of
    /// cars created. Nothing is written if any candidate fails validation.
    pub async fn create_many(&self, cars: &[NewCar]) -> Result<Vec<DbId>, CoreError> {
        self.create_many_at(cars, Utc::now()).await
    }

    /// [`create_many`](Self::create_many) with an explicit validation clock.
    pub async fn create_many_at(
        &self,
        cars: &[NewCar],
        now: Timestamp,
    ) -> Result<Vec<DbId>, CoreError> {
        if cars.is_empty() {
            return Ok(Vec::new());
        }

        let colours = ColourRepo::snapshot(&self.pool)
            .await
            .map_err(read_failure)?;
        tracing::debug!(
            batch_size = cars.len(),
            colours = colours.len(),
            max_age_years = self.validator.max_age_years(),
            "Validating car batch",
        );

        let validated = self
            .validator
            .validate_batch_at(cars, &colours, now)
            .map_err(|rejected| {
                tracing::warn!(
                    index = rejected.index,
                    batch_size = cars.len(),
                    error = %rejected.error,
                    "Car batch rejected",
                );
                rejected.error
            })?;

        let ids = CarRepo::create_many(&self.pool, &validated)
            .await
            .map_err(write_failure)?;

        tracing::info!(count = ids.len(), ?ids, "Cars created");
        Ok(ids)
    }

    /// Fetch one car with its colour.
    pub async fn get_one(&self, id: DbId) -> Result<Car, CoreError> {
        CarRepo::find_by_id(&self.pool, id)
            .await
            .map_err(read_failure)?
            .ok_or(CoreError::NotFound {
                entity: CAR_ENTITY,
                id,
            })
    }

    /// List every car. An empty list is a valid result.
    pub async fn list_all(&self) -> Result<Vec<Car>, CoreError> {
        CarRepo::list_all(&self.pool).await.map_err(read_failure)
    }

    /// Delete one car; a missing id is reported as not found.
    pub async fn delete_one(&self, id: DbId) -> Result<(), CoreError> {
        let deleted = CarRepo::delete(&self.pool, id)
            .await
            .map_err(write_failure)?;

        if deleted == 0 {
            return Err(CoreError::NotFound {
                entity: CAR_ENTITY,
                id,
            });
        }

        tracing::info!(car_id = id, "Car deleted");
        Ok(())
    }

    /// List the colour catalog.
    pub async fn list_colours(&self) -> Result<Vec<Colour>, CoreError> {
        ColourRepo::list_all(&self.pool).await.map_err(read_failure)
    }
}

fn read_failure(err: sqlx::Error) -> CoreError {
    CoreError::Store(StoreError::ReadFailure(err.to_string()))
}

fn write_failure(err: sqlx::Error) -> CoreError {
    CoreError::Store(StoreError::WriteFailure(err.to_string()))
}
