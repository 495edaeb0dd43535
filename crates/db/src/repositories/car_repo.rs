//! Repository for the `cars` table.
//!
//! Inserts take [`ValidatedCar`] so only checked candidates are written.
//! The `colour_id` foreign key still guards the table if a colour vanished
//! between validation and insert.

use carfleet_core::car::ValidatedCar;
use carfleet_core::types::DbId;
use sqlx::PgPool;

use crate::models::car::{Car, CarRow};

/// Select list shared by every read; always joined with `colours`.
const CAR_SELECT: &str = "\
    SELECT c.id, c.make, c.model, c.build_date, c.colour_id, col.name AS colour_name \
    FROM cars c \
    JOIN colours col ON col.id = c.colour_id";

/// Provides CRUD operations for cars.
pub struct CarRepo;

impl CarRepo {
    /// Insert a single car, returning its store-assigned id.
    pub async fn create(pool: &PgPool, input: &ValidatedCar) -> Result<DbId, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let id = Self::insert_inner(&mut tx, input).await?;
        tx.commit().await?;
        Ok(id)
    }

    /// Insert a batch of cars in one transaction.
    ///
    /// Either every row is written or none is. Ids are returned in input order.
    pub async fn create_many(
        pool: &PgPool,
        inputs: &[ValidatedCar],
    ) -> Result<Vec<DbId>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let mut ids = Vec::with_capacity(inputs.len());
        for input in inputs {
            ids.push(Self::insert_inner(&mut tx, input).await?);
        }

        tx.commit().await?;
        Ok(ids)
    }

    /// Find a car by its ID, joined with its colour.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Car>, sqlx::Error> {
        let query = format!("{CAR_SELECT} WHERE c.id = $1");
        let row = sqlx::query_as::<_, CarRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Car::from))
    }

    /// List every car ordered by id. An empty table yields an empty vec.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Car>, sqlx::Error> {
        let query = format!("{CAR_SELECT} ORDER BY c.id");
        let rows = sqlx::query_as::<_, CarRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Car::from).collect())
    }

    /// Delete a car by id. Returns the number of rows removed (0 or 1).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cars WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Count stored cars.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM cars")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    async fn insert_inner(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        input: &ValidatedCar,
    ) -> Result<DbId, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO cars (make, model, build_date, colour_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id",
        )
        .bind(&input.make)
        .bind(&input.model)
        .bind(input.build_date)
        .bind(input.colour_id)
        .fetch_one(&mut **tx)
        .await?;
        Ok(id)
    }
}
