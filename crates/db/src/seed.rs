//! Catalog bootstrap helpers applied at startup on request.
//!
//! [`reset_data`] restores the seeded state from the migrations, identity
//! counters included. [`clear_data`] empties both tables.

use carfleet_core::colour::SEED_COLOURS;
use sqlx::PgPool;

/// The example car inserted by a reset: `(make, model, build_date, colour_id)`.
pub const SEED_CAR: (&str, &str, &str, i64) = ("Mercedes", "A Class", "2022-04-04", 1);

/// Drop all rows, restart identities and reinsert the seed data.
pub async fn reset_data(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("TRUNCATE cars, colours RESTART IDENTITY")
        .execute(&mut *tx)
        .await?;

    for &(id, name) in SEED_COLOURS {
        sqlx::query("INSERT INTO colours (id, name) VALUES ($1, $2)")
            .bind(id)
            .bind(name)
            .execute(&mut *tx)
            .await?;
    }

    let (make, model, build_date, colour_id) = SEED_CAR;
    sqlx::query(
        "INSERT INTO cars (id, make, model, build_date, colour_id) \
         VALUES (1, $1, $2, $3::date, $4)",
    )
    .bind(make)
    .bind(model)
    .bind(build_date)
    .bind(colour_id)
    .execute(&mut *tx)
    .await?;

    for table in ["colours", "cars"] {
        sqlx::query(&format!(
            "SELECT setval(pg_get_serial_sequence('{table}', 'id'), (SELECT MAX(id) FROM {table}))"
        ))
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    tracing::info!(colours = SEED_COLOURS.len(), "Database reset to seed data");
    Ok(())
}

/// Delete every car and colour. Identity counters keep counting.
pub async fn clear_data(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    let cars = sqlx::query("DELETE FROM cars").execute(&mut *tx).await?;
    let colours = sqlx::query("DELETE FROM colours").execute(&mut *tx).await?;
    tx.commit().await?;

    tracing::info!(
        cars = cars.rows_affected(),
        colours = colours.rows_affected(),
        "Database emptied",
    );
    Ok(())
}
