//! Repository for the `colours` reference table.

use carfleet_core::colour::ColourCatalog;
use sqlx::PgPool;

use crate::models::colour::Colour;

/// Read-only access to colours.
pub struct ColourRepo;

impl ColourRepo {
    /// List every colour ordered by id.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Colour>, sqlx::Error> {
        sqlx::query_as::<_, Colour>("SELECT id, name FROM colours ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Load the whole table into an in-memory [`ColourCatalog`].
    pub async fn snapshot(pool: &PgPool) -> Result<ColourCatalog, sqlx::Error> {
        let colours = Self::list_all(pool).await?;
        Ok(ColourCatalog::from_ids(colours.into_iter().map(|c| c.id)))
    }
}
