use carfleet_db::repositories::{CarRepo, ColourRepo};
use carfleet_db::seed::{clear_data, reset_data};
use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify seed data.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    carfleet_db::health_check(&pool).await.unwrap();

    assert_eq!(ColourRepo::list_all(&pool).await.unwrap().len(), 4);
    assert_eq!(CarRepo::count(&pool).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_clear_empties_both_tables(pool: PgPool) {
    clear_data(&pool).await.unwrap();

    assert!(ColourRepo::list_all(&pool).await.unwrap().is_empty());
    assert!(CarRepo::list_all(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reset_restores_seed_and_identities(pool: PgPool) {
    sqlx::query("INSERT INTO cars (make, model, build_date, colour_id) VALUES ('Fiat', '500', '2023-01-01', 3)")
        .execute(&pool)
        .await
        .unwrap();
    clear_data(&pool).await.unwrap();

    reset_data(&pool).await.unwrap();

    let cars = CarRepo::list_all(&pool).await.unwrap();
    assert_eq!(cars.len(), 1);
    assert_eq!(cars[0].id, 1);
    assert_eq!(cars[0].make, "Mercedes");
    assert_eq!(cars[0].colour.name, "red");

    // Identity continues after the seeded row.
    let (next,): (i64,) = sqlx::query_as(
        "INSERT INTO cars (make, model, build_date, colour_id) \
         VALUES ('Fiat', '500', '2023-01-01', 3) RETURNING id",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(next, 2);
}
