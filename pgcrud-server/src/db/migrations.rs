//! Schema migrations for the users and products tables

use sqlx::PgPool;

/// Create the `users` and `products` tables if they do not exist.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            userid BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            location TEXT NOT NULL,
            age BIGINT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS products (
            productid BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            msrp BIGINT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Migrations complete");
    Ok(())
}
