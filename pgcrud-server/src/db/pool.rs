//! Database connection pool management
//!
//! Connections are acquired per statement and handed back to the pool
//! when the query future completes, fails, or is dropped.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::ServerConfig;

/// Create a PostgreSQL connection pool and verify the database answers.
///
/// # Errors
///
/// Returns an error if no connection can be opened or the liveness
/// check fails.
///
/// # Example
///
/// ```ignore
/// let config = ServerConfig::with_database_url("postgres://localhost/pgcrud");
/// let pool = create_pool(&config).await?;
/// ```
pub async fn create_pool(config: &ServerConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.database_url)
        .await?;

    ping(&pool).await?;
    tracing::info!(
        max_connections = config.max_connections,
        "Database connection pool ready"
    );

    Ok(pool)
}

/// Liveness check: run `SELECT 1` on a pooled connection.
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p pgcrud-server -- --ignored

    fn test_config() -> ServerConfig {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        ServerConfig::with_database_url(url)
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_passes_liveness_check() {
        let pool = create_pool(&test_config()).await.expect("pool creation failed");
        ping(&pool).await.expect("ping failed");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn concurrent_pool_access() {
        let pool = create_pool(&test_config()).await.expect("pool creation failed");

        // More tasks than pooled connections; each must still complete
        let handles: Vec<_> = (0..10)
            .map(|i| {
                let pool = pool.clone();
                tokio::spawn(async move {
                    let result: (i32,) = sqlx::query_as("SELECT $1::int")
                        .bind(i)
                        .fetch_one(&pool)
                        .await
                        .expect("concurrent query failed");
                    result.0
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let result = handle.await.expect("task panicked");
            assert_eq!(result, i as i32);
        }
    }

    #[tokio::test]
    async fn unreachable_database_is_an_error() {
        let config = ServerConfig {
            acquire_timeout: std::time::Duration::from_millis(200),
            ..ServerConfig::with_database_url("postgres://pgcrud@127.0.0.1:1/pgcrud")
        };
        assert!(create_pool(&config).await.is_err());
    }
}
