//! User repository
//!
//! One statement per operation against `users(userid, name, location, age)`.
//! Ids are cast to BIGINT so tables created with SERIAL decode as `i64`.

use async_trait::async_trait;
use sqlx::PgPool;

use super::{DbError, UserStore};
use crate::models::{NewUser, User};

/// User repository
#[derive(Clone)]
pub struct PgUserRepo {
    pool: PgPool,
}

impl PgUserRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserRepo {
    async fn insert(&self, user: &NewUser) -> Result<i64, DbError> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO users (name, location, age)
            VALUES ($1, $2, $3)
            RETURNING userid::BIGINT
            "#,
        )
        .bind(&user.name)
        .bind(&user.location)
        .bind(user.age)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(user_id = id, "Inserted user");
        Ok(id)
    }

    async fn get(&self, id: i64) -> Result<Option<User>, DbError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT userid::BIGINT AS id, name, location, age::BIGINT AS age
            FROM users
            WHERE userid = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        if user.is_none() {
            tracing::debug!(user_id = id, "No user row returned");
        }
        Ok(user)
    }

    async fn list(&self) -> Result<Vec<User>, DbError> {
        // No ORDER BY: callers must not rely on row order
        let users = sqlx::query_as::<_, User>(
            "SELECT userid::BIGINT AS id, name, location, age::BIGINT AS age FROM users",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn update(&self, id: i64, user: &NewUser) -> Result<u64, DbError> {
        let result = sqlx::query(
            "UPDATE users SET name = $2, location = $3, age = $4 WHERE userid = $1",
        )
        .bind(id)
        .bind(&user.name)
        .bind(&user.location)
        .bind(user.age)
        .execute(&self.pool)
        .await?;

        let rows = result.rows_affected();
        tracing::debug!(user_id = id, rows, "Updated user");
        Ok(rows)
    }

    async fn delete(&self, id: i64) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM users WHERE userid = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        let rows = result.rows_affected();
        tracing::debug!(user_id = id, rows, "Deleted user");
        Ok(rows)
    }
}
