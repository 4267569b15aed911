//! Repository implementations for database access
//!
//! Handlers talk to storage through [`UserStore`] and [`ProductStore`].
//! The PostgreSQL repositories here implement both; each method runs a
//! single parameterized statement.

pub mod products;
pub mod users;

use async_trait::async_trait;

use crate::models::{NewProduct, NewUser, Product, User};

pub use products::PgProductRepo;
pub use users::PgUserRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Storage operations for users
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a user and return the id storage assigned.
    async fn insert(&self, user: &NewUser) -> Result<i64, DbError>;

    /// Fetch one user; `None` if the id does not exist.
    async fn get(&self, id: i64) -> Result<Option<User>, DbError>;

    /// Fetch every user in storage order.
    async fn list(&self) -> Result<Vec<User>, DbError>;

    /// Replace all fields of a user, returning rows affected.
    async fn update(&self, id: i64, user: &NewUser) -> Result<u64, DbError>;

    /// Remove a user, returning rows affected.
    async fn delete(&self, id: i64) -> Result<u64, DbError>;
}

/// Storage operations for products
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn insert(&self, product: &NewProduct) -> Result<i64, DbError>;
    async fn get(&self, id: i64) -> Result<Option<Product>, DbError>;
    async fn list(&self) -> Result<Vec<Product>, DbError>;
    async fn update(&self, id: i64, product: &NewProduct) -> Result<u64, DbError>;
    async fn delete(&self, id: i64) -> Result<u64, DbError>;
}
