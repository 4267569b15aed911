//! Product repository over `products(productid, name, msrp)`

use async_trait::async_trait;
use sqlx::PgPool;

use super::{DbError, ProductStore};
use crate::models::{NewProduct, Product};

/// Product repository
#[derive(Clone)]
pub struct PgProductRepo {
    pool: PgPool,
}

impl PgProductRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductRepo {
    async fn insert(&self, product: &NewProduct) -> Result<i64, DbError> {
        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO products (name, msrp) VALUES ($1, $2) RETURNING productid::BIGINT",
        )
        .bind(&product.name)
        .bind(product.msrp)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(product_id = id, "Inserted product");
        Ok(id)
    }

    async fn get(&self, id: i64) -> Result<Option<Product>, DbError> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT productid::BIGINT AS id, name, msrp::BIGINT AS msrp
            FROM products
            WHERE productid = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    async fn list(&self) -> Result<Vec<Product>, DbError> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT productid::BIGINT AS id, name, msrp::BIGINT AS msrp FROM products",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    async fn update(&self, id: i64, product: &NewProduct) -> Result<u64, DbError> {
        let rows = sqlx::query("UPDATE products SET name = $2, msrp = $3 WHERE productid = $1")
            .bind(id)
            .bind(&product.name)
            .bind(product.msrp)
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::debug!(product_id = id, rows, "Updated product");
        Ok(rows)
    }

    async fn delete(&self, id: i64) -> Result<u64, DbError> {
        let rows = sqlx::query("DELETE FROM products WHERE productid = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::debug!(product_id = id, rows, "Deleted product");
        Ok(rows)
    }
}
