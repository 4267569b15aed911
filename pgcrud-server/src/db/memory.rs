//! In-memory stores for tests
//!
//! Same observable behaviour as the PostgreSQL repositories: ids start at
//! 1 and are never reused, update/delete report 0 or 1 rows affected.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::repos::{DbError, ProductStore, UserStore};
use crate::models::{NewProduct, NewUser, Product, User};

struct Table<T> {
    next_id: i64,
    rows: BTreeMap<i64, T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }
}

impl<T: Clone> Table<T> {
    fn insert(&mut self, make: impl FnOnce(i64) -> T) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        self.rows.insert(id, make(id));
        id
    }

    fn replace(&mut self, id: i64, row: T) -> u64 {
        match self.rows.get_mut(&id) {
            Some(slot) => {
                *slot = row;
                1
            }
            None => 0,
        }
    }

    fn remove(&mut self, id: i64) -> u64 {
        u64::from(self.rows.remove(&id).is_some())
    }
}

/// Shared switch that makes a store fail every call, to exercise 500 paths.
#[derive(Default)]
struct FailSwitch(AtomicBool);

impl FailSwitch {
    fn check(&self) -> Result<(), DbError> {
        if self.0.load(Ordering::SeqCst) {
            return Err(DbError::Sqlx(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

/// In-memory [`UserStore`]
#[derive(Default)]
pub struct MemoryUserStore {
    table: Mutex<Table<User>>,
    failing: FailSwitch,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call return a database error (or stop doing so).
    pub fn set_failing(&self, failing: bool) {
        self.failing.0.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert(&self, user: &NewUser) -> Result<i64, DbError> {
        self.failing.check()?;
        let mut table = self.table.lock().await;
        Ok(table.insert(|id| user.clone().with_id(id)))
    }

    async fn get(&self, id: i64) -> Result<Option<User>, DbError> {
        self.failing.check()?;
        Ok(self.table.lock().await.rows.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<User>, DbError> {
        self.failing.check()?;
        Ok(self.table.lock().await.rows.values().cloned().collect())
    }

    async fn update(&self, id: i64, user: &NewUser) -> Result<u64, DbError> {
        self.failing.check()?;
        let mut table = self.table.lock().await;
        Ok(table.replace(id, user.clone().with_id(id)))
    }

    async fn delete(&self, id: i64) -> Result<u64, DbError> {
        self.failing.check()?;
        Ok(self.table.lock().await.remove(id))
    }
}

/// In-memory [`ProductStore`]
#[derive(Default)]
pub struct MemoryProductStore {
    table: Mutex<Table<Product>>,
    failing: FailSwitch,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.0.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn insert(&self, product: &NewProduct) -> Result<i64, DbError> {
        self.failing.check()?;
        let mut table = self.table.lock().await;
        Ok(table.insert(|id| product.clone().with_id(id)))
    }

    async fn get(&self, id: i64) -> Result<Option<Product>, DbError> {
        self.failing.check()?;
        Ok(self.table.lock().await.rows.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Product>, DbError> {
        self.failing.check()?;
        Ok(self.table.lock().await.rows.values().cloned().collect())
    }

    async fn update(&self, id: i64, product: &NewProduct) -> Result<u64, DbError> {
        self.failing.check()?;
        let mut table = self.table.lock().await;
        Ok(table.replace(id, product.clone().with_id(id)))
    }

    async fn delete(&self, id: i64) -> Result<u64, DbError> {
        self.failing.check()?;
        Ok(self.table.lock().await.remove(id))
    }
}
