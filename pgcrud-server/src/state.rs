//! Application state shared across handlers

use std::sync::Arc;

use sqlx::PgPool;

use crate::db::repos::{PgProductRepo, PgUserRepo, ProductStore, UserStore};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    users: Arc<dyn UserStore>,
    products: Arc<dyn ProductStore>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserStore>, products: Arc<dyn ProductStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { users, products }),
        }
    }

    /// State backed by PostgreSQL repositories sharing one pool.
    pub fn postgres(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PgUserRepo::new(pool.clone())),
            Arc::new(PgProductRepo::new(pool)),
        )
    }

    pub fn users(&self) -> &dyn UserStore {
        self.inner.users.as_ref()
    }

    pub fn products(&self) -> &dyn ProductStore {
        self.inner.products.as_ref()
    }
}
