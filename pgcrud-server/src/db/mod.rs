//! Database layer - connection pool, migrations and repositories
//!
//! # Design Principles
//!
//! - Connection pool shared across requests - no connection per call
//! - One statement per repository operation
//! - Absent rows are `None`, never a zero-valued record

#[cfg(any(test, feature = "test-support"))]
pub mod memory;
pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_pool, ping};
pub use repos::*;
