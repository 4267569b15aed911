//! User records

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User row as stored in `users`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub age: i64,
}

/// User fields supplied by clients on create and update.
///
/// Any `id` in the body is ignored; storage assigns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub location: String,
    pub age: i64,
}

impl NewUser {
    /// Attach a storage-assigned id.
    pub fn with_id(self, id: i64) -> User {
        User {
            id,
            name: self.name,
            location: self.location,
            age: self.age,
        }
    }
}
