//! Response envelope for mutating endpoints

use serde::{Deserialize, Serialize};

/// `{id, message}` body returned by create, update and delete.
///
/// Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub id: i64,
    pub message: String,
}

impl Envelope {
    pub fn created(entity: &str, id: i64) -> Self {
        Self {
            id,
            message: format!("{} created successfully", entity),
        }
    }

    pub fn updated(entity: &str, id: i64, rows_affected: u64) -> Self {
        Self {
            id,
            message: format!(
                "{} updated successfully. Total rows/record affected {}",
                entity, rows_affected
            ),
        }
    }

    pub fn deleted(entity: &str, id: i64, rows_affected: u64) -> Self {
        Self {
            id,
            message: format!(
                "{} deleted successfully. Total rows/record affected {}",
                entity, rows_affected
            ),
        }
    }
}
