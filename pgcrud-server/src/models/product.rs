//! Product records

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Product row as stored in `products`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Manufacturer's suggested retail price, in whole currency units
    pub msrp: i64,
}

/// Product fields supplied by clients on create and update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub msrp: i64,
}

impl NewProduct {
    pub fn with_id(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            msrp: self.msrp,
        }
    }
}
