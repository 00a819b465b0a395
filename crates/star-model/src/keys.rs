//! Natural and surrogate keys.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::RawSalesRecord;

/// Opaque system-assigned identifier of a table row.
///
/// Keys are unique within one table only. They are not dense, not ordered,
/// and not stable between runs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SurrogateKey(i64);

impl SurrogateKey {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for SurrogateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Natural key of the customer dimension.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomerKey {
    pub name: String,
    pub city: String,
    pub state: String,
}

impl CustomerKey {
    pub fn of(record: &RawSalesRecord) -> Self {
        Self {
            name: record.customer_name.clone(),
            city: record.city.clone(),
            state: record.state.clone(),
        }
    }
}

/// Natural key of the product dimension.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductKey {
    pub name: String,
    pub category: String,
    pub manufacturer: String,
}

impl ProductKey {
    pub fn of(record: &RawSalesRecord) -> Self {
        Self {
            name: record.product_name.clone(),
            category: record.category.clone(),
            manufacturer: record.manufacturer.clone(),
        }
    }
}
