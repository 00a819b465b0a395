use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{CustomerKey, ProductKey, SurrogateKey};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDimensionRow {
    pub customer_id: SurrogateKey,
    pub name: String,
    pub city: String,
    pub state: String,
}

impl CustomerDimensionRow {
    pub fn natural_key(&self) -> CustomerKey {
        CustomerKey {
            name: self.name.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDimensionRow {
    pub product_id: SurrogateKey,
    pub name: String,
    pub category: String,
    pub manufacturer: String,
}

impl ProductDimensionRow {
    pub fn natural_key(&self) -> ProductKey {
        ProductKey {
            name: self.name.clone(),
            category: self.category.clone(),
            manufacturer: self.manufacturer.clone(),
        }
    }
}

/// One calendar date observed in the feed.
///
/// `calendar_date` and its parts are `None` only for the single null-date
/// row that exists when unparseable dates are folded into the dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateDimensionRow {
    pub date_id: SurrogateKey,
    pub calendar_date: Option<NaiveDate>,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}
