use serde::{Deserialize, Serialize};

use crate::SurrogateKey;

/// One sale, referencing the dimensions by surrogate key.
///
/// A `None` foreign key means the record's attributes matched no dimension
/// row; a `None` measure means the source text could not be cast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactSalesRow {
    pub sale_id: SurrogateKey,
    pub customer_id: Option<SurrogateKey>,
    pub product_id: Option<SurrogateKey>,
    pub date_id: Option<SurrogateKey>,
    pub quantity_sold: Option<i32>,
    pub total_value: Option<f64>,
}
