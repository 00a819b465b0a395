//! The four output tables of one pipeline run.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::{
    CustomerDimensionRow, DateDimensionRow, FactSalesRow, ModelError, ProductDimensionRow,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StarTable {
    Customer,
    Product,
    Date,
    Sales,
}

impl StarTable {
    pub const ALL: [StarTable; 4] = [
        StarTable::Customer,
        StarTable::Product,
        StarTable::Date,
        StarTable::Sales,
    ];

    /// Table name, also used as the output file stem.
    pub fn name(self) -> &'static str {
        match self {
            StarTable::Customer => "dim_customer",
            StarTable::Product => "dim_product",
            StarTable::Date => "dim_date",
            StarTable::Sales => "fact_sales",
        }
    }

    pub fn columns(self) -> &'static [&'static str] {
        match self {
            StarTable::Customer => &["customer_id", "name", "city", "state"],
            StarTable::Product => &["product_id", "name", "category", "manufacturer"],
            StarTable::Date => &["date_id", "calendar_date", "year", "month", "day"],
            StarTable::Sales => &[
                "sale_id",
                "customer_id",
                "product_id",
                "date_id",
                "quantity_sold",
                "total_value",
            ],
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            StarTable::Customer => "One row per distinct (name, city, state)",
            StarTable::Product => "One row per distinct (name, category, manufacturer)",
            StarTable::Date => "One row per distinct calendar date",
            StarTable::Sales => "One row per input record",
        }
    }
}

impl fmt::Display for StarTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StarTable {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        StarTable::ALL
            .into_iter()
            .find(|table| table.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ModelError::UnknownTable(trimmed.to_string()))
    }
}

/// Dimensions and facts derived from one input snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StarSchema {
    pub customers: Vec<CustomerDimensionRow>,
    pub products: Vec<ProductDimensionRow>,
    pub dates: Vec<DateDimensionRow>,
    pub sales: Vec<FactSalesRow>,
}

impl StarSchema {
    pub fn row_count(&self, table: StarTable) -> usize {
        match table {
            StarTable::Customer => self.customers.len(),
            StarTable::Product => self.products.len(),
            StarTable::Date => self.dates.len(),
            StarTable::Sales => self.sales.len(),
        }
    }
}
