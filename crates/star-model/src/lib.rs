pub mod dimension;
pub mod error;
pub mod fact;
pub mod keys;
pub mod lookup;
pub mod record;
pub mod schema;

pub use dimension::{CustomerDimensionRow, DateDimensionRow, ProductDimensionRow};
pub use error::{ModelError, Result};
pub use fact::FactSalesRow;
pub use keys::{CustomerKey, ProductKey, SurrogateKey};
pub use lookup::CaseInsensitiveSet;
pub use record::{RawSalesRecord, SalesField};
pub use schema::{StarSchema, StarTable};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_row_counts() {
        let schema = StarSchema {
            customers: vec![CustomerDimensionRow {
                customer_id: SurrogateKey::new(0),
                name: "Ana".to_string(),
                city: "Porto".to_string(),
                state: "PR".to_string(),
            }],
            products: vec![],
            dates: vec![],
            sales: vec![],
        };
        assert_eq!(schema.row_count(StarTable::Customer), 1);
        assert_eq!(schema.row_count(StarTable::Sales), 0);
    }

    #[test]
    fn fact_row_serializes_null_keys() {
        let row = FactSalesRow {
            sale_id: SurrogateKey::new(7),
            customer_id: Some(SurrogateKey::new(1)),
            product_id: None,
            date_id: None,
            quantity_sold: Some(2),
            total_value: Some(19.5),
        };
        let json = serde_json::to_string(&row).expect("serialize fact row");
        assert_eq!(
            json,
            r#"{"sale_id":7,"customer_id":1,"product_id":null,"date_id":null,"quantity_sold":2,"total_value":19.5}"#
        );
    }
}
