//! Star schema output generation.
//!
//! Each table is written as a single header-bearing CSV file named after the
//! table (`dim_customer.csv`, `dim_product.csv`, `dim_date.csv`,
//! `fact_sales.csv`).

mod csv;

pub use csv::{OutputPaths, table_path, write_star_schema, write_table_csv};
