//! Sales feed ingestion.
//!
//! Reads a header-bearing CSV export of the denormalized sales feed into
//! [`RawSalesRecord`](star_model::RawSalesRecord) values for the
//! transformation stage.
//!
//! # Features
//!
//! - **Header resolution**: every required field is located by its
//!   Portuguese source header or its English alias, case-insensitively
//! - **Text loading**: all columns are loaded as text, leaving date and
//!   measure interpretation to the transformation stage
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use star_ingest::read_sales_records;
//!
//! let records = read_sales_records(Path::new("data/dados_brutos.csv"))?;
//! ```

mod error;
mod reader;
mod schema;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use reader::{
    read_csv_schema, read_sales_frame, read_sales_records, records_from_frame, validate_encoding,
};

// === Header Resolution ===
pub use schema::SourceColumns;
