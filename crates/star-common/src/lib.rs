//! Shared utilities for the star-schema crates.
//!
//! This crate provides helpers used across the workspace: reading polars
//! cells back as text, and lenient parsing of numeric text cells.

pub mod numeric;
pub mod polars;

pub use numeric::{parse_f64, parse_i64};
pub use polars::{any_to_string, column_text};
