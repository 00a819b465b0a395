//! Dimensional modeling of the denormalized sales feed.
//!
//! This crate turns raw sales records into a star schema:
//!
//! - **date**: `YYYY-MM-DD` parsing and year/month/day decomposition
//! - **measures**: casting of quantity and total value text
//! - **dimensions**: projection and deduplication of customer, product and date sets
//! - **keys**: surrogate key allocation, sequential or partition-aware
//! - **index**: keyed dimensions with natural-key hash lookups
//! - **facts**: left-outer hash join of records against the keyed dimensions
//! - **pipeline**: the linear run from records to tables
//! - **frame**: conversion of the tables to polars DataFrames

pub mod date;
pub mod dimensions;
pub mod error;
pub mod facts;
pub mod frame;
pub mod index;
pub mod keys;
pub mod measures;
pub mod options;
pub mod pipeline;
pub mod report;

pub use date::{DATE_FORMAT, DateParts, decompose_date, parse_sale_date};
pub use dimensions::{DimensionSets, dedup_natural_keys, extract_dimensions};
pub use error::{Result, TransformError};
pub use facts::{FactOutput, build_facts};
pub use frame::{star_frames, table_frame};
pub use index::{DimensionIndex, KeyedDimensions};
pub use keys::{KeyAllocator, PartitionedKeys, SequentialKeys, assign_keys};
pub use measures::{parse_quantity, parse_total_value};
pub use options::{KeyStrategy, TransformOptions, UnparsedDatePolicy};
pub use pipeline::{StarBuild, build_star_schema};
pub use report::{BuildReport, IssueKind, RecordIssue};
