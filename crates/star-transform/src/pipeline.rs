//! The transformation pipeline.
//!
//! The run is strictly linear:
//! 1. **Extract**: project and deduplicate the customer, product and date sets
//! 2. **Key**: assign surrogate keys to each dimension and index it
//! 3. **Facts**: join every record against the keyed dimensions
//!
//! Each stage takes the output of the previous one and never mutates its input.

use std::time::Instant;

use tracing::{debug, info, info_span, warn};

use star_model::{RawSalesRecord, StarSchema};

use crate::dimensions::extract_dimensions;
use crate::error::{Result, TransformError};
use crate::facts::{FactOutput, build_facts};
use crate::index::KeyedDimensions;
use crate::options::TransformOptions;
use crate::report::BuildReport;

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct StarBuild {
    pub schema: StarSchema,
    pub report: BuildReport,
}

/// Builds the star schema for one input snapshot.
///
/// Fails only when the input is structurally unusable; an empty feed cannot
/// produce well-formed dimension tables.
pub fn build_star_schema(
    records: &[RawSalesRecord],
    options: &TransformOptions,
) -> Result<StarBuild> {
    if records.is_empty() {
        return Err(TransformError::EmptyInput);
    }
    let span = info_span!(
        "build_star_schema",
        record_count = records.len(),
        partitions = options.key_strategy.partition_count()
    );
    let _guard = span.enter();

    let start = Instant::now();
    let sets = info_span!("extract").in_scope(|| extract_dimensions(records, options));
    debug!(
        customer_count = sets.customers.len(),
        product_count = sets.products.len(),
        date_count = sets.dates.len(),
        duration_ms = start.elapsed().as_millis(),
        "dimensions extracted"
    );

    let start = Instant::now();
    let dimensions =
        info_span!("key").in_scope(|| KeyedDimensions::from_sets(sets, options.key_strategy));
    debug!(duration_ms = start.elapsed().as_millis(), "dimensions keyed");

    let start = Instant::now();
    let FactOutput { rows, report } =
        info_span!("facts").in_scope(|| build_facts(records, &dimensions, options))?;
    debug_assert_eq!(rows.len(), records.len());
    debug!(
        fact_count = rows.len(),
        duration_ms = start.elapsed().as_millis(),
        "facts built"
    );

    for (kind, count) in report.kinds() {
        warn!(issue = %kind, field = kind.field(), count, "{}", kind.message());
    }

    let KeyedDimensions {
        customers,
        products,
        dates,
        ..
    } = dimensions;
    let schema = StarSchema {
        customers,
        products,
        dates,
        sales: rows,
    };
    info!(
        customers = schema.customers.len(),
        products = schema.products.len(),
        dates = schema.dates.len(),
        sales = schema.sales.len(),
        issues = report.total(),
        "star schema built"
    );
    Ok(StarBuild { schema, report })
}
