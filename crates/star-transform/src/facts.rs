//! Fact table construction.
//!
//! Each raw record is probed once against the customer, product and date
//! lookups. A miss leaves the foreign key null instead of dropping the
//! record, so the fact table always has exactly one row per record.

use std::thread;

use star_model::{CustomerKey, FactSalesRow, ProductKey, RawSalesRecord};
use tracing::{debug, trace};

use crate::date::parse_sale_date;
use crate::error::{Result, TransformError};
use crate::index::KeyedDimensions;
use crate::keys::{KeyAllocator, PartitionedKeys, SequentialKeys, partition_size};
use crate::measures::{parse_quantity, parse_total_value};
use crate::options::{KeyStrategy, TransformOptions};
use crate::report::{BuildReport, IssueKind};

/// Fact rows in input order, with the per-record issues met while building them.
#[derive(Debug, Clone, Default)]
pub struct FactOutput {
    pub rows: Vec<FactSalesRow>,
    pub report: BuildReport,
}

/// Builds one fact row per record.
///
/// With [`KeyStrategy::Partitioned`] the records are split into contiguous
/// partitions, each built on its own scoped worker thread with its own key
/// allocator; the partitions are concatenated back in input order.
pub fn build_facts(
    records: &[RawSalesRecord],
    dimensions: &KeyedDimensions,
    options: &TransformOptions,
) -> Result<FactOutput> {
    match options.key_strategy {
        KeyStrategy::Sequential => Ok(build_partition(
            records,
            0,
            dimensions,
            &mut SequentialKeys::new(),
        )),
        KeyStrategy::Partitioned { partitions } => {
            let size = partition_size(records.len(), partitions.get());
            let outputs = thread::scope(|scope| {
                let handles: Vec<_> = records
                    .chunks(size)
                    .enumerate()
                    .map(|(partition, chunk)| {
                        scope.spawn(move || {
                            let mut keys = PartitionedKeys::new(partition);
                            build_partition(chunk, partition * size, dimensions, &mut keys)
                        })
                    })
                    .collect();
                handles
                    .into_iter()
                    .enumerate()
                    .map(|(partition, handle)| {
                        handle
                            .join()
                            .map_err(|_| TransformError::WorkerPanicked { partition })
                    })
                    .collect::<Result<Vec<_>>>()
            })?;

            let mut combined = FactOutput {
                rows: Vec::with_capacity(records.len()),
                report: BuildReport::new(),
            };
            for output in outputs {
                combined.rows.extend(output.rows);
                combined.report.merge(output.report);
            }
            debug!(
                partition_count = records.len().div_ceil(size),
                record_count = records.len(),
                "partitioned fact build complete"
            );
            Ok(combined)
        }
    }
}

fn build_partition<A: KeyAllocator>(
    records: &[RawSalesRecord],
    offset: usize,
    dimensions: &KeyedDimensions,
    keys: &mut A,
) -> FactOutput {
    let mut report = BuildReport::new();
    let mut rows = Vec::with_capacity(records.len());
    for (pos, record) in records.iter().enumerate() {
        let idx = offset + pos;

        let customer_id = dimensions.customer_index.get(&CustomerKey::of(record));
        if customer_id.is_none() {
            report.record(IssueKind::CustomerNotFound, idx, &record.customer_name);
        }

        let product_id = dimensions.product_index.get(&ProductKey::of(record));
        if product_id.is_none() {
            report.record(IssueKind::ProductNotFound, idx, &record.product_name);
        }

        let calendar_date = parse_sale_date(&record.sale_date);
        if calendar_date.is_none() {
            trace!(record = idx, "unparseable sale date");
            report.record(IssueKind::UnparsedDate, idx, &record.sale_date);
        }
        let date_id = dimensions.date_index.get(&calendar_date);
        if date_id.is_none() && calendar_date.is_some() {
            report.record(IssueKind::DateNotFound, idx, &record.sale_date);
        }

        let quantity_sold = parse_quantity(&record.quantity_sold);
        if quantity_sold.is_none() {
            trace!(record = idx, "invalid quantity");
            report.record(IssueKind::InvalidQuantity, idx, &record.quantity_sold);
        }
        let total_value = parse_total_value(&record.total_value);
        if total_value.is_none() {
            trace!(record = idx, "invalid total value");
            report.record(IssueKind::InvalidTotalValue, idx, &record.total_value);
        }

        rows.push(FactSalesRow {
            sale_id: keys.next_key(),
            customer_id,
            product_id,
            date_id,
            quantity_sold,
            total_value,
        });
    }
    FactOutput { rows, report }
}
