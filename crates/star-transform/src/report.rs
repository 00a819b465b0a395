//! Per-record issues absorbed during a run.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Examples kept per issue kind.
pub const MAX_EXAMPLES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    UnparsedDate,
    InvalidQuantity,
    InvalidTotalValue,
    CustomerNotFound,
    ProductNotFound,
    DateNotFound,
}

impl IssueKind {
    pub fn field(self) -> &'static str {
        match self {
            IssueKind::UnparsedDate | IssueKind::DateNotFound => "date_id",
            IssueKind::InvalidQuantity => "quantity_sold",
            IssueKind::InvalidTotalValue => "total_value",
            IssueKind::CustomerNotFound => "customer_id",
            IssueKind::ProductNotFound => "product_id",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            IssueKind::UnparsedDate => "sale date is not YYYY-MM-DD",
            IssueKind::InvalidQuantity => "quantity is not an integer",
            IssueKind::InvalidTotalValue => "total value is not numeric",
            IssueKind::CustomerNotFound => "no customer row matches",
            IssueKind::ProductNotFound => "no product row matches",
            IssueKind::DateNotFound => "no date row matches",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IssueKind::UnparsedDate => "unparsed_date",
            IssueKind::InvalidQuantity => "invalid_quantity",
            IssueKind::InvalidTotalValue => "invalid_total_value",
            IssueKind::CustomerNotFound => "customer_not_found",
            IssueKind::ProductNotFound => "product_not_found",
            IssueKind::DateNotFound => "date_not_found",
        };
        f.write_str(name)
    }
}

/// One offending record, by its zero-based position in the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordIssue {
    pub record: usize,
    pub value: String,
}

/// Issue counts of a run, with the first few examples of each kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    counts: BTreeMap<IssueKind, usize>,
    examples: BTreeMap<IssueKind, Vec<RecordIssue>>,
}

impl BuildReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, kind: IssueKind, record: usize, value: &str) {
        *self.counts.entry(kind).or_insert(0) += 1;
        let examples = self.examples.entry(kind).or_default();
        if examples.len() < MAX_EXAMPLES {
            examples.push(RecordIssue {
                record,
                value: value.to_string(),
            });
        }
    }

    pub fn count(&self, kind: IssueKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn examples(&self, kind: IssueKind) -> &[RecordIssue] {
        self.examples.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_clean(&self) -> bool {
        self.counts.is_empty()
    }

    /// Issue kinds with a non-zero count, in a fixed order.
    pub fn kinds(&self) -> impl Iterator<Item = (IssueKind, usize)> + '_ {
        self.counts.iter().map(|(kind, count)| (*kind, *count))
    }

    /// Folds a later partition's report into this one.
    pub fn merge(&mut self, other: BuildReport) {
        for (kind, count) in other.counts {
            *self.counts.entry(kind).or_insert(0) += count;
        }
        for (kind, issues) in other.examples {
            let examples = self.examples.entry(kind).or_default();
            let room = MAX_EXAMPLES.saturating_sub(examples.len());
            examples.extend(issues.into_iter().take(room));
        }
    }
}
