//! Run options for the transformation.

use std::num::NonZeroUsize;

use serde::Serialize;

/// How surrogate keys are allocated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyStrategy {
    /// A single counter starting at zero.
    #[default]
    Sequential,
    /// Rows are split into contiguous partitions, each with its own counter;
    /// the partition index is encoded in the high bits of the key. Fact rows
    /// are built on one worker thread per partition.
    Partitioned { partitions: NonZeroUsize },
}

impl KeyStrategy {
    /// Builds a strategy for `count` workers; one worker means sequential.
    pub fn for_partitions(count: usize) -> Self {
        match NonZeroUsize::new(count) {
            Some(partitions) if partitions.get() > 1 => KeyStrategy::Partitioned { partitions },
            _ => KeyStrategy::Sequential,
        }
    }

    pub fn partition_count(self) -> usize {
        match self {
            KeyStrategy::Sequential => 1,
            KeyStrategy::Partitioned { partitions } => partitions.get(),
        }
    }
}

/// What happens to records whose sale date cannot be parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnparsedDatePolicy {
    /// No date row is created for them; their fact rows get a null `date_id`.
    #[default]
    Exclude,
    /// A single date row with null date parts is created and every such
    /// record references it.
    NullRow,
}

/// Options controlling one transformation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TransformOptions {
    pub key_strategy: KeyStrategy,
    pub unparsed_dates: UnparsedDatePolicy,
}

impl TransformOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_key_strategy(mut self, strategy: KeyStrategy) -> Self {
        self.key_strategy = strategy;
        self
    }

    #[must_use]
    pub fn with_unparsed_dates(mut self, policy: UnparsedDatePolicy) -> Self {
        self.unparsed_dates = policy;
        self
    }
}
