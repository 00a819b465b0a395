//! Surrogate key allocation.
//!
//! Keys only have to be unique within the table being keyed. Two allocators
//! are provided:
//!
//! - [`SequentialKeys`] hands out `0, 1, 2, ...` from a single counter.
//! - [`PartitionedKeys`] combines a partition index with a per-partition
//!   counter, `partition << 33 | counter`, so independent workers never
//!   collide without any coordination. Keys are therefore sparse: the first
//!   key of partition 1 is `8589934592`.

use star_model::SurrogateKey;

use crate::options::KeyStrategy;

/// Number of low bits reserved for the per-partition counter.
pub const PARTITION_SHIFT: u32 = 33;

/// Largest partition index that still fits in a non-negative `i64` key.
pub const MAX_PARTITIONS: usize = 1 << 30;

/// Source of unique surrogate keys.
pub trait KeyAllocator {
    fn next_key(&mut self) -> SurrogateKey;
}

#[derive(Debug, Clone, Default)]
pub struct SequentialKeys {
    next: i64,
}

impl SequentialKeys {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyAllocator for SequentialKeys {
    fn next_key(&mut self) -> SurrogateKey {
        let key = SurrogateKey::new(self.next);
        self.next += 1;
        key
    }
}

#[derive(Debug, Clone)]
pub struct PartitionedKeys {
    base: i64,
    next: i64,
}

impl PartitionedKeys {
    /// # Panics
    ///
    /// Panics if `partition` is not below [`MAX_PARTITIONS`].
    pub fn new(partition: usize) -> Self {
        assert!(
            partition < MAX_PARTITIONS,
            "partition index {partition} exceeds key space"
        );
        Self {
            base: (partition as i64) << PARTITION_SHIFT,
            next: 0,
        }
    }
}

impl KeyAllocator for PartitionedKeys {
    fn next_key(&mut self) -> SurrogateKey {
        debug_assert!(self.next < 1 << PARTITION_SHIFT, "partition counter overflow");
        let key = SurrogateKey::new(self.base | self.next);
        self.next += 1;
        key
    }
}

/// Splits `len` items into at most `partitions` contiguous, near-equal chunks.
pub(crate) fn partition_size(len: usize, partitions: usize) -> usize {
    len.div_ceil(partitions.clamp(1, MAX_PARTITIONS)).max(1)
}

/// Attaches a surrogate key to every row.
pub fn assign_keys<T>(rows: Vec<T>, strategy: KeyStrategy) -> Vec<(SurrogateKey, T)> {
    match strategy {
        KeyStrategy::Sequential => {
            let mut keys = SequentialKeys::new();
            rows.into_iter().map(|row| (keys.next_key(), row)).collect()
        }
        KeyStrategy::Partitioned { partitions } => {
            let size = partition_size(rows.len(), partitions.get());
            let mut keyed = Vec::with_capacity(rows.len());
            let mut keys = PartitionedKeys::new(0);
            for (idx, row) in rows.into_iter().enumerate() {
                if idx % size == 0 {
                    keys = PartitionedKeys::new(idx / size);
                }
                keyed.push((keys.next_key(), row));
            }
            keyed
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::num::NonZeroUsize;

    use super::*;

    #[test]
    fn sequential_keys_count_from_zero() {
        let keyed = assign_keys(vec!["a", "b", "c"], KeyStrategy::Sequential);
        let keys: Vec<i64> = keyed.iter().map(|(key, _)| key.value()).collect();
        assert_eq!(keys, vec![0, 1, 2]);
    }

    #[test]
    fn partitioned_keys_encode_partition() {
        let strategy = KeyStrategy::Partitioned {
            partitions: NonZeroUsize::new(2).unwrap(),
        };
        let keyed = assign_keys(vec!["a", "b", "c", "d", "e"], strategy);
        let keys: Vec<i64> = keyed.iter().map(|(key, _)| key.value()).collect();
        assert_eq!(keys, vec![0, 1, 2, 1 << 33, (1 << 33) + 1]);
    }

    #[test]
    fn partitioned_keys_never_collide_across_partitions() {
        let mut seen = HashSet::new();
        for partition in 0..8 {
            let mut keys = PartitionedKeys::new(partition);
            for _ in 0..100 {
                assert!(seen.insert(keys.next_key()));
            }
        }
    }

    #[test]
    fn more_partitions_than_rows() {
        let strategy = KeyStrategy::Partitioned {
            partitions: NonZeroUsize::new(16).unwrap(),
        };
        let keyed = assign_keys(vec!["a", "b"], strategy);
        let keys: Vec<i64> = keyed.iter().map(|(key, _)| key.value()).collect();
        assert_eq!(keys, vec![0, 1 << 33]);
    }

    #[test]
    fn empty_input_has_no_keys() {
        assert!(assign_keys(Vec::<u8>::new(), KeyStrategy::Sequential).is_empty());
    }
}
