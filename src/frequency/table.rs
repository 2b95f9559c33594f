//! Exact frequency table for mode and top-K queries
//!
//! Keeps a full value -> occurrence-count map, so every frequency query is
//! exact. This is the exact counterpart of sketch-based heavy-hitter
//! structures: O(distinct) memory instead of O(k), but no estimation error.

use crate::traits::{Accumulator, FrequencyRanked};
use core::fmt::Debug;
use core::hash::Hash;

#[cfg(feature = "std")]
use std::{collections::HashMap, vec::Vec};

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::{collections::BTreeMap as HashMap, vec::Vec};

/// Exact frequency counter
///
/// Tracks how many times each item has been added and answers mode and
/// top-K queries with exact counts. The ranking is ordered by descending
/// count with ties broken by ascending item order, so it is deterministic
/// for any permutation of the input.
///
/// # Example
///
/// ```
/// use exactstats::frequency::FrequencyTable;
///
/// let mut table = FrequencyTable::new();
///
/// for _ in 0..100 { table.add("apple"); }
/// for _ in 0..50 { table.add("banana"); }
/// for _ in 0..25 { table.add("cherry"); }
///
/// assert_eq!(table.count_of(&"banana"), 50);
/// assert_eq!(table.top_k(2), vec![("apple", 100), ("banana", 50)]);
/// ```
#[derive(Clone, Debug)]
pub struct FrequencyTable<T: Hash + Eq + Ord + Clone + Debug> {
    /// Occurrence count per item
    counts: HashMap<T, u64>,
    /// Total count of all items
    total: u64,
}

impl<T: Hash + Eq + Ord + Clone + Debug> Default for FrequencyTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq + Ord + Clone + Debug> FrequencyTable<T> {
    /// Create a new empty frequency table
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
            total: 0,
        }
    }

    /// Add one occurrence of an item
    pub fn add(&mut self, item: T) {
        self.add_n(item, 1);
    }

    /// Add `n` occurrences of an item
    pub fn add_n(&mut self, item: T, n: u64) {
        if n == 0 {
            return;
        }
        *self.counts.entry(item).or_insert(0) += n;
        self.total += n;
    }

    /// Exact number of occurrences of an item (0 if never seen)
    pub fn count_of(&self, item: &T) -> u64 {
        self.counts.get(item).copied().unwrap_or(0)
    }

    /// Number of distinct items seen
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Total number of occurrences across all items
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Check if no items have been added
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// All (item, count) pairs ordered by descending count
    ///
    /// Ties are broken by ascending item order.
    pub fn mode(&self) -> Vec<(T, u64)> {
        let mut ranked: Vec<(T, u64)> = self
            .counts
            .iter()
            .map(|(item, &count)| (item.clone(), count))
            .collect();
        ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked
    }

    /// The k most frequent items
    pub fn top_k(&self, k: usize) -> Vec<(T, u64)> {
        let mut ranked = self.mode();
        ranked.truncate(k);
        ranked
    }

    /// Merge another table into this one, summing per-item counts
    pub fn merge_counts(&mut self, other: &Self) {
        for (item, &count) in other.counts.iter() {
            *self.counts.entry(item.clone()).or_insert(0) += count;
        }
        self.total += other.total;
    }

    /// Reset to the empty state
    pub fn clear(&mut self) {
        self.counts.clear();
        self.total = 0;
    }

    /// Iterate over (item, count) pairs in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&T, u64)> + '_ {
        self.counts.iter().map(|(item, &count)| (item, count))
    }
}

impl<T: Hash + Eq + Ord + Clone + Debug> Accumulator for FrequencyTable<T> {
    type Item = T;

    fn add(&mut self, item: T) {
        FrequencyTable::add(self, item);
    }

    fn merge(&mut self, other: &Self) {
        self.merge_counts(other);
    }

    fn clear(&mut self) {
        FrequencyTable::clear(self);
    }

    fn count(&self) -> u64 {
        self.total
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>()
            + self.counts.len() * (core::mem::size_of::<T>() + core::mem::size_of::<u64>())
    }
}

impl<T: Hash + Eq + Ord + Clone + Debug> FrequencyRanked for FrequencyTable<T> {
    fn count_of(&self, item: &T) -> u64 {
        FrequencyTable::count_of(self, item)
    }

    fn distinct(&self) -> usize {
        FrequencyTable::distinct(self)
    }

    fn mode(&self) -> Vec<(T, u64)> {
        FrequencyTable::mode(self)
    }
}
