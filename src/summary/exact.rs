//! Exact running summary (mean, median, quantiles, mode)
//!
//! Keeps the full ordered multiset of samples, so every query is exact.
//! Moments are computed with a Welford pass over the sorted samples, which
//! is numerically stable and gives bit-identical results for any
//! permutation of the same input.

use crate::math;
use crate::traits::{Accumulator, FrequencyRanked, OrderStatistics, Sample};

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Exact summary-statistics accumulator
///
/// Ingests numeric samples one at a time and reports exact mean, median,
/// quantiles, variance, and a frequency-ranked mode list on demand. The
/// samples are stored in a sorted vec, so inserts are O(n) and order
/// queries are O(1); moment queries are O(n). Every query is a pure
/// function of the accumulated multiset: any permutation of the same
/// samples gives identical answers.
///
/// Queries never mutate the accumulator, and queries that are undefined on
/// an empty dataset return `None` rather than a sentinel value.
///
/// # Example
///
/// ```
/// use exactstats::summary::Summary;
///
/// let mut summary = Summary::new();
///
/// for value in [2, 4, 4, 4, 5, 5, 7, 9] {
///     summary.add(value);
/// }
///
/// assert!((summary.mean().unwrap() - 5.0).abs() < 1e-9);
/// assert_eq!(summary.median(), Some(4.5));
/// assert_eq!(summary.mode()[0], (4, 3));
/// assert_eq!(summary.min(), Some(2));
/// assert_eq!(summary.max(), Some(9));
/// ```
///
/// # Partitioned Usage
///
/// ```
/// use exactstats::summary::Summary;
/// use exactstats::traits::Accumulator;
///
/// let mut left = Summary::new();
/// let mut right = Summary::new();
///
/// // Worker 1
/// for v in [1, 2, 3] {
///     left.add(v);
/// }
///
/// // Worker 2
/// for v in [4, 5, 6] {
///     right.add(v);
/// }
///
/// // Merge
/// left.merge(&right);
/// assert_eq!(left.mean(), Some(3.5));
/// assert_eq!(left.median(), Some(3.5));
/// ```
#[derive(Clone, Debug)]
pub struct Summary<T: Sample> {
    /// Observed samples, kept sorted ascending
    samples: Vec<T>,
}

impl<T: Sample> Default for Summary<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Sample> Summary<T> {
    /// Create a new empty summary
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
        }
    }

    /// Create a new empty summary with room for `capacity` samples
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
        }
    }

    /// Add a sample
    ///
    /// The sample is inserted at its sorted position (O(n) worst case).
    /// NaN samples are ignored so comparisons over the stored data stay
    /// total and derived statistics are never poisoned.
    pub fn add(&mut self, sample: T) {
        if sample.is_nan() {
            return;
        }

        let idx = self.samples.partition_point(|probe| *probe < sample);
        self.samples.insert(idx, sample);
    }

    /// Get the number of samples
    pub fn len(&self) -> u64 {
        self.samples.len() as u64
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Welford pass over the sorted samples, returning (mean, m2)
    ///
    /// Deterministic for a given multiset since the traversal order is the
    /// sorted order, not the insertion order.
    fn moments(&self) -> (f64, f64) {
        let mut mean = 0.0;
        let mut m2 = 0.0;
        for (i, &sample) in self.samples.iter().enumerate() {
            let value = sample.to_f64();
            let delta = value - mean;
            mean += delta / (i + 1) as f64;
            m2 += delta * (value - mean);
        }
        (mean, m2)
    }

    /// Get the arithmetic mean, or `None` if no samples have been added
    pub fn mean(&self) -> Option<f64> {
        if self.samples.is_empty() {
            None
        } else {
            Some(self.moments().0)
        }
    }

    /// Get the median, or `None` if no samples have been added
    ///
    /// For an odd number of samples this is the middle value of the sorted
    /// data; for an even number it is the average of the two middle values.
    pub fn median(&self) -> Option<f64> {
        let n = self.samples.len();
        if n == 0 {
            return None;
        }
        if n % 2 == 1 {
            Some(self.samples[n / 2].to_f64())
        } else {
            Some((self.samples[n / 2 - 1].to_f64() + self.samples[n / 2].to_f64()) / 2.0)
        }
    }

    /// Get the sample at the given rank (0.0 to 1.0), nearest-rank (lower)
    ///
    /// Ranks outside [0, 1] are clamped. Returns `None` when empty.
    pub fn quantile(&self, rank: f64) -> Option<T> {
        let n = self.samples.len();
        if n == 0 {
            return None;
        }
        let rank = rank.clamp(0.0, 1.0);
        let idx = math::floor(rank * (n - 1) as f64) as usize;
        Some(self.samples[idx.min(n - 1)])
    }

    /// Get the fraction of samples less than or equal to `value`
    ///
    /// Returns 0.0 when empty.
    pub fn rank(&self, value: T) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let below = self.samples.partition_point(|probe| *probe <= value);
        below as f64 / self.samples.len() as f64
    }

    /// Get the minimum sample
    pub fn min(&self) -> Option<T> {
        self.samples.first().copied()
    }

    /// Get the maximum sample
    pub fn max(&self) -> Option<T> {
        self.samples.last().copied()
    }

    /// Get the range (max - min)
    pub fn range(&self) -> Option<f64> {
        match (self.min(), self.max()) {
            (Some(lo), Some(hi)) => Some(hi.to_f64() - lo.to_f64()),
            _ => None,
        }
    }

    /// Get the sum of all samples
    ///
    /// Summed in ascending value order, so the result is the same for any
    /// permutation of the input. 0.0 when empty.
    pub fn sum(&self) -> f64 {
        self.samples.iter().map(|s| s.to_f64()).sum()
    }

    /// Get the population variance, or `None` if no samples have been added
    ///
    /// This is the variance assuming the data represents the entire
    /// population. Use `sample_variance()` if the data is a sample.
    pub fn variance(&self) -> Option<f64> {
        if self.samples.is_empty() {
            None
        } else {
            Some(self.moments().1 / self.samples.len() as f64)
        }
    }

    /// Get the sample variance (Bessel's correction)
    ///
    /// Undefined for fewer than two samples.
    pub fn sample_variance(&self) -> Option<f64> {
        if self.samples.len() < 2 {
            None
        } else {
            Some(self.moments().1 / (self.samples.len() - 1) as f64)
        }
    }

    /// Get the population standard deviation
    pub fn stddev(&self) -> Option<f64> {
        self.variance().map(math::sqrt)
    }

    /// Get the sample standard deviation
    pub fn sample_stddev(&self) -> Option<f64> {
        self.sample_variance().map(math::sqrt)
    }

    /// All (value, count) pairs ordered by descending count
    ///
    /// Ties are broken by ascending value: runs are produced in ascending
    /// value order and ranked with a stable sort, so the result is
    /// deterministic for any permutation of the input.
    ///
    /// # Example
    ///
    /// ```
    /// use exactstats::summary::Summary;
    ///
    /// let mut summary = Summary::new();
    /// for v in [9, 7, 7, 7, 3, 3] {
    ///     summary.add(v);
    /// }
    ///
    /// assert_eq!(summary.mode(), vec![(7, 3), (3, 2), (9, 1)]);
    /// ```
    pub fn mode(&self) -> Vec<(T, u64)> {
        let mut runs: Vec<(T, u64)> = Vec::new();
        for &sample in &self.samples {
            match runs.last_mut() {
                Some((value, count)) if *value == sample => *count += 1,
                _ => runs.push((sample, 1)),
            }
        }
        runs.sort_by(|a, b| b.1.cmp(&a.1));
        runs
    }

    /// The k most frequent values
    pub fn top_k(&self, k: usize) -> Vec<(T, u64)> {
        let mut ranked = self.mode();
        ranked.truncate(k);
        ranked
    }

    /// Exact number of occurrences of `value`
    pub fn count_of(&self, value: T) -> u64 {
        let lo = self.samples.partition_point(|probe| *probe < value);
        let hi = self.samples.partition_point(|probe| *probe <= value);
        (hi - lo) as u64
    }

    /// Number of distinct values seen
    pub fn distinct(&self) -> usize {
        let mut distinct = 0;
        let mut prev: Option<T> = None;
        for &sample in &self.samples {
            if prev != Some(sample) {
                distinct += 1;
                prev = Some(sample);
            }
        }
        distinct
    }

    /// Read-only view of the sorted samples
    pub fn samples(&self) -> &[T] {
        &self.samples
    }

    /// Merge another summary into this one
    ///
    /// Equivalent to having added both sample streams to a single summary,
    /// in any order. The sample vecs are combined with a linear two-pointer
    /// merge, preserving the sorted invariant.
    pub fn merge_summary(&mut self, other: &Self) {
        if other.samples.is_empty() {
            return;
        }

        if self.samples.is_empty() {
            self.samples = other.samples.clone();
            return;
        }

        let mut merged = Vec::with_capacity(self.samples.len() + other.samples.len());
        let (mut i, mut j) = (0, 0);
        while i < self.samples.len() && j < other.samples.len() {
            if other.samples[j] < self.samples[i] {
                merged.push(other.samples[j]);
                j += 1;
            } else {
                merged.push(self.samples[i]);
                i += 1;
            }
        }
        merged.extend_from_slice(&self.samples[i..]);
        merged.extend_from_slice(&other.samples[j..]);
        self.samples = merged;
    }

    /// Reset to the empty state
    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

impl<T: Sample> Accumulator for Summary<T> {
    type Item = T;

    fn add(&mut self, item: T) {
        Summary::add(self, item);
    }

    fn merge(&mut self, other: &Self) {
        self.merge_summary(other);
    }

    fn clear(&mut self) {
        Summary::clear(self);
    }

    fn count(&self) -> u64 {
        self.samples.len() as u64
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>() + self.samples.capacity() * core::mem::size_of::<T>()
    }
}

impl<T: Sample> OrderStatistics for Summary<T> {
    fn quantile(&self, rank: f64) -> Option<T> {
        Summary::quantile(self, rank)
    }

    fn median(&self) -> Option<f64> {
        Summary::median(self)
    }

    fn min(&self) -> Option<T> {
        Summary::min(self)
    }

    fn max(&self) -> Option<T> {
        Summary::max(self)
    }

    fn rank(&self, value: T) -> f64 {
        Summary::rank(self, value)
    }
}

impl<T: Sample> FrequencyRanked for Summary<T> {
    fn count_of(&self, item: &T) -> u64 {
        Summary::count_of(self, *item)
    }

    fn distinct(&self) -> usize {
        Summary::distinct(self)
    }

    fn mode(&self) -> Vec<(T, u64)> {
        Summary::mode(self)
    }
}

#[cfg(feature = "serde")]
impl<T: Sample + serde::Serialize> serde::Serialize for Summary<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Summary", 1)?;
        state.serialize_field("samples", &self.samples)?;
        state.end()
    }
}
