//! Core traits for exact accumulators
//!
//! All accumulators implement the base [`Accumulator`] trait, with specialized
//! traits for different query families (order statistics, frequency ranking).

use core::fmt::Debug;

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Numeric sample types accepted by order-statistic accumulators
///
/// Implemented for the primitive integer and float types. The `to_f64`
/// conversion lets an accumulator report f64-valued derived statistics
/// (mean, variance, interpolated median) regardless of the stored type.
pub trait Sample: Copy + PartialOrd + Debug {
    /// Convert the sample to f64 for arithmetic
    fn to_f64(self) -> f64;

    /// Whether the sample is NaN (always false for integer types)
    ///
    /// NaN samples are rejected on insert so that comparisons over the
    /// stored data stay total.
    fn is_nan(self) -> bool {
        false
    }
}

macro_rules! impl_sample_int {
    ($($t:ty),*) => {
        $(
            impl Sample for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_sample_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl Sample for f32 {
    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn is_nan(self) -> bool {
        f32::is_nan(self)
    }
}

impl Sample for f64 {
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }
}

/// Core trait for all exact accumulators
///
/// Unlike approximate sketches, exact accumulators have no configuration
/// that can mismatch, so `merge` is infallible: merging is always equivalent
/// to having added both streams to a single accumulator.
pub trait Accumulator: Clone + Debug {
    /// The type of item this accumulator ingests
    type Item;

    /// Add an item to the accumulator
    fn add(&mut self, item: Self::Item);

    /// Merge another accumulator into this one
    fn merge(&mut self, other: &Self);

    /// Reset to the empty state
    fn clear(&mut self);

    /// Number of items added (occurrences, not distinct values)
    fn count(&self) -> u64;

    /// Memory usage in bytes
    fn size_bytes(&self) -> usize;

    /// Check if no items have been added
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// Order-based queries over the accumulated samples
///
/// All queries are read-only and return `None` on an empty accumulator;
/// absence is never signaled with a sentinel value.
pub trait OrderStatistics: Accumulator
where
    Self::Item: Sample,
{
    /// Get the sample at the given rank (0.0 to 1.0), nearest-rank (lower)
    ///
    /// rank=0.0 returns the minimum, rank=1.0 the maximum.
    fn quantile(&self, rank: f64) -> Option<Self::Item>;

    /// Get the median
    ///
    /// For an odd number of samples this is the middle value; for an even
    /// number it is the average of the two middle values, hence f64.
    fn median(&self) -> Option<f64>;

    /// Get the minimum sample
    fn min(&self) -> Option<Self::Item>;

    /// Get the maximum sample
    fn max(&self) -> Option<Self::Item>;

    /// Get the fraction of samples less than or equal to `value` (0.0 to 1.0)
    fn rank(&self, value: Self::Item) -> f64;

    /// Get the range (max - min)
    fn range(&self) -> Option<f64> {
        match (self.min(), self.max()) {
            (Some(lo), Some(hi)) => Some(hi.to_f64() - lo.to_f64()),
            _ => None,
        }
    }

    /// Get multiple quantiles at once
    fn quantiles(&self, ranks: &[f64]) -> Vec<Option<Self::Item>> {
        ranks.iter().map(|&r| self.quantile(r)).collect()
    }
}

/// Frequency-ranked queries over the accumulated items
pub trait FrequencyRanked: Accumulator
where
    Self::Item: Sized + Clone,
{
    /// Exact number of occurrences of an item
    fn count_of(&self, item: &Self::Item) -> u64;

    /// Number of distinct items seen
    fn distinct(&self) -> usize;

    /// All (item, count) pairs ordered by descending count
    ///
    /// Ties are broken by ascending item order, so the ranking is
    /// deterministic for any permutation of the input.
    fn mode(&self) -> Vec<(Self::Item, u64)>;

    /// The k most frequent items
    fn top_k(&self, k: usize) -> Vec<(Self::Item, u64)> {
        let mut ranked = self.mode();
        ranked.truncate(k);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_to_f64() {
        assert_eq!(42u32.to_f64(), 42.0);
        assert_eq!((-7i64).to_f64(), -7.0);
        assert_eq!(2.5f32.to_f64(), 2.5);
    }

    #[test]
    fn test_sample_nan() {
        assert!(!7u8.is_nan());
        assert!(!1.5f64.is_nan());
        assert!(Sample::is_nan(f64::NAN));
        assert!(Sample::is_nan(f32::NAN));
    }
}
