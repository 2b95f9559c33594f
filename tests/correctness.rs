//! Correctness and invariant tests for exactstats
//!
//! These tests verify order independence, merge semantics, and edge cases
//! across the accumulator families. They complement the unit tests in each
//! module by focusing on properties that must always hold.
//!
//! Run with: cargo test --test correctness --features full

// Require all features
#[cfg(not(all(feature = "summary", feature = "frequency")))]
compile_error!(
    "Correctness tests require all features. Run: cargo test --test correctness --features full"
);

use exactstats::frequency::FrequencyTable;
use exactstats::summary::Summary;
use exactstats::traits::Accumulator;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// A uniformly shuffled copy of 0..=1000
fn flat_data(seed: u64) -> Vec<i64> {
    let mut data: Vec<i64> = (0..=1000).collect();
    data.shuffle(&mut StdRng::seed_from_u64(seed));
    data
}

/// A skewed dataset of 1000 samples: 97 copies of 500, plus i copies of
/// each i in 1..=42, shuffled
fn biased_data(seed: u64) -> Vec<i64> {
    let mut data = vec![500i64; 97];
    for i in 1..=42 {
        for _ in 0..i {
            data.push(i);
        }
    }
    assert_eq!(data.len(), 1000);
    data.shuffle(&mut StdRng::seed_from_u64(seed));
    data
}

// ============================================================================
// Summary
// ============================================================================

mod summary {
    use super::*;

    #[test]
    fn flat_mean_and_median() {
        for seed in [1, 7, 42, 1234] {
            let mut summary = Summary::new();
            for sample in flat_data(seed) {
                summary.add(sample);
            }

            assert_eq!(summary.len(), 1001);
            assert_eq!(
                summary.mean(),
                Some(500.0),
                "mean of shuffled 0..=1000 (seed {}) should be exactly 500",
                seed
            );
            assert_eq!(summary.median(), Some(500.0));
            assert_eq!(summary.min(), Some(0));
            assert_eq!(summary.max(), Some(1000));
        }
    }

    #[test]
    fn biased_mean_median_and_mode() {
        for seed in [1, 7, 42, 1234] {
            let mut summary = Summary::new();
            for sample in biased_data(seed) {
                summary.add(sample);
            }

            // mean = (97 * 500 + sum(i^2 for i in 1..=42)) / 1000 = 74.085
            let mean = summary.mean().unwrap();
            assert!(
                (mean - 74.085).abs() < 1e-9,
                "mean = {} (seed {})",
                mean,
                seed
            );

            // 1000 samples; both middle values are 32
            assert_eq!(summary.median(), Some(32.0));

            assert_eq!(
                summary.top_k(3),
                vec![(500, 97), (42, 42), (41, 41)],
                "top-3 mode entries (seed {})",
                seed
            );
        }
    }

    #[test]
    fn permutations_give_identical_answers() {
        let mut first = Summary::new();
        for sample in biased_data(5) {
            first.add(sample);
        }

        for seed in [6, 7, 8] {
            let mut other = Summary::new();
            for sample in biased_data(seed) {
                other.add(sample);
            }

            // Bit-identical, not approximately equal
            assert_eq!(first.mean(), other.mean());
            assert_eq!(first.median(), other.median());
            assert_eq!(first.mode(), other.mode());
            assert_eq!(first.variance(), other.variance());
            assert_eq!(first.samples(), other.samples());
        }
    }

    #[test]
    fn merge_equals_single_accumulator() {
        let data = biased_data(99);
        let (front, back) = data.split_at(400);

        let mut whole = Summary::new();
        for &sample in &data {
            whole.add(sample);
        }

        let mut left = Summary::new();
        let mut right = Summary::new();
        for &sample in front {
            left.add(sample);
        }
        for &sample in back {
            right.add(sample);
        }
        left.merge(&right);

        assert_eq!(left.count(), whole.count());
        assert_eq!(left.samples(), whole.samples());
        assert_eq!(left.mean(), whole.mean());
        assert_eq!(left.median(), whole.median());
        assert_eq!(left.mode(), whole.mode());
    }

    #[test]
    fn empty_queries_are_none() {
        let summary = Summary::<i64>::new();

        assert!(summary.is_empty());
        assert_eq!(summary.mean(), None);
        assert_eq!(summary.median(), None);
        assert_eq!(summary.quantile(0.5), None);
        assert_eq!(summary.range(), None);
        assert!(summary.mode().is_empty());
    }

    #[test]
    fn queries_do_not_mutate() {
        let mut summary = Summary::new();
        for sample in flat_data(3) {
            summary.add(sample);
        }

        let before = summary.samples().to_vec();
        let _ = summary.mean();
        let _ = summary.median();
        let _ = summary.mode();
        let _ = summary.quantile(0.9);
        let _ = summary.variance();

        assert_eq!(summary.samples(), &before[..]);
        assert_eq!(summary.len(), 1001);
    }

    #[test]
    fn quantile_agrees_with_median_on_odd_counts() {
        let mut summary = Summary::new();
        for sample in flat_data(11) {
            summary.add(sample);
        }

        // 1001 samples: nearest-rank 0.5 is the exact middle value
        assert_eq!(summary.quantile(0.5), Some(500));
        assert_eq!(summary.median(), Some(500.0));
    }
}

// ============================================================================
// FrequencyTable
// ============================================================================

mod frequency {
    use super::*;

    #[test]
    fn agrees_with_summary_mode() {
        let data = biased_data(21);

        let mut summary = Summary::new();
        let mut table = FrequencyTable::new();
        for &sample in &data {
            summary.add(sample);
            table.add(sample);
        }

        assert_eq!(table.total(), 1000);
        assert_eq!(table.distinct(), summary.distinct());
        assert_eq!(table.mode(), summary.mode());
        assert_eq!(table.top_k(3), vec![(500, 97), (42, 42), (41, 41)]);
    }

    #[test]
    fn order_independent_ranking() {
        let mut first = FrequencyTable::new();
        for sample in biased_data(31) {
            first.add(sample);
        }

        let mut other = FrequencyTable::new();
        for sample in biased_data(32) {
            other.add(sample);
        }

        assert_eq!(first.mode(), other.mode());
    }

    #[test]
    fn merge_sums_counts() {
        let data = flat_data(41);
        let (front, back) = data.split_at(500);

        let mut whole = FrequencyTable::new();
        for &sample in &data {
            whole.add(sample);
        }

        let mut left = FrequencyTable::new();
        let mut right = FrequencyTable::new();
        for &sample in front {
            left.add(sample);
        }
        for &sample in back {
            right.add(sample);
        }
        left.merge(&right);

        assert_eq!(left.total(), whole.total());
        assert_eq!(left.mode(), whole.mode());
    }
}
