//! # Exactstats
//!
//! Exact descriptive statistics for Rust.
//!
//! Exactstats provides small, allocation-conscious accumulators that compute
//! exact summary statistics over in-memory datasets: mean, median, quantiles,
//! variance, and frequency-ranked modes. Where a streaming-sketch library
//! trades accuracy for constant memory, these structures keep the data (or
//! exact counters) and give precise answers.
//!
//! ## Features
//!
//! - **Summary Statistics**: Exact mean, median, quantiles, and mode with [`Summary`]
//! - **Frequency Ranking**: Exact occurrence counts and top-K with [`FrequencyTable`]
//! - **Full Mergeability**: Accumulators combine across partitions of a dataset
//! - **Order Independence**: Any permutation of the same samples gives identical answers
//!
//! ## Quick Start
//!
//! ```rust
//! use exactstats::prelude::*;
//!
//! let mut summary = Summary::new();
//! for sample in [3, 1, 4, 1, 5, 9, 2, 6] {
//!     summary.add(sample);
//! }
//!
//! println!("Mean: {:?}", summary.mean());
//! println!("Median: {:?}", summary.median());
//! println!("Mode: {:?}", summary.mode());
//! ```
//!
//! ## Combining Partial Summaries
//!
//! All accumulators implement the [`Accumulator`](traits::Accumulator) trait
//! which includes a `merge` operation, so a dataset can be summarized in
//! partitions and combined afterwards:
//!
//! ```rust
//! use exactstats::summary::Summary;
//! use exactstats::traits::Accumulator;
//!
//! let mut left = Summary::new();
//! let mut right = Summary::new();
//!
//! // Each half processes its partition
//! left.add(1);
//! right.add(2);
//!
//! // Merge results
//! left.merge(&right);
//! assert_eq!(left.count(), 2);
//! ```
//!
//! ## Feature Flags
//!
//! Algorithm families (pick what you need):
//! - `summary` (default): exact mean/median/quantile/mode accumulator
//! - `frequency` (default): exact frequency table for categorical data
//! - `full`: Enable all algorithm families
//!
//! Platform features:
//! - `std` (default): Standard library support
//! - `serde`: Enable serialization

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Core traits always available
pub mod traits;

#[cfg(feature = "summary")]
pub(crate) mod math;

#[cfg(feature = "summary")]
#[cfg_attr(docsrs, doc(cfg(feature = "summary")))]
pub mod summary;

#[cfg(feature = "frequency")]
#[cfg_attr(docsrs, doc(cfg(feature = "frequency")))]
pub mod frequency;

pub mod prelude {
    pub use crate::traits::*;

    #[cfg(feature = "summary")]
    pub use crate::summary::Summary;

    #[cfg(feature = "frequency")]
    pub use crate::frequency::FrequencyTable;
}

#[cfg(feature = "summary")]
pub use summary::Summary;

#[cfg(feature = "frequency")]
pub use frequency::FrequencyTable;
