//! Exact summary statistics
//!
//! This module provides accumulators that keep the observed samples and
//! answer exact queries: mean, median, quantiles, variance, and
//! frequency-ranked modes.
//!
//! # Algorithms
//!
//! - [`Summary`]: ordered multiset with Welford running moments
//!
//! # Example
//!
//! ```
//! use exactstats::summary::Summary;
//!
//! let mut summary = Summary::new();
//!
//! for value in [1, 2, 2, 3, 4] {
//!     summary.add(value);
//! }
//!
//! assert_eq!(summary.median(), Some(2.0));
//! assert_eq!(summary.mode()[0], (2, 2));
//! ```

mod exact;

pub use exact::Summary;
