//! Exact frequency counting
//!
//! This module provides exact occurrence counts for items in a dataset,
//! with frequency-ranked mode and top-K queries.
//!
//! # Algorithms
//!
//! - [`FrequencyTable`]: exact value -> occurrence-count map
//!
//! # Example
//!
//! ```
//! use exactstats::frequency::FrequencyTable;
//!
//! let mut table = FrequencyTable::new();
//!
//! table.add("apple");
//! table.add("apple");
//! table.add("banana");
//!
//! assert_eq!(table.count_of(&"apple"), 2);
//! assert_eq!(table.top_k(1), vec![("apple", 2)]);
//! ```

mod table;

pub use table::FrequencyTable;
