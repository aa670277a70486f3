//! Type-state builder for [`BloomFilter`](crate::BloomFilter).
//!
//! Required parameters (item count, false positive rate) are enforced at
//! compile time; their values are validated when `build()` runs.
//!
//! ```
//! use bloomset::builder::BloomFilterBuilder;
//!
//! let filter = BloomFilterBuilder::new()
//!     .expected_items(10_000)
//!     .false_positive_rate(0.01)
//!     .build()
//!     .unwrap();
//!
//! filter.insert("hello");
//! assert!(filter.contains("hello"));
//! ```

pub mod standard;

pub use standard::{BloomFilterBuilder, Complete, FilterMetadata, Initial, WithItems};
