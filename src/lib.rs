//! Bloomset: a fixed-capacity Bloom filter over byte-sequence items.
//!
//! A Bloom filter answers "was this item inserted?" with either **definitely
//! not** or **possibly yes**, in a fixed number of bits chosen up front:
//! - **False positives**: bounded by the configured rate at design load
//! - **Zero false negatives**: an inserted item is always reported present
//!
//! # Quick Start
//!
//! ```
//! use bloomset::BloomFilter;
//!
//! // 10,000 items at 1% false positives
//! let filter = BloomFilter::new(10_000, 0.01).unwrap();
//!
//! filter.insert("hello");
//! filter.insert(b"world");
//!
//! assert!(filter.contains("hello"));
//! assert!(filter.contains("world"));
//! assert!(!filter.contains("goodbye"));
//! ```
//!
//! # Sizing
//!
//! From item count `n` and false positive rate `p`:
//!
//! ```text
//! m = ⌈-n·ln(p) / (ln 2)²⌉    bits
//! k = ⌈-ln(p) / ln 2⌉          hash rounds
//! ```
//!
//! Both are at least 1. See [`core::params`].
//!
//! # Hashing
//!
//! Each item is digested once by a [`HashPair`] into `(h1, h2)`; round `i`
//! touches bit `(h1 + i·h2) mod m`. Digests are stateless: the same item
//! always probes the same bits, on any thread, at any time.
//!
//! | Feature   | Hash pair       | Default |
//! |-----------|-----------------|---------|
//! | `xxhash`  | [`XxHashPair`]  | yes     |
//! | `siphash` | [`SipHashPair`] | yes     |
//!
//! # Concurrency
//!
//! [`BloomFilter::insert`] and [`BloomFilter::contains`] take `&self` and
//! the filter is `Send + Sync`; share it as `Arc<BloomFilter>`.
//!
//! # Logging
//!
//! The crate emits [`tracing`] events (`debug` on construction, `warn` on a
//! storage fault during lookup). It never installs a subscriber.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(any(feature = "xxhash", feature = "siphash")))]
compile_error!("at least one of the `xxhash` or `siphash` features must be enabled");

/// Bit storage and sizing math
pub mod core;

/// Error types and result aliases
pub mod error;

/// Filter implementation
pub mod filters;

/// Hash pairs and index derivation
pub mod hash;

/// Type-safe builder
pub mod builder;

pub use error::{ErrorKind, FilterError, Result};

pub use filters::BloomFilter;

pub use builder::{BloomFilterBuilder, FilterMetadata};

pub use hash::{DefaultHashPair, HashPair};

#[cfg(feature = "xxhash")]
pub use hash::XxHashPair;

#[cfg(feature = "siphash")]
pub use hash::SipHashPair;

/// Prelude module for convenient imports.
///
/// ```
/// use bloomset::prelude::*;
///
/// let filter = BloomFilterBuilder::new()
///     .expected_items(1000)
///     .false_positive_rate(0.01)
///     .build()
///     .unwrap();
/// filter.insert("hello");
/// assert!(filter.contains("hello"));
/// ```
pub mod prelude {
    pub use crate::builder::BloomFilterBuilder;
    pub use crate::error::{ErrorKind, FilterError, Result};
    pub use crate::filters::BloomFilter;
    pub use crate::hash::HashPair;
}

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_root_exports() {
        let filter = BloomFilter::new(100, 0.01).unwrap();
        filter.insert("item");
        assert!(filter.contains("item"));

        let err = BloomFilter::new(0, 0.01).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
        assert!(matches!(err, FilterError::InvalidItemCount { count: 0 }));
    }

    #[test]
    fn test_concurrent_inserts_through_arc() {
        let filter = Arc::new(BloomFilter::new(8_000, 0.01).unwrap());

        let handles: Vec<_> = (0..8u32)
            .map(|tid| {
                let f = Arc::clone(&filter);
                std::thread::spawn(move || {
                    for i in 0..1000u32 {
                        f.insert(&format!("t{}-{}", tid, i));
                    }
                })
            })
            .collect();

        for h in handles {
            h.join().unwrap();
        }

        for tid in 0..8u32 {
            for i in 0..1000u32 {
                assert!(filter.contains(&format!("t{}-{}", tid, i)));
            }
        }
    }

    #[test]
    fn test_concurrent_readers_and_writers() {
        let filter = Arc::new(BloomFilter::new(4_000, 0.01).unwrap());
        filter.insert("pinned");

        let writer = {
            let f = Arc::clone(&filter);
            std::thread::spawn(move || {
                for i in 0..4000u32 {
                    f.insert(&i.to_le_bytes());
                }
            })
        };

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let f = Arc::clone(&filter);
                std::thread::spawn(move || {
                    for _ in 0..1000 {
                        assert!(f.contains("pinned"));
                    }
                })
            })
            .collect();

        writer.join().unwrap();
        for r in readers {
            r.join().unwrap();
        }
    }
}
