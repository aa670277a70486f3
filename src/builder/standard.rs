//! Builder for [`BloomFilter`].
//!
//! # Type-State Pattern
//!
//! Required parameters are carried in the state type, so `build()` only
//! exists once both have been supplied:
//!
//! ```text
//! Initial ──.expected_items()──> WithItems ──.false_positive_rate()──> Complete ──.build()──> BloomFilter
//! ```
//!
//! `.hasher()` may be called in any state.
//!
//! # Examples
//!
//! ```
//! use bloomset::builder::BloomFilterBuilder;
//!
//! let filter = BloomFilterBuilder::new()
//!     .expected_items(10_000)
//!     .false_positive_rate(0.01)
//!     .build()
//!     .unwrap();
//! assert!(filter.is_empty());
//! ```
//!
//! Invalid values are still runtime errors:
//!
//! ```
//! use bloomset::builder::BloomFilterBuilder;
//!
//! let result = BloomFilterBuilder::new()
//!     .expected_items(0)
//!     .false_positive_rate(0.01)
//!     .build();
//! assert!(result.is_err());
//! ```

#![allow(clippy::cast_precision_loss)]

use crate::core::params;
use crate::error::Result;
use crate::filters::standard::BloomFilter;
use crate::hash::{DefaultHashPair, HashPair};
use tracing::debug;

/// Type-state marker: nothing set.
#[derive(Debug, Clone, Copy)]
pub struct Initial;

/// Type-state marker: item count set.
#[derive(Debug, Clone, Copy)]
pub struct WithItems {
    items: u64,
}

/// Type-state marker: item count and false positive rate set.
#[derive(Debug, Clone, Copy)]
pub struct Complete {
    items: u64,
    fp_rate: f64,
}

/// Type-state builder for [`BloomFilter`].
///
/// # Type Parameters
///
/// - `State`: [`Initial`], [`WithItems`] or [`Complete`]
/// - `H`: hash pair the filter will use (defaults to [`DefaultHashPair`])
#[derive(Debug, Clone)]
pub struct BloomFilterBuilder<State, H = DefaultHashPair> {
    state: State,
    hasher: H,
}

impl BloomFilterBuilder<Initial, DefaultHashPair> {
    /// Start a builder with the default hash pair.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Initial,
            hasher: DefaultHashPair::default(),
        }
    }
}

impl Default for BloomFilterBuilder<Initial, DefaultHashPair> {
    fn default() -> Self {
        Self::new()
    }
}

impl<State, H> BloomFilterBuilder<State, H> {
    /// Replace the hash pair.
    ///
    /// ```
    /// use bloomset::builder::BloomFilterBuilder;
    /// use bloomset::hash::SipHashPair;
    ///
    /// let filter = BloomFilterBuilder::new()
    ///     .hasher(SipHashPair::with_keys((7, 8), (9, 10)))
    ///     .expected_items(1_000)
    ///     .false_positive_rate(0.001)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(filter.hasher_name(), "SipHashPair");
    /// ```
    #[must_use]
    pub fn hasher<H2: HashPair>(self, hasher: H2) -> BloomFilterBuilder<State, H2> {
        BloomFilterBuilder {
            state: self.state,
            hasher,
        }
    }
}

impl<H> BloomFilterBuilder<Initial, H> {
    /// Number of items the filter should hold at the target rate.
    #[must_use]
    pub fn expected_items(self, items: u64) -> BloomFilterBuilder<WithItems, H> {
        BloomFilterBuilder {
            state: WithItems { items },
            hasher: self.hasher,
        }
    }
}

impl<H> BloomFilterBuilder<WithItems, H> {
    /// Target false positive rate, in (0, 1).
    #[must_use]
    pub fn false_positive_rate(self, fp_rate: f64) -> BloomFilterBuilder<Complete, H> {
        BloomFilterBuilder {
            state: Complete {
                items: self.state.items,
                fp_rate,
            },
            hasher: self.hasher,
        }
    }
}

impl<H: HashPair> BloomFilterBuilder<Complete, H> {
    /// Build the filter.
    ///
    /// # Errors
    ///
    /// Same as [`BloomFilter::new`]: zero items, a rate outside (0, 1), or
    /// a bit array too large to allocate.
    pub fn build(self) -> Result<BloomFilter<H>> {
        let Complete { items, fp_rate } = self.state;
        BloomFilter::with_hasher(items, fp_rate, self.hasher)
    }

    /// Build the filter and report the parameters it was sized with.
    ///
    /// ```
    /// use bloomset::builder::BloomFilterBuilder;
    ///
    /// let (filter, metadata) = BloomFilterBuilder::new()
    ///     .expected_items(1_000)
    ///     .false_positive_rate(0.01)
    ///     .build_with_metadata()
    ///     .unwrap();
    ///
    /// assert_eq!(metadata.bit_length, filter.bit_length());
    /// assert_eq!(metadata.round_count, 7);
    /// assert!((metadata.bits_per_item - 9.586).abs() < 1e-9);
    /// ```
    ///
    /// # Errors
    ///
    /// Same as [`build`](Self::build).
    pub fn build_with_metadata(self) -> Result<(BloomFilter<H>, FilterMetadata)> {
        let filter = self.build()?;

        let metadata = FilterMetadata {
            expected_items: filter.expected_items(),
            fp_rate: filter.target_fp_rate(),
            bit_length: filter.bit_length(),
            round_count: filter.round_count(),
            hasher: filter.hasher_name(),
            bits_per_item: filter.bit_length() as f64 / filter.expected_items() as f64,
        };

        debug!(?metadata, "built bloom filter");
        Ok((filter, metadata))
    }
}

/// Parameters a filter was built with.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterMetadata {
    /// Expected number of items
    pub expected_items: u64,
    /// Target false positive rate
    pub fp_rate: f64,
    /// Bit array length (m)
    pub bit_length: usize,
    /// Hash rounds per operation (k)
    pub round_count: usize,
    /// Name of the hash pair
    pub hasher: &'static str,
    /// Bits spent per expected item
    pub bits_per_item: f64,
}

impl FilterMetadata {
    /// Size of the bit array in bytes, rounded up.
    #[must_use]
    pub fn memory_bytes(&self) -> usize {
        self.bit_length.div_ceil(8)
    }

    /// Size of the bit array in kilobytes.
    #[must_use]
    pub fn memory_kb(&self) -> f64 {
        self.memory_bytes() as f64 / 1024.0
    }

    /// Size of the bit array in megabytes.
    #[must_use]
    pub fn memory_mb(&self) -> f64 {
        self.memory_bytes() as f64 / (1024.0 * 1024.0)
    }

    /// False positive rate predicted for exactly `expected_items` inserts.
    ///
    /// # Errors
    ///
    /// Propagates [`params::expected_fp_rate`] errors; none occur for
    /// metadata produced by a successful build.
    pub fn predicted_fp_rate(&self) -> Result<f64> {
        params::expected_fp_rate(self.bit_length, self.expected_items, self.round_count)
    }
}
