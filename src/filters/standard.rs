//! Standard fixed-capacity Bloom filter.
//!
//! # Algorithm
//!
//! - **Construction**: size `m` bits and `k` rounds from the expected item
//!   count and target false positive rate (see [`crate::core::params`]),
//!   allocate `m` zeroed bits.
//! - **Insert**: hash the item to `(h1, h2)`, set bits
//!   `(h1 + i·h2) mod m` for `i in 0..k`.
//! - **Query**: walk the same sequence; the first unset bit means "definitely
//!   absent", all set means "possibly present".
//!
//! # Properties
//!
//! - **False negatives**: never
//! - **False positives**: around the configured rate once the expected number
//!   of items is inserted; adversarial inputs can exceed it
//! - **Space**: ~9.6 bits per item for 1% FP rate
//! - **Time**: O(k) per operation
//! - **No deletion, no resize**: bits only move 0 → 1
//!
//! # Concurrency Model
//!
//! `insert` and `contains` take `&self`. Bits live in atomic words and the
//! hash pair is stateless, so a filter can be shared as `Arc<BloomFilter>`
//! with no lock and no lost updates:
//!
//! ```text
//! Thread A (insert):          Thread B (contains):
//! ──────────────────          ────────────────────
//! h1, h2 = hash(item)         h1, h2 = hash(item)
//! bit[g0].set() [Release] --> bit[g0].get() [Acquire]
//! bit[g1].set() [Release] --> bit[g1].get() [Acquire]
//! ```
//!
//! ```
//! use bloomset::BloomFilter;
//! use std::sync::Arc;
//! use std::thread;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let filter = Arc::new(BloomFilter::new(10_000, 0.01)?);
//!
//! let handles: Vec<_> = (0..4).map(|tid| {
//!     let f = Arc::clone(&filter);
//!     thread::spawn(move || {
//!         for i in 0..1000 {
//!             f.insert(&format!("item-{}-{}", tid, i));
//!         }
//!     })
//! }).collect();
//!
//! for h in handles {
//!     h.join().unwrap();
//! }
//!
//! assert!(filter.contains("item-0-42"));
//! # Ok(())
//! # }
//! ```

#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use crate::core::bitstore::BitStore;
use crate::core::params;
use crate::error::{FilterError, Result};
use crate::hash::{DefaultHashPair, HashPair, RoundIndices};
use tracing::{debug, trace, warn};

/// Fixed-capacity Bloom filter over byte-sequence items.
///
/// # Type Parameters
///
/// * `H` - Hash pair supplying the two base digests (defaults to
///   [`DefaultHashPair`])
///
/// # Examples
///
/// ```
/// use bloomset::BloomFilter;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let filter = BloomFilter::new(100, 0.01)?;
/// assert!(!filter.contains("item_1"));
///
/// filter.insert("item_1");
/// assert!(filter.contains("item_1"));
/// assert!(filter.contains(b"item_1"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BloomFilter<H = DefaultHashPair>
where
    H: HashPair,
{
    bits: BitStore,

    /// Hash rounds per operation (k).
    rounds: usize,

    hasher: H,

    /// Construction inputs, kept for statistics.
    expected_items: u64,
    target_fp_rate: f64,
}

impl BloomFilter<DefaultHashPair> {
    /// Build a filter sized for `items_count` items at `fp_rate`.
    ///
    /// Uses `m = ⌈-n·ln(p) / (ln 2)²⌉` bits and `k = ⌈-ln(p) / ln 2⌉`
    /// rounds, both at least 1.
    ///
    /// # Errors
    ///
    /// - [`FilterError::InvalidItemCount`] if `items_count == 0`
    /// - [`FilterError::FalsePositiveRateOutOfBounds`] if `fp_rate` not in (0, 1)
    /// - [`FilterError::InvalidParameters`] if the bit array would not fit in memory
    ///
    /// All three have [`ErrorKind::InvalidParameter`](crate::ErrorKind::InvalidParameter).
    ///
    /// ```
    /// use bloomset::BloomFilter;
    ///
    /// let filter = BloomFilter::new(100, 0.01).unwrap();
    /// assert_eq!(filter.bit_length(), 959);
    /// assert_eq!(filter.round_count(), 7);
    ///
    /// assert!(BloomFilter::new(0, 0.01).is_err());
    /// assert!(BloomFilter::new(100, 0.0).is_err());
    /// assert!(BloomFilter::new(100, 1.0).is_err());
    /// ```
    pub fn new(items_count: u64, fp_rate: f64) -> Result<Self> {
        Self::with_hasher(items_count, fp_rate, DefaultHashPair::default())
    }
}

impl<H> BloomFilter<H>
where
    H: HashPair,
{
    /// Like [`BloomFilter::new`] with a caller-supplied hash pair.
    ///
    /// # Errors
    ///
    /// Same as [`BloomFilter::new`].
    ///
    /// ```
    /// use bloomset::BloomFilter;
    /// use bloomset::hash::SipHashPair;
    ///
    /// let filter = BloomFilter::with_hasher(1000, 0.01, SipHashPair::with_keys((1, 2), (3, 4))).unwrap();
    /// filter.insert("keyed");
    /// assert!(filter.contains("keyed"));
    /// assert_eq!(filter.hasher_name(), "SipHashPair");
    /// ```
    pub fn with_hasher(items_count: u64, fp_rate: f64, hasher: H) -> Result<Self> {
        let (bit_length, rounds) = params::calculate_filter_params(items_count, fp_rate)?;

        debug!(
            items_count,
            fp_rate,
            bit_length,
            rounds,
            hasher = hasher.name(),
            "sized bloom filter"
        );

        Ok(Self {
            bits: BitStore::new(bit_length)?,
            rounds,
            hasher,
            expected_items: items_count,
            target_fp_rate: fp_rate,
        })
    }

    /// Build a filter with an explicit bit length and round count.
    ///
    /// Bypasses the sizing formulas. `expected_items()` reports 0 and
    /// `target_fp_rate()` reports NaN for such a filter.
    ///
    /// # Errors
    ///
    /// [`FilterError::InvalidParameters`] if `bit_length == 0` or `round_count == 0`.
    pub fn with_params(bit_length: usize, round_count: usize, hasher: H) -> Result<Self> {
        if round_count == 0 {
            return Err(FilterError::invalid_parameters(
                "round count must be greater than 0",
            ));
        }

        let bits = BitStore::new(bit_length)?;

        debug!(
            bit_length,
            rounds = round_count,
            hasher = hasher.name(),
            "built bloom filter from explicit parameters"
        );

        Ok(Self {
            bits,
            rounds: round_count,
            hasher,
            expected_items: 0,
            target_fp_rate: f64::NAN,
        })
    }

    /// Number of bits (m).
    #[must_use]
    #[inline]
    pub fn bit_length(&self) -> usize {
        self.bits.len()
    }

    /// Hash rounds per operation (k).
    #[must_use]
    #[inline]
    pub fn round_count(&self) -> usize {
        self.rounds
    }

    /// Item count the filter was sized for.
    #[must_use]
    #[inline]
    pub fn expected_items(&self) -> u64 {
        self.expected_items
    }

    /// False positive rate the filter was sized for.
    #[must_use]
    #[inline]
    pub fn target_fp_rate(&self) -> f64 {
        self.target_fp_rate
    }

    /// Name of the hash pair in use.
    #[must_use]
    pub fn hasher_name(&self) -> &'static str {
        self.hasher.name()
    }

    /// Probe sequence for `bytes`. Identical for insert and lookup.
    #[inline]
    fn probe(&self, bytes: &[u8]) -> RoundIndices {
        let (h1, h2) = self.hasher.hash_pair(bytes);
        RoundIndices::new(h1, h2, self.rounds, self.bits.len())
    }

    /// Add an item.
    ///
    /// Sets the item's `k` bits; bits that are already set stay set. Never
    /// fails: every index is reduced modulo the bit length.
    #[inline]
    pub fn insert<B>(&self, item: &B)
    where
        B: AsRef<[u8]> + ?Sized,
    {
        for idx in self.probe(item.as_ref()) {
            self.bits.set(idx);
        }
    }

    /// Test whether an item may have been inserted.
    ///
    /// - `false`: the item was definitely never inserted
    /// - `true`: the item was inserted, or this is a false positive
    ///
    /// Stops at the first unset bit. A storage fault on any round is
    /// treated as an unset bit.
    #[must_use]
    #[inline]
    pub fn contains<B>(&self, item: &B) -> bool
    where
        B: AsRef<[u8]> + ?Sized,
    {
        for idx in self.probe(item.as_ref()) {
            match self.bits.try_get(idx) {
                Ok(true) => {}
                Ok(false) => return false,
                Err(err) => {
                    warn!(error = %err, "bit lookup failed, reporting item as absent");
                    return false;
                }
            }
        }
        true
    }

    /// Insert every item in `items`.
    pub fn insert_batch<B>(&self, items: &[B])
    where
        B: AsRef<[u8]>,
    {
        trace!(count = items.len(), "inserting batch");
        for item in items {
            self.insert(item);
        }
    }

    /// Query every item in `items`, in order.
    #[must_use]
    pub fn contains_batch<B>(&self, items: &[B]) -> Vec<bool>
    where
        B: AsRef<[u8]>,
    {
        trace!(count = items.len(), "querying batch");
        items.iter().map(|item| self.contains(item)).collect()
    }

    /// Number of bits currently set.
    #[must_use]
    pub fn count_set_bits(&self) -> usize {
        self.bits.count_ones()
    }

    /// True if nothing has been inserted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count_set_bits() == 0
    }

    /// Fraction of bits set, in [0, 1].
    #[must_use]
    pub fn fill_rate(&self) -> f64 {
        self.count_set_bits() as f64 / self.bit_length() as f64
    }

    /// Current false positive probability estimated from the fill rate.
    ///
    /// With fill rate `X/m`, a random absent item hits `k` set bits with
    /// probability `(X/m)^k`.
    #[must_use]
    pub fn estimate_fp_rate(&self) -> f64 {
        self.fill_rate().powf(self.rounds as f64)
    }

    /// Estimate of how many distinct items have been inserted.
    ///
    /// `n ≈ -(m/k) · ln(1 - X/m)`. Returns `u64::MAX` once every bit is set.
    ///
    /// # Accuracy
    ///
    /// - Low load (< 50% full): ±5% error
    /// - Medium load (50-80%): ±10% error
    /// - High load (> 80%): ±20% error
    #[must_use]
    pub fn estimate_cardinality(&self) -> u64 {
        let set_bits = self.count_set_bits();
        if set_bits == 0 {
            return 0;
        }
        if set_bits >= self.bit_length() {
            return u64::MAX;
        }

        let m = self.bit_length() as f64;
        let k = self.rounds as f64;
        let estimated = -(m / k) * (1.0 - set_bits as f64 / m).ln();

        estimated.round().max(0.0) as u64
    }

    /// Approximate heap and inline size in bytes.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        std::mem::size_of::<Self>() - std::mem::size_of::<BitStore>() + self.bits.memory_usage()
    }
}
