//! Fixed-length packed bit storage with atomic words.
//!
//! `BitStore` backs every filter in this crate. Bits are packed into a
//! `Box<[AtomicU64]>` in little-endian bit order:
//!
//! ```text
//! Word 0: [bit 0][bit 1]...[bit 63]
//! Word 1: [bit 64][bit 65]...[bit 127]
//! ```
//!
//! The store only ever grows its population: there is no way to clear a bit
//! once it is set, and the length is fixed at allocation.
//!
//! # Memory Ordering
//!
//! - `set` uses `fetch_or` with `Release`
//! - `get` uses a load with `Acquire`
//!
//! A reader that observes a bit set by another thread therefore also observes
//! every write that preceded it, so concurrent insert/query cannot produce a
//! false negative, and two concurrent `set`s on the same word cannot lose
//! either bit.
//!
//! # Examples
//!
//! ```
//! use bloomset::core::BitStore;
//!
//! let bits = BitStore::new(100).unwrap();
//! bits.set(42);
//! assert!(bits.get(42));
//! assert!(!bits.get(43));
//! assert_eq!(bits.count_ones(), 1);
//! ```

use crate::error::{FilterError, Result};
use std::sync::atomic::{AtomicU64, Ordering};

const WORD_BITS: usize = 64;

/// Fixed-size, zero-initialised bit array.
#[derive(Debug)]
pub struct BitStore {
    words: Box<[AtomicU64]>,

    /// Total number of addressable bits (not necessarily a multiple of 64).
    len: usize,
}

impl BitStore {
    /// Allocate `num_bits` zeroed bits.
    ///
    /// # Errors
    ///
    /// [`FilterError::InvalidParameters`] if `num_bits == 0`.
    ///
    /// ```
    /// use bloomset::core::BitStore;
    ///
    /// let bits = BitStore::new(1000).unwrap();
    /// assert_eq!(bits.len(), 1000);
    /// assert_eq!(bits.num_words(), 16);
    /// assert!(BitStore::new(0).is_err());
    /// ```
    pub fn new(num_bits: usize) -> Result<Self> {
        if num_bits == 0 {
            return Err(FilterError::invalid_parameters(
                "BitStore size must be greater than 0",
            ));
        }

        let words = (0..num_bits.div_ceil(WORD_BITS))
            .map(|_| AtomicU64::new(0))
            .collect::<Vec<_>>()
            .into_boxed_slice();

        Ok(Self {
            words,
            len: num_bits,
        })
    }

    /// Number of addressable bits.
    #[must_use]
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True if the store has no addressable bits.
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    fn locate(index: usize) -> (usize, u64) {
        (index / WORD_BITS, 1u64 << (index % WORD_BITS))
    }

    /// Set bit `index` to 1. Setting an already-set bit is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`, matching slice indexing.
    #[inline]
    pub fn set(&self, index: usize) {
        assert!(
            index < self.len,
            "BitStore index out of bounds: index={} len={}",
            index,
            self.len
        );

        let (word, mask) = Self::locate(index);
        self.words[word].fetch_or(mask, Ordering::Release);
    }

    /// Read bit `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[must_use]
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        assert!(
            index < self.len,
            "BitStore index out of bounds: index={} len={}",
            index,
            self.len
        );

        let (word, mask) = Self::locate(index);
        (self.words[word].load(Ordering::Acquire) & mask) != 0
    }

    /// Checked variant of [`set`](Self::set).
    ///
    /// Returns `Ok(true)` if the bit transitioned from 0 to 1, `Ok(false)` if
    /// it was already set.
    ///
    /// # Errors
    ///
    /// [`FilterError::IndexOutOfBounds`] if `index >= len`.
    ///
    /// ```
    /// use bloomset::core::BitStore;
    ///
    /// let bits = BitStore::new(8).unwrap();
    /// assert_eq!(bits.try_set(3), Ok(true));
    /// assert_eq!(bits.try_set(3), Ok(false));
    /// assert!(bits.try_set(8).is_err());
    /// ```
    #[inline]
    pub fn try_set(&self, index: usize) -> Result<bool> {
        if index >= self.len {
            return Err(FilterError::index_out_of_bounds(index, self.len));
        }

        let (word, mask) = Self::locate(index);
        let previous = self.words[word].fetch_or(mask, Ordering::Release);
        Ok(previous & mask == 0)
    }

    /// Checked variant of [`get`](Self::get).
    ///
    /// # Errors
    ///
    /// [`FilterError::IndexOutOfBounds`] if `index >= len`.
    #[inline]
    pub fn try_get(&self, index: usize) -> Result<bool> {
        if index >= self.len {
            return Err(FilterError::index_out_of_bounds(index, self.len));
        }

        let (word, mask) = Self::locate(index);
        Ok((self.words[word].load(Ordering::Acquire) & mask) != 0)
    }

    /// Number of bits currently set.
    ///
    /// O(len / 64); uses `u64::count_ones` per word.
    #[must_use]
    pub fn count_ones(&self) -> usize {
        self.words
            .iter()
            .map(|word| word.load(Ordering::Acquire).count_ones() as usize)
            .sum()
    }

    /// Number of 64-bit words allocated.
    #[must_use]
    #[inline]
    pub fn num_words(&self) -> usize {
        self.words.len()
    }

    /// Heap words plus the struct itself, in bytes.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.words.len() * std::mem::size_of::<AtomicU64>() + std::mem::size_of::<Self>()
    }
}

impl Clone for BitStore {
    /// Snapshot the current bits into an independent store.
    fn clone(&self) -> Self {
        let words = self
            .words
            .iter()
            .map(|w| AtomicU64::new(w.load(Ordering::Acquire)))
            .collect();

        Self {
            words,
            len: self.len,
        }
    }
}
