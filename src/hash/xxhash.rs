//! XXHash-backed hash pair (default).
//!
//! `h1` is XXH3-64 and `h2` is XXH64 with a fixed seed. The two algorithms
//! share an author but not a construction (XXH3 uses a secret-keyed stripe
//! accumulator, XXH64 four 64-bit lanes), which keeps the digests
//! independent for double hashing.
//!
//! This module wraps the `xxhash-rust` crate; the algorithms are not
//! reimplemented here.

use super::hasher::HashPair;
use xxhash_rust::xxh3::xxh3_64_with_seed;
use xxhash_rust::xxh64::xxh64;

/// Seed fed to XXH64 for `h2` by default.
const DEFAULT_STRIDE_SEED: u64 = 0x9e37_79b9_7f4a_7c15;

/// XXH3 / XXH64 hash pair.
///
/// ```
/// use bloomset::hash::{HashPair, XxHashPair};
///
/// let pair = XxHashPair::new();
/// assert_eq!(pair.hash_pair(b"item"), pair.hash_pair(b"item"));
/// assert_ne!(pair.hash_a(b"item"), pair.hash_a(b"item_1"));
///
/// // Distinct seeds give an unrelated pair.
/// let other = XxHashPair::with_seeds(1, 2);
/// assert_ne!(pair.hash_pair(b"item"), other.hash_pair(b"item"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XxHashPair {
    seed_a: u64,
    seed_b: u64,
}

impl XxHashPair {
    /// Pair with the default seeds.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            seed_a: 0,
            seed_b: DEFAULT_STRIDE_SEED,
        }
    }

    /// Pair with explicit seeds for `h1` and `h2`.
    #[must_use]
    pub const fn with_seeds(seed_a: u64, seed_b: u64) -> Self {
        Self { seed_a, seed_b }
    }
}

impl Default for XxHashPair {
    fn default() -> Self {
        Self::new()
    }
}

impl HashPair for XxHashPair {
    #[inline]
    fn hash_a(&self, bytes: &[u8]) -> u64 {
        xxh3_64_with_seed(bytes, self.seed_a)
    }

    #[inline]
    fn hash_b(&self, bytes: &[u8]) -> u64 {
        xxh64(bytes, self.seed_b)
    }

    fn name(&self) -> &'static str {
        "XxHashPair"
    }
}
