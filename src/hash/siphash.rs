//! SipHash-backed hash pair.
//!
//! Two SipHash-1-3 instances keyed independently. Slower than
//! [`XxHashPair`](super::XxHashPair) but keyed, so callers that index
//! untrusted keys can pick secret keys and make the probe positions
//! unpredictable to an attacker.
//!
//! Wraps the `siphasher` crate.

use super::hasher::HashPair;
use siphasher::sip::SipHasher13;
use std::hash::Hasher;

const DEFAULT_KEYS_A: (u64, u64) = (0x0706_0504_0302_0100, 0x0f0e_0d0c_0b0a_0908);
const DEFAULT_KEYS_B: (u64, u64) = (0x517c_c1b7_2722_0a95, 0x85eb_ca77_c2b2_ae63);

/// Keyed SipHash-1-3 hash pair.
///
/// ```
/// use bloomset::hash::{HashPair, SipHashPair};
///
/// let pair = SipHashPair::with_keys((1, 2), (3, 4));
/// let (h1, h2) = pair.hash_pair(b"item");
/// assert_ne!(h1, h2);
/// assert_eq!(pair.hash_pair(b"item"), (h1, h2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SipHashPair {
    keys_a: (u64, u64),
    keys_b: (u64, u64),
}

impl SipHashPair {
    /// Pair with the built-in keys.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            keys_a: DEFAULT_KEYS_A,
            keys_b: DEFAULT_KEYS_B,
        }
    }

    /// Pair with caller-chosen 128-bit keys for `h1` and `h2`.
    #[must_use]
    pub const fn with_keys(keys_a: (u64, u64), keys_b: (u64, u64)) -> Self {
        Self { keys_a, keys_b }
    }

    #[inline]
    fn digest((k0, k1): (u64, u64), bytes: &[u8]) -> u64 {
        // Fresh state per call.
        let mut state = SipHasher13::new_with_keys(k0, k1);
        state.write(bytes);
        state.finish()
    }
}

impl Default for SipHashPair {
    fn default() -> Self {
        Self::new()
    }
}

impl HashPair for SipHashPair {
    #[inline]
    fn hash_a(&self, bytes: &[u8]) -> u64 {
        Self::digest(self.keys_a, bytes)
    }

    #[inline]
    fn hash_b(&self, bytes: &[u8]) -> u64 {
        Self::digest(self.keys_b, bytes)
    }

    fn name(&self) -> &'static str {
        "SipHashPair"
    }
}
