//! The two-digest hashing contract used by every filter.
//!
//! A filter needs two independent 64-bit digests of each item. [`HashPair`]
//! supplies them as two *stateless* functions: every call feeds the item's
//! bytes into a fresh hash state and returns the digest, so nothing an earlier
//! call did can leak into a later one. There is no reset step for callers to
//! forget.
//!
//! # Separation of Concerns
//!
//! - **`HashPair`**: produces `(h1, h2)` from bytes
//! - **`strategies`**: derives `k` bit indices from `(h1, h2)`
//! - **Filters**: compose a hash pair, the index derivation and a `BitStore`
//!
//! # Examples
//!
//! ```
//! # #[cfg(feature = "xxhash")]
//! # {
//! use bloomset::hash::{HashPair, XxHashPair};
//!
//! let pair = XxHashPair::new();
//! let (h1, h2) = pair.hash_pair(b"hello");
//! assert_eq!(h1, pair.hash_a(b"hello"));
//! assert_eq!(h2, pair.hash_b(b"hello"));
//! assert_ne!(h1, h2);
//! # }
//! ```

#![allow(clippy::module_name_repetitions)]

/// Two independent, deterministic 64-bit hash functions over byte slices.
///
/// # Requirements
///
/// Implementations must be:
/// - **Pure**: the same bytes always produce the same digests, regardless of
///   any earlier calls on the same value
/// - **Input-dependent**: both digests must be computed from `bytes`; a
///   digest that ignores its input collapses every item onto the same bit
///   positions
/// - **Independent**: `hash_a` and `hash_b` must not be trivially related
///   (e.g. `hash_b = hash_a ^ c`), or double hashing degrades
/// - **Uniform** across the `u64` range
///
/// All implementations must be `Send + Sync` so a filter can be shared
/// across threads.
pub trait HashPair: Send + Sync {
    /// First digest (`h1`): the base offset of the probe sequence.
    fn hash_a(&self, bytes: &[u8]) -> u64;

    /// Second digest (`h2`): the stride of the probe sequence.
    fn hash_b(&self, bytes: &[u8]) -> u64;

    /// Both digests of `bytes`.
    #[inline]
    fn hash_pair(&self, bytes: &[u8]) -> (u64, u64) {
        (self.hash_a(bytes), self.hash_b(bytes))
    }

    /// Human-readable name for diagnostics.
    fn name(&self) -> &'static str;
}
