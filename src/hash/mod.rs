//! Hashing for Bloom filters: digest pairs and index derivation.
//!
//! # Module Structure
//!
//! ```text
//! hash/
//! ├── hasher.rs      - HashPair trait (two stateless 64-bit digests)
//! ├── strategies.rs  - derive_index / RoundIndices (double hashing)
//! ├── xxhash.rs      - XxHashPair (feature = "xxhash", default)
//! ├── siphash.rs     - SipHashPair (feature = "siphash", default)
//! └── mod.rs         - This file (public API)
//! ```
//!
//! # Choosing a Hash Pair
//!
//! | Pair            | Speed     | Keyed | Use Case                          |
//! |-----------------|-----------|-------|-----------------------------------|
//! | [`XxHashPair`]  | Very fast | No    | Default                           |
//! | [`SipHashPair`] | Medium    | Yes   | Keys chosen by untrusted parties  |
//!
//! # Example
//!
//! ```
//! use bloomset::hash::{DefaultHashPair, HashPair, RoundIndices};
//!
//! let (h1, h2) = DefaultHashPair::default().hash_pair(b"test");
//! let indices: Vec<usize> = RoundIndices::new(h1, h2, 7, 1000).collect();
//! assert_eq!(indices.len(), 7);
//! assert!(indices.iter().all(|&i| i < 1000));
//! ```

pub mod hasher;
pub mod strategies;

#[cfg(feature = "xxhash")]
pub mod xxhash;

#[cfg(feature = "siphash")]
pub mod siphash;

pub use hasher::HashPair;
pub use strategies::{derive_index, RoundIndices};

#[cfg(feature = "xxhash")]
pub use xxhash::XxHashPair;

#[cfg(feature = "siphash")]
pub use siphash::SipHashPair;

/// Hash pair used when none is specified.
#[cfg(feature = "xxhash")]
pub type DefaultHashPair = XxHashPair;

/// Hash pair used when none is specified.
#[cfg(all(not(feature = "xxhash"), feature = "siphash"))]
pub type DefaultHashPair = SipHashPair;
