//! Bloom filter implementations.
//!
//! Only the fixed-capacity [`BloomFilter`] lives here: insert and query,
//! no deletion, no resize.

pub mod standard;

pub use standard::BloomFilter;
