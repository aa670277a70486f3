//! Double hashing (Kirsch & Mitzenmacher 2006).
//!
//! `k` independent hash functions are simulated from two base digests:
//!
//! ```text
//! gᵢ(x) = (h₁(x) + i·h₂(x)) mod m        for i in 0..k
//! ```
//!
//! The sum and product wrap in 64 bits before the reduction. Insert and
//! lookup must walk exactly the same sequence for the same item, so both go
//! through [`derive_index`] / [`RoundIndices`].
//!
//! # References
//!
//! - Kirsch, A., & Mitzenmacher, M. (2006). "Less Hashing, Same Performance: Building a Better Bloom Filter"

#![allow(clippy::cast_possible_truncation)]

/// Bit index for `round` of the probe sequence defined by `(h1, h2)`.
///
/// Computes `(h1 + round · h2) mod bit_length` with wrapping 64-bit
/// arithmetic. The result is always `< bit_length`.
///
/// # Panics
///
/// Panics if `bit_length == 0`.
///
/// # Examples
///
/// ```
/// use bloomset::hash::derive_index;
///
/// assert_eq!(derive_index(10, 3, 0, 7), 3);
/// assert_eq!(derive_index(10, 3, 2, 7), 2); // 16 mod 7
/// assert_eq!(derive_index(u64::MAX, 2, 1, 10), 1); // wraps to 1
/// ```
#[must_use]
#[inline]
pub fn derive_index(h1: u64, h2: u64, round: u64, bit_length: usize) -> usize {
    let combined = h1.wrapping_add(round.wrapping_mul(h2));
    (combined % bit_length as u64) as usize
}

/// Lazy iterator over the `k` indices of one item's probe sequence.
///
/// Lazy so that lookups can stop at the first unset bit without computing
/// the remaining rounds.
///
/// ```
/// use bloomset::hash::RoundIndices;
///
/// let indices: Vec<usize> = RoundIndices::new(1, 2, 4, 5).collect();
/// assert_eq!(indices, vec![1, 3, 0, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct RoundIndices {
    h1: u64,
    h2: u64,
    round: u64,
    rounds: u64,
    bit_length: usize,
}

impl RoundIndices {
    /// Sequence of `rounds` indices over `bit_length` bits.
    ///
    /// # Panics
    ///
    /// Panics if `bit_length == 0` and `rounds > 0`, on first iteration.
    #[must_use]
    #[inline]
    pub fn new(h1: u64, h2: u64, rounds: usize, bit_length: usize) -> Self {
        Self {
            h1,
            h2,
            round: 0,
            rounds: rounds as u64,
            bit_length,
        }
    }
}

impl Iterator for RoundIndices {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.round >= self.rounds {
            return None;
        }
        let index = derive_index(self.h1, self.h2, self.round, self.bit_length);
        self.round += 1;
        Some(index)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.rounds - self.round) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RoundIndices {}
