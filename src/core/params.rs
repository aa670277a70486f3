//! Optimal parameter calculation for Bloom filters.
//!
//! Given:
//! - `n`: expected number of items
//! - `ε`: target false positive rate
//!
//! Sizing:
//! - `m = ⌈-n × ln(ε) / (ln 2)²⌉` (bits in the filter)
//! - `k = ⌈-ln(ε) / ln 2⌉` (hash rounds per operation)
//!
//! Both are rounded **up** and floored at 1. Truncating either silently pushes
//! the real false positive rate above the requested bound.
//!
//! Expected false positive rate after `n` inserts:
//! - `p = (1 - e^(-kn/m))^k`
//!
//! # References
//!
//! - Bloom, Burton H. (1970). "Space/Time Trade-offs in Hash Coding with Allowable Errors"
//! - Kirsch & Mitzenmacher (2006). "Less Hashing, Same Performance: Building a Better Bloom Filter"

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

use crate::error::{FilterError, Result};
use std::f64::consts::LN_2;

/// (ln 2)² ≈ 0.4804530139182014
const LN2_SQUARED: f64 = LN_2 * LN_2;

/// Smallest filter this crate will build, in bits.
pub const MIN_BIT_LENGTH: usize = 1;

/// Smallest round count this crate will use.
pub const MIN_ROUND_COUNT: usize = 1;

/// Reject item counts of zero.
///
/// # Errors
///
/// [`FilterError::InvalidItemCount`] if `n == 0`.
#[inline]
pub fn validate_item_count(n: u64) -> Result<()> {
    if n == 0 {
        return Err(FilterError::invalid_item_count(n));
    }
    Ok(())
}

/// Reject false positive rates outside the open interval (0, 1), and NaN.
///
/// # Errors
///
/// [`FilterError::FalsePositiveRateOutOfBounds`] on any rejected value.
#[inline]
pub fn validate_fp_rate(fp_rate: f64) -> Result<()> {
    // Written as a negated conjunction so NaN is rejected too.
    if !(fp_rate > 0.0 && fp_rate < 1.0) {
        return Err(FilterError::fp_rate_out_of_bounds(fp_rate));
    }
    Ok(())
}

/// Number of bits needed for `n` items at false positive rate `fp_rate`.
///
/// Implements `m = ⌈-n × ln(ε) / (ln 2)²⌉`, at least [`MIN_BIT_LENGTH`].
///
/// # Errors
///
/// - [`FilterError::InvalidItemCount`] if `n == 0`
/// - [`FilterError::FalsePositiveRateOutOfBounds`] if `fp_rate` not in (0, 1)
/// - [`FilterError::InvalidParameters`] if the result does not fit in memory
///
/// # Examples
///
/// ```
/// use bloomset::core::params::optimal_bit_count;
///
/// assert_eq!(optimal_bit_count(1000, 0.01).unwrap(), 9586);
/// assert_eq!(optimal_bit_count(100, 0.01).unwrap(), 959);
/// ```
pub fn optimal_bit_count(n: u64, fp_rate: f64) -> Result<usize> {
    validate_item_count(n)?;
    validate_fp_rate(fp_rate)?;

    let m = (-(n as f64) * fp_rate.ln() / LN2_SQUARED).ceil();

    // Compare in f64 before casting; `as usize` saturates silently.
    if !m.is_finite() || m >= (usize::MAX / 2) as f64 {
        return Err(FilterError::invalid_parameters(format!(
            "Calculated filter size {:.0} bits exceeds reasonable bounds. \
             Consider increasing false positive rate or reducing item count",
            m
        )));
    }

    Ok((m as usize).max(MIN_BIT_LENGTH))
}

/// Number of hash rounds for false positive rate `fp_rate`.
///
/// Implements `k = ⌈-ln(ε) / ln 2⌉`, at least [`MIN_ROUND_COUNT`].
/// Independent of the item count.
///
/// # Errors
///
/// [`FilterError::FalsePositiveRateOutOfBounds`] if `fp_rate` not in (0, 1).
///
/// # Examples
///
/// ```
/// use bloomset::core::params::optimal_round_count;
///
/// assert_eq!(optimal_round_count(0.01).unwrap(), 7);
/// assert_eq!(optimal_round_count(0.001).unwrap(), 10);
/// ```
pub fn optimal_round_count(fp_rate: f64) -> Result<usize> {
    validate_fp_rate(fp_rate)?;

    let k = (-fp_rate.ln() / LN_2).ceil();
    Ok((k as usize).max(MIN_ROUND_COUNT))
}

/// Compute `(m, k)` together.
///
/// # Errors
///
/// See [`optimal_bit_count`].
///
/// ```
/// use bloomset::core::params::calculate_filter_params;
///
/// let (m, k) = calculate_filter_params(1000, 0.01).unwrap();
/// assert_eq!((m, k), (9586, 7));
/// ```
pub fn calculate_filter_params(n: u64, fp_rate: f64) -> Result<(usize, usize)> {
    let m = optimal_bit_count(n, fp_rate)?;
    let k = optimal_round_count(fp_rate)?;
    Ok((m, k))
}

/// Theoretical false positive rate after `n` inserts into `m` bits with `k` rounds.
///
/// Implements `p = (1 - e^(-kn/m))^k`, clamped to [0, 1].
///
/// # Errors
///
/// [`FilterError::InvalidParameters`] if `m == 0` or `k == 0`.
///
/// ```
/// use bloomset::core::params::expected_fp_rate;
///
/// let fp = expected_fp_rate(9586, 1000, 7).unwrap();
/// assert!((fp - 0.01).abs() < 0.001);
/// ```
pub fn expected_fp_rate(m: usize, n: u64, k: usize) -> Result<f64> {
    if m == 0 {
        return Err(FilterError::invalid_parameters("bit length must be positive"));
    }
    if k == 0 {
        return Err(FilterError::invalid_parameters("round count must be positive"));
    }

    if n == 0 {
        return Ok(0.0);
    }

    let k_f64 = k as f64;
    let prob_bit_one = 1.0 - (-(k_f64 * n as f64) / m as f64).exp();

    Ok(prob_bit_one.powf(k_f64).clamp(0.0, 1.0))
}

/// Bits per item needed for `fp_rate`: `-ln(ε) / (ln 2)²`.
///
/// # Errors
///
/// [`FilterError::FalsePositiveRateOutOfBounds`] if `fp_rate` not in (0, 1).
///
/// ```
/// use bloomset::core::params::bits_per_element;
///
/// let bpe = bits_per_element(0.01).unwrap();
/// assert!((bpe - 9.585).abs() < 0.001);
/// ```
pub fn bits_per_element(fp_rate: f64) -> Result<f64> {
    validate_fp_rate(fp_rate)?;
    Ok(-fp_rate.ln() / LN2_SQUARED)
}
