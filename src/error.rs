//! Error types for bloomset operations.
//!
//! Construction is the only fallible public path: every parameter problem is
//! reported as an [`ErrorKind::InvalidParameter`] error and never clamped to a
//! default. Out-of-range bit access is classified as
//! [`ErrorKind::StorageFault`]; membership queries absorb it as "absent".
//!
//! # Error Propagation
//!
//! ```
//! use bloomset::Result;
//! use bloomset::core::params::{optimal_bit_count, optimal_round_count};
//!
//! fn sizing(n: u64, fp: f64) -> Result<(usize, usize)> {
//!     let m = optimal_bit_count(n, fp)?;
//!     let k = optimal_round_count(fp)?;
//!     Ok((m, k))
//! }
//! # assert!(sizing(1000, 0.01).is_ok());
//! # assert!(sizing(0, 0.01).is_err());
//! ```

#![allow(clippy::module_name_repetitions)]

use std::fmt;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FilterError>;

/// Coarse classification of a [`FilterError`].
///
/// Callers that only care whether they passed bad arguments or hit a storage
/// problem can match on this instead of the individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Construction inputs or derived sizing are outside their valid domain.
    InvalidParameter,
    /// A bit index fell outside the storage.
    StorageFault,
}

/// Errors that can occur during filter construction or storage access.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterError {
    /// Derived or explicit parameters are unusable.
    ///
    /// Raised when the sizing formulas produce a value that does not fit the
    /// platform, or when an explicit bit/round count is zero.
    InvalidParameters {
        /// Human-readable description of what's invalid.
        message: String,
    },

    /// False positive rate outside the open interval (0, 1), or NaN.
    FalsePositiveRateOutOfBounds {
        /// The rejected rate.
        fp_rate: f64,
    },

    /// Expected item count of zero.
    InvalidItemCount {
        /// The rejected count.
        count: u64,
    },

    /// Bit index at or beyond the storage length.
    IndexOutOfBounds {
        /// The index that was accessed.
        index: usize,
        /// The storage length in bits.
        length: usize,
    },
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameters { message } => {
                write!(f, "Invalid Bloom filter parameters: {}.", message)
            }
            Self::FalsePositiveRateOutOfBounds { fp_rate } => {
                write!(
                    f,
                    "False positive rate {} is out of bounds. Must be in range (0, 1).",
                    fp_rate
                )
            }
            Self::InvalidItemCount { count } => {
                write!(
                    f,
                    "Invalid item count: {}. Expected items must be greater than 0.",
                    count
                )
            }
            Self::IndexOutOfBounds { index, length } => {
                write!(
                    f,
                    "Index {} out of bounds for bit store of length {}",
                    index, length
                )
            }
        }
    }
}

impl std::error::Error for FilterError {}

impl FilterError {
    /// Create an `InvalidParameters` error.
    #[must_use]
    pub fn invalid_parameters(message: impl Into<String>) -> Self {
        Self::InvalidParameters {
            message: message.into(),
        }
    }

    /// Create a `FalsePositiveRateOutOfBounds` error.
    #[must_use]
    pub fn fp_rate_out_of_bounds(fp_rate: f64) -> Self {
        Self::FalsePositiveRateOutOfBounds { fp_rate }
    }

    /// Create an `InvalidItemCount` error.
    #[must_use]
    pub fn invalid_item_count(count: u64) -> Self {
        Self::InvalidItemCount { count }
    }

    /// Create an `IndexOutOfBounds` error.
    #[must_use]
    pub fn index_out_of_bounds(index: usize, length: usize) -> Self {
        Self::IndexOutOfBounds { index, length }
    }

    /// Classify this error.
    ///
    /// ```
    /// use bloomset::{ErrorKind, FilterError};
    ///
    /// assert_eq!(FilterError::invalid_item_count(0).kind(), ErrorKind::InvalidParameter);
    /// assert_eq!(FilterError::index_out_of_bounds(9, 8).kind(), ErrorKind::StorageFault);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidParameters { .. }
            | Self::FalsePositiveRateOutOfBounds { .. }
            | Self::InvalidItemCount { .. } => ErrorKind::InvalidParameter,
            Self::IndexOutOfBounds { .. } => ErrorKind::StorageFault,
        }
    }

    /// Shorthand for `self.kind() == ErrorKind::InvalidParameter`.
    #[must_use]
    pub const fn is_invalid_parameter(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidParameter)
    }
}
