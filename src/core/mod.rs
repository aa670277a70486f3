//! Building blocks shared by the filter: bit storage and sizing math.
//!
//! ```text
//! core/
//! ├── bitstore.rs  - BitStore (atomic bit array)
//! ├── params.rs    - Sizing formulas and validation
//! └── mod.rs       - This file (public API)
//! ```

pub mod bitstore;
pub mod params;

pub use bitstore::BitStore;
pub use params::{
    bits_per_element, calculate_filter_params, expected_fp_rate, optimal_bit_count,
    optimal_round_count,
};
