//! Data generators and constants shared by the benchmarks.
#![allow(dead_code)]

use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};

/// Filter capacities exercised by size sweeps.
pub const SIZES: &[u64] = &[1_000, 10_000, 100_000, 1_000_000];

/// Target false positive rates; lower rates mean more rounds.
pub const FP_RATES: &[f64] = &[0.1, 0.01, 0.001, 0.0001];

/// Item lengths in bytes.
pub const ITEM_LENGTHS: &[usize] = &[8, 32, 256, 1024];

/// Random alphanumeric string of `len` bytes.
#[inline]
pub fn random_string(len: usize) -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// `count` independent random strings of `len` bytes.
pub fn generate_strings(count: usize, len: usize) -> Vec<String> {
    (0..count).map(|_| random_string(len)).collect()
}

/// "item_00000000", "item_00000001", ...
pub fn generate_sequential_strings(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("item_{:08}", i)).collect()
}

/// Random 64-bit keys as little-endian bytes.
pub fn generate_u64_keys(count: usize) -> Vec<[u8; 8]> {
    let mut rng = thread_rng();
    (0..count).map(|_| rng.gen::<u64>().to_le_bytes()).collect()
}
