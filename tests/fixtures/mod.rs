//! Shared helpers for the integration and property tests

// Each test crate uses its own subset of these helpers
#![allow(dead_code)]

use proptest::prelude::*;
use tracing_subscriber::EnvFilter;

/// Tolerance for comparisons that go through different float paths
pub const TOLERANCE: f64 = 1e-9;

/// Install a test-friendly subscriber once; `RUST_LOG` overrides the level
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_test_writer()
        .try_init();
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {} to be within {} of {}",
        actual,
        TOLERANCE,
        expected
    );
}

/// Total rating moved between two snapshots of the same competitors
pub fn total_delta(old: &[f64], new: &[f64]) -> f64 {
    new.iter().zip(old).map(|(n, o)| n - o).sum()
}

/// Ratings in the conventional Elo range
pub fn rating() -> impl Strategy<Value = f64> {
    0.0..3000.0f64
}

pub fn k_factor() -> impl Strategy<Value = f64> {
    1.0..64.0f64
}

pub fn score() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), Just(0.5), Just(1.0), 0.0..=1.0f64]
}

pub fn team(max_size: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(rating(), 1..=max_size)
}

pub fn rank_list(max_size: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(rating(), 2..=max_size)
}
