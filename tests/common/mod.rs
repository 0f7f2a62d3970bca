//! Common test utilities and helpers

#![allow(dead_code)] // Test utilities may not all be used in every test file

pub mod builders;

use linecode_vis::{Bounds, Point, Waveform};

/// Bounds that divide evenly for small sequences: x in [0, 120], y in [0, 40]
pub fn test_bounds() -> Bounds {
    Bounds::new(0.0, 120.0, 0.0, 40.0)
}

/// Assert two floats are approximately equal
pub fn assert_float_eq(a: f32, b: f32, epsilon: f32) {
    assert!(
        (a - b).abs() < epsilon,
        "Expected {} to be approximately equal to {} (epsilon: {})",
        a,
        b,
        epsilon
    );
}

/// Assert that no two consecutive polyline points coincide
pub fn assert_no_consecutive_duplicates(points: &[Point]) {
    for (i, pair) in points.windows(2).enumerate() {
        assert_ne!(
            pair[0],
            pair[1],
            "Points {} and {} are identical: {:?}",
            i,
            i + 1,
            pair[0]
        );
    }
}

/// Distinct y values visited by the waveform, in order of first appearance
pub fn y_levels(wave: &Waveform) -> Vec<f32> {
    let mut ys: Vec<f32> = Vec::new();
    for point in &wave.polyline {
        if !ys.contains(&point.y) {
            ys.push(point.y);
        }
    }
    ys
}
