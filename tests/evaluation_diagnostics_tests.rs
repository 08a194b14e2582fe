#![cfg(feature = "dev")]
//! Tests for the fit-quality diagnostics.

use approx::assert_relative_eq;

use robust_rs::internals::evaluation::diagnostics::{
    median_squared_residual, r_squared, squared_residuals,
};
use robust_rs::prelude::Point;

fn points(pairs: &[(f64, f64)]) -> Vec<Point<f64>> {
    pairs.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

// ============================================================================
// R-squared
// ============================================================================

#[test]
fn test_perfect_fit_has_unit_r_squared() {
    let pts = points(&[(0.0, 1.0), (1.0, 3.0), (2.0, 5.0)]);
    assert_relative_eq!(r_squared(&pts, 2.0, 1.0), 1.0);
}

#[test]
fn test_constant_y_has_unit_r_squared_by_definition() {
    // Zero total sum of squares: defined as 1.0 for any line through the data.
    let pts = points(&[(0.0, 4.0), (1.0, 4.0), (2.0, 4.0)]);
    assert_eq!(r_squared(&pts, 0.0, 4.0), 1.0);
}

#[test]
fn test_r_squared_matches_hand_computation() {
    // Line y = x over points with residuals [1, -1, 0].
    let pts = points(&[(0.0, 1.0), (1.0, 0.0), (2.0, 2.0)]);

    // mean(y) = 1; ss_tot = 0 + 1 + 1 = 2; ss_res = 1 + 1 + 0 = 2.
    assert_relative_eq!(r_squared(&pts, 1.0, 0.0), 0.0);
}

#[test]
fn test_r_squared_can_be_negative_for_bad_lines() {
    let pts = points(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
    assert!(r_squared(&pts, -1.0, 0.0) < 0.0);
}

// ============================================================================
// Residuals
// ============================================================================

#[test]
fn test_squared_residuals_are_in_point_order() {
    let pts = points(&[(0.0, 1.0), (1.0, 1.0), (2.0, 5.0)]);
    let sq = squared_residuals(&pts, 1.0, 0.0);
    assert_eq!(sq, vec![1.0, 0.0, 9.0]);
}

#[test]
fn test_median_squared_residual_takes_element_at_half_count() {
    // Sorted squared residuals [0, 1, 4, 9]; element at index 2.
    let pts = points(&[(0.0, 0.0), (1.0, 2.0), (2.0, 4.0), (3.0, 6.0)]);
    assert_eq!(median_squared_residual(&pts, 1.0, 0.0), 4.0);
}

#[test]
fn test_median_squared_residual_zero_for_exact_fit() {
    let pts = points(&[(0.0, 1.0), (1.0, 3.0), (2.0, 5.0)]);
    assert_eq!(median_squared_residual(&pts, 2.0, 1.0), 0.0);
}
