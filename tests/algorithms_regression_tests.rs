//! Tests for the robust regression estimators.
//!
//! These tests pin the documented fit behavior of each method:
//! - Exact recovery of noiseless lines
//! - Outlier resistance relative to ordinary least squares
//! - The degenerate-geometry contract for coincident x-coordinates
//! - The shared R² invariant and residual diagnostics
//!
//! ## Test Organization
//!
//! 1. **Theil-Sen** - exact lines, tie conventions, skipped vertical pairs
//! 2. **Huber IRLS** - exact lines, bounded outlier influence
//! 3. **LMS** - exact-majority recovery, best-line residual diagnostic
//! 4. **Contract** - minimum size, degenerate geometry, R², idempotence

use approx::{assert_abs_diff_eq, assert_relative_eq};

use robust_rs::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn line_points(slope: f64, intercept: f64, xs: &[f64]) -> Dataset<f64> {
    Dataset::from_points(xs.iter().map(|&x| (x, slope * x + intercept)).collect())
}

fn fit(method: RegressionMethod, dataset: &Dataset<f64>) -> RegressionFit<f64> {
    let mut estimator = Regression::new().method(method).build().unwrap();
    estimator.fit(dataset, &Control::new()).unwrap()
}

/// Unweighted OLS slope, for robustness comparisons.
fn ols_slope(points: &[(f64, f64)]) -> f64 {
    let n = points.len() as f64;
    let sum_x: f64 = points.iter().map(|p| p.0).sum();
    let sum_y: f64 = points.iter().map(|p| p.1).sum();
    let sum_xy: f64 = points.iter().map(|p| p.0 * p.1).sum();
    let sum_xx: f64 = points.iter().map(|p| p.0 * p.0).sum();
    (n * sum_xy - sum_x * sum_y) / (n * sum_xx - sum_x * sum_x)
}

// ============================================================================
// Theil-Sen
// ============================================================================

#[test]
fn test_theil_sen_recovers_exact_line() {
    let dataset = line_points(2.0, 1.0, &[0.0, 1.0, 2.0, 3.0, 4.0]);
    let result = fit(RegressionMethod::TheilSen, &dataset);

    assert_abs_diff_eq!(result.slope, 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(result.intercept, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(result.r_squared, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(result.median_squared_residual, 0.0, epsilon = 1e-12);
}

#[test]
fn test_theil_sen_averages_middle_slopes() {
    // Points (0,0), (1,1), (2,4), (3,3): pairwise slopes sorted are
    // [-1, 1, 1, 1, 2, 3]; an even count averages the two middles: 1.
    let dataset = Dataset::from_points(vec![(0.0, 0.0), (1.0, 1.0), (2.0, 4.0), (3.0, 3.0)]);
    let result = fit(RegressionMethod::TheilSen, &dataset);
    assert_relative_eq!(result.slope, 1.0);

    // Intercepts y - x: [0, 0, 2, 0] -> sorted [0, 0, 0, 2] -> median 0.
    assert_relative_eq!(result.intercept, 0.0);
}

#[test]
fn test_theil_sen_skips_vertical_pairs() {
    // Two points share x = 0; the pair contributes no slope but the fit
    // still succeeds from the remaining pairs.
    let dataset = Dataset::from_points(vec![
        (0.0, 0.0),
        (0.0, 2.0),
        (1.0, 1.0),
        (2.0, 2.0),
        (3.0, 3.0),
    ]);
    let result = fit(RegressionMethod::TheilSen, &dataset);

    assert_relative_eq!(result.slope, 1.0);
    assert_relative_eq!(result.intercept, 0.0);
}

#[test]
fn test_theil_sen_ignores_single_outlier() {
    let mut points: Vec<(f64, f64)> = (0..10).map(|i| (i as f64, 2.0 * i as f64)).collect();
    points[9].1 = 100.0;

    let result = fit(RegressionMethod::TheilSen, &Dataset::from_points(points));
    assert_abs_diff_eq!(result.slope, 2.0, epsilon = 1e-9);
}

#[test]
fn test_theil_sen_slope_diagnostic_is_sorted() {
    let mut estimator = Regression::new()
        .method(RegressionMethod::TheilSen)
        .build()
        .unwrap();
    let dataset = line_points(1.5, 0.0, &[0.0, 1.0, 2.0, 3.0]);
    estimator.fit(&dataset, &Control::new()).unwrap();

    let slopes = estimator.processed().unwrap();
    assert_eq!(slopes.len(), 6);
    assert!(slopes.windows(2).all(|w| w[0] <= w[1]));
}

// ============================================================================
// Huber IRLS
// ============================================================================

#[test]
fn test_huber_recovers_exact_line() {
    // Zero residuals keep every weight at 1, so IRLS stays on the OLS line.
    let dataset = line_points(3.0, -2.0, &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
    let result = fit(RegressionMethod::Huber, &dataset);

    assert_abs_diff_eq!(result.slope, 3.0, epsilon = 1e-9);
    assert_abs_diff_eq!(result.intercept, -2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(result.r_squared, 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(result.median_squared_residual, 0.0, epsilon = 1e-9);
}

#[test]
fn test_huber_bounds_outlier_influence() {
    let mut points: Vec<(f64, f64)> = (0..11).map(|i| (i as f64, 2.0 * i as f64 + 1.0)).collect();
    points[10].1 = 100.0; // true value would be 21

    let naive = ols_slope(&points);
    let result = fit(RegressionMethod::Huber, &Dataset::from_points(points));

    // The reweighted slope sits far closer to the truth than OLS.
    assert!((result.slope - 2.0).abs() < 0.5);
    assert!((result.slope - 2.0).abs() < (naive - 2.0).abs() / 4.0);
}

// ============================================================================
// LMS
// ============================================================================

#[test]
fn test_lms_fits_the_majority_exactly() {
    // Five of six points lie on y = x; the best candidate line has a zero
    // median squared residual regardless of the outlier.
    let dataset = Dataset::from_points(vec![
        (0.0, 0.0),
        (1.0, 1.0),
        (2.0, 2.0),
        (3.0, 3.0),
        (4.0, 4.0),
        (5.0, 50.0),
    ]);
    let result = fit(RegressionMethod::Lms, &dataset);

    assert_relative_eq!(result.slope, 1.0);
    assert_relative_eq!(result.intercept, 0.0);
    assert_eq!(result.median_squared_residual, 0.0);
}

#[test]
fn test_lms_residual_diagnostic_tracks_best_line() {
    let mut estimator = Regression::new()
        .method(RegressionMethod::Lms)
        .build()
        .unwrap();
    let dataset = Dataset::from_points(vec![
        (0.0, 0.0),
        (1.0, 1.0),
        (2.0, 2.0),
        (3.0, 3.0),
        (4.0, 4.0),
        (5.0, 50.0),
    ]);
    estimator.fit(&dataset, &Control::new()).unwrap();

    // Squared residuals of y = x in point order: only the outlier deviates.
    let expected = [0.0, 0.0, 0.0, 0.0, 0.0, 45.0 * 45.0];
    assert_eq!(estimator.processed().unwrap(), &expected[..]);
}

#[test]
fn test_lms_skips_vertical_pairs() {
    let dataset = Dataset::from_points(vec![
        (0.0, 0.0),
        (0.0, 5.0),
        (1.0, 1.0),
        (2.0, 2.0),
        (3.0, 3.0),
    ]);
    let result = fit(RegressionMethod::Lms, &dataset);

    assert_relative_eq!(result.slope, 1.0);
    assert_relative_eq!(result.intercept, 0.0);
}

// ============================================================================
// Contract
// ============================================================================

#[test]
fn test_fewer_than_two_points_is_rejected() {
    for method in [
        RegressionMethod::Huber,
        RegressionMethod::Lms,
        RegressionMethod::TheilSen,
    ] {
        let mut estimator = Regression::new().method(method).build().unwrap();
        let err = estimator
            .fit(&Dataset::from_points(vec![(1.0, 1.0)]), &Control::new())
            .unwrap_err();
        assert_eq!(err, EstimateError::TooFewPoints { got: 1, min: 2 }, "{method:?}");
    }
}

#[test]
fn test_coincident_x_is_degenerate_for_every_method() {
    let dataset = Dataset::from_points(vec![(1.0, 1.0), (1.0, 2.0), (1.0, 3.0)]);

    for method in [
        RegressionMethod::Huber,
        RegressionMethod::Lms,
        RegressionMethod::TheilSen,
    ] {
        let mut estimator = Regression::new().method(method).build().unwrap();
        let err = estimator.fit(&dataset, &Control::new()).unwrap_err();
        assert!(
            matches!(err, EstimateError::DegenerateGeometry(_)),
            "{method:?}: {err}"
        );
    }
}

#[test]
fn test_constant_y_has_unit_r_squared() {
    let dataset = Dataset::from_points(vec![(0.0, 5.0), (1.0, 5.0), (2.0, 5.0), (3.0, 5.0)]);
    let result = fit(RegressionMethod::TheilSen, &dataset);

    assert_eq!(result.slope, 0.0);
    assert_eq!(result.intercept, 5.0);
    assert_eq!(result.r_squared, 1.0);
}

#[test]
fn test_scalar_dataset_is_rejected() {
    let mut estimator = Regression::new().build().unwrap();
    let err = estimator
        .fit(&Dataset::from_scalars(vec![1.0, 2.0]), &Control::new())
        .unwrap_err();
    assert!(matches!(err, EstimateError::InvalidInput(_)));
}

#[test]
fn test_predict_evaluates_the_line() {
    let dataset = line_points(2.0, 1.0, &[0.0, 1.0, 2.0, 3.0]);
    let result = fit(RegressionMethod::TheilSen, &dataset);

    assert_abs_diff_eq!(result.predict(10.0), 21.0, epsilon = 1e-9);
}

#[test]
fn test_repeated_fits_are_bit_identical() {
    let dataset = Dataset::from_points(vec![
        (0.0, 1.2),
        (1.0, 2.9),
        (2.0, 5.1),
        (3.0, 7.2),
        (4.0, 20.0),
    ]);

    for method in [
        RegressionMethod::Huber,
        RegressionMethod::Lms,
        RegressionMethod::TheilSen,
    ] {
        let mut estimator = Regression::new().method(method).build().unwrap();
        let first = estimator.fit(&dataset, &Control::new()).unwrap();
        let second = estimator.fit(&dataset, &Control::new()).unwrap();

        assert_eq!(first.slope, second.slope, "{method:?}");
        assert_eq!(first.intercept, second.intercept, "{method:?}");
        assert_eq!(
            first.median_squared_residual, second.median_squared_residual,
            "{method:?}"
        );
        assert_eq!(first.r_squared, second.r_squared, "{method:?}");
    }
}
