//! Tests for the fluent builder API.
//!
//! ## Test Organization
//!
//! 1. **Defaults** - method and tuning-constant defaults
//! 2. **Parameter Validation** - out-of-range values fail at build()
//! 3. **Duplicate Parameters** - setting anything twice fails at build()
//! 4. **Estimator State** - accessors and cached diagnostics

use robust_rs::prelude::*;

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn test_location_builder_defaults() {
    let estimator: LocationEstimator<f64> = Location::new().build().unwrap();
    assert_eq!(estimator.method(), LocationMethod::Median);
    assert_eq!(estimator.delta(), 1.5);
    assert_eq!(estimator.trim_fraction(), 0.1);
    assert!(estimator.processed().is_none());
    assert!(estimator.covariance().is_none());
}

#[test]
fn test_regression_builder_defaults() {
    let estimator: RegressionEstimator<f64> = Regression::new().build().unwrap();
    assert_eq!(estimator.method(), RegressionMethod::Huber);
    assert_eq!(estimator.delta(), 1.345);
    assert!(estimator.processed().is_none());
}

// ============================================================================
// Parameter Validation
// ============================================================================

#[test]
fn test_trim_fraction_out_of_range_fails_at_build() {
    for fraction in [-0.1, 0.51, f64::NAN] {
        let err = Location::new()
            .method(LocationMethod::TrimmedMean)
            .trim_fraction(fraction)
            .build()
            .unwrap_err();
        assert!(
            matches!(err, EstimateError::InvalidTrimFraction(_)),
            "{fraction}"
        );
    }
}

#[test]
fn test_trim_fraction_boundaries_are_accepted() {
    for fraction in [0.0, 0.5] {
        assert!(Location::new().trim_fraction(fraction).build().is_ok());
    }
}

#[test]
fn test_invalid_delta_fails_at_build() {
    for delta in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let err = Location::new().delta(delta).build().unwrap_err();
        assert!(matches!(err, EstimateError::InvalidDelta(_)), "{delta}");

        let err = Regression::new().delta(delta).build().unwrap_err();
        assert!(matches!(err, EstimateError::InvalidDelta(_)), "{delta}");
    }
}

// ============================================================================
// Duplicate Parameters
// ============================================================================

#[test]
fn test_duplicate_method_fails_at_build() {
    let err = Location::<f64>::new()
        .method(LocationMethod::Huber)
        .method(LocationMethod::Lms)
        .build()
        .unwrap_err();
    assert_eq!(err, EstimateError::DuplicateParameter { parameter: "method" });
}

#[test]
fn test_duplicate_delta_fails_at_build() {
    let err = Regression::new().delta(1.0).delta(2.0).build().unwrap_err();
    assert_eq!(err, EstimateError::DuplicateParameter { parameter: "delta" });
}

#[test]
fn test_duplicate_trim_fraction_fails_at_build() {
    let err = Location::new()
        .trim_fraction(0.1)
        .trim_fraction(0.2)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        EstimateError::DuplicateParameter {
            parameter: "trim_fraction"
        }
    );
}

// ============================================================================
// Estimator State
// ============================================================================

#[test]
fn test_configured_values_are_observable() {
    let estimator: LocationEstimator<f64> = Location::new()
        .method(LocationMethod::TrimmedMean)
        .trim_fraction(0.25)
        .build()
        .unwrap();
    assert_eq!(estimator.method(), LocationMethod::TrimmedMean);
    assert_eq!(estimator.trim_fraction(), 0.25);
}

#[test]
fn test_diagnostics_are_overwritten_per_call() {
    let mut estimator = Location::new()
        .method(LocationMethod::TrimmedMean)
        .trim_fraction(0.25)
        .build()
        .unwrap();

    estimator
        .compute(
            &Dataset::from_scalars(vec![1.0, 2.0, 3.0, 4.0]),
            &Control::new(),
        )
        .unwrap();
    // round(4 * 0.25) = 1 trimmed per end.
    assert_eq!(estimator.processed().unwrap(), &[2.0, 3.0]);

    estimator
        .compute(
            &Dataset::from_scalars(vec![10.0, 20.0, 30.0, 40.0]),
            &Control::new(),
        )
        .unwrap();
    assert_eq!(estimator.processed().unwrap(), &[20.0, 30.0]);
}

#[test]
fn test_estimators_are_reusable_across_datasets() {
    let mut estimator = Regression::new()
        .method(RegressionMethod::TheilSen)
        .build()
        .unwrap();

    let first = estimator
        .fit(
            &Dataset::from_points(vec![(0.0, 0.0), (1.0, 2.0), (2.0, 4.0)]),
            &Control::new(),
        )
        .unwrap();
    assert_eq!(first.slope, 2.0);

    let second = estimator
        .fit(
            &Dataset::from_points(vec![(0.0, 0.0), (1.0, 3.0), (2.0, 6.0)]),
            &Control::new(),
        )
        .unwrap();
    assert_eq!(second.slope, 3.0);
}

#[test]
fn test_f32_precision_is_supported() {
    let mut estimator: LocationEstimator<f32> = Location::new().build().unwrap();
    let estimate = estimator
        .compute(
            &Dataset::from_scalars(vec![1.0f32, 2.0, 3.0, 4.0]),
            &Control::new(),
        )
        .unwrap();
    assert_eq!(estimate.value, 2.5f32);
}
