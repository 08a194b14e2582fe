//! Tests for the error type's display output and classification.

use robust_rs::prelude::*;

#[test]
fn test_estimate_error_display() {
    // EmptyInput
    let err = EstimateError::EmptyInput;
    assert_eq!(format!("{}", err), "Input dataset is empty");

    // InvalidInput
    let err = EstimateError::InvalidInput("test error".to_string());
    assert_eq!(format!("{}", err), "Invalid input: test error");

    // MismatchedInputs
    let err = EstimateError::MismatchedInputs { x_len: 10, y_len: 5 };
    assert_eq!(
        format!("{}", err),
        "Length mismatch: x has 10 points, y has 5"
    );

    // InvalidNumericValue
    let err = EstimateError::InvalidNumericValue("NaN detected".to_string());
    assert_eq!(format!("{}", err), "Invalid numeric value: NaN detected");

    // TooFewPoints
    let err = EstimateError::TooFewPoints { got: 1, min: 2 };
    assert_eq!(format!("{}", err), "Too few points: got 1, need at least 2");

    // InvalidTrimFraction
    let err = EstimateError::InvalidTrimFraction(0.7);
    assert_eq!(
        format!("{}", err),
        "Invalid trim fraction: 0.7 (must be in [0, 0.5])"
    );

    // InvalidDelta
    let err = EstimateError::InvalidDelta(-1.0);
    assert_eq!(
        format!("{}", err),
        "Invalid delta: -1 (must be positive and finite)"
    );

    // DegenerateGeometry
    let err = EstimateError::DegenerateGeometry("all x-coordinates coincide".to_string());
    assert_eq!(
        format!("{}", err),
        "Degenerate geometry: all x-coordinates coincide"
    );

    // Cancelled
    let err = EstimateError::Cancelled;
    assert_eq!(format!("{}", err), "Computation was cancelled");

    // DuplicateParameter
    let err = EstimateError::DuplicateParameter { parameter: "delta" };
    assert_eq!(
        format!("{}", err),
        "Parameter 'delta' was set multiple times. Each parameter can only be configured once."
    );
}

#[test]
fn test_only_cancellation_reports_cancelled() {
    assert!(EstimateError::Cancelled.is_cancelled());

    assert!(!EstimateError::EmptyInput.is_cancelled());
    assert!(!EstimateError::TooFewPoints { got: 1, min: 2 }.is_cancelled());
    assert!(!EstimateError::InvalidTrimFraction(0.7).is_cancelled());
    assert!(!EstimateError::DegenerateGeometry("x".to_string()).is_cancelled());
}

#[cfg(feature = "std")]
#[test]
fn test_error_trait_is_implemented() {
    let err: Box<dyn std::error::Error> = Box::new(EstimateError::EmptyInput);
    assert_eq!(err.to_string(), "Input dataset is empty");
}
