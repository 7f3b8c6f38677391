#![cfg(feature = "dev")]
//! Tests for input validation utilities.
//!
//! These tests verify the validation functions used by the power API for:
//! - Operand finiteness
//! - Parameter validation (tolerance, term cap)
//! - Duplicate parameter reporting
//!
//! ## Test Organization
//!
//! 1. **Operand Validation** - Finiteness of base and exponent
//! 2. **Parameter Validation** - Tolerance, term cap
//! 3. **Builder Support** - Duplicate parameter reporting

use powser::internals::engine::validator::Validator;
use powser::internals::primitives::errors::PowserError;

// ============================================================================
// Operand Validation Tests
// ============================================================================

/// Test validation accepts finite operands.
#[test]
fn test_validate_finite_operands() {
    assert!(Validator::validate_operands(2.0, -10.5).is_ok());
    assert!(Validator::validate_operands(-0.0, 0.0).is_ok());
    assert!(Validator::validate_operands(f64::MAX, f64::MIN).is_ok());
}

/// Test validation rejects a NaN base.
///
/// Verifies the error names the offending operand.
#[test]
fn test_validate_nan_base() {
    let result = Validator::validate_operands(f64::NAN, 1.0);

    assert!(
        matches!(
            result,
            Err(PowserError::NonFiniteOperand { name: "base", .. })
        ),
        "NaN base should error"
    );
}

/// Test validation rejects an infinite exponent.
#[test]
fn test_validate_infinite_exponent() {
    let result = Validator::validate_operands(1.0, f64::NEG_INFINITY);

    assert!(
        matches!(
            result,
            Err(PowserError::NonFiniteOperand {
                name: "exponent",
                value
            }) if value == f64::NEG_INFINITY
        ),
        "Infinite exponent should error"
    );
}

// ============================================================================
// Parameter Validation Tests
// ============================================================================

/// Test tolerance validation accepts positive finite values.
#[test]
fn test_validate_tolerance_accepts_positive() {
    assert!(Validator::validate_tolerance(1e-15).is_ok());
    assert!(Validator::validate_tolerance(0.5).is_ok());
}

/// Test tolerance validation rejects zero, negatives, and non-finites.
#[test]
fn test_validate_tolerance_rejects_invalid() {
    for bad in [0.0, -1e-9, f64::NAN, f64::INFINITY] {
        let result = Validator::validate_tolerance(bad);
        assert!(
            matches!(result, Err(PowserError::InvalidTolerance(_))),
            "tolerance {bad} should be rejected"
        );
    }
}

/// Test term cap validation.
#[test]
fn test_validate_max_terms() {
    assert!(Validator::validate_max_terms(1).is_ok());
    assert!(Validator::validate_max_terms(1_000_000).is_ok());

    assert!(
        matches!(
            Validator::validate_max_terms(0),
            Err(PowserError::InvalidMaxTerms(0))
        ),
        "Zero term cap should be rejected"
    );
}

// ============================================================================
// Builder Support Tests
// ============================================================================

/// Test duplicate parameter reporting.
#[test]
fn test_validate_no_duplicates() {
    assert!(Validator::validate_no_duplicates(None).is_ok());

    let result = Validator::validate_no_duplicates(Some("tolerance"));
    assert!(
        matches!(
            result,
            Err(PowserError::DuplicateParameter {
                parameter: "tolerance"
            })
        ),
        "Duplicate parameter should error"
    );
}
