//! Input validation for power evaluation.
//!
//! ## Purpose
//!
//! This module provides validation functions for the evaluator's
//! configuration parameters and operands. It checks requirements such as
//! finite operands and parameter bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Operand checks**: The kernel computes on finite reals only; NaN and
//!   infinite operands are rejected before dispatch.
//! * **Parameter bounds**: Tolerance must be positive and finite, the term
//!   cap at least 1.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not enforce the logarithm's domain precondition;
//!   the primitive rejects non-positive arguments itself.
//! * This module does not provide automatic correction of invalid inputs.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::PowserError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for evaluator configuration and operands.
///
/// Provides static methods returning `Result<(), PowserError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Operand Validation
    // ========================================================================

    /// Validate that both operands are finite reals.
    pub fn validate_operands<T: Float>(base: T, exponent: T) -> Result<(), PowserError> {
        if !base.is_finite() {
            return Err(PowserError::NonFiniteOperand {
                name: "base",
                value: base.to_f64().unwrap_or(f64::NAN),
            });
        }
        if !exponent.is_finite() {
            return Err(PowserError::NonFiniteOperand {
                name: "exponent",
                value: exponent.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the series convergence tolerance.
    pub fn validate_tolerance<T: Float>(tolerance: T) -> Result<(), PowserError> {
        if !tolerance.is_finite() || tolerance <= T::zero() {
            return Err(PowserError::InvalidTolerance(
                tolerance.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the series term cap.
    pub fn validate_max_terms(max_terms: usize) -> Result<(), PowserError> {
        if max_terms == 0 {
            return Err(PowserError::InvalidMaxTerms(max_terms));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), PowserError> {
        if let Some(parameter) = duplicate_param {
            return Err(PowserError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
