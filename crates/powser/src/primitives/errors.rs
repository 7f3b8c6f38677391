//! Error types for power evaluation.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur while configuring
//! the evaluator or computing a power, including operand validation,
//! parameter constraints, and series convergence failures.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include the offending values.
//! * **Typed payloads**: No heap-allocated messages, so the type is usable
//!   without `alloc` in `no_std` builds.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`
//!   (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Operand validation**: NaN or infinite base/exponent values.
//! 2. **Parameter validation**: Invalid tolerance or term cap.
//! 3. **Computation failures**: Logarithm domain violations, integer
//!    exponent overflow, series term-cap exhaustion.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Sentinel outcomes (NaN, +Infinity) are never represented as errors;
//!   they are ordinary return values of the evaluator.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for power evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum PowserError {
    /// An operand was NaN or infinite; the kernel only accepts finite reals.
    NonFiniteOperand {
        /// Which operand was rejected ("base" or "exponent").
        name: &'static str,
        /// The offending value.
        value: f64,
    },

    /// The logarithm primitive was called outside its `x > 0` precondition.
    LogDomain(f64),

    /// Series convergence tolerance must be positive and finite.
    InvalidTolerance(f64),

    /// The series term cap must be at least 1.
    InvalidMaxTerms(usize),

    /// An integer-valued exponent does not fit the integer path's 32-bit
    /// width (including the unrepresentable `|i32::MIN|`).
    ExponentOverflow(f64),

    /// A series reached the term cap before its terms fell below the
    /// convergence tolerance.
    TermLimit {
        /// Number of terms summed before giving up.
        terms: usize,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for PowserError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::NonFiniteOperand { name, value } => {
                write!(f, "Non-finite operand: {name}={value}")
            }
            Self::LogDomain(value) => {
                write!(f, "Logarithm undefined for non-positive values: got {value}")
            }
            Self::InvalidTolerance(tol) => {
                write!(f, "Invalid tolerance: {tol} (must be > 0 and finite)")
            }
            Self::InvalidMaxTerms(terms) => {
                write!(f, "Invalid max_terms: {terms} (must be at least 1)")
            }
            Self::ExponentOverflow(exponent) => {
                write!(
                    f,
                    "Integer exponent out of range: {exponent} (must fit a signed 32-bit integer)"
                )
            }
            Self::TermLimit { terms } => {
                write!(f, "Series did not converge within {terms} terms")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for PowserError {}
