//! Dispatch executor for power evaluation.
//!
//! ## Purpose
//!
//! This module classifies an operand pair `(x, y)` and routes it to the
//! correct computation: resolved special cases for a zero base, the exact
//! integer-exponent path, or the general fractional path assembled as
//! `exp(y * ln(|x|))` from the series primitives.
//!
//! ## Design notes
//!
//! * **First match wins**: The zero-base cases are checked before the
//!   integer/fractional split, so the integer path never sees a zero base
//!   and its reciprocal never divides by a zero product.
//! * **Sign handling**: A negative base is legal exactly when the exponent
//!   is integer-valued; it is handled by repeated multiplication and never
//!   routed through the logarithm. With a fractional exponent it yields
//!   the NaN sentinel (no real root), which is an ordinary Ok value.
//! * **Signed zeros**: `-0.0` compares equal to `0.0`, so a negative-zero
//!   base takes the zero-base cases and a negative-zero exponent counts as
//!   the integer zero (any nonzero base to it is 1).
//! * **Reported overflow**: An integer-valued exponent outside `i32` is an
//!   error, never a silent truncation or wraparound.
//!
//! ## Invariants
//!
//! * The logarithm is only ever invoked with a strictly positive argument.
//! * Evaluation reads nothing but the operands and the config snapshot;
//!   it is safe to call concurrently without synchronization.
//!
//! ## Non-goals
//!
//! * This module does not validate operand finiteness (the API layer runs
//!   the validator before dispatch).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::integer::pow_integer;
use crate::math::exp::exp;
use crate::math::log::ln;
use crate::primitives::errors::PowserError;

// ============================================================================
// Defaults
// ============================================================================

/// Default series convergence tolerance.
///
/// Bounds the magnitude of the last added term, not the true error, so
/// accuracy degrades for large-magnitude arguments.
pub const DEFAULT_TOLERANCE: f64 = 1e-15;

/// Default cap on the number of series terms.
///
/// Large enough that every argument of moderate magnitude converges with
/// room to spare (the logarithm of 1e3 needs roughly 9,000 terms at the
/// default tolerance), while arguments whose series would grind for
/// billions of iterations fail loudly instead.
pub const DEFAULT_MAX_TERMS: usize = 1_000_000;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration snapshot shared by both series primitives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowserConfig<T> {
    /// Series convergence tolerance.
    pub tolerance: T,

    /// Cap on the number of series terms.
    pub max_terms: usize,
}

impl<T: Float> Default for PowserConfig<T> {
    fn default() -> Self {
        Self {
            tolerance: T::from(DEFAULT_TOLERANCE).unwrap(),
            max_terms: DEFAULT_MAX_TERMS,
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Dispatch executor for power evaluation.
pub struct PowserExecutor;

impl PowserExecutor {
    /// Evaluate `x^y` under the given configuration.
    ///
    /// Decision order (first match wins):
    ///
    /// 1. `x == 0`: `0^0 = 1` by convention; a negative exponent yields the
    ///    `+Infinity` sentinel; a positive one yields `0`.
    /// 2. Integer-valued `y`: exact repeated multiplication.
    /// 3. Fractional `y`: NaN sentinel for a negative base, otherwise
    ///    `exp(y * ln(|x|))`.
    pub fn evaluate<T: Float>(x: T, y: T, config: &PowserConfig<T>) -> Result<T, PowserError> {
        let zero = T::zero();

        if x == zero {
            return Ok(if y == zero {
                T::one()
            } else if y < zero {
                T::infinity()
            } else {
                zero
            });
        }

        if y.fract() == zero {
            let n = y
                .to_i32()
                .ok_or_else(|| PowserError::ExponentOverflow(y.to_f64().unwrap_or(f64::NAN)))?;
            return pow_integer(x, n);
        }

        if x < zero {
            return Ok(T::nan());
        }

        let ln_magnitude = ln(x.abs(), config.tolerance, config.max_terms)?;
        exp(y * ln_magnitude, config.tolerance, config.max_terms)
    }
}
