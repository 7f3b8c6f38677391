//! Natural logarithm via atanh-series summation.
//!
//! ## Purpose
//!
//! This module computes `ln(x)` for `x > 0` from the identity
//! `ln(x) = 2 * atanh((x - 1) / (x + 1))`, expanded as the series
//! `2 * (z + z^3/3 + z^5/5 + ...)` with `z = (x - 1) / (x + 1)`.
//!
//! ## Design notes
//!
//! * **Argument inversion**: For `x` in `(0, 1)` the series is evaluated
//!   for `1/x` and the result negated (`ln(1/x) = -ln(x)`), which keeps
//!   `z` small and convergence fast near zero.
//! * **Heuristic stopping**: The loop stops when the raw power `z^n` falls
//!   below the tolerance; the `2/n` factor is not part of the test. This
//!   mirrors the term-magnitude heuristic used by the exponential.
//! * **Slow tails**: As `x` grows (or shrinks toward zero), `z` approaches
//!   ±1 and the series converges slowly. The term cap reports such inputs
//!   instead of spinning; no range reduction is attempted.
//!
//! ## Invariants
//!
//! * The `x > 0` precondition is enforced here, not just by callers.
//! * `ln(1) == 0` exactly (the series starts with `z = 0`).
//!
//! ## Non-goals
//!
//! * This module does not handle the sign of a negative power base; the
//!   dispatcher decides what `|x|` to pass and what the sign means.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::PowserError;

/// Compute `ln(x)` for `x > 0` by atanh-series summation.
///
/// Returns [`PowserError::LogDomain`] when `x <= 0` and
/// [`PowserError::TermLimit`] if the series has not converged after
/// `max_terms` terms.
pub fn ln<T: Float>(x: T, tolerance: T, max_terms: usize) -> Result<T, PowserError> {
    let zero = T::zero();
    let one = T::one();
    let two = one + one;

    // Hard precondition: the dispatcher guarantees a positive argument,
    // but the primitive rejects invalid input on its own.
    if x <= zero {
        return Err(PowserError::LogDomain(x.to_f64().unwrap_or(f64::NAN)));
    }

    // ln(1/x) = -ln(x); inverting keeps z small for arguments below one.
    let (argument, negated) = if x < one { (one / x, true) } else { (x, false) };

    let z = (argument - one) / (argument + one);
    let z_squared = z * z;

    let mut result = zero;
    let mut term = z;
    let mut denominator = one;
    let mut terms = 0usize;

    while term.abs() > tolerance {
        if terms >= max_terms {
            return Err(PowserError::TermLimit { terms });
        }

        result = result + two * term / denominator;
        term = term * z_squared;
        denominator = denominator + two;
        terms += 1;
    }

    Ok(if negated { -result } else { result })
}
