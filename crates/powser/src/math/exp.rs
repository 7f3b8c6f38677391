//! Exponential function via Taylor-series summation.
//!
//! ## Purpose
//!
//! This module computes `e^x` for finite `x` by summing the Taylor series
//! `Σ x^n / n!` incrementally until the terms fall below a caller-supplied
//! convergence tolerance.
//!
//! ## Design notes
//!
//! * **Incremental terms**: Each term is derived from the previous one as
//!   `term *= x / n`, so no factorial or power is ever materialized.
//! * **Heuristic stopping**: The loop stops on term magnitude, not on a
//!   true error bound. For moderate `|x|` the tail is dominated by the
//!   first omitted term, which makes the heuristic adequate.
//! * **No range reduction**: Large `|x|` is fed to the series as-is. Terms
//!   first grow (peaking near `n = |x|`) before shrinking, which costs
//!   iterations and, through cancellation for negative `x`, precision.
//!   This is a deliberate, documented accuracy boundary of the kernel.
//! * **Bounded**: A term cap converts the pathological cases (terms that
//!   overflow and never shrink below tolerance) into a reported error.
//!
//! ## Invariants
//!
//! * At least one term beyond the leading 1 is always evaluated, so
//!   `exp(0) == 1` exactly.
//! * The returned value is a plain sum; no scaling is applied afterwards.
//!
//! ## Non-goals
//!
//! * This module does not validate that `x` is finite (the engine does).
//! * This module does not clamp or saturate overflowing results.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::PowserError;

/// Compute `e^x` by Taylor-series summation.
///
/// Sums `1 + x + x^2/2! + x^3/3! + ...` until the magnitude of the next
/// term is at most `tolerance`. Returns [`PowserError::TermLimit`] if the
/// series has not converged after `max_terms` terms.
pub fn exp<T: Float>(x: T, tolerance: T, max_terms: usize) -> Result<T, PowserError> {
    let mut result = T::one();
    let mut term = T::one();
    let mut n = T::one();
    let mut terms = 0usize;

    while term.abs() > tolerance {
        if terms >= max_terms {
            return Err(PowserError::TermLimit { terms });
        }

        term = term * (x / n);
        result = result + term;
        n = n + T::one();
        terms += 1;
    }

    Ok(result)
}
