//! Integer-exponent exponentiation by iterative multiplication.
//!
//! ## Purpose
//!
//! This module computes `x^n` for a signed 32-bit `n` exactly as repeated
//! multiplication: the product of `x` with itself `|n|` times, with the
//! reciprocal taken for negative `n`. Because no logarithm is involved,
//! negative bases keep their correct sign (`(-3)^3 = -27`) and results
//! representable by repeated multiplication are bit-exact.
//!
//! ## Design notes
//!
//! * **O(|n|) multiplications**: Plain accumulation, not repeated squaring.
//!   Fine for the exponent magnitudes this kernel is used with; large `|n|`
//!   costs proportionally more time, which is a documented trade-off.
//! * **Checked magnitude**: `|i32::MIN|` is not representable, so the
//!   absolute value is checked and overflow reported rather than wrapped.
//!
//! ## Invariants
//!
//! * `x^0 == 1` for every `x`, including negative and subnormal bases.
//! * Zero bases never reach this path; the dispatcher resolves them first,
//!   so the reciprocal for negative `n` cannot divide by a zero product.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::PowserError;

/// Compute `base^exponent` for a signed 32-bit exponent.
///
/// Returns [`PowserError::ExponentOverflow`] when `|exponent|` is not
/// representable (the `i32::MIN` case).
pub fn pow_integer<T: Float>(base: T, exponent: i32) -> Result<T, PowserError> {
    let steps = exponent
        .checked_abs()
        .ok_or(PowserError::ExponentOverflow(f64::from(exponent)))?;

    let mut product = T::one();
    for _ in 0..steps {
        product = product * base;
    }

    Ok(if exponent < 0 { product.recip() } else { product })
}
