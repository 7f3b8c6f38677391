//! # Powser — the power function from first principles
//!
//! A self-contained numeric kernel that computes the real-valued power
//! function `x^y` for double-precision operands without delegating to a
//! platform `pow` primitive. The general case is assembled from two series
//! primitives, `exp(y * ln(|x|))`, while integer exponents take an exact
//! iterative-multiplication fast path and the classic special cases
//! (`0^0`, zero base, negative base) are resolved by a dispatcher up front.
//!
//! ## Quick Start
//!
//! ```rust
//! use powser::prelude::*;
//!
//! let model = Powser::new().build()?;
//!
//! assert_eq!(model.power(2.0, 10.0)?, 1024.0);
//! assert_eq!(model.power(-3.0, 3.0)?, -27.0);
//! assert_eq!(model.power(0.0, 0.0)?, 1.0);
//!
//! // Negative base with a fractional exponent has no real root:
//! // the result is a NaN sentinel, not an error.
//! assert!(model.power(-4.0, 0.5)?.is_nan());
//! # Result::<(), PowserError>::Ok(())
//! ```
//!
//! ### Configuring precision
//!
//! The series convergence threshold and the term cap are explicit
//! configuration rather than hidden constants, so callers (and tests) can
//! trade accuracy for iteration count:
//!
//! ```rust
//! use powser::prelude::*;
//!
//! let model = Powser::new()
//!     .tolerance(1e-12)    // stop when the next term falls below this
//!     .max_terms(50_000)   // report instead of looping unboundedly
//!     .build()?;
//!
//! let root = model.power(4.0, 0.5)?;
//! assert!((root - 2.0).abs() < 1e-9);
//! # Result::<(), PowserError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! `power` returns `Result<T, PowserError>`. The two mathematically
//! meaningful non-finite outcomes are **Ok values**, not errors:
//!
//! - `+Infinity` for a zero base with a negative exponent, and
//! - NaN for a negative base with a fractional exponent.
//!
//! Errors are reserved for genuine failures: non-finite operands, invalid
//! configuration, an integer-valued exponent that does not fit the integer
//! path's 32-bit width, and a series that hits the term cap before the
//! convergence threshold.
//!
//! ## Accuracy boundaries
//!
//! The stopping rule bounds the magnitude of the last added term, not the
//! true error, and neither primitive performs range reduction. Accuracy and
//! iteration count therefore degrade for arguments far from 1 (logarithm)
//! or of large magnitude (exponential); the term cap turns the worst cases
//! into a reported [`prelude::PowserError::TermLimit`] instead of a stall.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments; disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! powser = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

// Layer 1: Primitives - shared error types.
mod primitives;

// Layer 2: Math - pure series primitives (exponential, logarithm).
mod math;

// Layer 3: Algorithms - the integer-exponent fast path.
mod algorithms;

// Layer 4: Engine - validation and dispatch.
mod engine;

// High-level fluent API for power evaluation.
mod api;

// Standard powser prelude.
pub mod prelude {
    pub use crate::api::{PowerEvaluator, PowserBuilder as Powser, PowserError};
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
