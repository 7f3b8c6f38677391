//! High-level API for power evaluation.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for the power
//! kernel. It implements a fluent builder pattern for configuring the
//! series parameters and produces an evaluator exposing the single
//! `power(x, y)` operation.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all
//!   parameters.
//! * **Validated**: Parameters are validated when `.build()` is called,
//!   never inside the hot evaluation path.
//! * **Type-Safe**: Generic over `Float` types for flexible precision;
//!   `f64` matches the kernel's reference IEEE-double semantics.
//!
//! ## Key concepts
//!
//! * **Configuration Flow**: `Powser::new()` → setters → `.build()` →
//!   [`PowerEvaluator::power`].
//! * **Duplicate detection**: Setting the same parameter twice is reported
//!   at `build()` time rather than silently last-write-wins.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{PowserConfig, PowserExecutor};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::engine::executor::{DEFAULT_MAX_TERMS, DEFAULT_TOLERANCE};
pub use crate::primitives::errors::PowserError;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring power evaluation.
#[derive(Debug, Clone)]
pub struct PowserBuilder<T> {
    /// Series convergence tolerance.
    pub tolerance: Option<T>,

    /// Cap on the number of series terms.
    pub max_terms: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for PowserBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> PowserBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tolerance: None,
            max_terms: None,
            duplicate_param: None,
        }
    }

    /// Set the series convergence tolerance (default `1e-15`).
    ///
    /// Summation stops once the magnitude of the next term is at most this
    /// value. The tolerance bounds the last term, not the true error.
    pub fn tolerance(mut self, tolerance: T) -> Self {
        if self.tolerance.is_some() {
            self.duplicate_param = Some("tolerance");
        }
        self.tolerance = Some(tolerance);
        self
    }

    /// Set the cap on series terms (default 1,000,000).
    ///
    /// A series that has not converged within the cap reports
    /// [`PowserError::TermLimit`] instead of iterating unboundedly.
    pub fn max_terms(mut self, max_terms: usize) -> Self {
        if self.max_terms.is_some() {
            self.duplicate_param = Some("max_terms");
        }
        self.max_terms = Some(max_terms);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the evaluator.
    pub fn build(self) -> Result<PowerEvaluator<T>, PowserError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let tolerance = match self.tolerance {
            Some(tolerance) => tolerance,
            None => T::from(DEFAULT_TOLERANCE).unwrap(),
        };
        let max_terms = self.max_terms.unwrap_or(DEFAULT_MAX_TERMS);

        Validator::validate_tolerance(tolerance)?;
        Validator::validate_max_terms(max_terms)?;

        Ok(PowerEvaluator {
            config: PowserConfig {
                tolerance,
                max_terms,
            },
        })
    }
}

// ============================================================================
// Evaluator
// ============================================================================

/// Power evaluator holding an immutable configuration snapshot.
///
/// The evaluator is plain data: calls share nothing mutable, so a single
/// instance may be used freely from multiple threads.
#[derive(Debug, Clone, Copy)]
pub struct PowerEvaluator<T> {
    config: PowserConfig<T>,
}

impl<T: Float> PowerEvaluator<T> {
    /// Compute `base^exponent`.
    ///
    /// Sentinel outcomes are ordinary Ok values: `+Infinity` for a zero
    /// base with a negative exponent, NaN for a negative base with a
    /// fractional exponent. Errors are reserved for non-finite operands,
    /// exponent-width overflow, and series non-convergence.
    ///
    /// # Example
    ///
    /// ```rust
    /// use powser::prelude::*;
    ///
    /// let model = Powser::new().build()?;
    ///
    /// assert_eq!(model.power(2.0, -10.0)?, 0.0009765625);
    /// assert_eq!(model.power(0.0, -5.0)?, f64::INFINITY);
    /// # Result::<(), PowserError>::Ok(())
    /// ```
    pub fn power(&self, base: T, exponent: T) -> Result<T, PowserError> {
        Validator::validate_operands(base, exponent)?;
        PowserExecutor::evaluate(base, exponent, &self.config)
    }

    /// The configured series convergence tolerance.
    pub fn tolerance(&self) -> T {
        self.config.tolerance
    }

    /// The configured cap on series terms.
    pub fn max_terms(&self) -> usize {
        self.config.max_terms
    }
}
