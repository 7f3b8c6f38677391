//! Layer 3: Algorithms
//!
//! This layer implements the exact integer-exponent path. It contains the
//! arithmetic the dispatcher routes to whenever the exponent has no
//! fractional component, but is orchestrated by the engine layer.

// Iterative-multiplication integer exponentiation.
pub mod integer;
