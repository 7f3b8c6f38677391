//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure series primitives the general power path is
//! assembled from:
//! - Exponential function via Taylor expansion
//! - Natural logarithm via the atanh identity
//!
//! These are reusable mathematical building blocks with no dispatch logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Exponential function via Taylor-series summation.
pub mod exp;

/// Natural logarithm via atanh-series summation.
pub mod log;
