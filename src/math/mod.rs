//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the embedded exact-arithmetic engine:
//! - Integer polynomials in one indeterminate
//! - Rational functions and their simplification
//! - Truncated power series with rational-function coefficients
//! - Symbolic expressions that expand into power series
//!
//! These are reusable algebraic building blocks with no Hodge-specific logic.
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

/// Dense integer polynomials.
pub mod polynomial;

/// Quotients of integer polynomials.
pub mod rational;

/// Truncated formal power series.
pub mod series;

/// Symbolic expression trees.
pub mod expr;
