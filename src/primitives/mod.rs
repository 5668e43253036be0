//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the fundamental data structures shared by every other
//! layer:
//! - The crate error type
//! - The formal indeterminates `y` and `z`
//! - The square integer matrix used for the Hodge square
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error type for every fallible operation in the crate.
pub mod errors;

/// Formal indeterminates of the generating function.
pub mod indeterminate;

/// Square matrices of exact integers.
pub mod matrix;
