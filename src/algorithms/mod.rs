//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the Hodge-number pipeline on top of the math layer:
//! - The closed-form generating function of a degree-`d` hypersurface
//! - Series truncation, chi-y extraction and the chi^p genera
//! - Parity-dependent placement into the Hodge square
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Generating function of hypersurface chi-y genera.
pub mod generating;

/// Chi-y extraction, simplification and the chi^p genera.
pub mod genera;

/// Placement of the genera into the Hodge square.
pub mod placement;
