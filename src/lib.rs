//! # Hodge numbers of smooth hypersurfaces
//!
//! Exact computation of the Hodge square of a smooth hypersurface of degree
//! `d` in projective space `P^(n+1)`, from the generating function of its
//! chi-y genera.
//!
//! ## What is computed?
//!
//! For a smooth projective variety `V` of dimension `n`, the Hodge numbers
//! `h^{p,q}` form an `(n + 1) × (n + 1)` square. For a hypersurface the square
//! is almost the identity: by the Lefschetz hyperplane theorem the only
//! interesting numbers sit on the middle row `p + q = n`. These are recovered
//! from the chi-y genus
//!
//! ```text
//! chi_y(V) = sum_p chi^p(V) y^p,   chi^p(V) = sum_q (-1)^q h^{p,q}(V)
//! ```
//!
//! which is the coefficient of `z^(n+1)` in
//!
//! ```text
//!                  1           (1 + y z)^d - (1 - z)^d
//! RHS(y, z) = ------------- * -------------------------
//!             (1 - z)(1 + yz)  (1 + y z)^d + y (1 - z)^d
//! ```
//!
//! All arithmetic is exact: integers are arbitrary precision, and the series
//! expansion runs over fractions of integer polynomials in `y`.
//!
//! ## Quick Start
//!
//! ```rust
//! use hodge_rs::prelude::*;
//!
//! // K3 surface: a quartic in P^3
//! let report = Hypersurface::new()
//!     .dimension(2)
//!     .degree(4)
//!     .build()?
//!     .compute()?;
//!
//! assert_eq!(
//!     report.square.to_i64_rows(),
//!     Some(vec![vec![1, 0, 1], vec![0, 20, 0], vec![1, 0, 1]])
//! );
//! assert_eq!(report.euler_characteristic, 24.into());
//! # Result::<(), HodgeError>::Ok(())
//! ```
//!
//! The report prints the whole computation:
//!
//! ```text
//! dimension of V: 2
//! degree of V: 4
//! RHS = 1/((1 - z)*(1 + y*z))*((1 + y*z)**4 - (1 - z)**4)/((1 + y*z)**4 + y*(1 - z)**4)
//! ...
//! chi^p genera; i = 0,...n :
//! [2, -20, 2]
//! Hodge square is of odd size
//! ...
//! Hodge square HS:
//! ⎡1  0   1⎤
//! ⎢        ⎥
//! ⎢0  20  0⎥
//! ⎢        ⎥
//! ⎣1  0   1⎦
//! Euler characteristic: 24
//! ```
//!
//! ### Presets and one-shot use
//!
//! ```rust
//! use hodge_rs::prelude::*;
//!
//! let quintic = Hypersurface::new().preset(QuinticThreefold).build()?.compute()?;
//! assert_eq!(quintic.hodge_number(2, 1), Some(&101.into()));
//!
//! let curve = hodge_square(1, 4)?;
//! assert_eq!(curve.to_i64_rows(), Some(vec![vec![3, 1], vec![1, 3]]));
//! # Result::<(), HodgeError>::Ok(())
//! ```
//!
//! ## Orientation
//!
//! The assembled square holds `h^{p,q}` at row `p`, column `q`. The displayed
//! square (`HodgeReport::square`) reverses the column order, so the middle row
//! of Hodge numbers lies on its main diagonal.
//!
//! ## Logging
//!
//! The pipeline emits `tracing` events: `debug` per stage and `warn` when the
//! chi^p genera had to be padded with zeros. Install any subscriber to see them.
//!
//! ## References
//!
//! - Deligne, P. SGA 7 II, Exposé XI, "Cohomologie des intersections complètes"
//! - Hirzebruch, F. "Topological Methods in Algebraic Geometry", appendix by R. L. E. Schwarzenberger

#![deny(missing_docs)]

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the error type, the formal indeterminates and the square
// integer matrix.
mod primitives;

// Layer 2: Math - exact algebra.
//
// Contains integer polynomials, rational functions, truncated power series
// and symbolic expressions.
mod math;

// Layer 3: Algorithms - the Hodge-number pipeline stages.
//
// Contains the generating function, chi-y extraction with the chi^p genera,
// and placement into the Hodge square.
mod algorithms;

// Layer 4: Engine - orchestration and output.
//
// Contains parameter validation, the executor and the report.
mod engine;

// High-level fluent API.
//
// Provides the `Hypersurface` builder, presets and `hodge_square`.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use hodge_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        HodgeCalculator, HodgeError, HodgeReport, HypersurfaceBuilder as Hypersurface,
        MAX_DEGREE, MAX_DIMENSION, Preset,
        Preset::{CubicSurface, K3, PlaneQuartic, QuinticThreefold},
        SquareMatrix, SquareParity, hodge_square,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal exact algebra.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal pipeline stages.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
