//! Generating function for the chi-y genera of hypersurfaces.
//!
//! ## Purpose
//!
//! This module builds the closed-form rational function whose expansion in
//! `z` encodes the chi-y genus of every smooth degree-`d` hypersurface at
//! once (SGA 7 II, Exposé XI; Hirzebruch, appendix by Schwarzenberger):
//!
//! ```text
//!                  1           (1 + y z)^d - (1 - z)^d
//! RHS(y, z) = ------------- * -------------------------
//!             (1 - z)(1 + yz)  (1 + y z)^d + y (1 - z)^d
//! ```
//!
//! The chi-y genus of the `n`-dimensional hypersurface is the coefficient of
//! `z^(n + r)` with `r` the codimension.
//!
//! ## Invariants
//!
//! * Every denominator has non-zero constant term in `z`, so the expression
//!   always expands as an ordinary power series.
//!
//! ## Non-goals
//!
//! * Complete intersections of several hypersurfaces (codimension `r > 1`).

// Internal dependencies
use crate::math::expr::Expr;
use crate::primitives::indeterminate::Indeterminate;

/// Codimension of a hypersurface in its ambient projective space.
pub const HYPERSURFACE_CODIMENSION: usize = 1;

/// Build `RHS(y, z)` for hypersurfaces of the given degree.
pub fn hypersurface_generating_function(degree: u32) -> Expr {
    let y = Expr::symbol(Indeterminate::Y);
    let z = Expr::symbol(Indeterminate::Z);
    let one = || Expr::integer(1);

    let one_minus_z = one() - z.clone();
    let one_plus_yz = one() + y.clone() * z;

    let prefactor = one() / (one_minus_z.clone() * one_plus_yz.clone());
    let numerator = one_plus_yz.clone().pow(degree) - one_minus_z.clone().pow(degree);
    let denominator = one_plus_yz.pow(degree) + y * one_minus_z.pow(degree);

    prefactor * numerator / denominator
}
