//! Result type of a Hodge number computation.
//!
//! ## Purpose
//!
//! This module defines [`HodgeReport`], which holds the Hodge square together
//! with every intermediate artefact, and its `Display` implementation, which
//! renders the console transcript.
//!
//! ## Key concepts
//!
//! * **Transcript**: dimension and degree, the generating function, chi_y
//!   before and after simplification, the chi^p genera (with a warning block
//!   if they were padded), the parity, the non-principal diagonal, the
//!   displayed square, the Euler characteristic and a closing separator.

use core::fmt;

// External dependencies
use num_bigint::BigInt;

// Internal dependencies
use crate::algorithms::placement::SquareParity;
use crate::math::expr::Expr;
use crate::math::polynomial::Polynomial;
use crate::math::rational::RationalFunction;
use crate::primitives::matrix::SquareMatrix;

const SEPARATOR: &str = "------------------------------------------";

const PADDING_WARNING: &str = "----------------------------\n\
length of answer should be equal to the width (Hodge square) = n + 1\n\
SOmetimes this array is too short, \n\
if top coeffs of chi_y are zero\n\
extending  it by zeroes..\n\
----------------------------";

/// Hodge square of a hypersurface and the values it was derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HodgeReport {
    /// Dimension `n` of the hypersurface.
    pub dimension: usize,

    /// Degree `d` of the hypersurface.
    pub degree: usize,

    /// Generating function `RHS(y, z)`.
    pub generating_function: Expr,

    /// Coefficient of `z^(n + 1)`, before simplification.
    pub chi_y: RationalFunction,

    /// Chi-y genus as a polynomial in `y`.
    pub chi_y_simplified: Polynomial,

    /// Chi^p genera `chi^0, ..., chi^n`.
    pub chi_genera: Vec<BigInt>,

    /// True if the genera were padded with trailing zeros.
    pub padded: bool,

    /// Parity of the square's width.
    pub parity: SquareParity,

    /// Non-principal diagonal `a[0..=n]`.
    pub antidiagonal: Vec<BigInt>,

    /// Square as assembled, `a[p]` at `(p, n - p)`.
    pub assembled: SquareMatrix,

    /// Square in display orientation.
    pub square: SquareMatrix,

    /// Topological Euler characteristic `chi_y(-1)`.
    pub euler_characteristic: BigInt,
}

impl HodgeReport {
    /// Width of the Hodge square, `n + 1`.
    pub fn width(&self) -> usize {
        self.square.size()
    }

    /// Hodge number `h^{p,q}`, read from the assembled square.
    ///
    /// Returns `None` outside `0..=n`.
    pub fn hodge_number(&self, p: usize, q: usize) -> Option<&BigInt> {
        if p > self.dimension || q > self.dimension {
            return None;
        }
        Some(self.assembled.get(p, q))
    }
}

struct BracketList<'a>(&'a [BigInt]);

impl fmt::Display for BracketList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", value)?;
        }
        f.write_str("]")
    }
}

impl fmt::Display for HodgeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "dimension of V: {}", self.dimension)?;
        writeln!(f, "degree of V: {}", self.degree)?;
        writeln!(f, "RHS = {}", self.generating_function)?;
        writeln!(f, "chi_y = {}", self.chi_y)?;
        writeln!(
            f,
            "simplifying it; it should be a polynomial in y of degree n = {}",
            self.dimension
        )?;
        writeln!(f, "{}", self.chi_y_simplified)?;
        writeln!(
            f,
            "taking all the coefficients of chi_y; they are chi^p genera (in the opposite order).."
        )?;
        if self.padded {
            writeln!(f, "{}", PADDING_WARNING)?;
        }
        writeln!(f, "chi^p genera; i = 0,...n : ")?;
        writeln!(f, "{}", BracketList(&self.chi_genera))?;

        match self.parity {
            SquareParity::Even => writeln!(f, "Hodge square is of even size")?,
            SquareParity::Odd => writeln!(f, "Hodge square is of odd size")?,
        }

        writeln!(f, "Non-principal diagonal of the Hodge square: ")?;
        writeln!(f, "{}", BracketList(&self.antidiagonal))?;
        writeln!(f, "Hodge square HS: ")?;
        writeln!(f, "{}", self.square)?;
        writeln!(f, "Euler characteristic: {}", self.euler_characteristic)?;
        writeln!(f, "{}", SEPARATOR)
    }
}
