//! Chi-y genus extraction and the chi^p genera.
//!
//! ## Purpose
//!
//! This module turns the generating function into the list of chi^p genera:
//! it expands the generating function in `z`, reads off the coefficient of
//! `z^(n + r)` (the chi-y genus, a rational function of `y`), simplifies it to
//! a polynomial, and lists its coefficients lowest degree first.
//!
//! ## Design notes
//!
//! * **Truncation**: The series is expanded to order `n + r + 1`; no other
//!   terms are needed.
//! * **Explicit variable**: Conversion to a polynomial is always in `y`, so a
//!   vanishing chi-y genus (plane cubic curves) converts to the zero polynomial.
//! * **Padding**: When the top coefficients vanish the list is shorter than
//!   the square is wide; it is right-padded with zeros and flagged.
//!
//! ## Invariants
//!
//! * `ChiGenera::values.len() == n + 1`.
//! * Padding an already full-width list changes nothing.
//!
//! ## Non-goals
//!
//! * This module does not place the genera into a matrix (see `placement`).

// External dependencies
use num_bigint::BigInt;
use num_traits::Zero;

// Internal dependencies
use crate::algorithms::generating::HYPERSURFACE_CODIMENSION;
use crate::math::expr::Expr;
use crate::math::polynomial::Polynomial;
use crate::math::rational::RationalFunction;
use crate::primitives::errors::HodgeError;
use crate::primitives::indeterminate::Indeterminate;

// ============================================================================
// Chi-y Extraction
// ============================================================================

/// Order at which the series in `z` is truncated for an `n`-dimensional hypersurface.
#[inline]
pub fn truncation_order(dimension: usize) -> usize {
    dimension + HYPERSURFACE_CODIMENSION + 1
}

/// Expand the generating function in `z` and read off the coefficient of `z^(n + r)`.
pub fn extract_chi_y(generating: &Expr, dimension: usize) -> Result<RationalFunction, HodgeError> {
    let series = generating.series(Indeterminate::Z, truncation_order(dimension))?;
    let polynomial_in_z = series.remove_o();
    Ok(polynomial_in_z
        .get(dimension + HYPERSURFACE_CODIMENSION)
        .cloned()
        .unwrap_or_else(|| RationalFunction::zero(Indeterminate::Y)))
}

/// Simplify the chi-y genus to an explicit polynomial in `y`.
pub fn simplify_chi_y(chi_y: &RationalFunction) -> Result<Polynomial, HodgeError> {
    chi_y.to_polynomial()
}

/// Topological Euler characteristic, the chi-y genus at `y = -1`.
pub fn euler_characteristic(chi_y: &Polynomial) -> BigInt {
    chi_y.evaluate(&BigInt::from(-1))
}

// ============================================================================
// Chi^p Genera
// ============================================================================

/// The chi^p genera `chi^0, ..., chi^n` of an `n`-dimensional variety.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChiGenera {
    /// Genera lowest index first; always `n + 1` entries.
    pub values: Vec<BigInt>,

    /// True if trailing zeros had to be appended.
    pub padded: bool,
}

/// Right-pad `values` with zeros up to `width` entries.
///
/// Returns the padded list and whether any zero was appended. Lists that are
/// already `width` long (or longer) are returned unchanged.
pub fn pad_genera(mut values: Vec<BigInt>, width: usize) -> (Vec<BigInt>, bool) {
    let padded = values.len() < width;
    if padded {
        values.resize(width, BigInt::zero());
    }
    (values, padded)
}

/// Read the chi^p genera off the simplified chi-y genus.
///
/// Coefficients are listed from the leading term down and then reversed, so
/// the zero polynomial yields `[0]` before padding.
pub fn chi_genera(chi_y: &Polynomial, dimension: usize) -> Result<ChiGenera, HodgeError> {
    let width = dimension + 1;
    let values: Vec<BigInt> = chi_y.all_coeffs().into_iter().rev().collect();

    if values.len() > width {
        return Err(HodgeError::DegreeExceedsDimension {
            degree: values.len() - 1,
            dimension,
        });
    }

    let (values, padded) = pad_genera(values, width);
    Ok(ChiGenera { values, padded })
}
