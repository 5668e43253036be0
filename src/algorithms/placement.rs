//! Placement of the chi^p genera into the Hodge square.
//!
//! ## Purpose
//!
//! This module assembles the `(n + 1) × (n + 1)` Hodge square from the chi^p
//! genera. The square is the identity with the middle-degree Hodge numbers
//! written on the anti-diagonal:
//!
//! ```text
//!  odd n (even width)      even n (odd width)
//!
//!  *     1                 *      1
//!    * 1                     *  1
//!    1 *                      *
//!  1     *                   1  *
//!                          1      *
//! ```
//!
//! ## Design notes
//!
//! * **One branch**: Parity selects one of two anti-diagonal formulas; the
//!   odd-width centre, where both diagonals meet, is then overridden once.
//! * **Orientation**: The assembled square is indexed as the algebra produces
//!   it; the displayed square reverses the column order.
//!
//! ## Key concepts
//!
//! * **Even width** (`n` odd): `a[p] = 1 - (-1)^p chi^p`.
//! * **Odd width** (`n` even): `a[p] = (-1)^p chi^p - 1`, except the centre
//!   `c = n / 2` where `a[c] = (-1)^c chi^c`.
//!
//! ## Invariants
//!
//! * Off the two diagonals every entry is 0.
//! * The main diagonal is 1 everywhere except possibly the odd-width centre.

// External dependencies
use num_bigint::BigInt;
use num_traits::One;

// Internal dependencies
use crate::primitives::matrix::SquareMatrix;

// ============================================================================
// Parity
// ============================================================================

/// Parity of the Hodge square's width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquareParity {
    /// Even width: odd-dimensional variety, no centre cell.
    Even,
    /// Odd width: even-dimensional variety, with a centre cell.
    Odd,
}

impl SquareParity {
    /// Parity of a square of the given width.
    #[inline]
    pub fn of_width(width: usize) -> Self {
        if width % 2 == 0 {
            SquareParity::Even
        } else {
            SquareParity::Odd
        }
    }
}

// ============================================================================
// Assembly
// ============================================================================

/// `(-1)^p * value`.
#[inline]
fn alternating(p: usize, value: &BigInt) -> BigInt {
    if p % 2 == 0 { value.clone() } else { -value }
}

/// Entries of the non-principal diagonal, `a[p]` for `p = 0..=n`.
pub fn antidiagonal(chi: &[BigInt]) -> Vec<BigInt> {
    let parity = SquareParity::of_width(chi.len());
    let one = BigInt::one();

    let mut a: Vec<BigInt> = chi
        .iter()
        .enumerate()
        .map(|(p, value)| {
            let signed = alternating(p, value);
            match parity {
                SquareParity::Even => &one - signed,
                SquareParity::Odd => signed - &one,
            }
        })
        .collect();

    if parity == SquareParity::Odd {
        let centre = chi.len() / 2;
        a[centre] = alternating(centre, &chi[centre]);
    }
    a
}

/// The Hodge square and the intermediate values it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HodgeSquares {
    /// Width parity of the square.
    pub parity: SquareParity,

    /// Non-principal diagonal values `a[0..=n]`.
    pub antidiagonal: Vec<BigInt>,

    /// Square as indexed by the algebra: `a[p]` at `(p, n - p)`.
    pub assembled: SquareMatrix,

    /// Square in display orientation: `displayed(p, q) = assembled(p, n - q)`.
    pub displayed: SquareMatrix,
}

/// Build the Hodge square from the chi^p genera `chi[0..=n]`.
pub fn assemble(chi: &[BigInt]) -> HodgeSquares {
    let width = chi.len();
    let parity = SquareParity::of_width(width);
    let antidiagonal = antidiagonal(chi);

    let mut assembled = SquareMatrix::identity(width);
    for (p, value) in antidiagonal.iter().enumerate() {
        assembled.set(p, width - 1 - p, value.clone());
    }
    let displayed = assembled.flip_columns();

    HodgeSquares {
        parity,
        antidiagonal,
        assembled,
        displayed,
    }
}
