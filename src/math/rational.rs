//! Rational functions with integer polynomial numerator and denominator.
//!
//! ## Purpose
//!
//! This module provides the coefficient field of the power series layer: the
//! coefficients of the generating function in `z` are rational functions of
//! `y`. It also provides the simplification step that turns the extracted
//! chi-y genus into an explicit polynomial.
//!
//! ## Design notes
//!
//! * **Lazy normal form**: Arithmetic does not cancel common factors. When one
//!   denominator divides the other, the larger one is reused as the common
//!   denominator, which keeps series expansions whose denominators are powers
//!   of a single polynomial from growing.
//! * **Explicit simplification**: `simplify` cancels the polynomial gcd and
//!   normalises the sign; it is the only place a gcd is computed.
//!
//! ## Invariants
//!
//! * The denominator is never the zero polynomial.
//! * Numerator and denominator share one indeterminate.
//!
//! ## Non-goals
//!
//! * This module does not keep values in lowest terms between operations.

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

// External dependencies
use num_bigint::BigInt;
use num_traits::{Signed, Zero};

// Internal dependencies
use crate::math::polynomial::Polynomial;
use crate::primitives::errors::HodgeError;
use crate::primitives::indeterminate::Indeterminate;

// ============================================================================
// RationalFunction
// ============================================================================

/// Quotient of two integer polynomials in one indeterminate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RationalFunction {
    num: Polynomial,
    den: Polynomial,
}

impl RationalFunction {
    /// Build `num / den`, rejecting a zero denominator.
    pub fn new(num: Polynomial, den: Polynomial) -> Result<Self, HodgeError> {
        if den.is_zero() {
            return Err(HodgeError::DivisionByZero);
        }
        debug_assert_eq!(num.var(), den.var(), "mixed indeterminates");
        Ok(Self { num, den })
    }

    /// Embed a polynomial with denominator 1.
    pub fn from_polynomial(num: Polynomial) -> Self {
        let den = Polynomial::one(num.var());
        Self { num, den }
    }

    /// The zero function in `var`.
    pub fn zero(var: Indeterminate) -> Self {
        Self::from_polynomial(Polynomial::zero(var))
    }

    /// The constant function 1 in `var`.
    pub fn one(var: Indeterminate) -> Self {
        Self::from_polynomial(Polynomial::one(var))
    }

    /// A constant function.
    pub fn constant(var: Indeterminate, c: impl Into<BigInt>) -> Self {
        Self::from_polynomial(Polynomial::constant(var, c))
    }

    /// The indeterminate of numerator and denominator.
    #[inline]
    pub fn var(&self) -> Indeterminate {
        self.num.var()
    }

    /// Numerator as stored (not necessarily in lowest terms).
    #[inline]
    pub fn numerator(&self) -> &Polynomial {
        &self.num
    }

    /// Denominator as stored (not necessarily in lowest terms).
    #[inline]
    pub fn denominator(&self) -> &Polynomial {
        &self.den
    }

    /// True if the numerator is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.num.is_zero()
    }

    /// Multiplicative inverse.
    pub fn inv(&self) -> Result<Self, HodgeError> {
        if self.num.is_zero() {
            return Err(HodgeError::DivisionByZero);
        }
        Ok(Self {
            num: self.den.clone(),
            den: self.num.clone(),
        })
    }

    /// Division that fails on a zero divisor.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, HodgeError> {
        Ok(self * &rhs.inv()?)
    }

    // ========================================================================
    // Simplification
    // ========================================================================

    /// Cancel the common factor of numerator and denominator.
    ///
    /// The result has a positive leading denominator coefficient; zero
    /// simplifies to `0 / 1`. The gcd always divides both sides exactly, so
    /// `InexactDivision` signals a broken gcd rather than bad input.
    pub fn simplify(&self) -> Result<Self, HodgeError> {
        if self.num.is_zero() {
            return Ok(Self::zero(self.var()));
        }

        let g = self.num.gcd(&self.den);
        let cancel = |p: &Polynomial| {
            p.div_exact(&g).ok_or_else(|| HodgeError::InexactDivision {
                dividend: p.to_string(),
                divisor: g.to_string(),
            })
        };
        let mut num = cancel(&self.num)?;
        let mut den = cancel(&self.den)?;

        if den.leading_coeff().is_some_and(|lc| lc.is_negative()) {
            num = -num;
            den = -den;
        }
        Ok(Self { num, den })
    }

    /// Simplify and convert to an explicit integer polynomial.
    ///
    /// The indeterminate is taken from the stored polynomials, so a zero
    /// function converts to the zero polynomial in the same variable.
    pub fn to_polynomial(&self) -> Result<Polynomial, HodgeError> {
        let simplified = self.simplify()?;
        let not_a_polynomial = || HodgeError::NotAPolynomial {
            expression: simplified.to_string(),
        };

        if !simplified.den.is_constant() {
            return Err(not_a_polynomial());
        }
        let c = simplified.den.coeff(0);
        simplified.num.div_scalar_exact(&c).ok_or_else(not_a_polynomial)
    }
}

/// Pick a common denominator and the factors that lift each side onto it.
fn common_denominator(a: &Polynomial, b: &Polynomial) -> (Polynomial, Polynomial, Polynomial) {
    let one = Polynomial::one(a.var());
    if a == b {
        return (a.clone(), one.clone(), one);
    }
    if let Some(q) = a.div_exact(b) {
        return (a.clone(), one, q);
    }
    if let Some(q) = b.div_exact(a) {
        return (b.clone(), q, one);
    }
    (a * b, b.clone(), a.clone())
}

// ============================================================================
// Operator Implementations
// ============================================================================

impl Add<&RationalFunction> for &RationalFunction {
    type Output = RationalFunction;

    fn add(self, rhs: &RationalFunction) -> RationalFunction {
        if rhs.is_zero() {
            return self.clone();
        }
        if self.is_zero() {
            return rhs.clone();
        }
        let (den, lift_lhs, lift_rhs) = common_denominator(&self.den, &rhs.den);
        let num = &(&self.num * &lift_lhs) + &(&rhs.num * &lift_rhs);
        RationalFunction { num, den }
    }
}

impl Sub<&RationalFunction> for &RationalFunction {
    type Output = RationalFunction;

    fn sub(self, rhs: &RationalFunction) -> RationalFunction {
        self + &(-rhs)
    }
}

impl Mul<&RationalFunction> for &RationalFunction {
    type Output = RationalFunction;

    fn mul(self, rhs: &RationalFunction) -> RationalFunction {
        if self.is_zero() || rhs.is_zero() {
            return RationalFunction::zero(self.var());
        }
        RationalFunction {
            num: &self.num * &rhs.num,
            den: &self.den * &rhs.den,
        }
    }
}

impl Neg for &RationalFunction {
    type Output = RationalFunction;

    fn neg(self) -> RationalFunction {
        RationalFunction {
            num: -&self.num,
            den: self.den.clone(),
        }
    }
}

impl Neg for RationalFunction {
    type Output = RationalFunction;

    fn neg(self) -> RationalFunction {
        RationalFunction {
            num: -self.num,
            den: self.den,
        }
    }
}

impl From<Polynomial> for RationalFunction {
    fn from(p: Polynomial) -> Self {
        Self::from_polynomial(p)
    }
}

// ============================================================================
// Display
// ============================================================================

fn term_count(p: &Polynomial) -> usize {
    p.coeffs().iter().filter(|c| !c.is_zero()).count()
}

impl fmt::Display for RationalFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den.is_one() || self.num.is_zero() {
            return write!(f, "{}", self.num);
        }
        if term_count(&self.num) > 1 {
            write!(f, "({})", self.num)?;
        } else {
            write!(f, "{}", self.num)?;
        }
        if self.den.is_constant() && !self.den.coeff(0).is_negative() {
            write!(f, "/{}", self.den)
        } else {
            write!(f, "/({})", self.den)
        }
    }
}
