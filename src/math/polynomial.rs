//! Univariate polynomials with arbitrary-precision integer coefficients.
//!
//! ## Purpose
//!
//! This module provides the exact polynomial ring `Z[y]` (or `Z[z]`) used as
//! the numerator and denominator type of rational functions and, after
//! simplification, as the representation of the chi-y genus.
//!
//! ## Design notes
//!
//! * **Dense**: Coefficients are stored lowest degree first.
//! * **Canonical**: Trailing zero coefficients are always trimmed, so the zero
//!   polynomial has no coefficients and equality is structural.
//! * **Tagged**: Every polynomial carries its `Indeterminate`, so a zero
//!   polynomial still knows which variable it is written in.
//! * **GCD**: Uses the primitive pseudo-remainder sequence, which stays in
//!   `Z[x]` without ever forming fractions.
//!
//! ## Key concepts
//!
//! * **Content**: gcd of all coefficients; the primitive part has content 1.
//! * **Exact division**: Division that fails (returns `None`) instead of
//!   producing a remainder or a non-integral quotient.
//!
//! ## Invariants
//!
//! * The last stored coefficient is never zero.
//! * `gcd` returns a polynomial with positive leading coefficient (or zero).
//!
//! ## Non-goals
//!
//! * This module does not handle multivariate polynomials; the second
//!   variable lives in the power series layer.
//! * This module does not factor polynomials.

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

// External dependencies
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

// Internal dependencies
use crate::primitives::indeterminate::Indeterminate;

// ============================================================================
// Polynomial
// ============================================================================

/// Dense univariate polynomial over the integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial {
    var: Indeterminate,
    coeffs: Vec<BigInt>,
}

impl Polynomial {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// The zero polynomial in `var`.
    pub fn zero(var: Indeterminate) -> Self {
        Self {
            var,
            coeffs: Vec::new(),
        }
    }

    /// The constant polynomial 1 in `var`.
    pub fn one(var: Indeterminate) -> Self {
        Self::constant(var, 1)
    }

    /// A constant polynomial.
    pub fn constant(var: Indeterminate, c: impl Into<BigInt>) -> Self {
        Self::from_coeffs(var, vec![c.into()])
    }

    /// The single term `c * var^degree`.
    pub fn monomial(var: Indeterminate, c: impl Into<BigInt>, degree: usize) -> Self {
        let mut coeffs = vec![BigInt::zero(); degree + 1];
        coeffs[degree] = c.into();
        Self::from_coeffs(var, coeffs)
    }

    /// The polynomial `var` itself.
    pub fn variable(var: Indeterminate) -> Self {
        Self::monomial(var, 1, 1)
    }

    /// Build from coefficients listed lowest degree first.
    pub fn from_coeffs(var: Indeterminate, coeffs: Vec<BigInt>) -> Self {
        let mut p = Self { var, coeffs };
        p.trim();
        p
    }

    /// Build from small integer coefficients listed lowest degree first.
    pub fn from_i64s(var: Indeterminate, coeffs: &[i64]) -> Self {
        Self::from_coeffs(var, coeffs.iter().map(|&c| BigInt::from(c)).collect())
    }

    #[inline]
    fn trim(&mut self) {
        while self.coeffs.last().is_some_and(|c| c.is_zero()) {
            self.coeffs.pop();
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The indeterminate this polynomial is written in.
    #[inline]
    pub fn var(&self) -> Indeterminate {
        self.var
    }

    /// True for the zero polynomial.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// True for the constant polynomial 1.
    #[inline]
    pub fn is_one(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_one()
    }

    /// True for constants, including zero.
    #[inline]
    pub fn is_constant(&self) -> bool {
        self.coeffs.len() <= 1
    }

    /// Degree, or `None` for the zero polynomial.
    #[inline]
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    /// Coefficient of `var^k` (zero beyond the degree).
    pub fn coeff(&self, k: usize) -> BigInt {
        self.coeffs.get(k).cloned().unwrap_or_else(BigInt::zero)
    }

    /// Stored coefficients, lowest degree first, without trailing zeros.
    #[inline]
    pub fn coeffs(&self) -> &[BigInt] {
        &self.coeffs
    }

    /// Leading coefficient, or `None` for the zero polynomial.
    #[inline]
    pub fn leading_coeff(&self) -> Option<&BigInt> {
        self.coeffs.last()
    }

    /// All coefficients from the leading term down to the constant term.
    ///
    /// The zero polynomial lists as `[0]`.
    pub fn all_coeffs(&self) -> Vec<BigInt> {
        if self.is_zero() {
            return vec![BigInt::zero()];
        }
        self.coeffs.iter().rev().cloned().collect()
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Multiply every coefficient by `c`.
    pub fn scale(&self, c: &BigInt) -> Self {
        Self::from_coeffs(self.var, self.coeffs.iter().map(|a| a * c).collect())
    }

    /// Multiply by `var^k`.
    pub fn shift(&self, k: usize) -> Self {
        if self.is_zero() {
            return self.clone();
        }
        let mut coeffs = vec![BigInt::zero(); k];
        coeffs.extend(self.coeffs.iter().cloned());
        Self {
            var: self.var,
            coeffs,
        }
    }

    /// Raise to a non-negative integer power by repeated squaring.
    pub fn pow(&self, exp: u32) -> Self {
        let mut result = Self::one(self.var);
        let mut base = self.clone();
        let mut e = exp;
        while e > 0 {
            if e & 1 == 1 {
                result = &result * &base;
            }
            e >>= 1;
            if e > 0 {
                base = &base * &base;
            }
        }
        result
    }

    /// Evaluate at `x` by Horner's rule.
    pub fn evaluate(&self, x: &BigInt) -> BigInt {
        self.coeffs
            .iter()
            .rev()
            .fold(BigInt::zero(), |acc, c| acc * x + c)
    }

    /// Non-negative gcd of all coefficients (zero for the zero polynomial).
    pub fn content(&self) -> BigInt {
        self.coeffs
            .iter()
            .fold(BigInt::zero(), |acc, c| acc.gcd(c))
    }

    /// The polynomial divided by its content.
    pub fn primitive_part(&self) -> Self {
        let content = self.content();
        if content.is_zero() || content.is_one() {
            return self.clone();
        }
        Self::from_coeffs(self.var, self.coeffs.iter().map(|c| c / &content).collect())
    }

    /// Negate if needed so the leading coefficient is positive.
    pub fn with_positive_leading(self) -> Self {
        let negative = self.leading_coeff().is_some_and(|lc| lc.is_negative());
        if negative { -self } else { self }
    }

    /// Divide every coefficient by `c`, or `None` if any division is inexact.
    pub fn div_scalar_exact(&self, c: &BigInt) -> Option<Self> {
        if c.is_zero() {
            return None;
        }
        let mut coeffs = Vec::with_capacity(self.coeffs.len());
        for a in &self.coeffs {
            let (q, r) = a.div_rem(c);
            if !r.is_zero() {
                return None;
            }
            coeffs.push(q);
        }
        Some(Self::from_coeffs(self.var, coeffs))
    }

    /// Exact quotient `self / divisor` in `Z[x]`.
    ///
    /// Returns `None` if the divisor is zero, if the division leaves a
    /// remainder, or if a quotient coefficient would not be an integer.
    pub fn div_exact(&self, divisor: &Self) -> Option<Self> {
        let db = divisor.degree()?;
        let Some(ds) = self.degree() else {
            return Some(Self::zero(self.var));
        };
        if ds < db {
            return None;
        }

        let lead = &divisor.coeffs[db];
        let mut rem = self.coeffs.clone();
        let mut quot = vec![BigInt::zero(); ds - db + 1];

        for i in (0..=ds - db).rev() {
            if rem[i + db].is_zero() {
                continue;
            }
            let (q, r) = rem[i + db].div_rem(lead);
            if !r.is_zero() {
                return None;
            }
            for (j, d) in divisor.coeffs.iter().enumerate() {
                rem[i + j] -= &q * d;
            }
            quot[i] = q;
        }

        if rem.iter().any(|c| !c.is_zero()) {
            return None;
        }
        Some(Self::from_coeffs(self.var, quot))
    }

    /// Pseudo-remainder of `self` by `divisor`.
    ///
    /// Scales by the divisor's leading coefficient at every reduction step so
    /// the computation stays in `Z[x]`. A zero divisor returns `self`.
    pub fn pseudo_rem(&self, divisor: &Self) -> Self {
        let Some(db) = divisor.degree() else {
            return self.clone();
        };
        let lead = &divisor.coeffs[db];
        let mut r = self.clone();
        while let Some(dr) = r.degree() {
            if dr < db {
                break;
            }
            let lr = r.coeffs[dr].clone();
            r = &r.scale(lead) - &divisor.shift(dr - db).scale(&lr);
        }
        r
    }

    /// Greatest common divisor in `Z[x]`, normalised to a positive leading coefficient.
    pub fn gcd(&self, other: &Self) -> Self {
        if self.is_zero() {
            return other.clone().with_positive_leading();
        }
        if other.is_zero() {
            return self.clone().with_positive_leading();
        }

        let content = self.content().gcd(&other.content());
        let mut a = self.primitive_part();
        let mut b = other.primitive_part();
        if a.coeffs.len() < b.coeffs.len() {
            core::mem::swap(&mut a, &mut b);
        }

        while !b.is_zero() {
            let r = a.pseudo_rem(&b).primitive_part();
            a = b;
            b = r;
        }

        a.scale(&content).with_positive_leading()
    }
}

// ============================================================================
// Operator Implementations
// ============================================================================

impl Add<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &Polynomial) -> Polynomial {
        debug_assert_eq!(self.var, rhs.var, "mixed indeterminates");
        let mut coeffs = self.coeffs.clone();
        if coeffs.len() < rhs.coeffs.len() {
            coeffs.resize(rhs.coeffs.len(), BigInt::zero());
        }
        for (c, r) in coeffs.iter_mut().zip(&rhs.coeffs) {
            *c += r;
        }
        Polynomial::from_coeffs(self.var, coeffs)
    }
}

impl Sub<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: &Polynomial) -> Polynomial {
        debug_assert_eq!(self.var, rhs.var, "mixed indeterminates");
        let mut coeffs = self.coeffs.clone();
        if coeffs.len() < rhs.coeffs.len() {
            coeffs.resize(rhs.coeffs.len(), BigInt::zero());
        }
        for (c, r) in coeffs.iter_mut().zip(&rhs.coeffs) {
            *c -= r;
        }
        Polynomial::from_coeffs(self.var, coeffs)
    }
}

impl Mul<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: &Polynomial) -> Polynomial {
        debug_assert_eq!(self.var, rhs.var, "mixed indeterminates");
        if self.is_zero() || rhs.is_zero() {
            return Polynomial::zero(self.var);
        }
        let mut coeffs = vec![BigInt::zero(); self.coeffs.len() + rhs.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] += a * b;
            }
        }
        Polynomial::from_coeffs(self.var, coeffs)
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial {
            var: self.var,
            coeffs: self.coeffs.iter().map(|c| -c).collect(),
        }
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        -&self
    }
}

macro_rules! forward_owned_binop {
    ($imp:ident, $method:ident) => {
        impl $imp<Polynomial> for Polynomial {
            type Output = Polynomial;

            #[inline]
            fn $method(self, rhs: Polynomial) -> Polynomial {
                (&self).$method(&rhs)
            }
        }
    };
}

forward_owned_binop!(Add, add);
forward_owned_binop!(Sub, sub);
forward_owned_binop!(Mul, mul);

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for Polynomial {
    /// Prints highest degree first: `2*y**2 - 3*y + 1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }

        let mut first = true;
        for (k, c) in self.coeffs.iter().enumerate().rev() {
            if c.is_zero() {
                continue;
            }
            let magnitude = c.abs();
            let body = match k {
                0 => magnitude.to_string(),
                _ => {
                    let power = if k == 1 {
                        self.var.to_string()
                    } else {
                        format!("{}**{}", self.var, k)
                    };
                    if magnitude.is_one() {
                        power
                    } else {
                        format!("{}*{}", magnitude, power)
                    }
                }
            };

            match (first, c.is_negative()) {
                (true, true) => write!(f, "-{}", body)?,
                (true, false) => write!(f, "{}", body)?,
                (false, true) => write!(f, " - {}", body)?,
                (false, false) => write!(f, " + {}", body)?,
            }
            first = false;
        }
        Ok(())
    }
}
