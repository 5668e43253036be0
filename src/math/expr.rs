//! Symbolic expressions in the indeterminates `y` and `z`.
//!
//! ## Purpose
//!
//! This module provides a small expression tree for closed-form generating
//! functions. An expression can be printed (for the report) and expanded into
//! a truncated power series in either indeterminate.
//!
//! ## Design notes
//!
//! * **Exact**: Leaves are arbitrary-precision integers and symbols; there is
//!   no floating point anywhere in the tree.
//! * **Unevaluated**: Operators build nodes; nothing is simplified until the
//!   expression is expanded with `series`.
//! * **Printing**: Parentheses are inserted from operator precedence only, in
//!   the `a*b**2 - c/(d + 1)` style.
//!
//! ## Key concepts
//!
//! * **Series expansion**: The chosen variable becomes the series variable;
//!   the other becomes the indeterminate of the rational-function coefficients.
//!
//! ## Non-goals
//!
//! * This module does not perform general symbolic simplification.
//! * This module does not support rational or symbolic exponents.

use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

// External dependencies
use num_bigint::BigInt;
use num_traits::Signed;

// Internal dependencies
use crate::math::polynomial::Polynomial;
use crate::math::rational::RationalFunction;
use crate::math::series::TruncatedSeries;
use crate::primitives::errors::HodgeError;
use crate::primitives::indeterminate::Indeterminate;

// ============================================================================
// Expression Tree
// ============================================================================

/// Unevaluated arithmetic expression over the integers in `y` and `z`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Integer literal.
    Integer(BigInt),
    /// One of the two indeterminates.
    Symbol(Indeterminate),
    /// Sum.
    Add(Box<Expr>, Box<Expr>),
    /// Difference.
    Sub(Box<Expr>, Box<Expr>),
    /// Product.
    Mul(Box<Expr>, Box<Expr>),
    /// Quotient.
    Div(Box<Expr>, Box<Expr>),
    /// Negation.
    Neg(Box<Expr>),
    /// Non-negative integer power.
    Pow(Box<Expr>, u32),
}

impl Expr {
    /// Integer literal.
    pub fn integer(c: impl Into<BigInt>) -> Self {
        Expr::Integer(c.into())
    }

    /// Symbol leaf.
    pub fn symbol(var: Indeterminate) -> Self {
        Expr::Symbol(var)
    }

    /// Raise to a non-negative integer power.
    pub fn pow(self, exp: u32) -> Self {
        Expr::Pow(Box::new(self), exp)
    }

    /// Expand as a power series in `var`, exact below `var^order`.
    ///
    /// Quotients require the divisor's series to have a non-zero constant
    /// term; otherwise `HodgeError::NonInvertibleSeries` is returned.
    pub fn series(&self, var: Indeterminate, order: usize) -> Result<TruncatedSeries, HodgeError> {
        let coeff_var = var.other();
        Ok(match self {
            Expr::Integer(c) => TruncatedSeries::constant(
                var,
                order,
                RationalFunction::constant(coeff_var, c.clone()),
            ),
            Expr::Symbol(s) if *s == var => TruncatedSeries::variable(var, order),
            Expr::Symbol(s) => TruncatedSeries::constant(
                var,
                order,
                RationalFunction::from_polynomial(Polynomial::variable(*s)),
            ),
            Expr::Add(a, b) => &a.series(var, order)? + &b.series(var, order)?,
            Expr::Sub(a, b) => &a.series(var, order)? - &b.series(var, order)?,
            Expr::Mul(a, b) => &a.series(var, order)? * &b.series(var, order)?,
            Expr::Div(a, b) => a.series(var, order)?.checked_div(&b.series(var, order)?)?,
            Expr::Neg(a) => -&a.series(var, order)?,
            Expr::Pow(base, exp) => base.series(var, order)?.pow(*exp),
        })
    }

    fn precedence(&self) -> u8 {
        match self {
            Expr::Add(..) | Expr::Sub(..) => 1,
            Expr::Mul(..) | Expr::Div(..) => 2,
            Expr::Neg(..) => 3,
            Expr::Integer(c) if c.is_negative() => 3,
            Expr::Pow(..) => 4,
            Expr::Integer(_) | Expr::Symbol(_) => 5,
        }
    }

    fn fmt_at_least(&self, f: &mut fmt::Formatter<'_>, min: u8) -> fmt::Result {
        if self.precedence() < min {
            write!(f, "({})", self)
        } else {
            write!(f, "{}", self)
        }
    }
}

// ============================================================================
// Operator Implementations
// ============================================================================

impl Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Expr {
        Expr::Add(Box::new(self), Box::new(rhs))
    }
}

impl Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Expr {
        Expr::Sub(Box::new(self), Box::new(rhs))
    }
}

impl Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Expr {
        Expr::Mul(Box::new(self), Box::new(rhs))
    }
}

impl Div for Expr {
    type Output = Expr;

    fn div(self, rhs: Expr) -> Expr {
        Expr::Div(Box::new(self), Box::new(rhs))
    }
}

impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        Expr::Neg(Box::new(self))
    }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Integer(c) => write!(f, "{}", c),
            Expr::Symbol(s) => write!(f, "{}", s),
            Expr::Add(a, b) => {
                a.fmt_at_least(f, 1)?;
                f.write_str(" + ")?;
                b.fmt_at_least(f, 1)
            }
            Expr::Sub(a, b) => {
                a.fmt_at_least(f, 1)?;
                f.write_str(" - ")?;
                b.fmt_at_least(f, 2)
            }
            Expr::Mul(a, b) => {
                a.fmt_at_least(f, 2)?;
                f.write_str("*")?;
                b.fmt_at_least(f, 4)
            }
            Expr::Div(a, b) => {
                a.fmt_at_least(f, 2)?;
                f.write_str("/")?;
                b.fmt_at_least(f, 4)
            }
            Expr::Neg(a) => {
                f.write_str("-")?;
                a.fmt_at_least(f, 4)
            }
            Expr::Pow(base, exp) => {
                base.fmt_at_least(f, 5)?;
                write!(f, "**{}", exp)
            }
        }
    }
}
