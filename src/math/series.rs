//! Truncated formal power series with rational-function coefficients.
//!
//! ## Purpose
//!
//! This module expands the hypersurface generating function in the series
//! variable `z`. A `TruncatedSeries` of order `k` stores the coefficients of
//! `z^0 .. z^(k-1)` exactly and stands for `c_0 + c_1 z + ... + O(z^k)`.
//!
//! ## Design notes
//!
//! * **Explicit order**: Every series knows where its remainder term starts;
//!   binary operations truncate to the smaller order.
//! * **Coefficients**: Each coefficient is a `RationalFunction` in the other
//!   indeterminate, so `1 / (1 + y)` is a legal constant term.
//! * **Inversion**: Uses the standard recurrence
//!   `e_k = -e_0 * sum_{j=1..k} c_j e_{k-j}` with `e_0 = 1 / c_0`.
//!
//! ## Invariants
//!
//! * `coeffs.len() == order`.
//! * Coefficients are written in `var.other()`.
//!
//! ## Non-goals
//!
//! * This module does not support Laurent series (negative powers of `z`).
//! * This module does not simplify coefficients; see `RationalFunction::simplify`.

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

// Internal dependencies
use crate::math::rational::RationalFunction;
use crate::primitives::errors::HodgeError;
use crate::primitives::indeterminate::Indeterminate;

// ============================================================================
// TruncatedSeries
// ============================================================================

/// Power series in `var` known exactly below `var^order`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruncatedSeries {
    var: Indeterminate,
    order: usize,
    coeffs: Vec<RationalFunction>,
}

impl TruncatedSeries {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// The zero series `O(var^order)`.
    pub fn zero(var: Indeterminate, order: usize) -> Self {
        Self {
            var,
            order,
            coeffs: vec![RationalFunction::zero(var.other()); order],
        }
    }

    /// A series whose only term below the remainder is the constant `c`.
    pub fn constant(var: Indeterminate, order: usize, c: RationalFunction) -> Self {
        Self::from_coefficients(var, order, vec![c])
    }

    /// The series `var + O(var^order)`.
    pub fn variable(var: Indeterminate, order: usize) -> Self {
        let coeff_var = var.other();
        Self::from_coefficients(
            var,
            order,
            vec![
                RationalFunction::zero(coeff_var),
                RationalFunction::one(coeff_var),
            ],
        )
    }

    /// Build from coefficients lowest power first, padding with zeros or
    /// dropping terms at or beyond `order`.
    pub fn from_coefficients(
        var: Indeterminate,
        order: usize,
        mut coeffs: Vec<RationalFunction>,
    ) -> Self {
        coeffs.truncate(order);
        coeffs.resize(order, RationalFunction::zero(var.other()));
        Self { var, order, coeffs }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The series variable.
    #[inline]
    pub fn var(&self) -> Indeterminate {
        self.var
    }

    /// Power at which the remainder term starts.
    #[inline]
    pub fn order(&self) -> usize {
        self.order
    }

    /// Coefficient of `var^k`, or `None` if `k` lies inside the remainder.
    #[inline]
    pub fn coefficient(&self, k: usize) -> Option<&RationalFunction> {
        self.coeffs.get(k)
    }

    /// All known coefficients, lowest power first.
    #[inline]
    pub fn coefficients(&self) -> &[RationalFunction] {
        &self.coeffs
    }

    /// Drop the remainder term, leaving a polynomial in `var`.
    ///
    /// The polynomial is returned as its coefficient list, lowest power first,
    /// with trailing zero coefficients removed.
    pub fn remove_o(&self) -> Vec<RationalFunction> {
        let mut coeffs = self.coeffs.clone();
        while coeffs.last().is_some_and(|c| c.is_zero()) {
            coeffs.pop();
        }
        coeffs
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Raise to a non-negative integer power.
    pub fn pow(&self, exp: u32) -> Self {
        let one = RationalFunction::one(self.var.other());
        let mut result = Self::constant(self.var, self.order, one);
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

    /// Multiplicative inverse; the constant term must be non-zero.
    pub fn inverse(&self) -> Result<Self, HodgeError> {
        let Some(c0) = self.coeffs.first() else {
            return Ok(self.clone());
        };
        let e0 = c0.inv().map_err(|_| HodgeError::NonInvertibleSeries {
            constant_term: c0.to_string(),
        })?;

        let zero = RationalFunction::zero(self.var.other());
        let mut inv = Vec::with_capacity(self.order);
        inv.push(e0.clone());
        for k in 1..self.order {
            let acc = (1..=k).fold(zero.clone(), |acc, j| {
                &acc + &(&self.coeffs[j] * &inv[k - j])
            });
            inv.push(-(&e0 * &acc));
        }

        Ok(Self {
            var: self.var,
            order: self.order,
            coeffs: inv,
        })
    }

    /// Division by a series with non-zero constant term.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, HodgeError> {
        Ok(self * &rhs.inverse()?)
    }
}

// ============================================================================
// Operator Implementations
// ============================================================================

impl Add<&TruncatedSeries> for &TruncatedSeries {
    type Output = TruncatedSeries;

    fn add(self, rhs: &TruncatedSeries) -> TruncatedSeries {
        debug_assert_eq!(self.var, rhs.var, "mixed series variables");
        let order = self.order.min(rhs.order);
        let coeffs = self
            .coeffs
            .iter()
            .zip(&rhs.coeffs)
            .take(order)
            .map(|(a, b)| a + b)
            .collect();
        TruncatedSeries {
            var: self.var,
            order,
            coeffs,
        }
    }
}

impl Sub<&TruncatedSeries> for &TruncatedSeries {
    type Output = TruncatedSeries;

    fn sub(self, rhs: &TruncatedSeries) -> TruncatedSeries {
        debug_assert_eq!(self.var, rhs.var, "mixed series variables");
        let order = self.order.min(rhs.order);
        let coeffs = self
            .coeffs
            .iter()
            .zip(&rhs.coeffs)
            .take(order)
            .map(|(a, b)| a - b)
            .collect();
        TruncatedSeries {
            var: self.var,
            order,
            coeffs,
        }
    }
}

impl Mul<&TruncatedSeries> for &TruncatedSeries {
    type Output = TruncatedSeries;

    /// Cauchy product truncated to the smaller order.
    fn mul(self, rhs: &TruncatedSeries) -> TruncatedSeries {
        debug_assert_eq!(self.var, rhs.var, "mixed series variables");
        let order = self.order.min(rhs.order);
        let zero = RationalFunction::zero(self.var.other());
        let coeffs = (0..order)
            .map(|k| {
                (0..=k).fold(zero.clone(), |acc, i| {
                    &acc + &(&self.coeffs[i] * &rhs.coeffs[k - i])
                })
            })
            .collect();
        TruncatedSeries {
            var: self.var,
            order,
            coeffs,
        }
    }
}

impl Neg for &TruncatedSeries {
    type Output = TruncatedSeries;

    fn neg(self) -> TruncatedSeries {
        TruncatedSeries {
            var: self.var,
            order: self.order,
            coeffs: self.coeffs.iter().map(|c| -c).collect(),
        }
    }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for TruncatedSeries {
    /// Prints `c0 + (c1)*z + ... + O(z**order)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (k, c) in self.coeffs.iter().enumerate() {
            if c.is_zero() {
                continue;
            }
            if !first {
                f.write_str(" + ")?;
            }
            first = false;
            match k {
                0 => write!(f, "{}", c)?,
                1 => write!(f, "({})*{}", c, self.var)?,
                _ => write!(f, "({})*{}**{}", c, self.var, k)?,
            }
        }
        if !first {
            f.write_str(" + ")?;
        }
        match self.order {
            0 => f.write_str("O(1)"),
            1 => write!(f, "O({})", self.var),
            k => write!(f, "O({}**{})", self.var, k),
        }
    }
}
