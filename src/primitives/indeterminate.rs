//! Formal indeterminates of the hypersurface generating function.
//!
//! The generating function lives in two variables: `y`, which survives into
//! the chi-y genus, and `z`, which is expanded as a power series and then
//! discarded. Every polynomial in the crate records which of the two it is
//! written in, so conversion to a polynomial never has to infer its variable
//! from a (possibly zero) expression.

use core::fmt;

/// One of the two formal variables `y` and `z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Indeterminate {
    /// Genus variable; coefficients of the chi-y genus are read in `y`.
    Y,
    /// Series variable; the generating function is expanded in `z`.
    Z,
}

impl Indeterminate {
    /// The printed name of the variable.
    pub fn name(self) -> &'static str {
        match self {
            Indeterminate::Y => "y",
            Indeterminate::Z => "z",
        }
    }

    /// The other indeterminate.
    pub fn other(self) -> Self {
        match self {
            Indeterminate::Y => Indeterminate::Z,
            Indeterminate::Z => Indeterminate::Y,
        }
    }
}

impl fmt::Display for Indeterminate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
