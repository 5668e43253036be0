//! Error types for Hodge number computation.
//!
//! ## Purpose
//!
//! This module defines the single error enum returned by every fallible
//! operation: parameter validation, builder configuration, and failures of the
//! embedded exact-arithmetic layer.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Parameter errors are raised before any algebra is attempted.
//! * **Comparable**: Errors are `Clone + PartialEq` so tests can match them exactly.
//! * **Self-describing**: Algebra errors carry the printed expression that failed.
//!
//! ## Non-goals
//!
//! * This module does not recover from errors; recoverable conditions
//!   (zero padding of the chi^p genera) are not errors at all.

use core::fmt;

// ============================================================================
// Error Type
// ============================================================================

/// Errors raised while configuring or running a Hodge computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HodgeError {
    /// Hypersurface degree is zero or exceeds the supported maximum.
    InvalidDegree {
        /// Requested degree.
        got: usize,
        /// Largest supported degree.
        max: usize,
    },

    /// Variety dimension exceeds the supported maximum.
    InvalidDimension {
        /// Requested dimension.
        got: usize,
        /// Largest supported dimension.
        max: usize,
    },

    /// A required builder parameter was never set.
    MissingParameter {
        /// Name of the missing parameter.
        parameter: &'static str,
    },

    /// A builder parameter was configured more than once.
    DuplicateParameter {
        /// Name of the duplicated parameter.
        parameter: &'static str,
    },

    /// Preset name did not match any known hypersurface.
    UnknownPreset(String),

    /// A rational function was formed or inverted with a zero denominator.
    DivisionByZero,

    /// A polynomial quotient that must be exact left a remainder.
    InexactDivision {
        /// Printed dividend.
        dividend: String,
        /// Printed divisor.
        divisor: String,
    },

    /// A power series with zero constant term was inverted.
    NonInvertibleSeries {
        /// Printed constant term of the offending series.
        constant_term: String,
    },

    /// A rational function did not reduce to a polynomial with integer coefficients.
    NotAPolynomial {
        /// Printed rational function after simplification.
        expression: String,
    },

    /// The simplified chi-y genus has more coefficients than the Hodge square is wide.
    DegreeExceedsDimension {
        /// Degree of the simplified chi-y genus.
        degree: usize,
        /// Dimension of the variety.
        dimension: usize,
    },
}

impl fmt::Display for HodgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HodgeError::InvalidDegree { got, max } => {
                write!(f, "Invalid degree: {} (must be in [1, {}])", got, max)
            }
            HodgeError::InvalidDimension { got, max } => {
                write!(f, "Invalid dimension: {} (must be in [0, {}])", got, max)
            }
            HodgeError::MissingParameter { parameter } => {
                write!(f, "Missing parameter: '{}' must be set before build()", parameter)
            }
            HodgeError::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
            HodgeError::UnknownPreset(name) => write!(
                f,
                "Unknown preset: '{}' (expected one of plane-quartic, cubic-surface, k3, quintic-threefold)",
                name
            ),
            HodgeError::DivisionByZero => write!(f, "Division by zero in rational function"),
            HodgeError::InexactDivision { dividend, divisor } => write!(
                f,
                "Polynomial division is not exact: ({}) / ({})",
                dividend, divisor
            ),
            HodgeError::NonInvertibleSeries { constant_term } => write!(
                f,
                "Series is not invertible: constant term is {}",
                constant_term
            ),
            HodgeError::NotAPolynomial { expression } => write!(
                f,
                "Expression does not simplify to an integer polynomial: {}",
                expression
            ),
            HodgeError::DegreeExceedsDimension { degree, dimension } => write!(
                f,
                "chi_y has degree {} but the variety has dimension {}",
                degree, dimension
            ),
        }
    }
}

impl std::error::Error for HodgeError {}
