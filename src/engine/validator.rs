//! Input validation for Hodge number computations.
//!
//! ## Purpose
//!
//! This module checks builder configuration before any algebra runs: the
//! degree and dimension bounds, required parameters, and parameters that
//! were set more than once.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Stateless**: All checks are associated functions on a unit struct.
//!
//! ## Key concepts
//!
//! * **Degree Bounds**: A hypersurface has degree at least 1. The upper bound
//!   keeps the series expansion tractable.
//! * **Dimension Bounds**: `n = 0` (a set of `d` points) is allowed.
//!
//! ## Invariants
//!
//! * A validated configuration always reaches the executor with `d >= 1`.
//!
//! ## Non-goals
//!
//! * This module does not correct invalid inputs.

// Internal dependencies
use crate::primitives::errors::HodgeError;

/// Largest supported hypersurface degree.
pub const MAX_DEGREE: usize = 4096;

/// Largest supported variety dimension.
pub const MAX_DIMENSION: usize = 64;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for hypersurface parameters.
///
/// All methods return `Result<(), HodgeError>` and fail fast upon the first
/// violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the hypersurface degree `d`.
    pub fn validate_degree(degree: usize) -> Result<(), HodgeError> {
        if degree == 0 || degree > MAX_DEGREE {
            return Err(HodgeError::InvalidDegree {
                got: degree,
                max: MAX_DEGREE,
            });
        }
        Ok(())
    }

    /// Validate the variety dimension `n`.
    pub fn validate_dimension(dimension: usize) -> Result<(), HodgeError> {
        if dimension > MAX_DIMENSION {
            return Err(HodgeError::InvalidDimension {
                got: dimension,
                max: MAX_DIMENSION,
            });
        }
        Ok(())
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Validate that a required parameter was provided.
    pub fn validate_required<T>(
        value: Option<T>,
        parameter: &'static str,
    ) -> Result<T, HodgeError> {
        value.ok_or(HodgeError::MissingParameter { parameter })
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), HodgeError> {
        if let Some(param) = duplicate_param {
            return Err(HodgeError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
