//! Execution engine for Hodge number computations.
//!
//! ## Purpose
//!
//! This module runs the full pipeline for one hypersurface: build the
//! generating function, expand it, extract and simplify chi_y, read off the
//! chi^p genera, and assemble the Hodge square. Every intermediate value is
//! kept in the returned [`HodgeReport`].
//!
//! ## Design notes
//!
//! * **Stage logging**: Each stage emits a `tracing` debug event; zero padding
//!   emits a warning.
//! * **No state**: The executor owns nothing between runs, so repeated runs
//!   with the same configuration produce identical reports.
//!
//! ## Invariants
//!
//! * The configuration has already passed the `Validator`.
//!
//! ## Non-goals
//!
//! * This module does not validate parameters (handled by `validator`).
//! * This module does not print anything; see `output`.

// External dependencies
use tracing::{debug, info, warn};

// Internal dependencies
use crate::algorithms::genera::{chi_genera, euler_characteristic, extract_chi_y, simplify_chi_y};
use crate::algorithms::generating::hypersurface_generating_function;
use crate::algorithms::placement::assemble;
use crate::engine::output::HodgeReport;
use crate::primitives::errors::HodgeError;

// ============================================================================
// Configuration
// ============================================================================

/// Validated parameters of a single computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HodgeConfig {
    /// Dimension `n` of the hypersurface.
    pub dimension: usize,

    /// Degree `d` of the hypersurface.
    pub degree: usize,
}

// ============================================================================
// Executor
// ============================================================================

/// Runs the Hodge square pipeline.
pub struct HodgeExecutor;

impl HodgeExecutor {
    /// Compute the full report for one hypersurface.
    pub fn run(config: &HodgeConfig) -> Result<HodgeReport, HodgeError> {
        let HodgeConfig { dimension, degree } = *config;
        let exponent = u32::try_from(degree).map_err(|_| HodgeError::InvalidDegree {
            got: degree,
            max: u32::MAX as usize,
        })?;

        let generating_function = hypersurface_generating_function(exponent);
        debug!(dimension, degree, "built generating function");

        let chi_y = extract_chi_y(&generating_function, dimension)?;
        debug!(%chi_y, "extracted chi_y");

        let chi_y_simplified = simplify_chi_y(&chi_y)?;
        debug!(%chi_y_simplified, "simplified chi_y");

        let genera = chi_genera(&chi_y_simplified, dimension)?;
        if genera.padded {
            warn!(
                dimension,
                degree, "chi_y has vanishing top coefficients; padding chi^p genera with zeros"
            );
        }

        let squares = assemble(&genera.values);
        debug!(parity = ?squares.parity, "assembled Hodge square");

        let euler_characteristic = euler_characteristic(&chi_y_simplified);
        info!(dimension, degree, %euler_characteristic, "computed Hodge square");

        Ok(HodgeReport {
            dimension,
            degree,
            generating_function,
            chi_y,
            chi_y_simplified,
            chi_genera: genera.values,
            padded: genera.padded,
            parity: squares.parity,
            antidiagonal: squares.antidiagonal,
            assembled: squares.assembled,
            square: squares.displayed,
            euler_characteristic,
        })
    }
}
