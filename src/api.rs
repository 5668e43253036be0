//! High-level API for Hodge number computations.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points: a fluent
//! builder for configuring a hypersurface, named presets for the classic
//! examples, and a one-shot function returning just the Hodge square.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder ending in `.build()?.compute()?`.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Strict**: Setting a parameter twice (directly or through a preset) is
//!   an error rather than a silent override.
//!
//! ## Key concepts
//!
//! ### Configuration Flow
//!
//! 1. Create a [`HypersurfaceBuilder`] via `Hypersurface::new()`.
//! 2. Set `.dimension(n)` and `.degree(d)`, or choose a `.preset(..)`.
//! 3. Call `.build()` to validate, then `.compute()` to run the pipeline.

use core::fmt;
use core::str::FromStr;

// Internal dependencies
use crate::engine::executor::{HodgeConfig, HodgeExecutor};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::placement::SquareParity;
pub use crate::engine::output::HodgeReport;
pub use crate::engine::validator::{MAX_DEGREE, MAX_DIMENSION};
pub use crate::primitives::errors::HodgeError;
pub use crate::primitives::matrix::SquareMatrix;

// ============================================================================
// Presets
// ============================================================================

/// Classic hypersurfaces with well-known Hodge numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Smooth quartic curve in P^2, genus 3.
    PlaneQuartic,
    /// Smooth cubic surface in P^3.
    CubicSurface,
    /// Smooth quartic surface in P^3.
    K3,
    /// Smooth quintic threefold in P^4 (a Calabi-Yau threefold).
    QuinticThreefold,
}

impl Preset {
    /// Every preset, in increasing dimension.
    pub const ALL: [Preset; 4] = [
        Preset::PlaneQuartic,
        Preset::CubicSurface,
        Preset::K3,
        Preset::QuinticThreefold,
    ];

    /// `(dimension, degree)` of the preset.
    pub fn parameters(self) -> (usize, usize) {
        match self {
            Preset::PlaneQuartic => (1, 4),
            Preset::CubicSurface => (2, 3),
            Preset::K3 => (2, 4),
            Preset::QuinticThreefold => (3, 5),
        }
    }

    /// Canonical name, as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            Preset::PlaneQuartic => "plane-quartic",
            Preset::CubicSurface => "cubic-surface",
            Preset::K3 => "k3",
            Preset::QuinticThreefold => "quintic-threefold",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = HodgeError;

    /// Parse a preset name; case and `-`/`_` separators are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Preset::ALL
            .into_iter()
            .find(|preset| preset.name() == normalized)
            .ok_or_else(|| HodgeError::UnknownPreset(s.to_string()))
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a hypersurface.
#[derive(Debug, Clone, Default)]
pub struct HypersurfaceBuilder {
    /// Dimension `n` of the hypersurface.
    pub dimension: Option<usize>,

    /// Degree `d` of the hypersurface.
    pub degree: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl HypersurfaceBuilder {
    /// Create a new builder with nothing set.
    pub fn new() -> Self {
        Self {
            dimension: None,
            degree: None,
            duplicate_param: None,
        }
    }

    /// Set the dimension `n` of the hypersurface.
    pub fn dimension(mut self, dimension: usize) -> Self {
        if self.dimension.is_some() {
            self.duplicate_param = Some("dimension");
        }
        self.dimension = Some(dimension);
        self
    }

    /// Set the degree `d` of the hypersurface.
    pub fn degree(mut self, degree: usize) -> Self {
        if self.degree.is_some() {
            self.duplicate_param = Some("degree");
        }
        self.degree = Some(degree);
        self
    }

    /// Set both dimension and degree from a preset.
    pub fn preset(self, preset: Preset) -> Self {
        let (dimension, degree) = preset.parameters();
        self.dimension(dimension).degree(degree)
    }

    /// Validate the configuration.
    pub fn build(self) -> Result<HodgeCalculator, HodgeError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        let dimension = Validator::validate_required(self.dimension, "dimension")?;
        let degree = Validator::validate_required(self.degree, "degree")?;
        Validator::validate_dimension(dimension)?;
        Validator::validate_degree(degree)?;

        Ok(HodgeCalculator {
            config: HodgeConfig { dimension, degree },
        })
    }
}

// ============================================================================
// Calculator
// ============================================================================

/// A validated hypersurface, ready to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HodgeCalculator {
    config: HodgeConfig,
}

impl HodgeCalculator {
    /// Dimension `n`.
    pub fn dimension(&self) -> usize {
        self.config.dimension
    }

    /// Degree `d`.
    pub fn degree(&self) -> usize {
        self.config.degree
    }

    /// Run the pipeline and return the full report.
    pub fn compute(&self) -> Result<HodgeReport, HodgeError> {
        HodgeExecutor::run(&self.config)
    }
}

/// Hodge square of the smooth degree-`d` hypersurface of dimension `n`,
/// in display orientation.
pub fn hodge_square(dimension: usize, degree: usize) -> Result<SquareMatrix, HodgeError> {
    let report = HypersurfaceBuilder::new()
        .dimension(dimension)
        .degree(degree)
        .build()?
        .compute()?;
    Ok(report.square)
}
