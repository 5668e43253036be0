//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a computation:
//! - Parameter validation
//! - The pipeline from generating function to Hodge square
//! - The report type and its console rendering
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Pipeline execution.
pub mod executor;

/// Report type and transcript rendering.
pub mod output;

/// Parameter validation.
pub mod validator;
