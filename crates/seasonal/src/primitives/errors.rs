//! Error types for decomposition, fitting, and forecasting.
//!
//! ## Purpose
//!
//! This module defines every error condition the crate can report: input
//! validation, parameter constraints, insufficient history, optimizer budget
//! exhaustion, and numerical breakdown in multiplicative arithmetic.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. required lengths).
//! * **Deferred**: Builder misconfiguration is recorded and reported by `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! Every variant belongs to exactly one [`ErrorKind`]:
//!
//! 1. **Config**: invalid period, horizon, confidence level, parameters, or input values.
//! 2. **InsufficientData**: fewer than two full seasonal cycles.
//! 3. **Convergence**: the optimizer exhausted its budget before meeting tolerance.
//! 4. **Numerical**: a near-zero divisor in multiplicative arithmetic.
//!
//! ## Invariants
//!
//! * Errors are deterministic for identical inputs and optimizer settings.
//! * A convergence error always carries the best estimate found.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not retry or recover from failures.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::primitives::params::SmoothingParameters;

// ============================================================================
// Error Kind
// ============================================================================

/// Coarse classification of a [`SeasonalError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Invalid configuration or input values.
    Config,

    /// The series is too short for the requested period.
    InsufficientData,

    /// The optimizer ran out of budget before meeting its tolerance.
    Convergence,

    /// A near-zero divisor was hit in multiplicative arithmetic.
    Numerical,
}

// ============================================================================
// Error Type
// ============================================================================

/// Error type for seasonal decomposition and Holt-Winters operations.
#[derive(Debug, Clone, PartialEq)]
pub enum SeasonalError {
    /// The series has no observations.
    EmptyInput,

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// Index pairs are not strictly increasing with unit step.
    NonContiguousIndex {
        /// Position of the offending pair.
        position: usize,
        /// Index that was expected at this position.
        expected: i64,
        /// Index that was supplied.
        got: i64,
    },

    /// A run of `len` indices from `start` does not fit in an `i64`.
    IndexOverflow {
        /// First index of the run.
        start: i64,
        /// Number of indices in the run.
        len: usize,
    },

    /// Seasonal period must be at least 2.
    InvalidPeriod(usize),

    /// Forecast horizon must be at least 1.
    InvalidHorizon(usize),

    /// Confidence level must be strictly between 0 and 1.
    InvalidConfidenceLevel(f64),

    /// A smoothing coefficient lies outside the open interval (0, 1).
    InvalidSmoothingParameter {
        /// Name of the coefficient ("alpha", "beta", or "gamma").
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Convergence tolerance must be positive and finite.
    InvalidTolerance(f64),

    /// The optimizer needs at least one iteration.
    InvalidMaxIterations(usize),

    /// The stall window must be at least one iteration.
    InvalidPatience(usize),

    /// A required builder parameter was never set.
    MissingParameter {
        /// Name of the missing parameter.
        parameter: &'static str,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// Fewer observations than two full seasonal cycles.
    InsufficientData {
        /// Number of observations provided.
        got: usize,
        /// Minimum required observations (2 × period).
        min: usize,
    },

    /// The optimizer exhausted its budget without meeting the tolerance.
    Convergence {
        /// Iterations spent by the best start.
        iterations: usize,
        /// Objective (sum of squared one-step errors) at the best point.
        best_sse: f64,
        /// Best smoothing coefficients found.
        best: SmoothingParameters<f64>,
    },

    /// A divisor evaluated to (nearly) zero in multiplicative arithmetic.
    NearZeroDivisor {
        /// Series position where the divisor was evaluated.
        position: usize,
        /// Which quantity was the divisor.
        context: &'static str,
    },

    /// Multiplicative mode received a zero observation.
    ZeroValue {
        /// Series position of the zero value.
        position: usize,
    },
}

impl SeasonalError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InsufficientData { .. } => ErrorKind::InsufficientData,
            Self::Convergence { .. } => ErrorKind::Convergence,
            Self::NearZeroDivisor { .. } | Self::ZeroValue { .. } => ErrorKind::Numerical,
            _ => ErrorKind::Config,
        }
    }

    /// Best-effort coefficients carried by a convergence failure.
    pub fn best_estimate(&self) -> Option<SmoothingParameters<f64>> {
        match self {
            Self::Convergence { best, .. } => Some(*best),
            _ => None,
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SeasonalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input series is empty"),
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::NonContiguousIndex {
                position,
                expected,
                got,
            } => {
                write!(
                    f,
                    "Non-contiguous index at position {position}: expected {expected}, got {got}"
                )
            }
            Self::IndexOverflow { start, len } => {
                write!(f, "Index overflow: {len} indices from {start} exceed i64 range")
            }
            Self::InvalidPeriod(p) => write!(f, "Invalid period: {p} (must be >= 2)"),
            Self::InvalidHorizon(h) => write!(f, "Invalid horizon: {h} (must be >= 1)"),
            Self::InvalidConfidenceLevel(c) => {
                write!(f, "Invalid confidence level: {c} (must be > 0 and < 1)")
            }
            Self::InvalidSmoothingParameter { name, value } => {
                write!(f, "Invalid {name}: {value} (must be > 0 and < 1)")
            }
            Self::InvalidTolerance(tol) => {
                write!(f, "Invalid tolerance: {tol} (must be > 0 and finite)")
            }
            Self::InvalidMaxIterations(n) => {
                write!(f, "Invalid max_iterations: {n} (must be >= 1)")
            }
            Self::InvalidPatience(n) => write!(f, "Invalid patience: {n} (must be >= 1)"),
            Self::MissingParameter { parameter } => {
                write!(f, "Required parameter '{parameter}' was not set")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            Self::InsufficientData { got, min } => {
                write!(f, "Insufficient data: got {got} points, need at least {min}")
            }
            Self::Convergence {
                iterations,
                best_sse,
                best,
            } => {
                write!(
                    f,
                    "Optimizer did not converge after {iterations} iterations \
                     (best SSE {best_sse}, alpha={}, beta={}, gamma={})",
                    best.alpha, best.beta, best.gamma
                )
            }
            Self::NearZeroDivisor { position, context } => {
                write!(f, "Near-zero {context} at position {position}")
            }
            Self::ZeroValue { position } => {
                write!(
                    f,
                    "Zero value at position {position} is not allowed in multiplicative mode"
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SeasonalError {}
