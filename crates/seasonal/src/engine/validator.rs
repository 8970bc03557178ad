//! Input validation for pipeline configuration and data.
//!
//! ## Purpose
//!
//! This module checks every configuration value and input series before any
//! computation starts, so no partial state escapes a rejected request.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Ordering**: Configuration is checked before data, cheap before expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Period**: At least 2.
//! * **History**: At least two full cycles (`n >= 2P`).
//! * **Open intervals**: Confidence level and smoothing coefficients lie in (0, 1).
//! * **Multiplicative data**: Observations must be non-zero.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or repair input data.
//! * This module does not detect numerical breakdown during the recurrence.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SeasonalError;
use crate::primitives::mode::Mode;
use crate::primitives::params::SmoothingParameters;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for pipeline configuration and input data.
///
/// Provides static methods that return `Result<(), SeasonalError>` and fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Data Validation
    // ========================================================================

    /// Validate that a series holds at least two full seasonal cycles.
    pub fn validate_length(n: usize, period: usize) -> Result<(), SeasonalError> {
        let min = period.saturating_mul(2);
        if n < min {
            return Err(SeasonalError::InsufficientData { got: n, min });
        }
        Ok(())
    }

    /// Validate that no observation is zero in multiplicative mode.
    pub fn validate_mode_values<T: Float>(values: &[T], mode: Mode) -> Result<(), SeasonalError> {
        if !mode.divides() {
            return Ok(());
        }
        if let Some(position) = values.iter().position(|&v| mode.is_degenerate(v)) {
            return Err(SeasonalError::ZeroValue { position });
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the seasonal period.
    pub fn validate_period(period: usize) -> Result<(), SeasonalError> {
        if period < 2 {
            return Err(SeasonalError::InvalidPeriod(period));
        }
        Ok(())
    }

    /// Validate the forecast horizon.
    pub fn validate_horizon(horizon: usize) -> Result<(), SeasonalError> {
        if horizon < 1 {
            return Err(SeasonalError::InvalidHorizon(horizon));
        }
        Ok(())
    }

    /// Validate the prediction interval coverage level.
    pub fn validate_confidence_level<T: Float>(level: T) -> Result<(), SeasonalError> {
        if !level.is_finite() || level <= T::zero() || level >= T::one() {
            return Err(SeasonalError::InvalidConfidenceLevel(
                level.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate user-supplied smoothing coefficients.
    pub fn validate_parameters<T: Float>(
        params: SmoothingParameters<T>,
    ) -> Result<(), SeasonalError> {
        SmoothingParameters::new(params.alpha, params.beta, params.gamma).map(|_| ())
    }

    /// Validate the optimizer's relative improvement tolerance.
    pub fn validate_tolerance<T: Float>(tol: T) -> Result<(), SeasonalError> {
        if !tol.is_finite() || tol <= T::zero() {
            return Err(SeasonalError::InvalidTolerance(
                tol.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the per-start iteration cap.
    pub fn validate_max_iterations(max_iterations: usize) -> Result<(), SeasonalError> {
        if max_iterations < 1 {
            return Err(SeasonalError::InvalidMaxIterations(max_iterations));
        }
        Ok(())
    }

    /// Validate the number of consecutive stalls that signal convergence.
    pub fn validate_patience(patience: usize) -> Result<(), SeasonalError> {
        if patience < 1 {
            return Err(SeasonalError::InvalidPatience(patience));
        }
        Ok(())
    }

    /// Validate that a required parameter was provided.
    pub fn validate_required<V>(
        value: Option<V>,
        parameter: &'static str,
    ) -> Result<V, SeasonalError> {
        value.ok_or(SeasonalError::MissingParameter { parameter })
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), SeasonalError> {
        if let Some(param) = duplicate_param {
            return Err(SeasonalError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
