#![cfg(feature = "dev")]
//! Tests for input validation.
//!
//! ## Test Organization
//!
//! 1. **Data** - Length and multiplicative values
//! 2. **Parameters** - Period, horizon, confidence, coefficients, optimizer
//! 3. **Builder** - Required and duplicate parameters

use seasonal::internals::engine::validator::Validator;
use seasonal::internals::primitives::errors::SeasonalError;
use seasonal::internals::primitives::mode::Mode;
use seasonal::internals::primitives::params::SmoothingParameters;

// ============================================================================
// Data
// ============================================================================

/// Length must cover two cycles.
#[test]
fn test_validate_length() {
    assert!(Validator::validate_length(8, 4).is_ok());
    assert_eq!(
        Validator::validate_length(7, 4),
        Err(SeasonalError::InsufficientData { got: 7, min: 8 })
    );
}

/// Zero values only matter in multiplicative mode.
#[test]
fn test_validate_mode_values() {
    let values = [1.0, 0.0, 2.0];
    assert!(Validator::validate_mode_values(&values, Mode::Additive).is_ok());
    assert_eq!(
        Validator::validate_mode_values(&values, Mode::Multiplicative),
        Err(SeasonalError::ZeroValue { position: 1 })
    );
    assert!(Validator::validate_mode_values(&[1.0, -2.0], Mode::Multiplicative).is_ok());
}

// ============================================================================
// Parameters
// ============================================================================

/// Period must be at least two.
#[test]
fn test_validate_period() {
    assert!(Validator::validate_period(2).is_ok());
    assert_eq!(Validator::validate_period(1), Err(SeasonalError::InvalidPeriod(1)));
    assert_eq!(Validator::validate_period(0), Err(SeasonalError::InvalidPeriod(0)));
}

/// Horizon must be at least one.
#[test]
fn test_validate_horizon() {
    assert!(Validator::validate_horizon(1).is_ok());
    assert_eq!(Validator::validate_horizon(0), Err(SeasonalError::InvalidHorizon(0)));
}

/// Confidence level lies in the open unit interval.
#[test]
fn test_validate_confidence_level() {
    assert!(Validator::validate_confidence_level(0.5).is_ok());
    for bad in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
        assert!(Validator::validate_confidence_level(bad).is_err());
    }
}

/// Coefficients lie in the open unit interval.
#[test]
fn test_validate_parameters() {
    let ok = SmoothingParameters { alpha: 0.2, beta: 0.3, gamma: 0.4 };
    assert!(Validator::validate_parameters(ok).is_ok());

    let bad = SmoothingParameters { alpha: 0.2, beta: 1.0, gamma: 0.4 };
    assert_eq!(
        Validator::validate_parameters(bad),
        Err(SeasonalError::InvalidSmoothingParameter { name: "beta", value: 1.0 })
    );
}

/// Optimizer settings must be positive.
#[test]
fn test_validate_optimizer_settings() {
    assert!(Validator::validate_tolerance(1e-6).is_ok());
    assert!(Validator::validate_tolerance(0.0).is_err());
    assert!(Validator::validate_tolerance(f64::INFINITY).is_err());
    assert!(Validator::validate_max_iterations(1).is_ok());
    assert!(Validator::validate_max_iterations(0).is_err());
    assert!(Validator::validate_patience(1).is_ok());
    assert!(Validator::validate_patience(0).is_err());
}

// ============================================================================
// Builder
// ============================================================================

/// Missing and duplicate parameters are reported by name.
#[test]
fn test_builder_checks() {
    assert_eq!(Validator::validate_required(Some(3), "period"), Ok(3));
    assert_eq!(
        Validator::validate_required::<usize>(None, "period"),
        Err(SeasonalError::MissingParameter { parameter: "period" })
    );
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("mode")),
        Err(SeasonalError::DuplicateParameter { parameter: "mode" })
    );
}
