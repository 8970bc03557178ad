//! High-level API for seasonal decomposition and forecasting.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for configuring the period, mode, forecast settings, and
//! optimizer, and resolves it once into an immutable [`Pipeline`].
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with documented defaults for everything but the period.
//! * **Validated**: All settings are checked when `.build()` is called.
//! * **Stateless**: A [`Pipeline`] holds configuration only and is `Send + Sync`.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SeasonalBuilder`] via `Seasonal::new()`.
//! 2. Chain configuration methods (`.period()`, `.mode()`, `.horizon()`, etc.).
//! 3. Call `.build()` to obtain a [`Pipeline`].
//! 4. Call `decompose`, `fit`, `forecast`, or `run` on any number of series.
//!
//! ### Defaults
//!
//! | Setting | Default |
//! |---|---|
//! | mode | Additive |
//! | horizon | 1 |
//! | confidence level | 0.95 |
//! | initial parameters | (0.3, 0.1, 0.1) |
//! | tolerance | 1e-8 |
//! | patience | 20 |
//! | max iterations | 1000 per start |
//! | multi-start | on (best 2 of a {0.1, 0.5, 0.9}³ grid) |
//! | initialization | decomposition cycle |
//! | best effort | off |

// Feature-gated imports
#[cfg(feature = "std")]
use std::time::Duration;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{SeasonalConfig, SeasonalExecutor};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::recurrence::{InitialState, SeasonalInit};
pub use crate::engine::output::{
    Decomposition, FitResult, Forecast, ForecastPoint, ModelState, PipelineOutput,
};
pub use crate::evaluation::diagnostics::Diagnostics;
pub use crate::primitives::errors::{ErrorKind, SeasonalError};
pub use crate::primitives::mode::Mode;
pub use crate::primitives::params::SmoothingParameters;
pub use crate::primitives::series::Series;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a seasonal [`Pipeline`].
#[derive(Debug, Clone)]
pub struct SeasonalBuilder<T> {
    /// Seasonal period (required, at least 2).
    pub period: Option<usize>,

    /// Composition mode.
    pub mode: Option<Mode>,

    /// Forecast horizon for `run` and `forecast`.
    pub horizon: Option<usize>,

    /// Prediction interval coverage.
    pub confidence_level: Option<T>,

    /// Optimizer seed.
    pub initial_parameters: Option<SmoothingParameters<T>>,

    /// Coefficients used without searching.
    pub fixed_parameters: Option<SmoothingParameters<T>>,

    /// Relative improvement tolerance.
    pub tolerance: Option<T>,

    /// Consecutive stalls that count as convergence.
    pub patience: Option<usize>,

    /// Iteration cap per optimizer start.
    pub max_iterations: Option<usize>,

    /// Enable the coarse multi-start grid.
    pub multi_start: Option<bool>,

    /// Source of the initial seasonal states.
    pub initialization: Option<SeasonalInit>,

    /// Return flagged results instead of convergence errors.
    pub best_effort: Option<bool>,

    /// Wall-clock budget for the coefficient search.
    #[cfg(feature = "std")]
    pub time_budget: Option<Duration>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for SeasonalBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> SeasonalBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            period: None,
            mode: None,
            horizon: None,
            confidence_level: None,
            initial_parameters: None,
            fixed_parameters: None,
            tolerance: None,
            patience: None,
            max_iterations: None,
            multi_start: None,
            initialization: None,
            best_effort: None,
            #[cfg(feature = "std")]
            time_budget: None,
            duplicate_param: None,
        }
    }

    /// Set the seasonal period.
    pub fn period(mut self, period: usize) -> Self {
        if self.period.is_some() {
            self.duplicate_param = Some("period");
        }
        self.period = Some(period);
        self
    }

    /// Set the composition mode.
    pub fn mode(mut self, mode: Mode) -> Self {
        if self.mode.is_some() {
            self.duplicate_param = Some("mode");
        }
        self.mode = Some(mode);
        self
    }

    /// Set the forecast horizon.
    pub fn horizon(mut self, horizon: usize) -> Self {
        if self.horizon.is_some() {
            self.duplicate_param = Some("horizon");
        }
        self.horizon = Some(horizon);
        self
    }

    /// Set the prediction interval coverage level.
    pub fn confidence_level(mut self, level: T) -> Self {
        if self.confidence_level.is_some() {
            self.duplicate_param = Some("confidence_level");
        }
        self.confidence_level = Some(level);
        self
    }

    /// Set the optimizer seed.
    pub fn initial_parameters(mut self, alpha: T, beta: T, gamma: T) -> Self {
        if self.initial_parameters.is_some() {
            self.duplicate_param = Some("initial_parameters");
        }
        self.initial_parameters = Some(SmoothingParameters { alpha, beta, gamma });
        self
    }

    /// Use the given coefficients and skip the search.
    pub fn fixed_parameters(mut self, alpha: T, beta: T, gamma: T) -> Self {
        if self.fixed_parameters.is_some() {
            self.duplicate_param = Some("fixed_parameters");
        }
        self.fixed_parameters = Some(SmoothingParameters { alpha, beta, gamma });
        self
    }

    /// Set the relative improvement tolerance.
    pub fn tolerance(mut self, tolerance: T) -> Self {
        if self.tolerance.is_some() {
            self.duplicate_param = Some("tolerance");
        }
        self.tolerance = Some(tolerance);
        self
    }

    /// Set the number of consecutive stalls that count as convergence.
    pub fn patience(mut self, patience: usize) -> Self {
        if self.patience.is_some() {
            self.duplicate_param = Some("patience");
        }
        self.patience = Some(patience);
        self
    }

    /// Set the iteration cap per optimizer start.
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        if self.max_iterations.is_some() {
            self.duplicate_param = Some("max_iterations");
        }
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Enable or disable the coarse multi-start grid.
    pub fn multi_start(mut self, enabled: bool) -> Self {
        if self.multi_start.is_some() {
            self.duplicate_param = Some("multi_start");
        }
        self.multi_start = Some(enabled);
        self
    }

    /// Choose how the initial seasonal states are estimated.
    pub fn initialization(mut self, init: SeasonalInit) -> Self {
        if self.initialization.is_some() {
            self.duplicate_param = Some("initialization");
        }
        self.initialization = Some(init);
        self
    }

    /// Return flagged results when the search misses its tolerance.
    pub fn best_effort(mut self, enabled: bool) -> Self {
        if self.best_effort.is_some() {
            self.duplicate_param = Some("best_effort");
        }
        self.best_effort = Some(enabled);
        self
    }

    /// Bound the wall-clock time of the coefficient search.
    #[cfg(feature = "std")]
    pub fn time_budget(mut self, budget: Duration) -> Self {
        if self.time_budget.is_some() {
            self.duplicate_param = Some("time_budget");
        }
        self.time_budget = Some(budget);
        self
    }

    /// Validate the configuration and build a [`Pipeline`].
    pub fn build(self) -> Result<Pipeline<T>, SeasonalError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let period = Validator::validate_required(self.period, "period")?;
        Validator::validate_period(period)?;

        let mut config = SeasonalConfig::new(period);

        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(horizon) = self.horizon {
            Validator::validate_horizon(horizon)?;
            config.horizon = horizon;
        }
        if let Some(level) = self.confidence_level {
            Validator::validate_confidence_level(level)?;
            config.confidence_level = level;
        }
        if let Some(params) = self.initial_parameters {
            Validator::validate_parameters(params)?;
            config.initial_parameters = params;
        }
        if let Some(params) = self.fixed_parameters {
            Validator::validate_parameters(params)?;
            config.fixed_parameters = Some(params);
        }
        if let Some(tol) = self.tolerance {
            Validator::validate_tolerance(tol)?;
            config.tolerance = tol;
        }
        if let Some(patience) = self.patience {
            Validator::validate_patience(patience)?;
            config.patience = patience;
        }
        if let Some(max_iterations) = self.max_iterations {
            Validator::validate_max_iterations(max_iterations)?;
            config.max_iterations = max_iterations;
        }
        if let Some(enabled) = self.multi_start {
            config.multi_start = enabled;
        }
        if let Some(init) = self.initialization {
            config.initialization = init;
        }
        if let Some(enabled) = self.best_effort {
            config.best_effort = enabled;
        }
        #[cfg(feature = "std")]
        if let Some(budget) = self.time_budget {
            config.time_budget = Some(budget);
        }

        Ok(Pipeline { config })
    }
}

// ============================================================================
// Pipeline
// ============================================================================

/// Immutable decomposition, fitting, and forecasting facade.
///
/// Every method is a pure function of its arguments and the configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipeline<T> {
    config: SeasonalConfig<T>,
}

impl<T: Float + Send + Sync> Pipeline<T> {
    /// Resolved configuration.
    pub fn config(&self) -> &SeasonalConfig<T> {
        &self.config
    }

    /// Classical decomposition of `series`.
    pub fn decompose(&self, series: &Series<T>) -> Result<Decomposition<T>, SeasonalError> {
        SeasonalExecutor::decompose(series, self.config.period, self.config.mode)
    }

    /// Fit a Holt-Winters model to `series`.
    pub fn fit(&self, series: &Series<T>) -> Result<FitResult<T>, SeasonalError> {
        SeasonalExecutor::fit(series, &self.config)
    }

    /// Forecast the configured horizon at the configured confidence level.
    pub fn forecast(&self, fit: &FitResult<T>) -> Result<Forecast<T>, SeasonalError> {
        self.forecast_with(fit, self.config.horizon, self.config.confidence_level)
    }

    /// Forecast an explicit horizon at an explicit confidence level.
    pub fn forecast_with(
        &self,
        fit: &FitResult<T>,
        horizon: usize,
        confidence_level: T,
    ) -> Result<Forecast<T>, SeasonalError> {
        SeasonalExecutor::forecast(&fit.state, fit.params, horizon, confidence_level)
    }

    /// Decompose, fit, and forecast `series`.
    pub fn run(&self, series: &Series<T>) -> Result<PipelineOutput<T>, SeasonalError> {
        let decomposition = self.decompose(series)?;
        let fit = self.fit(series)?;
        let forecast = self.forecast(&fit)?;
        Ok(PipelineOutput {
            decomposition,
            fit,
            forecast,
        })
    }
}
