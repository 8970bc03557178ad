//! Execution engine for decomposition, fitting, and forecasting.
//!
//! ## Purpose
//!
//! This module orchestrates the lower layers into the three pipeline stages.
//! Fitting runs initialization, the coefficient search, and a final
//! recurrence pass that records the state trajectory; forecasting projects
//! the final state and attaches prediction intervals.
//!
//! ## Design notes
//!
//! * Each stage validates its inputs before any computation.
//! * Candidates that hit a numerical failure score `+∞` inside the search;
//!   the final pass then reports the failure if the best point still fails.
//! * A search that misses its tolerance is an error unless best effort is on.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Invariants
//!
//! * No stage mutates its input or retains state between calls.
//! * Results are deterministic for identical inputs and configuration
//!   (unless a time budget interrupts the search).
//!
//! ## Non-goals
//!
//! * This module does not validate builder configuration (see `api`).
//! * This module does not format results (see `output`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::time::{Duration, Instant};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;
use tracing::{debug, warn};

// Internal dependencies
use crate::algorithms::decomposition::decompose as decompose_components;
use crate::algorithms::optimizer::{OptimizerConfig, minimize};
use crate::algorithms::recurrence::{InitialState, SeasonalInit, sse, trajectory};
use crate::engine::output::{
    Decomposition, FitResult, Forecast, ForecastPoint, ModelState, phase_of,
};
use crate::engine::validator::Validator;
use crate::evaluation::diagnostics::Diagnostics;
use crate::evaluation::intervals::{PredictionInterval, residual_std_dev};
use crate::primitives::errors::SeasonalError;
use crate::primitives::mode::Mode;
use crate::primitives::params::{PARAMETER_BOUND, SmoothingParameters};
use crate::primitives::series::Series;

// ============================================================================
// Configuration
// ============================================================================

/// Resolved configuration for one pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalConfig<T> {
    /// Seasonal period (`P`).
    pub period: usize,

    /// Composition mode.
    pub mode: Mode,

    /// Forecast horizon used by `run`.
    pub horizon: usize,

    /// Prediction interval coverage.
    pub confidence_level: T,

    /// Optimizer seed.
    pub initial_parameters: SmoothingParameters<T>,

    /// Coefficients used as-is, skipping the search.
    pub fixed_parameters: Option<SmoothingParameters<T>>,

    /// Relative improvement tolerance.
    pub tolerance: T,

    /// Consecutive stalls that count as convergence.
    pub patience: usize,

    /// Iteration cap per optimizer start.
    pub max_iterations: usize,

    /// Whether the coarse grid adds extra starts.
    pub multi_start: bool,

    /// Source of the initial seasonal states.
    pub initialization: SeasonalInit,

    /// Return a flagged result instead of a convergence error.
    pub best_effort: bool,

    /// Wall-clock budget for the coefficient search.
    #[cfg(feature = "std")]
    pub time_budget: Option<Duration>,
}

impl<T: Float> SeasonalConfig<T> {
    /// Default configuration for a given period.
    pub fn new(period: usize) -> Self {
        Self {
            period,
            mode: Mode::Additive,
            horizon: 1,
            confidence_level: T::from(0.95).unwrap(),
            initial_parameters: SmoothingParameters::default_seed(),
            fixed_parameters: None,
            tolerance: T::from(1e-8).unwrap(),
            patience: 20,
            max_iterations: 1000,
            multi_start: true,
            initialization: SeasonalInit::Decomposition,
            best_effort: false,
            #[cfg(feature = "std")]
            time_budget: None,
        }
    }

    /// Optimizer settings derived from this configuration.
    pub fn optimizer(&self) -> OptimizerConfig<T> {
        let eps = T::from(PARAMETER_BOUND).unwrap();
        OptimizerConfig {
            seed: self.initial_parameters.to_array(),
            lower: eps,
            upper: T::one() - eps,
            tolerance: self.tolerance,
            patience: self.patience,
            max_iterations: self.max_iterations,
            extra_starts: if self.multi_start { 2 } else { 0 },
            #[cfg(feature = "std")]
            deadline: self.time_budget.map(|d| Instant::now() + d),
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Stateless executor for the three pipeline stages.
pub struct SeasonalExecutor;

impl SeasonalExecutor {
    // ========================================================================
    // Decomposition
    // ========================================================================

    /// Classical decomposition of `series`.
    pub fn decompose<T: Float>(
        series: &Series<T>,
        period: usize,
        mode: Mode,
    ) -> Result<Decomposition<T>, SeasonalError> {
        Validator::validate_period(period)?;
        Validator::validate_length(series.len(), period)?;
        Validator::validate_mode_values(series.values(), mode)?;

        let offset = phase_of(series.start(), 0, period);
        let components = decompose_components(series.values(), period, offset, mode)?;

        debug!(
            n = series.len(),
            period = period,
            mode = ?mode,
            "decomposition complete"
        );

        Ok(Decomposition {
            start: series.start(),
            observed: series.values().to_vec(),
            trend: components.trend,
            seasonal: components.seasonal,
            residual: components.residual,
            period,
            mode,
            cycle: components.cycle,
        })
    }

    // ========================================================================
    // Fitting
    // ========================================================================

    /// Fit a Holt-Winters model to `series`.
    pub fn fit<T>(
        series: &Series<T>,
        config: &SeasonalConfig<T>,
    ) -> Result<FitResult<T>, SeasonalError>
    where
        T: Float + Send + Sync,
    {
        let period = config.period;
        let mode = config.mode;
        let values = series.values();

        Validator::validate_period(period)?;
        Validator::validate_length(values.len(), period)?;
        Validator::validate_mode_values(values, mode)?;

        debug!(
            n = values.len(),
            period = period,
            mode = ?mode,
            fixed = config.fixed_parameters.is_some(),
            "fitting holt-winters model"
        );

        let offset = phase_of(series.start(), 0, period);
        let init = InitialState::estimate(values, period, offset, mode, config.initialization)?;

        let (params, iterations, evaluations, converged, optimized) =
            match config.fixed_parameters {
                Some(params) => (params, 0, 0, true, false),
                None => {
                    let objective = |p: [T; 3]| {
                        sse(values, period, mode, SmoothingParameters::from_array(p), &init)
                            .unwrap_or_else(|_| T::infinity())
                    };
                    let outcome = minimize(&objective, &config.optimizer());
                    (
                        SmoothingParameters::from_array(outcome.point),
                        outcome.iterations,
                        outcome.evaluations,
                        outcome.converged,
                        true,
                    )
                }
            };

        let path = trajectory(values, period, offset, mode, params, &init)?;

        if !converged {
            if !config.best_effort {
                return Err(SeasonalError::Convergence {
                    iterations,
                    best_sse: path.sse.to_f64().unwrap_or(f64::NAN),
                    best: params.to_f64(),
                });
            }
            warn!(
                iterations = iterations,
                sse = path.sse.to_f64().unwrap_or(f64::NAN),
                "returning best-effort fit without convergence"
            );
        }

        let sd = residual_std_dev(&path.errors);
        let diagnostics = Diagnostics::compute(&values[period..], &path.errors, period);

        debug!(
            alpha = params.alpha.to_f64().unwrap_or(f64::NAN),
            beta = params.beta.to_f64().unwrap_or(f64::NAN),
            gamma = params.gamma.to_f64().unwrap_or(f64::NAN),
            sse = path.sse.to_f64().unwrap_or(f64::NAN),
            iterations = iterations,
            converged = converged,
            "fit complete"
        );

        Ok(FitResult {
            params,
            state: ModelState {
                level: path.last.level,
                trend: path.last.trend,
                seasonal_cycle: path.last.cycle,
                residual_std_dev: sd,
                period,
                mode,
                start: series.start(),
                observations: values.len(),
            },
            initial: init,
            fitted: path.fitted,
            residuals: path.errors,
            sse: path.sse,
            iterations,
            evaluations,
            converged,
            optimized,
            diagnostics,
        })
    }

    // ========================================================================
    // Forecasting
    // ========================================================================

    /// Project `state` forward `horizon` steps with intervals at `confidence_level`.
    pub fn forecast<T: Float>(
        state: &ModelState<T>,
        params: SmoothingParameters<T>,
        horizon: usize,
        confidence_level: T,
    ) -> Result<Forecast<T>, SeasonalError> {
        Validator::validate_horizon(horizon)?;
        Validator::validate_confidence_level(confidence_level)?;

        let last = state.last_index();
        i64::try_from(horizon)
            .ok()
            .and_then(|h| last.checked_add(h))
            .ok_or(SeasonalError::IndexOverflow {
                start: last,
                len: horizon,
            })?;

        let interval = PredictionInterval::new(confidence_level, state.residual_std_dev);

        let points: Vec<ForecastPoint<T>> = (1..=horizon)
            .map(|h| {
                let point = state.project(h);
                let (lower, upper) = interval.bounds(point, h);
                ForecastPoint {
                    steps_ahead: h,
                    index: last + h as i64,
                    point,
                    lower,
                    upper,
                }
            })
            .collect();

        Ok(Forecast {
            points,
            confidence_level,
            params,
            residual_std_dev: state.residual_std_dev,
        })
    }
}
