//! Output types for decomposition, fitting, and forecasting.
//!
//! ## Purpose
//!
//! This module defines the immutable results handed back to callers:
//! [`Decomposition`], [`FitResult`] with its [`ModelState`], [`Forecast`],
//! and the combined [`PipelineOutput`].
//!
//! ## Design notes
//!
//! * **Explicit gaps**: Undefined entries are `None`, never zero-filled.
//! * **Generics**: Results are generic over `Float` types.
//! * **Ergonomics**: Implements `Display` for human-readable summaries.
//!
//! ## Invariants
//!
//! * All per-position vectors have the length of the input series.
//! * `lower <= point <= upper` for every forecast point.
//! * Interval widths are non-decreasing in `steps_ahead`.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations beyond simple reconstruction.
//! * This module does not provide serialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::recurrence::InitialState;
use crate::evaluation::diagnostics::Diagnostics;
use crate::primitives::mode::Mode;
use crate::primitives::params::SmoothingParameters;

/// Rows shown at each end of long tables.
const TABLE_EDGE_ROWS: usize = 10;

// ============================================================================
// Decomposition
// ============================================================================

/// Trend, seasonal, and residual components aligned with the input series.
#[derive(Debug, Clone, PartialEq)]
pub struct Decomposition<T> {
    /// Index of the first observation.
    pub start: i64,

    /// Input values.
    pub observed: Vec<T>,

    /// Centered moving-average trend; `None` at both edges.
    pub trend: Vec<Option<T>>,

    /// Periodic seasonal component.
    pub seasonal: Vec<T>,

    /// Residual component; `None` wherever `trend` is `None`.
    ///
    /// Additive: `value − trend − seasonal`. Multiplicative: the ratio
    /// `value / (trend × seasonal)`, so perfect fits give 1.
    pub residual: Vec<Option<T>>,

    /// Seasonal period.
    pub period: usize,

    /// Composition mode.
    pub mode: Mode,

    pub(crate) cycle: Vec<T>,
}

impl<T: Float> Decomposition<T> {
    /// Number of positions.
    pub fn len(&self) -> usize {
        self.observed.len()
    }

    /// Whether the decomposition is empty (never true for validated input).
    pub fn is_empty(&self) -> bool {
        self.observed.is_empty()
    }

    /// Normalized seasonal cycle indexed by phase (`index mod P`).
    pub fn cycle(&self) -> &[T] {
        &self.cycle
    }

    /// Phase of position `t`.
    pub fn phase(&self, t: usize) -> usize {
        phase_of(self.start, t, self.period)
    }

    /// Recombine the components at position `t`, if the trend is defined there.
    pub fn reconstruct(&self, t: usize) -> Option<T> {
        let trend = (*self.trend.get(t)?)?;
        let residual = (*self.residual.get(t)?)?;
        let seasonal = *self.seasonal.get(t)?;
        Some(self.mode.apply(self.mode.apply(trend, seasonal), residual))
    }

    /// Number of positions where trend and residual are defined.
    pub fn defined_count(&self) -> usize {
        self.trend.iter().filter(|v| v.is_some()).count()
    }
}

impl<T: Float + Display> Display for Decomposition<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Decomposition:")?;
        writeln!(f, "  Data points: {}", self.len())?;
        writeln!(f, "  Period:      {}", self.period)?;
        writeln!(f, "  Mode:        {}", self.mode)?;
        write!(f, "  Cycle:      ")?;
        for s in &self.cycle {
            write!(f, " {:.4}", s)?;
        }
        writeln!(f)?;
        writeln!(f)?;

        writeln!(
            f,
            "{:>8} {:>12} {:>12} {:>12} {:>12}",
            "Index", "Observed", "Trend", "Seasonal", "Residual"
        )?;
        writeln!(f, "{:-<60}", "")?;

        let n = self.len();
        let mut prev: Option<usize> = None;
        for t in table_rows(n) {
            if prev.is_some_and(|p| t != p + 1) {
                writeln!(f, "{:>8}", "...")?;
            }
            prev = Some(t);

            write!(
                f,
                "{:>8} {:>12.4}",
                self.start + t as i64,
                self.observed[t]
            )?;
            write_optional(f, self.trend[t])?;
            write!(f, " {:>12.4}", self.seasonal[t])?;
            write_optional(f, self.residual[t])?;
            writeln!(f)?;
        }

        Ok(())
    }
}

// ============================================================================
// Fitted Model
// ============================================================================

/// Smoother state after the last observation; sufficient for forecasting.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelState<T> {
    /// Level at the last observation.
    pub level: T,

    /// Per-step trend at the last observation.
    pub trend: T,

    /// Most recent seasonal state of each phase, indexed by phase.
    pub seasonal_cycle: Vec<T>,

    /// Sample standard deviation of the one-step errors.
    pub residual_std_dev: T,

    /// Seasonal period.
    pub period: usize,

    /// Composition mode.
    pub mode: Mode,

    /// Index of the first observation.
    pub start: i64,

    /// Number of observations fitted.
    pub observations: usize,
}

impl<T: Float> ModelState<T> {
    /// Index of the last observation.
    pub fn last_index(&self) -> i64 {
        self.start + self.observations as i64 - 1
    }

    /// Phase of the observation `steps_ahead` steps after the last one.
    pub fn phase_ahead(&self, steps_ahead: usize) -> usize {
        phase_of(self.start, self.observations - 1 + steps_ahead, self.period)
    }

    /// Point forecast `steps_ahead` steps after the last observation.
    pub fn project(&self, steps_ahead: usize) -> T {
        let h = T::from(steps_ahead).unwrap();
        let base = self.level + h * self.trend;
        self.mode
            .apply(base, self.seasonal_cycle[self.phase_ahead(steps_ahead)])
    }
}

/// A fitted Holt-Winters model.
#[derive(Debug, Clone, PartialEq)]
pub struct FitResult<T> {
    /// Smoothing coefficients used for the final pass.
    pub params: SmoothingParameters<T>,

    /// Final state for forecasting.
    pub state: ModelState<T>,

    /// State before the first update.
    pub initial: InitialState<T>,

    /// One-step-ahead fitted values; `None` for the first `P` positions.
    pub fitted: Vec<Option<T>>,

    /// One-step errors over positions `P .. n`.
    pub residuals: Vec<T>,

    /// Sum of squared one-step errors.
    pub sse: T,

    /// Optimizer iterations of the winning start (0 for fixed coefficients).
    pub iterations: usize,

    /// Objective evaluations across the search.
    pub evaluations: usize,

    /// Whether the search met its tolerance (always true for fixed coefficients).
    pub converged: bool,

    /// Whether the coefficients were searched rather than supplied.
    pub optimized: bool,

    /// Fit quality metrics.
    pub diagnostics: Diagnostics<T>,
}

impl<T: Float> FitResult<T> {
    /// Sample standard deviation of the one-step errors.
    pub fn residual_std_dev(&self) -> T {
        self.state.residual_std_dev
    }

    /// Whether this result was returned without meeting the tolerance.
    pub fn is_best_effort(&self) -> bool {
        !self.converged
    }
}

impl<T: Float + Display> Display for FitResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Holt-Winters Model:")?;
        writeln!(f, "  Observations: {}", self.state.observations)?;
        writeln!(f, "  Period:       {}", self.state.period)?;
        writeln!(f, "  Trend:        Additive")?;
        writeln!(f, "  Seasonal:     {}", self.state.mode)?;
        if self.optimized {
            writeln!(
                f,
                "  Optimizer:    {} iterations, {} evaluations{}",
                self.iterations,
                self.evaluations,
                if self.converged {
                    ""
                } else {
                    " (not converged)"
                }
            )?;
        } else {
            writeln!(f, "  Optimizer:    fixed coefficients")?;
        }
        writeln!(f)?;

        writeln!(f, "Coefficients:")?;
        writeln!(f, "  alpha (level):    {:.6}", self.params.alpha)?;
        writeln!(f, "  beta (trend):     {:.6}", self.params.beta)?;
        writeln!(f, "  gamma (seasonal): {:.6}", self.params.gamma)?;
        writeln!(f, "  initial level:    {:.6}", self.initial.level)?;
        writeln!(f, "  initial trend:    {:.6}", self.initial.trend)?;
        for (i, s) in self.initial.seasonal.iter().enumerate() {
            writeln!(f, "  initial season.{:<2} {:.6}", i, s)?;
        }
        writeln!(f)?;

        writeln!(f, "Final State:")?;
        writeln!(f, "  level:         {:.6}", self.state.level)?;
        writeln!(f, "  trend:         {:.6}", self.state.trend)?;
        write!(f, "  seasonal:     ")?;
        for s in &self.state.seasonal_cycle {
            write!(f, " {:.4}", s)?;
        }
        writeln!(f)?;
        writeln!(f)?;

        write!(f, "{}", self.diagnostics)
    }
}

// ============================================================================
// Forecast
// ============================================================================

/// One projected step with its prediction interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastPoint<T> {
    /// Steps after the last observation (starting at 1).
    pub steps_ahead: usize,

    /// Series index of the projected observation.
    pub index: i64,

    /// Point forecast.
    pub point: T,

    /// Lower prediction bound.
    pub lower: T,

    /// Upper prediction bound.
    pub upper: T,
}

impl<T: Float> ForecastPoint<T> {
    /// Interval width `upper − lower`.
    pub fn width(&self) -> T {
        self.upper - self.lower
    }
}

/// Point forecasts with prediction intervals.
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast<T> {
    /// Forecast steps, ordered by `steps_ahead`.
    pub points: Vec<ForecastPoint<T>>,

    /// Coverage level of the intervals.
    pub confidence_level: T,

    /// Coefficients of the model that produced the forecast.
    pub params: SmoothingParameters<T>,

    /// One-step error standard deviation used for the intervals.
    pub residual_std_dev: T,
}

impl<T: Float> Forecast<T> {
    /// Number of forecast steps.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether there are no forecast steps (never true for a valid horizon).
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point forecasts in order.
    pub fn values(&self) -> Vec<T> {
        self.points.iter().map(|p| p.point).collect()
    }
}

impl<T: Float + Display> Display for Forecast<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Forecast:")?;
        writeln!(f, "  Horizon:     {}", self.len())?;
        writeln!(f, "  Confidence:  {}", self.confidence_level)?;
        writeln!(f, "  Residual SD: {:.6}", self.residual_std_dev)?;
        writeln!(f)?;

        writeln!(
            f,
            "{:>6} {:>8} {:>12} {:>12} {:>12}",
            "Step", "Index", "Forecast", "Lower", "Upper"
        )?;
        writeln!(f, "{:-<54}", "")?;

        let mut prev: Option<usize> = None;
        for i in table_rows(self.len()) {
            if prev.is_some_and(|p| i != p + 1) {
                writeln!(f, "{:>6}", "...")?;
            }
            prev = Some(i);

            let p = &self.points[i];
            writeln!(
                f,
                "{:>6} {:>8} {:>12.4} {:>12.4} {:>12.4}",
                p.steps_ahead, p.index, p.point, p.lower, p.upper
            )?;
        }

        Ok(())
    }
}

// ============================================================================
// Pipeline Output
// ============================================================================

/// Results of decomposing, fitting, and forecasting one series.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput<T> {
    /// Classical decomposition.
    pub decomposition: Decomposition<T>,

    /// Fitted smoothing model.
    pub fit: FitResult<T>,

    /// Forecast from the fitted model.
    pub forecast: Forecast<T>,
}

impl<T: Float + Display> Display for PipelineOutput<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "{}", self.decomposition)?;
        writeln!(f, "{}", self.fit)?;
        write!(f, "{}", self.forecast)
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Phase `(start + t) mod P` with a non-negative result for negative starts.
pub(crate) fn phase_of(start: i64, t: usize, period: usize) -> usize {
    let offset = start.rem_euclid(period as i64) as usize;
    (offset + t) % period
}

/// Row indices to print: all rows, or the first and last ten.
fn table_rows(n: usize) -> Vec<usize> {
    if n <= 2 * TABLE_EDGE_ROWS {
        (0..n).collect()
    } else {
        (0..TABLE_EDGE_ROWS).chain(n - TABLE_EDGE_ROWS..n).collect()
    }
}

fn write_optional<T: Float + Display>(f: &mut Formatter<'_>, value: Option<T>) -> Result {
    match value {
        Some(v) => write!(f, " {:>12.4}", v),
        None => write!(f, " {:>12}", "-"),
    }
}
