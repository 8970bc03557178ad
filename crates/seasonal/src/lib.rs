//! # Seasonal: Decomposition and Holt-Winters Forecasting for Rust
//!
//! Classical seasonal decomposition and triple exponential smoothing
//! (Holt-Winters) with prediction intervals, generic over `f32`/`f64` and
//! usable in `no_std` environments.
//!
//! ## What does it do?
//!
//! Given an evenly spaced series and a seasonal period `P`, the crate:
//!
//! 1. **Decomposes** the series into trend (centered moving average),
//!    seasonal (normalized per-phase averages), and residual components.
//! 2. **Fits** a Holt-Winters model with an additive trend and an additive
//!    or multiplicative season, choosing the smoothing coefficients by a
//!    bounded Nelder-Mead search over the in-sample squared one-step error.
//! 3. **Forecasts** `H` steps ahead with intervals that widen with `√h`.
//!
//! ## Quick Start
//!
//! ```rust
//! use seasonal::prelude::*;
//!
//! let series = Series::new(vec![
//!     10.0, 12.0, 14.0, 16.0, 10.0, 12.0, 14.0, 16.0, 10.0, 12.0, 14.0, 16.0,
//! ])?;
//!
//! let pipeline = Seasonal::new()
//!     .period(4)              // Quarterly seasonality
//!     .mode(Additive)         // Seasonal effect adds to the trend
//!     .horizon(4)             // Forecast one full cycle
//!     .confidence_level(0.95) // 95% prediction intervals
//!     .build()?;
//!
//! let output = pipeline.run(&series)?;
//!
//! assert_eq!(output.forecast.len(), 4);
//! println!("{}", output);
//! # Result::<(), SeasonalError>::Ok(())
//! ```
//!
//! ### Stages
//!
//! The three stages are independent and may be called on their own:
//!
//! ```rust
//! use seasonal::prelude::*;
//! # let series = Series::new(vec![
//! #     10.0, 12.0, 14.0, 16.0, 10.0, 12.0, 14.0, 16.0, 10.0, 12.0, 14.0, 16.0,
//! # ])?;
//!
//! let pipeline = Seasonal::new().period(4).build()?;
//!
//! let decomposition = pipeline.decompose(&series)?;
//! assert!(decomposition.trend[0].is_none());
//!
//! let fit = pipeline.fit(&series)?;
//! let forecast = pipeline.forecast_with(&fit, 8, 0.9)?;
//! assert_eq!(forecast.len(), 8);
//! # Result::<(), SeasonalError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Every stage returns `Result<_, SeasonalError>`. Errors are grouped by
//! [`ErrorKind`](prelude::ErrorKind):
//!
//! - **Config**: invalid period, horizon, confidence level, or coefficients.
//! - **InsufficientData**: fewer than `2P` observations.
//! - **Convergence**: the search missed its tolerance (opt out with `.best_effort(true)`).
//! - **Numerical**: a near-zero divisor in multiplicative mode.
//!
//! ```rust
//! use seasonal::prelude::*;
//!
//! let series = Series::new(vec![1.0, 2.0, 3.0])?;
//! let pipeline = Seasonal::new().period(4).build()?;
//!
//! match pipeline.decompose(&series) {
//!     Ok(_) => unreachable!(),
//!     Err(e) => assert_eq!(e.kind(), ErrorKind::InsufficientData),
//! }
//! # Result::<(), SeasonalError>::Ok(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support and the search time budget.
//! - `parallel`: evaluate the multi-start grid and starts with `rayon`.
//! - `synthetic`: seeded synthetic series generator (`synthetic` module).
//! - `dev`: expose internal layers for testing.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - decomposition, recurrence, and search.
mod algorithms;

// Layer 4: Evaluation - diagnostics and prediction intervals.
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
mod engine;

// High-level fluent API.
mod api;

/// Seeded synthetic series generator.
#[cfg(feature = "synthetic")]
pub mod synthetic;

pub use api::{Pipeline, SeasonalBuilder};
pub use engine::executor::SeasonalConfig;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        Decomposition, Diagnostics, ErrorKind, FitResult, Forecast, ForecastPoint, InitialState,
        Mode, Mode::Additive, Mode::Multiplicative, ModelState, Pipeline, PipelineOutput,
        SeasonalBuilder as Seasonal, SeasonalError, SeasonalInit, Series, SmoothingParameters,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
