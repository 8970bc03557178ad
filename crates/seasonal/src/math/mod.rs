//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used throughout the crate:
//! - Centered moving averages for trend extraction
//! - Descriptive statistics (mean, sample standard deviation)
//! - Standard normal quantiles for prediction intervals
//!
//! These are reusable building blocks with no model-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Centered moving averages.
pub mod moving_average;

/// Descriptive statistics.
pub mod stats;

/// Standard normal quantiles.
pub mod normal;
