//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer calculates statistical summaries on top of a fitted model:
//! - Diagnostic metrics and information criteria
//! - Prediction intervals for forecasts
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Diagnostic metrics for fit quality assessment.
pub mod diagnostics;

/// Prediction interval computation.
pub mod intervals;
