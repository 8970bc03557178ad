//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates decomposition, fitting, and forecasting by
//! coordinating the algorithms and evaluation layers. It owns validation
//! and the result types handed back to callers.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Execution engine for the pipeline stages.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for decomposition, fitting, and forecasting.
pub mod output;
