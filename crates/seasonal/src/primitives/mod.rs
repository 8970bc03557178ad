//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the data model and shared types used throughout the
//! crate: the input series, the composition mode, and the error type.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Evenly spaced input series.
pub mod series;

/// Additive / multiplicative composition.
pub mod mode;

/// Smoothing coefficients.
pub mod params;
