//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the core numerical procedures:
//! - Classical moving-average decomposition
//! - The Holt-Winters smoothing recurrence and its initialization
//! - Bounded derivative-free minimization of the smoothing objective
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Classical seasonal decomposition.
pub mod decomposition;

/// Holt-Winters recurrence.
pub mod recurrence;

/// Bounded Nelder-Mead search.
pub mod optimizer;
