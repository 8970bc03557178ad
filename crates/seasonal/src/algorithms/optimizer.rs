//! Bounded Nelder-Mead search over the smoothing coefficients.
//!
//! ## Purpose
//!
//! This module minimizes a derivative-free objective over the box
//! `[lower, upper]³`. It is used to choose (α, β, γ) by minimizing the
//! in-sample sum of squared one-step errors.
//!
//! ## Design notes
//!
//! * **Simplex**: Standard Nelder-Mead (reflection 1, expansion 2,
//!   contraction ½, shrink ½) with every trial point clamped into the box.
//! * **Multi-start**: The fixed seed plus the best points of a coarse
//!   `{0.1, 0.5, 0.9}³` grid; the best run wins, ties go to the earlier start.
//! * **Budget**: A per-start iteration cap and, with `std`, an optional
//!   wall-clock deadline.
//! * **Failure-tolerant**: Non-finite objective values rank worst.
//! * **Parallelism**: With the `parallel` feature the grid and the starts are
//!   evaluated with `rayon`; output order, and hence the result, is unchanged.
//!
//! ## Key concepts
//!
//! * **Stall**: An iteration whose best value improves by no more than
//!   `tolerance × (1 + |best|)`.
//! * **Convergence**: `patience` consecutive stalls.
//!
//! ## Invariants
//!
//! * Every evaluated point lies inside the box.
//! * Results are deterministic for identical objective and configuration
//!   (unless a deadline interrupts the search).
//!
//! ## Non-goals
//!
//! * This module does not know about time series; it only sees an objective.
//! * This module does not compute gradients or Hessians.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::time::Instant;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use core::cmp::Ordering;
use num_traits::Float;
use tracing::debug;

/// Number of searched coefficients.
pub const DIM: usize = 3;

/// Coordinates of the coarse multi-start grid.
pub const GRID_LEVELS: [f64; 3] = [0.1, 0.5, 0.9];

// ============================================================================
// Configuration
// ============================================================================

/// Settings for one minimization.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizerConfig<T> {
    /// First starting point.
    pub seed: [T; DIM],

    /// Lower bound of every coordinate.
    pub lower: T,

    /// Upper bound of every coordinate.
    pub upper: T,

    /// Relative improvement below which an iteration counts as a stall.
    pub tolerance: T,

    /// Consecutive stalls required to declare convergence.
    pub patience: usize,

    /// Iteration cap per start.
    pub max_iterations: usize,

    /// Number of grid points added as extra starts (0 disables the grid).
    pub extra_starts: usize,

    /// Wall-clock deadline shared by all starts.
    #[cfg(feature = "std")]
    pub deadline: Option<Instant>,
}

impl<T: Float> Default for OptimizerConfig<T> {
    fn default() -> Self {
        let eps = T::from(crate::primitives::params::PARAMETER_BOUND).unwrap();
        Self {
            seed: [
                T::from(0.3).unwrap(),
                T::from(0.1).unwrap(),
                T::from(0.1).unwrap(),
            ],
            lower: eps,
            upper: T::one() - eps,
            tolerance: T::from(1e-8).unwrap(),
            patience: 20,
            max_iterations: 1000,
            extra_starts: 2,
            #[cfg(feature = "std")]
            deadline: None,
        }
    }
}

// ============================================================================
// Outcome
// ============================================================================

/// Result of a minimization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome<T> {
    /// Best point found.
    pub point: [T; DIM],

    /// Objective at `point`.
    pub value: T,

    /// Iterations spent by the winning start.
    pub iterations: usize,

    /// Objective evaluations across all starts and the grid.
    pub evaluations: usize,

    /// Whether the winning start met the stall criterion.
    pub converged: bool,
}

// ============================================================================
// Entry Point
// ============================================================================

/// Minimize `objective` over the configured box.
pub fn minimize<T, F>(objective: &F, config: &OptimizerConfig<T>) -> Outcome<T>
where
    T: Float + Send + Sync,
    F: Fn([T; DIM]) -> T + Sync,
{
    let seed = clamp_point(config.seed, config.lower, config.upper);
    let mut starts = Vec::with_capacity(1 + config.extra_starts);
    starts.push(seed);

    let mut grid_evaluations = 0;
    if config.extra_starts > 0 {
        let grid = grid_points::<T>();
        grid_evaluations = grid.len();
        let scored = evaluate_all(objective, &grid);

        let mut ranked: Vec<(usize, T)> = scored.into_iter().enumerate().collect();
        ranked.sort_by(|a, b| compare(a.1, b.1).then(a.0.cmp(&b.0)));

        starts.extend(
            ranked
                .into_iter()
                .filter(|&(_, v)| v.is_finite())
                .map(|(i, _)| clamp_point(grid[i], config.lower, config.upper))
                .filter(|p| *p != seed)
                .take(config.extra_starts),
        );
    }

    let runs = run_all(objective, &starts, config);

    let mut best = runs[0];
    for run in runs.iter().skip(1) {
        if compare(run.value, best.value) == Ordering::Less {
            best = *run;
        }
    }
    best.evaluations = grid_evaluations + runs.iter().map(|r| r.evaluations).sum::<usize>();
    best
}

#[cfg(not(feature = "parallel"))]
fn evaluate_all<T, F>(objective: &F, points: &[[T; DIM]]) -> Vec<T>
where
    T: Float + Send + Sync,
    F: Fn([T; DIM]) -> T + Sync,
{
    points.iter().map(|&p| sanitize(objective(p))).collect()
}

#[cfg(feature = "parallel")]
fn evaluate_all<T, F>(objective: &F, points: &[[T; DIM]]) -> Vec<T>
where
    T: Float + Send + Sync,
    F: Fn([T; DIM]) -> T + Sync,
{
    points.par_iter().map(|&p| sanitize(objective(p))).collect()
}

#[cfg(not(feature = "parallel"))]
fn run_all<T, F>(objective: &F, starts: &[[T; DIM]], config: &OptimizerConfig<T>) -> Vec<Outcome<T>>
where
    T: Float + Send + Sync,
    F: Fn([T; DIM]) -> T + Sync,
{
    starts
        .iter()
        .map(|&s| nelder_mead(objective, s, config))
        .collect()
}

#[cfg(feature = "parallel")]
fn run_all<T, F>(objective: &F, starts: &[[T; DIM]], config: &OptimizerConfig<T>) -> Vec<Outcome<T>>
where
    T: Float + Send + Sync,
    F: Fn([T; DIM]) -> T + Sync,
{
    starts
        .par_iter()
        .map(|&s| nelder_mead(objective, s, config))
        .collect()
}

// ============================================================================
// Nelder-Mead
// ============================================================================

/// Run a single bounded Nelder-Mead search from `start`.
pub fn nelder_mead<T, F>(objective: &F, start: [T; DIM], config: &OptimizerConfig<T>) -> Outcome<T>
where
    T: Float,
    F: Fn([T; DIM]) -> T,
{
    let (lo, hi) = (config.lower, config.upper);
    let half = T::from(0.5).unwrap();
    let two = T::from(2.0).unwrap();
    let step = T::from(0.05).unwrap();
    let mut evaluations = 0usize;

    let mut eval = |p: [T; DIM]| {
        evaluations += 1;
        sanitize(objective(p))
    };

    // Initial simplex: start plus one step along each axis, flipped at the upper bound.
    let mut simplex: Vec<([T; DIM], T)> = Vec::with_capacity(DIM + 1);
    let x0 = clamp_point(start, lo, hi);
    simplex.push((x0, eval(x0)));
    for i in 0..DIM {
        let mut x = x0;
        x[i] = if x[i] + step <= hi { x[i] + step } else { x[i] - step };
        let x = clamp_point(x, lo, hi);
        simplex.push((x, eval(x)));
    }
    sort_simplex(&mut simplex);

    let mut best = simplex[0].1;
    let mut stalls = 0usize;
    let mut iterations = 0usize;
    let mut converged = false;

    while iterations < config.max_iterations {
        #[cfg(feature = "std")]
        if config.deadline.is_some_and(|d| Instant::now() >= d) {
            break;
        }
        iterations += 1;

        let worst = simplex[DIM];
        let centroid = centroid(&simplex[..DIM]);

        let reflected = clamp_point(along(centroid, worst.0, T::one()), lo, hi);
        let f_reflected = eval(reflected);

        if compare(f_reflected, simplex[0].1) == Ordering::Less {
            let expanded = clamp_point(along(centroid, worst.0, two), lo, hi);
            let f_expanded = eval(expanded);
            simplex[DIM] = if compare(f_expanded, f_reflected) == Ordering::Less {
                (expanded, f_expanded)
            } else {
                (reflected, f_reflected)
            };
        } else if compare(f_reflected, simplex[DIM - 1].1) == Ordering::Less {
            simplex[DIM] = (reflected, f_reflected);
        } else {
            let outside = compare(f_reflected, worst.1) == Ordering::Less;
            let contracted = if outside {
                clamp_point(along(centroid, worst.0, half), lo, hi)
            } else {
                clamp_point(along(centroid, worst.0, -half), lo, hi)
            };
            let f_contracted = eval(contracted);
            let target = if outside { f_reflected } else { worst.1 };

            if compare(f_contracted, target) != Ordering::Greater {
                simplex[DIM] = (contracted, f_contracted);
            } else {
                let anchor = simplex[0].0;
                for vertex in simplex.iter_mut().skip(1) {
                    let mut x = anchor;
                    for (xi, (&ai, &vi)) in x.iter_mut().zip(anchor.iter().zip(vertex.0.iter())) {
                        *xi = ai + half * (vi - ai);
                    }
                    let x = clamp_point(x, lo, hi);
                    *vertex = (x, eval(x));
                }
            }
        }

        sort_simplex(&mut simplex);

        let current = simplex[0].1;
        let improved = compare(current, best) == Ordering::Less
            && best - current > config.tolerance * (T::one() + current.abs());
        best = current;

        if improved {
            stalls = 0;
        } else {
            stalls += 1;
            if stalls >= config.patience {
                converged = true;
                break;
            }
        }
    }

    debug!(
        iterations = iterations,
        evaluations = evaluations,
        objective = simplex[0].1.to_f64().unwrap_or(f64::NAN),
        converged = converged,
        "nelder-mead start finished"
    );

    Outcome {
        point: simplex[0].0,
        value: simplex[0].1,
        iterations,
        evaluations,
        converged,
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Total order on objective values; NaN ranks worst.
fn compare<T: Float>(a: T, b: T) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Map NaN objective values to +∞.
#[inline]
fn sanitize<T: Float>(v: T) -> T {
    if v.is_nan() { T::infinity() } else { v }
}

fn sort_simplex<T: Float>(simplex: &mut [([T; DIM], T)]) {
    simplex.sort_by(|a, b| compare(a.1, b.1));
}

fn clamp_point<T: Float>(mut p: [T; DIM], lo: T, hi: T) -> [T; DIM] {
    for x in p.iter_mut() {
        *x = x.max(lo).min(hi);
    }
    p
}

fn centroid<T: Float>(vertices: &[([T; DIM], T)]) -> [T; DIM] {
    let k = T::from(vertices.len()).unwrap();
    let mut c = [T::zero(); DIM];
    for (x, _) in vertices {
        for (ci, &xi) in c.iter_mut().zip(x.iter()) {
            *ci = *ci + xi;
        }
    }
    for ci in c.iter_mut() {
        *ci = *ci / k;
    }
    c
}

/// `c + coef · (c − w)`: reflection, expansion, and contractions.
fn along<T: Float>(c: [T; DIM], w: [T; DIM], coef: T) -> [T; DIM] {
    let mut out = c;
    for (o, (&ci, &wi)) in out.iter_mut().zip(c.iter().zip(w.iter())) {
        *o = ci + coef * (ci - wi);
    }
    out
}

fn grid_points<T: Float>() -> Vec<[T; DIM]> {
    let levels: Vec<T> = GRID_LEVELS.iter().map(|&v| T::from(v).unwrap()).collect();
    let mut points = Vec::with_capacity(levels.len().pow(DIM as u32));
    for &a in &levels {
        for &b in &levels {
            for &g in &levels {
                points.push([a, b, g]);
            }
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bowl(p: [f64; DIM]) -> f64 {
        (p[0] - 0.7).powi(2) + (p[1] - 0.2).powi(2) + (p[2] - 0.4).powi(2)
    }

    #[test]
    fn finds_interior_minimum() {
        let out = minimize(&bowl, &OptimizerConfig::default());
        assert!(out.converged);
        assert!((out.point[0] - 0.7).abs() < 1e-3);
        assert!((out.point[1] - 0.2).abs() < 1e-3);
        assert!((out.point[2] - 0.4).abs() < 1e-3);
    }

    #[test]
    fn respects_bounds() {
        let edge = |p: [f64; DIM]| p[0] + p[1] + p[2];
        let config = OptimizerConfig::default();
        let out = minimize(&edge, &config);
        for x in out.point {
            assert!(x >= config.lower && x <= config.upper);
        }
        assert!(out.point[0] < 0.01);
    }

    #[test]
    fn iteration_cap_reports_not_converged() {
        let config = OptimizerConfig {
            max_iterations: 2,
            extra_starts: 0,
            ..OptimizerConfig::default()
        };
        let out = minimize(&bowl, &config);
        assert!(!out.converged);
        assert_eq!(out.iterations, 2);
    }

    #[test]
    fn nan_objective_ranks_worst() {
        assert_eq!(compare(f64::NAN, 1.0), Ordering::Greater);
        assert_eq!(sanitize(f64::NAN), f64::INFINITY);
    }
}
