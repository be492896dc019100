//! Strategy dispatch.
//!
//! One entry point, [`run_optimization`], validates the input, routes it to
//! the chosen solver, and aggregates the raw selection into a
//! [`crate::solution::Summary`]. The single documented recovery path lives
//! here: an exact-solver failure falls back to the greedy heuristic.

mod engine;

pub use engine::{run_optimization, Algorithm, OptimizationOutcome};
