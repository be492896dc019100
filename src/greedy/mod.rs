//! Greedy ratio heuristic.
//!
//! The always-available strategy, and the fallback target when the exact
//! backend fails.

mod solver;

pub use solver::solve_greedy;
