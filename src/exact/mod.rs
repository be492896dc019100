//! Exact solver: binary integer programming through a pluggable backend.
//!
//! The crate formulates the knapsack as a binary program ([`MipModel`]) and
//! delegates the actual solve to an external mathematical-programming
//! capability behind the [`MipBackend`] trait. No backend is implemented
//! here — adapters wrap whatever solver is installed, and tests inject
//! deterministic fakes.

mod backend;
mod model;
mod solver;

pub use backend::{BackendConfig, MipBackend, NoBackend, SolverError};
pub use model::MipModel;
pub use solver::solve_exact;
