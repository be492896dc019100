//! Genetic solver.
//!
//! Bit-vector chromosomes over the item catalog, evolved with elitism,
//! tournament selection, single-point crossover, and bitwise mutation.
//! Infeasible individuals compete at zero fitness — no repair, no partial
//! credit — so the decoded result is always within capacity.
//!
//! # Key Types
//!
//! - [`GaConfig`]: population size, generation count, operator rates, seed
//! - [`solve_genetic`]: runs the evolutionary loop
//! - [`GaResult`]: decoded selection plus per-generation statistics
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*

mod config;
mod runner;
mod types;

pub use config::GaConfig;
pub use runner::{solve_genetic, GaResult};
pub use types::Chromosome;
