//! 0/1 knapsack optimization engine.
//!
//! Given a catalog of items — each with a weight, a value, and a cached
//! value/weight ratio — select a subset whose total weight stays within a
//! capacity while maximizing total value. Three interchangeable strategies
//! are provided behind a single dispatch contract:
//!
//! - **Exact**: a binary integer program (one 0/1 variable per item, a
//!   single weight constraint) delegated to an external
//!   mathematical-programming backend through the [`exact::MipBackend`]
//!   adapter trait.
//! - **Greedy**: ratio-descending scan, deterministic, never fails. Doubles
//!   as the fallback when the exact backend is missing or misbehaves.
//! - **Genetic**: population-based bit-vector search with elitism,
//!   tournament selection, single-point crossover, and bitwise mutation.
//!
//! The [`dispatch`] module routes a request to one strategy and aggregates
//! the raw selection into a [`solution::Summary`]. When the exact backend
//! reports a failure, the dispatcher transparently reruns the greedy
//! heuristic and reports `algorithm = greedy` in the summary — the caller
//! always receives a feasible answer, never an optimality error.
//!
//! # Reproducibility
//!
//! Every stochastic operation (catalog generation, genetic initialization,
//! selection, crossover, mutation) draws from an explicit RNG: either a
//! `&mut impl Rng` argument or a `seed` carried in the configuration. A
//! fixed seed reproduces a run bit-for-bit.
//!
//! # Example
//!
//! ```
//! use knapsack_optim::catalog::Item;
//! use knapsack_optim::dispatch::{run_optimization, Algorithm};
//! use knapsack_optim::exact::NoBackend;
//! use knapsack_optim::ga::GaConfig;
//!
//! let items = vec![
//!     Item::new(1, "Item_1", 2.0, 3.0),
//!     Item::new(2, "Item_2", 3.0, 4.0),
//!     Item::new(3, "Item_3", 4.0, 5.0),
//! ];
//!
//! // Greedy never needs a backend; `NoBackend` stands in for "not installed".
//! let outcome = run_optimization(
//!     &items,
//!     5.0,
//!     Algorithm::Greedy,
//!     &NoBackend,
//!     &GaConfig::default(),
//! )
//! .unwrap();
//!
//! assert!(outcome.selection.total_weight <= 5.0);
//! assert_eq!(outcome.summary.total_value, 7.0);
//! ```

pub mod catalog;
pub mod dispatch;
pub mod exact;
pub mod ga;
pub mod greedy;
pub mod report;
pub mod solution;
