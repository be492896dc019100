//! Validation, routing, and the exact→greedy fallback.

use crate::catalog::{validate_items, InputError, Item};
use crate::exact::{solve_exact, BackendConfig, MipBackend};
use crate::ga::{solve_genetic, GaConfig};
use crate::greedy::solve_greedy;
use crate::solution::{SelectionResult, Summary};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three solving strategies.
///
/// Serializes as the lowercase name (`"exact"`, `"greedy"`, `"genetic"`),
/// which is also what [`FromStr`] parses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Binary integer program through an external backend.
    Exact,
    /// Ratio-descending heuristic.
    Greedy,
    /// Evolutionary bit-vector search.
    Genetic,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Exact => "exact",
            Algorithm::Greedy => "greedy",
            Algorithm::Genetic => "genetic",
        };
        f.write_str(name)
    }
}

impl FromStr for Algorithm {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exact" => Ok(Algorithm::Exact),
            "greedy" => Ok(Algorithm::Greedy),
            "genetic" => Ok(Algorithm::Genetic),
            other => Err(InputError::UnknownAlgorithm { name: other.into() }),
        }
    }
}

/// What one optimization run hands back: the raw selection and its summary.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationOutcome {
    /// Raw solver output.
    pub selection: SelectionResult,
    /// Derived summary. `summary.algorithm` names the strategy that
    /// actually ran — after a fallback it differs from the requested one.
    pub summary: Summary,
}

/// Runs one optimization: validate, route, aggregate.
///
/// Input validation happens before any solver runs; invalid items, a
/// negative capacity, or an unknown algorithm name are rejected with
/// [`InputError`] and nothing is solved.
///
/// If the exact backend reports any [`SolverError`], the dispatcher logs a
/// warning, reruns the greedy heuristic, and reports `algorithm = greedy`
/// in the summary. The caller always gets a feasible answer; a requested
/// `exact` that came back labeled `greedy` is the only trace of the
/// downgrade. No other strategy has a fallback.
///
/// Beyond that one recovery path this is a pure function of its inputs:
/// no state is held across calls.
pub fn run_optimization<B: MipBackend>(
    items: &[Item],
    capacity: f64,
    algorithm: Algorithm,
    backend: &B,
    ga_config: &GaConfig,
) -> Result<OptimizationOutcome, InputError> {
    validate_items(items)?;
    if !(capacity >= 0.0) {
        return Err(InputError::NegativeCapacity { capacity });
    }

    debug!(
        "dispatch: {} over {} items, capacity {capacity}",
        algorithm,
        items.len()
    );

    let (selection, ran) = match algorithm {
        Algorithm::Greedy => (solve_greedy(items, capacity), Algorithm::Greedy),
        Algorithm::Genetic => (
            solve_genetic(items, capacity, ga_config).selection,
            Algorithm::Genetic,
        ),
        Algorithm::Exact => {
            match solve_exact(items, capacity, backend, &BackendConfig::default()) {
                Ok(selection) => (selection, Algorithm::Exact),
                Err(err) => {
                    warn!("exact solve failed ({err}), falling back to greedy");
                    (solve_greedy(items, capacity), Algorithm::Greedy)
                }
            }
        }
    };

    let summary = Summary::build(&selection, ran, capacity);
    Ok(OptimizationOutcome { selection, summary })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exact::{MipModel, NoBackend, SolverError};

    /// Deterministic dynamic-programming backend: exact for the
    /// integer-valued weights these tests use.
    struct DpBackend;

    impl MipBackend for DpBackend {
        fn name(&self) -> &str {
            "dp-test"
        }

        fn optimize(
            &self,
            model: &MipModel,
            _config: &BackendConfig,
        ) -> Result<Vec<bool>, SolverError> {
            let n = model.num_vars();
            let cap = model.bound.max(0.0) as usize;
            let weights: Vec<usize> = model.weights.iter().map(|&w| w as usize).collect();

            let mut best = vec![vec![0.0f64; cap + 1]; n + 1];
            for i in 0..n {
                for c in 0..=cap {
                    best[i + 1][c] = best[i][c];
                    if weights[i] <= c {
                        let take = best[i][c - weights[i]] + model.objective[i];
                        if take > best[i + 1][c] {
                            best[i + 1][c] = take;
                        }
                    }
                }
            }

            let mut assignment = vec![false; n];
            let mut c = cap;
            for i in (0..n).rev() {
                if best[i + 1][c] != best[i][c] {
                    assignment[i] = true;
                    c -= weights[i];
                }
            }
            Ok(assignment)
        }
    }

    fn scenario_items() -> Vec<Item> {
        vec![
            Item::new(1, "Item_1", 2.0, 3.0),
            Item::new(2, "Item_2", 3.0, 4.0),
            Item::new(3, "Item_3", 4.0, 5.0),
            Item::new(4, "Item_4", 5.0, 6.0),
        ]
    }

    fn ga() -> GaConfig {
        GaConfig::default().with_seed(42)
    }

    #[test]
    fn test_algorithm_round_trip() {
        for (name, algorithm) in [
            ("exact", Algorithm::Exact),
            ("greedy", Algorithm::Greedy),
            ("genetic", Algorithm::Genetic),
        ] {
            assert_eq!(name.parse::<Algorithm>().unwrap(), algorithm);
            assert_eq!(algorithm.to_string(), name);
        }
    }

    #[test]
    fn test_empty_algorithm_name_rejected() {
        assert_eq!(
            "".parse::<Algorithm>(),
            Err(InputError::UnknownAlgorithm { name: String::new() })
        );
        assert!("simplex".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_exact_scenario() {
        let outcome =
            run_optimization(&scenario_items(), 5.0, Algorithm::Exact, &DpBackend, &ga())
                .unwrap();
        assert_eq!(outcome.summary.algorithm, Algorithm::Exact);
        assert_eq!(outcome.summary.total_value, 7.0);
        assert_eq!(outcome.summary.total_weight, 5.0);
        assert_eq!(outcome.summary.num_selected, 2);
    }

    #[test]
    fn test_exact_fallback_reports_greedy() {
        // The observable trace of the downgrade is the algorithm field.
        let outcome =
            run_optimization(&scenario_items(), 5.0, Algorithm::Exact, &NoBackend, &ga())
                .unwrap();
        assert_eq!(outcome.summary.algorithm, Algorithm::Greedy);
        // Still a valid, feasible result.
        assert!(outcome.selection.total_weight <= 5.0);
        assert_eq!(outcome.summary.total_value, 7.0);
    }

    #[test]
    fn test_fallback_matches_direct_greedy() {
        let fallback =
            run_optimization(&scenario_items(), 9.0, Algorithm::Exact, &NoBackend, &ga())
                .unwrap();
        let direct =
            run_optimization(&scenario_items(), 9.0, Algorithm::Greedy, &NoBackend, &ga())
                .unwrap();
        assert_eq!(fallback, direct);
    }

    #[test]
    fn test_exact_dominates_greedy() {
        // Greedy fills with ratio order and can strand capacity; exact
        // must never return less total value.
        for cap in [3.0, 5.0, 7.0, 9.0, 12.0, 14.0] {
            let exact =
                run_optimization(&scenario_items(), cap, Algorithm::Exact, &DpBackend, &ga())
                    .unwrap();
            let greedy =
                run_optimization(&scenario_items(), cap, Algorithm::Greedy, &NoBackend, &ga())
                    .unwrap();
            assert!(
                exact.selection.total_value >= greedy.selection.total_value,
                "capacity {cap}: exact {} < greedy {}",
                exact.selection.total_value,
                greedy.selection.total_value
            );
        }
    }

    #[test]
    fn test_genetic_route() {
        let outcome =
            run_optimization(&scenario_items(), 5.0, Algorithm::Genetic, &NoBackend, &ga())
                .unwrap();
        assert_eq!(outcome.summary.algorithm, Algorithm::Genetic);
        assert!(outcome.selection.total_weight <= 5.0);
    }

    #[test]
    fn test_empty_catalog_all_algorithms() {
        for algorithm in [Algorithm::Exact, Algorithm::Greedy, Algorithm::Genetic] {
            let outcome = run_optimization(&[], 10.0, algorithm, &DpBackend, &ga()).unwrap();
            assert_eq!(outcome.summary.total_value, 0.0);
            assert_eq!(outcome.summary.total_weight, 0.0);
            assert_eq!(outcome.summary.num_selected, 0);
        }
    }

    #[test]
    fn test_zero_capacity_all_algorithms() {
        for algorithm in [Algorithm::Exact, Algorithm::Greedy, Algorithm::Genetic] {
            let outcome =
                run_optimization(&scenario_items(), 0.0, algorithm, &DpBackend, &ga()).unwrap();
            assert_eq!(outcome.selection.num_selected(), 0);
            assert_eq!(outcome.summary.efficiency, 0.0);
        }
    }

    #[test]
    fn test_invalid_items_rejected_before_solving() {
        let items = vec![Item::new(1, "Item_1", 0.0, 3.0)];
        let err = run_optimization(&items, 5.0, Algorithm::Greedy, &NoBackend, &ga())
            .unwrap_err();
        assert!(matches!(err, InputError::NonPositiveWeight { id: 1, .. }));
    }

    #[test]
    fn test_negative_capacity_rejected() {
        let err = run_optimization(&scenario_items(), -1.0, Algorithm::Greedy, &NoBackend, &ga())
            .unwrap_err();
        assert_eq!(err, InputError::NegativeCapacity { capacity: -1.0 });
    }

    #[test]
    fn test_nan_capacity_rejected() {
        let err = run_optimization(
            &scenario_items(),
            f64::NAN,
            Algorithm::Greedy,
            &NoBackend,
            &ga(),
        )
        .unwrap_err();
        assert!(matches!(err, InputError::NegativeCapacity { .. }));
    }
}
