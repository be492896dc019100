//! Result aggregation: the summary every strategy reports through.

use super::selection::SelectionResult;
use crate::dispatch::Algorithm;
use serde::{Deserialize, Serialize};

/// Derived, read-only view over a [`SelectionResult`].
///
/// Totals are rounded to two decimals for reporting; the unrounded sums
/// stay on the [`SelectionResult`]. The `algorithm` field names the
/// strategy that actually produced the result — after an exact-solver
/// fallback it reads `greedy` even though `exact` was requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Total value of the selection, rounded to two decimals.
    pub total_value: f64,
    /// Total weight of the selection, rounded to two decimals.
    pub total_weight: f64,
    /// Capacity utilization in percent (`total_weight / capacity * 100`,
    /// 0 when capacity is 0), rounded to two decimals.
    pub efficiency: f64,
    /// Strategy that produced the result.
    pub algorithm: Algorithm,
    /// Human-readable `"{total_weight:.1}/{capacity}"`.
    pub capacity_used: String,
    /// Number of selected items.
    pub num_selected: usize,
}

impl Summary {
    /// Aggregates a raw selection into a summary.
    pub fn build(selection: &SelectionResult, algorithm: Algorithm, capacity: f64) -> Self {
        let efficiency = if capacity > 0.0 {
            selection.total_weight / capacity * 100.0
        } else {
            0.0
        };
        Self {
            total_value: round2(selection.total_value),
            total_weight: round2(selection.total_weight),
            efficiency: round2(efficiency),
            algorithm,
            capacity_used: format!("{:.1}/{}", selection.total_weight, capacity),
            num_selected: selection.num_selected(),
        }
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
