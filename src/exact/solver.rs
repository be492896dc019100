//! Exact solve: formulate, delegate, re-match.

use super::backend::{BackendConfig, MipBackend, SolverError};
use super::model::MipModel;
use crate::catalog::Item;
use crate::solution::SelectionResult;
use log::debug;
use std::collections::HashMap;

/// Solves the knapsack exactly through the given backend.
///
/// Builds the binary-program formulation, hands it to the backend, and maps
/// the returned assignment back onto the original [`Item`] records by id —
/// never by re-deriving weights or values from solver numerics, which may
/// carry floating-point drift.
///
/// Any backend failure is returned as-is; this function performs no retry
/// and no fallback.
pub fn solve_exact<B: MipBackend>(
    items: &[Item],
    capacity: f64,
    backend: &B,
    config: &BackendConfig,
) -> Result<SelectionResult, SolverError> {
    let model = MipModel::from_items(items, capacity);
    debug!(
        "exact solve: {} vars, bound {}, backend {}",
        model.num_vars(),
        model.bound,
        backend.name()
    );

    let assignment = backend.optimize(&model, config)?;
    if assignment.len() != model.num_vars() {
        return Err(SolverError::NonOptimal(format!(
            "backend returned {} assignments for {} variables",
            assignment.len(),
            model.num_vars()
        )));
    }

    let by_id: HashMap<u32, &Item> = items.iter().map(|i| (i.id, i)).collect();
    let selected = model
        .item_ids
        .iter()
        .zip(&assignment)
        .filter(|(_, &taken)| taken)
        .map(|(id, _)| (*by_id[id]).clone())
        .collect();

    Ok(SelectionResult::from_items(selected))
}
