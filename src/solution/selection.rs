//! Raw solver output.

use crate::catalog::Item;
use serde::{Deserialize, Serialize};

/// The raw answer of one solver invocation.
///
/// `selected_items` holds full copies of the chosen [`Item`] records (no
/// duplicates; order is strategy-dependent). Every strategy guarantees
/// `total_weight <= capacity` on the result it returns — the genetic solver
/// may score infeasible candidates internally, but never decodes one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionResult {
    /// Chosen items, strategy-dependent order.
    pub selected_items: Vec<Item>,
    /// Sum of selected weights.
    pub total_weight: f64,
    /// Sum of selected values.
    pub total_value: f64,
}

impl SelectionResult {
    /// The empty selection: nothing chosen, zero totals.
    pub fn empty() -> Self {
        Self {
            selected_items: Vec::new(),
            total_weight: 0.0,
            total_value: 0.0,
        }
    }

    /// Builds a selection from the chosen items, summing the totals.
    pub fn from_items(selected_items: Vec<Item>) -> Self {
        let total_weight = selected_items.iter().map(|i| i.weight).sum();
        let total_value = selected_items.iter().map(|i| i.value).sum();
        Self {
            selected_items,
            total_weight,
            total_value,
        }
    }

    /// Number of selected items.
    pub fn num_selected(&self) -> usize {
        self.selected_items.len()
    }
}
