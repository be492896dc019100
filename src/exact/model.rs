//! Binary integer program formulation.

use crate::catalog::Item;

/// The knapsack as a binary program.
///
/// One 0/1 decision variable per item; objective `maximize Σ value_i·x_i`;
/// single constraint `Σ weight_i·x_i <= bound`. `item_ids` records which
/// item each variable stands for, so a backend assignment can be re-matched
/// to the original [`Item`] records by identity instead of re-deriving
/// numeric fields from solver output.
#[derive(Debug, Clone, PartialEq)]
pub struct MipModel {
    /// Item id behind each decision variable, in variable order.
    pub item_ids: Vec<u32>,
    /// Objective coefficients (item values), parallel to `item_ids`.
    pub objective: Vec<f64>,
    /// Constraint coefficients (item weights), parallel to `item_ids`.
    pub weights: Vec<f64>,
    /// Right-hand side of the weight constraint (the capacity).
    pub bound: f64,
}

impl MipModel {
    /// Builds the formulation for a catalog and capacity.
    pub fn from_items(items: &[Item], capacity: f64) -> Self {
        Self {
            item_ids: items.iter().map(|i| i.id).collect(),
            objective: items.iter().map(|i| i.value).collect(),
            weights: items.iter().map(|i| i.weight).collect(),
            bound: capacity,
        }
    }

    /// Number of decision variables.
    pub fn num_vars(&self) -> usize {
        self.item_ids.len()
    }
}
