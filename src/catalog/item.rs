//! The `Item` record and input validation.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Invalid input, rejected before any solver runs.
///
/// None of these are retried: the caller fixed the input or nothing happens.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// Item weight must be strictly positive (zero-weight items would make
    /// the greedy ratio undefined and the capacity bound vacuous).
    #[error("item {id} has non-positive weight {weight}")]
    NonPositiveWeight { id: u32, weight: f64 },

    /// Item value must be non-negative.
    #[error("item {id} has negative value {value}")]
    NegativeValue { id: u32, value: f64 },

    /// Item ids must be unique within one catalog.
    #[error("duplicate item id {id}")]
    DuplicateId { id: u32 },

    /// Capacity must be non-negative.
    #[error("capacity must be non-negative, got {capacity}")]
    NegativeCapacity { capacity: f64 },

    /// Algorithm name is empty or not one of `exact`, `greedy`, `genetic`.
    #[error("unknown algorithm {name:?}")]
    UnknownAlgorithm { name: String },
}

/// One knapsack item.
///
/// Immutable once created. `ratio` is a derived, cached field with the
/// invariant `ratio == value / weight`; [`Item::new`] is the only place it
/// is computed.
///
/// # Examples
///
/// ```
/// use knapsack_optim::catalog::Item;
///
/// let item = Item::new(1, "Item_1", 4.0, 6.0);
/// assert_eq!(item.ratio, 1.5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique 1-based identifier.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Weight, strictly positive for valid items.
    pub weight: f64,
    /// Value, non-negative for valid items.
    pub value: f64,
    /// Cached `value / weight`.
    pub ratio: f64,
}

impl Item {
    /// Creates an item, computing the cached ratio.
    ///
    /// Validity (positive weight, non-negative value) is not enforced here;
    /// it is checked once per run by [`validate_items`] so that malformed
    /// input is rejected with a descriptive [`InputError`] instead of a
    /// panic deep inside a solver.
    pub fn new(id: u32, name: impl Into<String>, weight: f64, value: f64) -> Self {
        Self {
            id,
            name: name.into(),
            weight,
            value,
            ratio: value / weight,
        }
    }
}

/// Validates a catalog before any solver runs.
///
/// Checks, in order per item: finite strictly-positive weight, finite
/// non-negative value, unique id. The first violation is returned.
pub fn validate_items(items: &[Item]) -> Result<(), InputError> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !item.weight.is_finite() || item.weight <= 0.0 {
            return Err(InputError::NonPositiveWeight {
                id: item.id,
                weight: item.weight,
            });
        }
        if !item.value.is_finite() || item.value < 0.0 {
            return Err(InputError::NegativeValue {
                id: item.id,
                value: item.value,
            });
        }
        if !seen.insert(item.id) {
            return Err(InputError::DuplicateId { id: item.id });
        }
    }
    Ok(())
}
