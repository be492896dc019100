//! Chromosome representation and fitness.

use crate::catalog::Item;
use rand::Rng;

/// One candidate selection: a fixed-length bit vector over the catalog,
/// bit `i` meaning "item `i` selected".
#[derive(Debug, Clone, PartialEq)]
pub struct Chromosome {
    /// Selection bits, parallel to the item catalog.
    pub bits: Vec<bool>,
    /// Cached fitness, set by evaluation.
    pub fitness: f64,
}

impl Chromosome {
    /// Creates a random chromosome: each bit an independent fair coin.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        Self {
            bits: (0..n).map(|_| rng.random_bool(0.5)).collect(),
            fitness: 0.0,
        }
    }

    /// Fitness under the hard capacity penalty.
    ///
    /// Total selected value when the selected weight fits the capacity,
    /// otherwise 0 — infeasible individuals compete but never win against
    /// any feasible non-empty one.
    pub fn evaluate(&self, items: &[Item], capacity: f64) -> f64 {
        let mut total_weight = 0.0;
        let mut total_value = 0.0;
        for (item, &bit) in items.iter().zip(&self.bits) {
            if bit {
                total_weight += item.weight;
                total_value += item.value;
            }
        }
        if total_weight <= capacity {
            total_value
        } else {
            0.0
        }
    }

    /// The items this chromosome selects, in catalog order.
    pub fn decode(&self, items: &[Item]) -> Vec<Item> {
        items
            .iter()
            .zip(&self.bits)
            .filter(|(_, &bit)| bit)
            .map(|(item, _)| item.clone())
            .collect()
    }
}
