//! Uniform random catalog generation.

use super::item::Item;
use rand::Rng;

/// Parameters for random catalog generation.
///
/// Weights are drawn uniformly from `1..=max_weight`, values from
/// `1..=max_value`, both stored as `f64`. Integer draws keep generated
/// catalogs easy to reason about in tests and reports.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of items to generate.
    pub num_items: usize,
    /// Upper bound (inclusive) for item weight.
    pub max_weight: u32,
    /// Upper bound (inclusive) for item value.
    pub max_value: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_items: 100,
            max_weight: 50,
            max_value: 100,
        }
    }
}

impl GeneratorConfig {
    /// Sets the number of items.
    pub fn with_num_items(mut self, n: usize) -> Self {
        self.num_items = n;
        self
    }

    /// Sets the maximum item weight (clamped to at least 1).
    pub fn with_max_weight(mut self, w: u32) -> Self {
        self.max_weight = w.max(1);
        self
    }

    /// Sets the maximum item value (clamped to at least 1).
    pub fn with_max_value(mut self, v: u32) -> Self {
        self.max_value = v.max(1);
        self
    }
}

/// Generates a random item catalog.
///
/// Ids are 1-based and sequential, names are `Item_{id}`. The RNG is
/// explicit: pass a seeded generator for a reproducible catalog.
///
/// # Examples
///
/// ```
/// use knapsack_optim::catalog::{generate_items, GeneratorConfig};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let config = GeneratorConfig::default().with_num_items(10);
/// let items = generate_items(&config, &mut StdRng::seed_from_u64(42));
///
/// assert_eq!(items.len(), 10);
/// assert_eq!(items[0].id, 1);
/// assert!(items.iter().all(|i| i.weight >= 1.0 && i.value >= 1.0));
/// ```
pub fn generate_items<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> Vec<Item> {
    (0..config.num_items)
        .map(|i| {
            let id = (i + 1) as u32;
            let weight = rng.random_range(1..=config.max_weight) as f64;
            let value = rng.random_range(1..=config.max_value) as f64;
            Item::new(id, format!("Item_{id}"), weight, value)
        })
        .collect()
}
