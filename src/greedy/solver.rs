//! Ratio-descending admit-if-it-fits scan.

use crate::catalog::Item;
use crate::solution::SelectionResult;

/// Solves the knapsack greedily by value/weight ratio.
///
/// Items are stable-sorted by ratio descending — ties keep the original
/// input order, so the heuristic is deterministic for a fixed catalog —
/// then scanned once, admitting an item iff it still fits. O(n log n).
///
/// This is an approximation with no exchange or repair step; its job is to
/// be cheap, total, and feasible. `total_weight <= capacity` holds by
/// construction, and the function never fails.
///
/// # Examples
///
/// ```
/// use knapsack_optim::catalog::Item;
/// use knapsack_optim::greedy::solve_greedy;
///
/// let items = vec![
///     Item::new(1, "Item_1", 2.0, 3.0),
///     Item::new(2, "Item_2", 3.0, 4.0),
///     Item::new(3, "Item_3", 4.0, 5.0),
/// ];
/// let result = solve_greedy(&items, 5.0);
/// assert_eq!(result.total_weight, 5.0);
/// assert_eq!(result.total_value, 7.0);
/// ```
pub fn solve_greedy(items: &[Item], capacity: f64) -> SelectionResult {
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| items[b].ratio.total_cmp(&items[a].ratio));

    let mut selected = Vec::new();
    let mut total_weight = 0.0;
    for idx in order {
        let item = &items[idx];
        if total_weight + item.weight <= capacity {
            total_weight += item.weight;
            selected.push(item.clone());
        }
    }
    SelectionResult::from_items(selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_items() -> Vec<Item> {
        vec![
            Item::new(1, "Item_1", 2.0, 3.0),
            Item::new(2, "Item_2", 3.0, 4.0),
            Item::new(3, "Item_3", 4.0, 5.0),
            Item::new(4, "Item_4", 5.0, 6.0),
        ]
    }

    #[test]
    fn test_scenario_capacity_five() {
        // Ratios 1.5, 1.33, 1.25, 1.2 -> items 1 and 2 fill the sack exactly.
        let result = solve_greedy(&scenario_items(), 5.0);
        let ids: Vec<u32> = result.selected_items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(result.total_weight, 5.0);
        assert_eq!(result.total_value, 7.0);
    }

    #[test]
    fn test_capacity_bound() {
        let result = solve_greedy(&scenario_items(), 8.0);
        assert!(result.total_weight <= 8.0);
    }

    #[test]
    fn test_deterministic() {
        let items = scenario_items();
        assert_eq!(solve_greedy(&items, 9.0), solve_greedy(&items, 9.0));
    }

    #[test]
    fn test_ratio_ties_keep_input_order() {
        // Both ratio 1.0; only one fits. The earlier item wins.
        let items = vec![
            Item::new(1, "Item_1", 3.0, 3.0),
            Item::new(2, "Item_2", 3.0, 3.0),
        ];
        let result = solve_greedy(&items, 3.0);
        assert_eq!(result.selected_items.len(), 1);
        assert_eq!(result.selected_items[0].id, 1);
    }

    #[test]
    fn test_skips_too_heavy_then_admits_lighter() {
        // Highest ratio item does not fit; the scan continues past it.
        let items = vec![
            Item::new(1, "Item_1", 10.0, 100.0),
            Item::new(2, "Item_2", 4.0, 8.0),
        ];
        let result = solve_greedy(&items, 5.0);
        let ids: Vec<u32> = result.selected_items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_empty_catalog() {
        let result = solve_greedy(&[], 10.0);
        assert_eq!(result, SelectionResult::empty());
    }

    #[test]
    fn test_zero_capacity() {
        let result = solve_greedy(&scenario_items(), 0.0);
        assert_eq!(result.num_selected(), 0);
        assert_eq!(result.total_weight, 0.0);
    }
}
