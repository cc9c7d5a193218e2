//! Greedy knapsack picking.
//!
//! Items are considered in a fixed priority order and added whenever they
//! still fit. The tour is irrelevant to these builders; only the knapsack is.

use std::cmp::Ordering;

use crate::models::{Instance, Item};

/// Item indices in descending profit/weight ratio, ties by ascending index.
///
/// Weightless items with positive profit come first; weightless items
/// without profit are left out entirely.
///
/// # Examples
///
/// ```
/// use u_ttp::models::Item;
/// use u_ttp::picking::ratio_order;
///
/// let items = vec![
///     Item::new(10, 5, 0), // 2.0
///     Item::new(9, 3, 0),  // 3.0
///     Item::new(1, 0, 0),  // weightless
///     Item::new(0, 0, 0),  // worthless
///     Item::new(4, 2, 0),  // 2.0
/// ];
/// assert_eq!(ratio_order(&items), vec![2, 1, 0, 4]);
/// ```
pub fn ratio_order(items: &[Item]) -> Vec<usize> {
    let mut ranked: Vec<(usize, f64)> = items
        .iter()
        .enumerate()
        .filter_map(|(idx, item)| item.ratio().map(|r| (idx, r)))
        .collect();
    // Stable sort keeps ascending index among equal ratios.
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    ranked.into_iter().map(|(idx, _)| idx).collect()
}

/// Fills the knapsack greedily by profit/weight ratio.
///
/// # Examples
///
/// ```
/// use u_ttp::models::{City, Instance, Item};
/// use u_ttp::picking::greedy_picking;
///
/// let cities = vec![City::new(0.0, 0.0), City::new(3.0, 4.0)];
/// let items = vec![Item::new(10, 6, 1), Item::new(9, 3, 1), Item::new(4, 4, 1)];
/// let instance = Instance::from_cities(cities, items, 8, 0.1, 1.0, 1.0).unwrap();
///
/// // ratios 1.67, 3.0, 1.0: take item 1 (3), then item 0 would need 9 > 8, item 2 fits (7)
/// assert_eq!(greedy_picking(&instance), vec![false, true, true]);
/// ```
pub fn greedy_picking(instance: &Instance) -> Vec<bool> {
    bounded_greedy_picking(instance, instance.capacity())
}

/// Ratio greedy fill limited to `target` weight.
///
/// The true knapsack capacity is checked as well, so an oversized target can
/// never produce an infeasible plan.
pub fn bounded_greedy_picking(instance: &Instance, target: u64) -> Vec<bool> {
    fill_in_order(instance, &ratio_order(instance.items()), target)
}

/// Fills the knapsack by descending absolute profit, ties by ascending index.
pub fn profit_picking(instance: &Instance) -> Vec<bool> {
    let mut order: Vec<usize> = (0..instance.num_items()).collect();
    order.sort_by(|&a, &b| instance.items()[b].profit().cmp(&instance.items()[a].profit()));
    fill_in_order(instance, &order, instance.capacity())
}

fn fill_in_order(instance: &Instance, order: &[usize], target: u64) -> Vec<bool> {
    let capacity = instance.capacity();
    let mut picking = vec![false; instance.num_items()];
    let mut current_weight: u64 = 0;

    for &idx in order {
        let next = current_weight + instance.items()[idx].weight();
        if next <= target && next <= capacity {
            picking[idx] = true;
            current_weight = next;
        }
    }

    picking
}
