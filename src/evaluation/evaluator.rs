//! TTP objective evaluator.
//!
//! # Model
//!
//! The thief walks the tour as a cycle starting at `tour[0]`. Items at a city
//! are loaded on arrival (items at the start city before departure), and the
//! speed on each edge depends on the weight carried when leaving:
//!
//! ```text
//! v(w) = max(v_min, v_max - nu * w),   nu = (v_max - v_min) / W
//! objective = profit - R * sum(d(edge) / v(w_edge))
//! ```
//!
//! # Complexity
//!
//! O(n + m): picked weight is bucketed per city once, then the tour is walked.

use crate::models::{Evaluation, Instance};

/// Objective reported for a picking plan heavier than the knapsack capacity.
pub const INFEASIBLE_OBJECTIVE: f64 = -1e9;

/// Travel time reported for a picking plan heavier than the knapsack capacity.
pub const INFEASIBLE_TIME: f64 = 1e9;

/// Evaluates a (tour, picking plan) pair.
///
/// Over-capacity plans short-circuit to the [`INFEASIBLE_OBJECTIVE`] and
/// [`INFEASIBLE_TIME`] sentinels without walking the tour, so search
/// operators reject them through ordinary "not improved" comparisons.
///
/// Missing picking flags (a plan shorter than the item list) count as
/// not picked.
///
/// # Examples
///
/// ```
/// use u_ttp::models::{City, Instance, Item};
/// use u_ttp::evaluation::evaluate;
///
/// let cities = vec![City::new(0.0, 0.0), City::new(0.0, 3.0), City::new(4.0, 0.0)];
/// let instance = Instance::from_cities(cities, vec![Item::new(20, 5, 2)], 10, 0.1, 1.0, 1.0).unwrap();
///
/// let eval = evaluate(&instance, &[0, 1, 2], &[true]);
/// assert_eq!(eval.profit, 20);
/// assert_eq!(eval.weight, 5);
/// // 3 + 5 at full speed, then 4 / 0.55 carrying the item home
/// assert!((eval.time - (8.0 + 4.0 / 0.55)).abs() < 1e-9);
/// assert!((eval.objective - (20.0 - eval.time)).abs() < 1e-9);
/// ```
pub fn evaluate(instance: &Instance, tour: &[usize], picking: &[bool]) -> Evaluation {
    let (profit, weight) = picked_totals(instance, picking);

    if weight > instance.capacity() {
        return Evaluation {
            profit,
            weight,
            time: INFEASIBLE_TIME,
            objective: INFEASIBLE_OBJECTIVE,
        };
    }

    let mut weight_at = vec![0u64; instance.dimension()];
    for (item, _) in instance
        .items()
        .iter()
        .zip(picking)
        .filter(|(_, &picked)| picked)
    {
        weight_at[item.city()] += item.weight();
    }

    let nu = instance.speed_coefficient();
    let max_speed = instance.max_speed();
    let min_speed = instance.min_speed();

    let mut time = 0.0;
    if let Some(&start) = tour.first() {
        let mut current_weight = weight_at[start];
        for (i, &from) in tour.iter().enumerate() {
            let to = tour[(i + 1) % tour.len()];
            let velocity = (max_speed - nu * current_weight as f64).max(min_speed);
            time += instance.distance(from, to) / velocity;
            current_weight += weight_at[to];
        }
    }

    Evaluation {
        profit,
        weight,
        time,
        objective: profit as f64 - time * instance.renting_ratio(),
    }
}

/// Returns `(profit, weight)` summed over the picked items.
pub fn picked_totals(instance: &Instance, picking: &[bool]) -> (u64, u64) {
    instance
        .items()
        .iter()
        .zip(picking)
        .filter(|(_, &picked)| picked)
        .fold((0, 0), |(p, w), (item, _)| (p + item.profit(), w + item.weight()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::models::{City, Item};

    fn worked_example() -> Instance {
        let cities = vec![City::new(0.0, 0.0), City::new(0.0, 3.0), City::new(4.0, 0.0)];
        Instance::from_cities(cities, vec![Item::new(20, 5, 2)], 10, 0.1, 1.0, 1.0).expect("valid")
    }

    #[test]
    fn test_worked_example() {
        let inst = worked_example();
        let eval = evaluate(&inst, &[0, 1, 2], &[true]);
        assert_eq!(eval.profit, 20);
        assert_eq!(eval.weight, 5);
        assert!((eval.time - 15.272727).abs() < 1e-5);
        assert!((eval.objective - 4.727272).abs() < 1e-5);
    }

    #[test]
    fn test_deterministic() {
        let inst = worked_example();
        let a = evaluate(&inst, &[0, 2, 1], &[true]);
        let b = evaluate(&inst, &[0, 2, 1], &[true]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_no_pick_baseline() {
        let inst = worked_example();
        let eval = evaluate(&inst, &[0, 1, 2], &[false]);
        assert_eq!(eval.profit, 0);
        assert_eq!(eval.weight, 0);
        // tour length 12 at max speed 1
        assert!((eval.time - 12.0).abs() < 1e-12);
        assert!((eval.objective + 12.0).abs() < 1e-12);
    }

    #[test]
    fn test_items_at_start_city_count_immediately() {
        let cities = vec![City::new(0.0, 0.0), City::new(0.0, 3.0), City::new(4.0, 0.0)];
        let inst = Instance::from_cities(cities, vec![Item::new(20, 10, 0)], 10, 0.1, 1.0, 1.0)
            .expect("valid");
        let eval = evaluate(&inst, &[0, 1, 2], &[true]);
        // Full knapsack the whole way: speed 0.1
        assert!((eval.time - 120.0).abs() < 1e-9);
    }

    #[test]
    fn test_infeasible_sentinel() {
        let cities = vec![City::new(0.0, 0.0), City::new(0.0, 3.0)];
        let items = vec![Item::new(5, 6, 1), Item::new(5, 6, 1)];
        let inst = Instance::from_cities(cities, items, 10, 0.1, 1.0, 1.0).expect("valid");
        let eval = evaluate(&inst, &[0, 1], &[true, true]);
        assert_eq!(eval.weight, 12);
        assert_eq!(eval.profit, 10);
        assert_eq!(eval.time, INFEASIBLE_TIME);
        assert_eq!(eval.objective, INFEASIBLE_OBJECTIVE);
    }

    #[test]
    fn test_velocity_floored_at_min_speed() {
        // min_speed > max_speed - nu * W can only happen through rounding;
        // emulate it with a full load where the formula hits min_speed exactly.
        let cities = vec![City::new(0.0, 0.0), City::new(0.0, 10.0)];
        let inst = Instance::from_cities(cities, vec![Item::new(1, 3, 1)], 3, 0.5, 1.0, 1.0)
            .expect("valid");
        let eval = evaluate(&inst, &[0, 1], &[true]);
        // 10 at speed 1, 10 back at speed 0.5
        assert!((eval.time - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_instance() {
        let inst = Instance::new(DistanceMatrix::new(0), vec![], 0, 0.1, 1.0, 1.0).expect("valid");
        let eval = evaluate(&inst, &[], &[]);
        assert_eq!(eval.time, 0.0);
        assert_eq!(eval.objective, 0.0);
    }

    #[test]
    fn test_zero_capacity_zero_weight_items() {
        let cities = vec![City::new(0.0, 0.0), City::new(0.0, 3.0)];
        let inst = Instance::from_cities(cities, vec![Item::new(4, 0, 1)], 0, 0.1, 1.0, 1.0)
            .expect("valid");
        let eval = evaluate(&inst, &[0, 1], &[true]);
        assert!(eval.time.is_finite());
        assert!((eval.objective - (4.0 - 6.0)).abs() < 1e-12);
    }

    #[test]
    fn test_picked_totals() {
        let cities = vec![City::new(0.0, 0.0), City::new(0.0, 3.0)];
        let items = vec![Item::new(5, 2, 1), Item::new(7, 3, 0), Item::new(1, 1, 1)];
        let inst = Instance::from_cities(cities, items, 10, 0.1, 1.0, 1.0).expect("valid");
        assert_eq!(picked_totals(&inst, &[true, false, true]), (6, 3));
        assert_eq!(picked_totals(&inst, &[]), (0, 0));
    }
}
