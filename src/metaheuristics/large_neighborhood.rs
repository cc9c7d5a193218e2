//! Large Neighborhood Search over TTP tours.
//!
//! # Algorithm
//!
//! 1. Destroy: remove `destroy_size` random cities from the current tour
//! 2. Repair: reinsert them by cheapest insertion
//! 3. Rebuild the picking plan for the new tour, then a short joint pass
//! 4. The result always becomes the current solution; it replaces the best
//!    only if strictly better
//! 5. After `stall_limit` consecutive non-improving iterations the current
//!    solution is reset to the best
//!
//! # Reference
//!
//! Shaw, P. (1998). "Using Constraint Programming and Local Search Methods
//! to Solve Vehicle Routing Problems", *CP-98*, LNCS 1520, 417-431.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::lns::{cheapest_insertion, random_removal};
use crate::models::{Instance, Solution};
use crate::picking::PickingConstruction;

use super::JointImprovement;

/// LNS parameters.
///
/// # Examples
///
/// ```
/// use u_ttp::metaheuristics::LnsParams;
///
/// let params = LnsParams::new(10, 20).with_stall_limit(3);
/// assert_eq!(params.destroy_size, 10);
/// assert_eq!(params.max_iterations, 20);
/// assert_eq!(params.stall_limit, 3);
/// assert_eq!(params.joint.max_rounds, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LnsParams {
    /// Cities removed per iteration.
    pub destroy_size: usize,
    /// Number of destroy/repair iterations.
    pub max_iterations: usize,
    /// Non-improving iterations before resetting to the best; at least 1.
    #[serde(default = "default_stall_limit")]
    pub stall_limit: usize,
    /// Joint improvement applied after each repair.
    #[serde(default = "default_inner_joint")]
    pub joint: JointImprovement,
}

fn default_stall_limit() -> usize {
    5
}

pub(crate) fn default_inner_joint() -> JointImprovement {
    JointImprovement::balanced(2)
}

impl LnsParams {
    /// Creates parameters with a stall limit of 5 and a two-round balanced
    /// joint pass.
    pub fn new(destroy_size: usize, max_iterations: usize) -> Self {
        Self {
            destroy_size,
            max_iterations,
            stall_limit: default_stall_limit(),
            joint: default_inner_joint(),
        }
    }

    /// Sets the stall limit.
    pub fn with_stall_limit(mut self, stall_limit: usize) -> Self {
        self.stall_limit = stall_limit;
        self
    }

    /// Sets the inner joint improvement.
    pub fn with_joint(mut self, joint: JointImprovement) -> Self {
        self.joint = joint;
        self
    }
}

/// What one LNS iteration did with its repaired solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Strictly better than the best; became both best and current.
    NewBest,
    /// Not better; became current anyway.
    Accepted,
    /// Not better, and the stall limit was hit; current went back to best.
    Reset,
}

/// Best and current solutions plus the count of non-improving iterations.
#[derive(Debug, Clone)]
struct Search {
    best: Solution,
    current: Solution,
    stall: usize,
}

impl Search {
    fn new(initial: Solution) -> Self {
        Self {
            current: initial.clone(),
            best: initial,
            stall: 0,
        }
    }

    /// Takes an evaluated candidate as the new current solution.
    fn accept(&mut self, candidate: Solution, stall_limit: usize) -> Step {
        if candidate.objective() > self.best.objective() {
            self.best = candidate.clone();
            self.current = candidate;
            self.stall = 0;
            return Step::NewBest;
        }

        self.current = candidate;
        self.stall += 1;
        if self.stall >= stall_limit {
            self.current = self.best.clone();
            self.stall = 0;
            Step::Reset
        } else {
            Step::Accepted
        }
    }
}

/// Runs LNS from `initial` and returns the best solution found.
///
/// The returned solution is evaluated and its objective is never below the
/// objective of `initial`.
pub fn large_neighborhood_search<R: Rng + ?Sized>(
    instance: &Instance,
    mut initial: Solution,
    picking: &PickingConstruction,
    params: &LnsParams,
    rng: &mut R,
) -> Solution {
    initial.ensure_evaluated(instance);
    let mut search = Search::new(initial);

    for iteration in 0..params.max_iterations {
        let destroyed = random_removal(search.current.tour(), params.destroy_size, rng);
        let tour = cheapest_insertion(destroyed.partial, &destroyed.removed, instance.distances());
        let plan = picking.build(instance, &tour);
        let mut candidate = Solution::new(tour, plan);
        candidate.evaluate(instance);
        params.joint.run(instance, &mut candidate, picking);

        match search.accept(candidate, params.stall_limit) {
            Step::NewBest => {
                debug!(event = "lns_new_best", iteration, objective = search.best.objective());
            }
            Step::Reset => debug!(event = "lns_reset", iteration),
            Step::Accepted => {}
        }
    }

    search.best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructive::nearest_neighbor_tour;
    use crate::models::{City, Item};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ring(n: usize) -> Instance {
        let cities: Vec<City> = (0..n)
            .map(|i| {
                let angle = i as f64 * 2.4;
                City::new(100.0 * angle.cos(), 100.0 * angle.sin())
            })
            .collect();
        let items = (1..n)
            .map(|c| Item::new(20 + (c as u64 * 7) % 30, 5 + (c as u64 * 3) % 11, c))
            .collect();
        Instance::from_cities(cities, items, 40, 0.1, 1.0, 0.2).expect("valid")
    }

    fn initial(inst: &Instance, picking: &PickingConstruction) -> Solution {
        let tour = nearest_neighbor_tour(inst.distances());
        let plan = picking.build(inst, &tour);
        Solution::new(tour, plan)
    }

    fn tiny() -> Instance {
        let cities = vec![City::new(0.0, 0.0), City::new(0.0, 3.0), City::new(4.0, 0.0)];
        Instance::from_cities(cities, vec![Item::new(20, 5, 2)], 10, 0.1, 1.0, 1.0).expect("valid")
    }

    fn evaluated(inst: &Instance, tour: Vec<usize>, picked: bool) -> Solution {
        let mut sol = Solution::new(tour, vec![picked]);
        sol.evaluate(inst);
        sol
    }

    #[test]
    fn test_worse_candidate_becomes_current() {
        let inst = tiny();
        let mut search = Search::new(evaluated(&inst, vec![0, 1, 2], true));
        let worse = evaluated(&inst, vec![0, 2, 1], false);
        assert!(worse.objective() < search.best.objective());

        assert_eq!(search.accept(worse, 5), Step::Accepted);
        assert_eq!(search.current.tour(), &[0, 2, 1]);
        assert_eq!(search.current.picking(), &[false]);
        assert_eq!(search.best.picking(), &[true]);
        assert_eq!(search.stall, 1);
    }

    #[test]
    fn test_reset_only_at_stall_limit() {
        let inst = tiny();
        let mut search = Search::new(evaluated(&inst, vec![0, 1, 2], true));
        for _ in 0..4 {
            assert_eq!(search.accept(evaluated(&inst, vec![0, 2, 1], false), 5), Step::Accepted);
            assert_eq!(search.current.picking(), &[false]);
        }
        assert_eq!(search.accept(evaluated(&inst, vec![0, 2, 1], false), 5), Step::Reset);
        assert_eq!(search.current.tour(), &[0, 1, 2]);
        assert_eq!(search.current.picking(), &[true]);
        assert_eq!(search.stall, 0);
    }

    #[test]
    fn test_new_best_clears_stall() {
        let inst = tiny();
        let mut search = Search::new(evaluated(&inst, vec![0, 1, 2], false));
        search.accept(evaluated(&inst, vec![0, 2, 1], false), 3);
        search.accept(evaluated(&inst, vec![0, 2, 1], false), 3);
        assert_eq!(search.stall, 2);

        assert_eq!(search.accept(evaluated(&inst, vec![0, 2, 1], true), 3), Step::NewBest);
        assert_eq!(search.stall, 0);
        assert_eq!(search.best.picking(), &[true]);
        assert_eq!(search.current.picking(), &[true]);
    }

    #[test]
    fn test_best_monotone_across_iterations() {
        // Same seed, growing iteration cap: each run extends the previous one.
        let inst = ring(12);
        let picking = PickingConstruction::adaptive(0.7);
        let mut previous = f64::NEG_INFINITY;
        for iterations in 0..=15 {
            let mut rng = StdRng::seed_from_u64(17);
            let params = LnsParams::new(4, iterations).with_stall_limit(2);
            let best = large_neighborhood_search(&inst, initial(&inst, &picking), &picking, &params, &mut rng);
            assert!(best.objective() >= previous, "iteration {iterations}");
            previous = best.objective();
        }
    }

    #[test]
    fn test_best_never_regresses() {
        let inst = ring(12);
        let picking = PickingConstruction::adaptive(0.7);
        let mut start = initial(&inst, &picking);
        let before = start.evaluate(&inst).objective;

        let mut rng = StdRng::seed_from_u64(42);
        let best = large_neighborhood_search(&inst, start, &picking, &LnsParams::new(4, 15), &mut rng);
        assert!(best.objective() >= before);
        assert!(best.is_valid(&inst));
        assert_eq!(best.tour()[0], 0);
    }

    #[test]
    fn test_deterministic_for_seed() {
        let inst = ring(10);
        let picking = PickingConstruction::Greedy;
        let params = LnsParams::new(3, 10);
        let run = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            large_neighborhood_search(&inst, initial(&inst, &picking), &picking, &params, &mut rng)
        };
        let a = run(7);
        let b = run(7);
        assert_eq!(a.tour(), b.tour());
        assert_eq!(a.picking(), b.picking());
        assert_eq!(a.objective(), b.objective());
    }

    #[test]
    fn test_zero_iterations_returns_initial() {
        let inst = ring(6);
        let picking = PickingConstruction::Greedy;
        let start = initial(&inst, &picking);
        let tour = start.tour().to_vec();
        let mut rng = StdRng::seed_from_u64(0);
        let best = large_neighborhood_search(&inst, start, &picking, &LnsParams::new(3, 0), &mut rng);
        assert_eq!(best.tour(), tour.as_slice());
        assert!(best.is_evaluated());
    }

    #[test]
    fn test_destroy_larger_than_tour() {
        let inst = ring(4);
        let picking = PickingConstruction::Greedy;
        let mut rng = StdRng::seed_from_u64(5);
        let best = large_neighborhood_search(&inst, initial(&inst, &picking), &picking, &LnsParams::new(50, 5), &mut rng);
        assert!(best.is_valid(&inst));
    }
}
