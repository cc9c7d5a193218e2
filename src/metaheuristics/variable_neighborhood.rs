//! Variable Neighborhood Search over TTP tours.
//!
//! # Algorithm
//!
//! Each iteration shakes a copy of the best solution with `k` random swaps,
//! rebuilds its picking plan and runs a short joint pass. An improvement
//! replaces the best and resets `k` to 1; otherwise `k` grows (wrapping back
//! to 1 past `kmax`) and the stall counter grows. The search stops after
//! `max_iterations` or once the stall counter reaches `max_iterations / 4`.
//!
//! # Reference
//!
//! Mladenović, N. & Hansen, P. (1997). "Variable neighborhood search",
//! *Computers & Operations Research* 24(11), 1097-1100.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::local_search::shake;
use crate::models::{Instance, Solution};
use crate::picking::PickingConstruction;

use super::large_neighborhood::default_inner_joint;
use super::JointImprovement;

/// VNS parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VnsParams {
    /// Iteration cap; a quarter of it is also the stall limit.
    pub max_iterations: usize,
    /// Largest shaking strength.
    pub kmax: usize,
    /// Joint improvement applied after each shake.
    #[serde(default = "default_inner_joint")]
    pub joint: JointImprovement,
}

impl VnsParams {
    /// Creates parameters with a two-round balanced joint pass.
    pub fn new(max_iterations: usize, kmax: usize) -> Self {
        Self {
            max_iterations,
            kmax,
            joint: default_inner_joint(),
        }
    }

    /// Sets the inner joint improvement.
    pub fn with_joint(mut self, joint: JointImprovement) -> Self {
        self.joint = joint;
        self
    }

    /// Consecutive non-improving iterations that end the search.
    pub fn stall_limit(&self) -> usize {
        self.max_iterations / 4
    }
}

/// Runs VNS from `initial` and returns the best solution found.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_ttp::constructive::nearest_neighbor_tour;
/// use u_ttp::metaheuristics::{variable_neighborhood_search, VnsParams};
/// use u_ttp::models::{City, Instance, Item, Solution};
/// use u_ttp::picking::PickingConstruction;
///
/// let cities = (0..8).map(|i| City::new((i * 13 % 8) as f64 * 10.0, (i % 3) as f64 * 10.0)).collect();
/// let items = (1..8).map(|c| Item::new(10 + c as u64, 3, c)).collect();
/// let instance = Instance::from_cities(cities, items, 12, 0.1, 1.0, 0.5).unwrap();
///
/// let picking = PickingConstruction::adaptive(0.7);
/// let tour = nearest_neighbor_tour(instance.distances());
/// let mut start = Solution::new(tour.clone(), picking.build(&instance, &tour));
/// let before = start.evaluate(&instance).objective;
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let best = variable_neighborhood_search(&instance, start, &picking, &VnsParams::new(20, 3), &mut rng);
/// assert!(best.objective() >= before);
/// assert!(best.is_valid(&instance));
/// ```
pub fn variable_neighborhood_search<R: Rng + ?Sized>(
    instance: &Instance,
    mut initial: Solution,
    picking: &PickingConstruction,
    params: &VnsParams,
    rng: &mut R,
) -> Solution {
    initial.ensure_evaluated(instance);
    let mut best = initial;
    let stall_limit = params.stall_limit();
    let mut k = 1;
    let mut stall = 0;

    for iteration in 0..params.max_iterations {
        let mut current = best.clone();
        shake(&mut current, k, rng);
        let plan = picking.build(instance, current.tour());
        current.set_picking(plan);
        current.evaluate(instance);
        params.joint.run(instance, &mut current, picking);

        if current.objective() > best.objective() {
            best = current;
            k = 1;
            stall = 0;
            debug!(event = "vns_new_best", iteration, objective = best.objective());
        } else {
            k += 1;
            stall += 1;
            if k > params.kmax {
                k = 1;
            }
            if stall >= stall_limit {
                debug!(event = "vns_stalled", iteration, stall);
                break;
            }
        }
    }

    best
}
