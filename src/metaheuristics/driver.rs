//! Improvement drivers applied after construction.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::local_search::{hill_climb_picking, two_opt_windowed, DEFAULT_HILL_CLIMB_ROUNDS};
use crate::models::{Instance, Solution};
use crate::picking::PickingConstruction;

use super::{large_neighborhood_search, variable_neighborhood_search, JointImprovement, LnsParams, VnsParams};

/// Selects how a constructed solution is improved.
///
/// Every variant takes an evaluated (or evaluable) solution and returns an
/// evaluated one whose objective is at least the starting objective, except
/// [`Driver::RepeatedTwoOpt`] and [`Driver::TwoOptThenJoint`] whose picking
/// rebuilds are accepted unconditionally.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_ttp::metaheuristics::Driver;
/// use u_ttp::models::{City, Instance, Item, Solution};
/// use u_ttp::picking::PickingConstruction;
///
/// let cities = vec![City::new(0.0, 0.0), City::new(0.0, 3.0), City::new(4.0, 0.0)];
/// let instance = Instance::from_cities(cities, vec![Item::new(20, 5, 2)], 10, 0.1, 1.0, 1.0).unwrap();
///
/// let start = Solution::new(vec![0, 1, 2], vec![false]);
/// let mut rng = StdRng::seed_from_u64(0);
/// let sol = Driver::hill_climbing().run(&instance, start, &PickingConstruction::Empty, &mut rng);
/// assert_eq!(sol.picking(), &[true]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Driver {
    /// Keep the constructed solution.
    Construct,
    /// First-improvement flip sweeps on the picking plan.
    HillClimbing {
        /// Round cap.
        max_rounds: usize,
    },
    /// Round-based joint tour and picking improvement.
    Joint(JointImprovement),
    /// Windowed 2-opt repeated while it improves, rebuilding the picking plan
    /// after every improving pass.
    RepeatedTwoOpt {
        /// 2-opt window.
        window: usize,
        /// Maximum number of rebuilds.
        max_repeats: usize,
    },
    /// One windowed 2-opt pass, a picking rebuild, then joint improvement.
    TwoOptThenJoint {
        /// 2-opt window of the first pass.
        window: usize,
        /// Joint improvement applied afterwards.
        joint: JointImprovement,
    },
    /// Large Neighborhood Search.
    Lns(LnsParams),
    /// Variable Neighborhood Search.
    Vns(VnsParams),
}

impl Default for Driver {
    fn default() -> Self {
        Self::hill_climbing()
    }
}

impl Driver {
    /// Hill climbing capped at 100 rounds.
    pub fn hill_climbing() -> Self {
        Self::HillClimbing {
            max_rounds: DEFAULT_HILL_CLIMB_ROUNDS,
        }
    }

    /// Improves `solution`, rebuilding picking plans with `picking` where the
    /// driver calls for it.
    pub fn run<R: Rng + ?Sized>(
        &self,
        instance: &Instance,
        mut solution: Solution,
        picking: &PickingConstruction,
        rng: &mut R,
    ) -> Solution {
        solution.ensure_evaluated(instance);
        match self {
            Self::Construct => solution,
            Self::HillClimbing { max_rounds } => {
                hill_climb_picking(instance, &mut solution, *max_rounds);
                solution
            }
            Self::Joint(joint) => {
                joint.run(instance, &mut solution, picking);
                solution
            }
            Self::RepeatedTwoOpt { window, max_repeats } => {
                let mut repeats = 0;
                while two_opt_windowed(instance, &mut solution, *window) && repeats < *max_repeats {
                    repeats += 1;
                    rebuild_picking(instance, &mut solution, picking);
                    trace!(event = "two_opt_repeat", repeats, objective = solution.objective());
                }
                solution
            }
            Self::TwoOptThenJoint { window, joint } => {
                two_opt_windowed(instance, &mut solution, *window);
                rebuild_picking(instance, &mut solution, picking);
                joint.run(instance, &mut solution, picking);
                solution
            }
            Self::Lns(params) => large_neighborhood_search(instance, solution, picking, params, rng),
            Self::Vns(params) => variable_neighborhood_search(instance, solution, picking, params, rng),
        }
    }
}

fn rebuild_picking(instance: &Instance, solution: &mut Solution, picking: &PickingConstruction) {
    let plan = picking.build(instance, solution.tour());
    solution.set_picking(plan);
    solution.evaluate(instance);
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Construct => write!(f, "Construction"),
            Self::HillClimbing { .. } => write!(f, "Hill Climbing"),
            Self::Joint(joint) => match joint.or_opt_segment {
                Some(_) => write!(f, "2-Opt+OrOpt"),
                None => write!(f, "Joint Improvement"),
            },
            Self::RepeatedTwoOpt { .. } => write!(f, "Repeated 2-Opt"),
            Self::TwoOptThenJoint { .. } => write!(f, "2-Opt"),
            Self::Lns(p) => write!(f, "LNS (destroy={}, iter={})", p.destroy_size, p.max_iterations),
            Self::Vns(p) => write!(f, "VNS (kmax={}, iter={})", p.kmax, p.max_iterations),
        }
    }
}
