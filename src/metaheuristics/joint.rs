//! Joint tour and picking improvement.
//!
//! Alternates tour operators with a picking refresh, round by round, so that
//! the two sub-problems are optimized against each other.
//!
//! # Algorithm
//!
//! Each round runs windowed 2-opt, then (optionally) Or-opt, then the picking
//! refresh. With [`PickingRefresh::Rebuild`] the picking plan is rebuilt after
//! every tour operator that improved; with [`PickingRefresh::BestFlip`] a
//! best-of-round flip search runs once at the end of the round. The loop
//! stops at the round cap or after a round where no operator improved.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::local_search::{best_flip_improve, or_opt_improve, two_opt_windowed};
use crate::models::{Instance, Solution};
use crate::picking::PickingConstruction;

/// How the picking plan follows tour changes during joint improvement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PickingRefresh {
    /// Rebuild the plan with the strategy's picking builder after each
    /// improving tour operator.
    Rebuild,
    /// Commit up to `max_flips` best-of-round flips once per round.
    BestFlip {
        /// Flip cap per round.
        max_flips: usize,
    },
}

/// Round-based joint improvement of tour and picking plan.
///
/// # Examples
///
/// ```
/// use u_ttp::metaheuristics::{JointImprovement, PickingRefresh};
///
/// let hybrid = JointImprovement::hybrid(5);
/// assert_eq!(hybrid.window, 15);
/// assert_eq!(hybrid.or_opt_segment, Some(2));
/// assert_eq!(hybrid.refresh, PickingRefresh::Rebuild);
///
/// let balanced = JointImprovement::balanced(2);
/// assert_eq!(balanced.or_opt_segment, None);
/// assert_eq!(balanced.refresh, PickingRefresh::BestFlip { max_flips: 20 });
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JointImprovement {
    /// Maximum number of rounds.
    pub max_rounds: usize,
    /// 2-opt window: `j <= i + window`.
    pub window: usize,
    /// Longest Or-opt segment; `None` skips Or-opt.
    #[serde(default)]
    pub or_opt_segment: Option<usize>,
    /// Picking refresh policy.
    pub refresh: PickingRefresh,
}

impl JointImprovement {
    /// Windowed 2-opt (15) and Or-opt (segments up to 2), rebuilding the
    /// picking plan after each improving operator.
    pub fn hybrid(max_rounds: usize) -> Self {
        Self {
            max_rounds,
            window: 15,
            or_opt_segment: Some(2),
            refresh: PickingRefresh::Rebuild,
        }
    }

    /// Windowed 2-opt (15) followed by up to 20 best-of-round flips.
    pub fn balanced(max_rounds: usize) -> Self {
        Self {
            max_rounds,
            window: 15,
            or_opt_segment: None,
            refresh: PickingRefresh::BestFlip { max_flips: 20 },
        }
    }

    /// Runs the rounds in place and returns the number of improving rounds.
    ///
    /// `picking` is only consulted by [`PickingRefresh::Rebuild`].
    pub fn run(&self, instance: &Instance, solution: &mut Solution, picking: &PickingConstruction) -> usize {
        solution.ensure_evaluated(instance);
        let mut improving = 0;

        for round in 0..self.max_rounds {
            let mut improved = false;

            if two_opt_windowed(instance, solution, self.window) {
                improved = true;
                self.after_tour_move(instance, solution, picking);
            }

            if let Some(segment) = self.or_opt_segment {
                if or_opt_improve(instance, solution, segment) {
                    improved = true;
                    self.after_tour_move(instance, solution, picking);
                }
            }

            if let PickingRefresh::BestFlip { max_flips } = self.refresh {
                if best_flip_improve(instance, solution, max_flips) {
                    improved = true;
                }
            }

            if !improved {
                break;
            }
            improving += 1;
            trace!(event = "joint_round", round, objective = solution.objective());
        }

        improving
    }

    fn after_tour_move(&self, instance: &Instance, solution: &mut Solution, picking: &PickingConstruction) {
        if self.refresh == PickingRefresh::Rebuild {
            let plan = picking.build(instance, solution.tour());
            solution.set_picking(plan);
            solution.evaluate(instance);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructive::sequential_tour;
    use crate::models::{City, Item};

    // Sequential order zig-zags across a ring, leaving room for 2-opt.
    fn zigzag() -> Instance {
        let coords = [(0.0, 0.0), (50.0, 40.0), (10.0, 5.0), (60.0, 30.0), (20.0, 10.0), (40.0, 45.0), (5.0, 30.0)];
        let cities = coords.iter().map(|&(x, y)| City::new(x, y)).collect();
        let items = vec![
            Item::new(40, 10, 1),
            Item::new(30, 12, 3),
            Item::new(25, 6, 5),
            Item::new(10, 9, 2),
            Item::new(18, 4, 6),
        ];
        Instance::from_cities(cities, items, 25, 0.1, 1.0, 0.5).expect("valid")
    }

    #[test]
    fn test_hybrid_improves_and_stays_valid() {
        let inst = zigzag();
        let picking = PickingConstruction::Greedy;
        let tour = sequential_tour(inst.dimension());
        let plan = picking.build(&inst, &tour);
        let mut sol = Solution::new(tour, plan);
        let before = sol.evaluate(&inst).objective;

        let rounds = JointImprovement::hybrid(5).run(&inst, &mut sol, &picking);
        assert!(rounds >= 1);
        assert!(sol.objective() > before);
        assert!(sol.is_valid(&inst));
        assert!(sol.is_evaluated());
    }

    #[test]
    fn test_balanced_never_worsens() {
        let inst = zigzag();
        let mut sol = Solution::new(sequential_tour(inst.dimension()), vec![false; inst.num_items()]);
        let before = sol.evaluate(&inst).objective;

        JointImprovement::balanced(3).run(&inst, &mut sol, &PickingConstruction::Empty);
        assert!(sol.objective() >= before);
        assert!(sol.is_valid(&inst));
    }

    #[test]
    fn test_zero_rounds_is_noop() {
        let inst = zigzag();
        let tour = sequential_tour(inst.dimension());
        let mut sol = Solution::new(tour.clone(), vec![false; inst.num_items()]);
        assert_eq!(JointImprovement::hybrid(0).run(&inst, &mut sol, &PickingConstruction::Greedy), 0);
        assert_eq!(sol.tour(), tour.as_slice());
    }

    #[test]
    fn test_deserialize() {
        let joint: JointImprovement = toml::from_str(
            "max_rounds = 2\nwindow = 15\n[refresh]\ntype = \"best_flip\"\nmax_flips = 20\n",
        )
        .expect("valid toml");
        assert_eq!(joint, JointImprovement::balanced(2));
    }
}
