//! The standard experiment line-up.
//!
//! [`line_up`] is the default comparison: a hill-climbing baseline, two
//! adaptive-picking variants, and three LNS and three VNS configurations.
//! [`extended_line_up`] adds the construction-only baselines, the 2-opt/Or-opt
//! local search and the probabilistic nearest neighbor family.

use crate::config::StrategyConfig;
use crate::constructive::TourConstruction;
use crate::metaheuristics::{Driver, JointImprovement, LnsParams, VnsParams};
use crate::picking::PickingConstruction;

/// Construction without improvement.
fn construct_only(tour: TourConstruction, picking: PickingConstruction, label: &str) -> StrategyConfig {
    StrategyConfig::new(tour, picking, Driver::Construct).with_label(label)
}

/// Construction-only baselines: sequential tour with no items, nearest
/// neighbor and random tours with greedy picking, and nearest neighbor with
/// profit-first picking.
pub fn construction_baselines() -> Vec<StrategyConfig> {
    vec![
        construct_only(TourConstruction::Sequential, PickingConstruction::Empty, "Sequential Tour + No Items"),
        construct_only(
            TourConstruction::NearestNeighbor,
            PickingConstruction::Greedy,
            "Nearest Neighbor + Greedy Picking",
        ),
        construct_only(TourConstruction::Random, PickingConstruction::Greedy, "Random Tour + Greedy Picking"),
        construct_only(
            TourConstruction::NearestNeighbor,
            PickingConstruction::ByProfit,
            "Nearest Neighbor + High Profit Picking",
        ),
    ]
}

/// Nearest neighbor tour, greedy picking, flip hill climbing.
pub fn baseline_hill_climbing() -> StrategyConfig {
    StrategyConfig::new(
        TourConstruction::NearestNeighbor,
        PickingConstruction::Greedy,
        Driver::hill_climbing(),
    )
    .with_label("Nearest Neighbor Tour + Hill Climbing Picking")
}

/// Nearest neighbor tour, 75% adaptive picking, five balanced joint rounds.
pub fn improved_hill_climbing() -> StrategyConfig {
    StrategyConfig::new(
        TourConstruction::NearestNeighbor,
        PickingConstruction::adaptive(0.75),
        Driver::Joint(JointImprovement::balanced(5)),
    )
    .with_label("Improved Hill Climbing (Adaptive Picking 75%)")
}

/// Nearest neighbor tour, 70% adaptive picking, a 2-opt pass (window 20),
/// a re-pick and five balanced joint rounds.
pub fn balanced_two_opt() -> StrategyConfig {
    StrategyConfig::new(
        TourConstruction::NearestNeighbor,
        PickingConstruction::adaptive(0.70),
        Driver::TwoOptThenJoint {
            window: 20,
            joint: JointImprovement::balanced(5),
        },
    )
    .with_label("2-Opt + Balanced Picking (70%)")
}

/// LNS from a nearest neighbor tour with 70% adaptive picking.
pub fn balanced_lns(destroy_size: usize, max_iterations: usize) -> StrategyConfig {
    StrategyConfig::new(
        TourConstruction::NearestNeighbor,
        PickingConstruction::adaptive(0.70),
        Driver::Lns(LnsParams::new(destroy_size, max_iterations)),
    )
    .with_label(format!("Balanced LNS (destroy={destroy_size}, iter={max_iterations})"))
}

/// VNS from a nearest neighbor tour with 70% adaptive picking.
pub fn balanced_vns(max_iterations: usize, kmax: usize) -> StrategyConfig {
    StrategyConfig::new(
        TourConstruction::NearestNeighbor,
        PickingConstruction::adaptive(0.70),
        Driver::Vns(VnsParams::new(max_iterations, kmax)),
    )
    .with_label(format!("Balanced VNS (kmax={kmax}, iter={max_iterations})"))
}

/// Nearest neighbor tour, greedy picking, five hybrid joint rounds.
pub fn two_opt_local_search() -> StrategyConfig {
    StrategyConfig::new(
        TourConstruction::NearestNeighbor,
        PickingConstruction::Greedy,
        Driver::Joint(JointImprovement::hybrid(5)),
    )
    .with_label("2-Opt Local Search + Greedy Picking")
}

/// Probabilistic nearest neighbor tour, greedy picking, repeated 2-opt
/// (window 15) with re-picking, at most 100 repeats.
pub fn probabilistic_two_opt(temperature: f64) -> StrategyConfig {
    StrategyConfig::new(
        TourConstruction::ProbabilisticNearestNeighbor { temperature },
        PickingConstruction::Greedy,
        Driver::RepeatedTwoOpt {
            window: 15,
            max_repeats: 100,
        },
    )
    .with_label(format!("Probabilistic NN + 2-Opt (T={temperature})"))
}

/// The default comparison.
///
/// # Examples
///
/// ```
/// use u_ttp::strategy::presets;
///
/// let names: Vec<String> = presets::line_up().iter().map(|s| s.name()).collect();
/// assert_eq!(names.len(), 9);
/// assert_eq!(names[3], "Balanced LNS (destroy=10, iter=20)");
/// assert_eq!(names[8], "Balanced VNS (kmax=7, iter=80)");
/// ```
pub fn line_up() -> Vec<StrategyConfig> {
    vec![
        baseline_hill_climbing(),
        improved_hill_climbing(),
        balanced_two_opt(),
        balanced_lns(10, 20),
        balanced_lns(15, 30),
        balanced_lns(20, 40),
        balanced_vns(30, 3),
        balanced_vns(50, 5),
        balanced_vns(80, 7),
    ]
}

/// [`construction_baselines`], then [`line_up`], then the 2-opt local search
/// and probabilistic NN at `T` in {0.3, 0.5, 1.0, 2.0}.
pub fn extended_line_up() -> Vec<StrategyConfig> {
    let mut strategies = construction_baselines();
    strategies.extend(line_up());
    strategies.push(two_opt_local_search());
    strategies.extend([0.3, 0.5, 1.0, 2.0].into_iter().map(probabilistic_two_opt));
    strategies
}
