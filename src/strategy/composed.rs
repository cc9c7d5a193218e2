//! Heuristic interface and the composed strategy.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::config::StrategyConfig;
use crate::models::{Instance, Solution};

/// A solver that produces one solution per call.
///
/// Repeated calls continue the solver's random stream, so each call is an
/// independent run; the sequence of runs is reproducible from the seed.
pub trait Heuristic {
    /// Display name qualified by the solver's parameters.
    fn name(&self) -> String;

    /// Runs the solver once and returns an evaluated solution.
    fn solve(&mut self) -> Solution;
}

/// Construction followed by an improvement driver, on a fixed instance.
///
/// # Examples
///
/// ```
/// use u_ttp::config::StrategyConfig;
/// use u_ttp::constructive::TourConstruction;
/// use u_ttp::metaheuristics::{Driver, JointImprovement};
/// use u_ttp::models::{City, Instance, Item};
/// use u_ttp::picking::PickingConstruction;
/// use u_ttp::strategy::{Heuristic, Strategy};
///
/// let cities = vec![City::new(0.0, 0.0), City::new(0.0, 3.0), City::new(4.0, 0.0)];
/// let instance = Instance::from_cities(cities, vec![Item::new(20, 5, 2)], 10, 0.1, 1.0, 1.0).unwrap();
///
/// let config = StrategyConfig::new(
///     TourConstruction::NearestNeighbor,
///     PickingConstruction::Greedy,
///     Driver::Joint(JointImprovement::hybrid(5)),
/// );
/// let mut strategy = Strategy::new(&instance, config, 42);
/// let solution = strategy.solve();
/// assert!(solution.is_valid(&instance));
/// assert!(solution.objective() > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Strategy<'a> {
    instance: &'a Instance,
    config: StrategyConfig,
    rng: StdRng,
}

impl<'a> Strategy<'a> {
    /// Creates a strategy seeded with `seed`.
    pub fn new(instance: &'a Instance, config: StrategyConfig, seed: u64) -> Self {
        Self {
            instance,
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The strategy's building blocks.
    pub fn config(&self) -> &StrategyConfig {
        &self.config
    }

    /// The instance this strategy solves.
    pub fn instance(&self) -> &'a Instance {
        self.instance
    }
}

impl Heuristic for Strategy<'_> {
    fn name(&self) -> String {
        self.config.name()
    }

    fn solve(&mut self) -> Solution {
        let instance = self.instance;
        let name = self.config.name();
        info!(event = "solve_start", strategy = %name, cities = instance.dimension(), items = instance.num_items());

        let tour = self.config.tour.build(instance, &mut self.rng);
        let plan = self.config.picking.build(instance, &tour);
        let solution = self
            .config
            .driver
            .run(instance, Solution::new(tour, plan), &self.config.picking, &mut self.rng);

        info!(
            event = "solve_end",
            strategy = %name,
            objective = solution.objective(),
            valid = solution.is_valid(instance)
        );
        solution
    }
}
