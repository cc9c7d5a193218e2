//! Repeated-run comparison of heuristics.
//!
//! Each heuristic is solved `runs` times in a row (its random stream carries
//! over between runs) and summarized by the mean, best and worst objective
//! and the sample standard deviation. Reports are returned as data; printing
//! is left to the caller.
//!
//! # Examples
//!
//! ```
//! use u_ttp::config::ExperimentConfig;
//! use u_ttp::experiment::Experiment;
//! use u_ttp::models::{City, Instance, Item};
//! use u_ttp::strategy::presets;
//!
//! let cities = (0..6).map(|i| City::new(i as f64 * 10.0, (i % 2) as f64 * 10.0)).collect();
//! let items = (1..6).map(|c| Item::new(30, 4, c)).collect();
//! let instance = Instance::from_cities(cities, items, 12, 0.1, 1.0, 0.5).unwrap();
//!
//! let config = ExperimentConfig::default()
//!     .with_runs(3)
//!     .with_strategy(presets::baseline_hill_climbing())
//!     .with_strategy(presets::balanced_vns(30, 3));
//! let report = Experiment::from_config(&instance, &config).run();
//!
//! assert_eq!(report.heuristics.len(), 2);
//! assert_eq!(report.heuristics[0].stats.runs, 3);
//! let winner = report.best().unwrap();
//! assert!(winner.stats.best >= report.heuristics[0].stats.best);
//! ```

use serde::Serialize;
use tracing::{debug, info};

use crate::config::ExperimentConfig;
use crate::models::{Instance, Solution};
use crate::strategy::Heuristic;

/// Metrics of one run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RunRecord {
    /// Objective value.
    pub objective: f64,
    /// Total profit.
    pub profit: u64,
    /// Total picked weight.
    pub weight: u64,
    /// Travel time.
    pub time: f64,
    /// Whether the solution fits the knapsack and visits every city once.
    pub valid: bool,
}

impl RunRecord {
    fn from_solution(instance: &Instance, solution: &mut Solution) -> Self {
        let eval = solution.ensure_evaluated(instance);
        Self {
            objective: eval.objective,
            profit: eval.profit,
            weight: eval.weight,
            time: eval.time,
            valid: solution.is_valid(instance),
        }
    }
}

/// Summary statistics over the objectives of repeated runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RunStats {
    /// Number of runs.
    pub runs: usize,
    /// Number of valid runs.
    pub valid_runs: usize,
    /// Mean objective.
    pub mean: f64,
    /// Highest objective.
    pub best: f64,
    /// Lowest objective.
    pub worst: f64,
    /// Sample standard deviation; zero for fewer than two runs.
    pub std_dev: f64,
}

impl RunStats {
    /// Summarizes run records. Returns `None` for an empty slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_ttp::experiment::{RunRecord, RunStats};
    ///
    /// let run = |objective| RunRecord { objective, profit: 0, weight: 0, time: 0.0, valid: true };
    /// let stats = RunStats::from_records(&[run(2.0), run(4.0), run(6.0)]).unwrap();
    /// assert_eq!(stats.mean, 4.0);
    /// assert_eq!(stats.best, 6.0);
    /// assert_eq!(stats.worst, 2.0);
    /// assert_eq!(stats.std_dev, 2.0);
    /// ```
    pub fn from_records(records: &[RunRecord]) -> Option<Self> {
        if records.is_empty() {
            return None;
        }
        let n = records.len();
        let mean = records.iter().map(|r| r.objective).sum::<f64>() / n as f64;
        let best = records.iter().map(|r| r.objective).fold(f64::NEG_INFINITY, f64::max);
        let worst = records.iter().map(|r| r.objective).fold(f64::INFINITY, f64::min);
        let std_dev = if n < 2 {
            0.0
        } else {
            let ss: f64 = records.iter().map(|r| (r.objective - mean).powi(2)).sum();
            (ss / (n - 1) as f64).sqrt()
        };

        Some(Self {
            runs: n,
            valid_runs: records.iter().filter(|r| r.valid).count(),
            mean,
            best,
            worst,
            std_dev,
        })
    }
}

/// Results of one heuristic.
#[derive(Debug, Clone)]
pub struct HeuristicReport {
    /// Heuristic name.
    pub name: String,
    /// Per-run metrics, in run order.
    pub runs: Vec<RunRecord>,
    /// Summary over `runs`.
    pub stats: RunStats,
    /// Solution of the best run (first one on ties).
    pub best_solution: Solution,
}

/// Results of a whole experiment, in insertion order.
#[derive(Debug, Clone)]
pub struct ExperimentReport {
    /// Instance name.
    pub instance: String,
    /// One report per heuristic.
    pub heuristics: Vec<HeuristicReport>,
}

impl ExperimentReport {
    /// Heuristics ordered by best objective, then mean objective, both
    /// descending. Ties keep insertion order.
    pub fn ranking(&self) -> Vec<&HeuristicReport> {
        let mut ranked: Vec<&HeuristicReport> = self.heuristics.iter().collect();
        ranked.sort_by(|a, b| {
            b.stats
                .best
                .total_cmp(&a.stats.best)
                .then(b.stats.mean.total_cmp(&a.stats.mean))
        });
        ranked
    }

    /// The top-ranked heuristic.
    pub fn best(&self) -> Option<&HeuristicReport> {
        self.ranking().into_iter().next()
    }
}

/// A set of heuristics compared on one instance.
pub struct Experiment<'a> {
    instance: &'a Instance,
    runs: usize,
    heuristics: Vec<Box<dyn Heuristic + 'a>>,
}

impl<'a> Experiment<'a> {
    /// Creates an empty experiment. `runs` is raised to at least 1.
    pub fn new(instance: &'a Instance, runs: usize) -> Self {
        Self {
            instance,
            runs: runs.max(1),
            heuristics: Vec::new(),
        }
    }

    /// Creates an experiment holding the configured strategies.
    pub fn from_config(instance: &'a Instance, config: &ExperimentConfig) -> Self {
        let mut experiment = Self::new(instance, config.runs);
        for strategy in config.build_strategies(instance) {
            experiment.add_heuristic(Box::new(strategy));
        }
        experiment
    }

    /// Adds a heuristic.
    pub fn add_heuristic(&mut self, heuristic: Box<dyn Heuristic + 'a>) {
        self.heuristics.push(heuristic);
    }

    /// Number of heuristics.
    pub fn len(&self) -> usize {
        self.heuristics.len()
    }

    /// Returns true if no heuristic was added.
    pub fn is_empty(&self) -> bool {
        self.heuristics.is_empty()
    }

    /// Runs every heuristic `runs` times.
    pub fn run(&mut self) -> ExperimentReport {
        let instance = self.instance;
        info!(
            event = "experiment_start",
            instance = instance.name(),
            heuristics = self.heuristics.len(),
            runs = self.runs
        );

        let mut reports = Vec::with_capacity(self.heuristics.len());
        for heuristic in &mut self.heuristics {
            let name = heuristic.name();
            let mut records = Vec::with_capacity(self.runs);
            let mut best_solution: Option<Solution> = None;

            for run in 0..self.runs {
                let mut solution = heuristic.solve();
                let record = RunRecord::from_solution(instance, &mut solution);
                debug!(event = "run_done", heuristic = %name, run, objective = record.objective, valid = record.valid);
                if best_solution.as_ref().is_none_or(|b| record.objective > b.objective()) {
                    best_solution = Some(solution);
                }
                records.push(record);
            }

            let (Some(stats), Some(best_solution)) = (RunStats::from_records(&records), best_solution) else {
                continue;
            };
            info!(
                event = "heuristic_done",
                heuristic = %name,
                mean = stats.mean,
                best = stats.best,
                worst = stats.worst,
                std_dev = stats.std_dev,
                valid_runs = stats.valid_runs
            );
            reports.push(HeuristicReport {
                name,
                runs: records,
                stats,
                best_solution,
            });
        }

        ExperimentReport {
            instance: instance.name().to_string(),
            heuristics: reports,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{City, Item};
    use crate::strategy::presets;

    fn record(objective: f64) -> RunRecord {
        RunRecord {
            objective,
            profit: 0,
            weight: 0,
            time: 0.0,
            valid: true,
        }
    }

    fn instance() -> Instance {
        let cities: Vec<City> = (0..7).map(|i| City::new((i * 3 % 7) as f64 * 12.0, (i % 3) as f64 * 9.0)).collect();
        let items = (1..7).map(|c| Item::new(20 + c as u64 * 2, 3 + c as u64 % 3, c)).collect();
        Instance::from_cities(cities, items, 12, 0.1, 1.0, 0.4).expect("valid")
    }

    struct Fixed {
        name: &'static str,
        solution: Solution,
    }

    impl Heuristic for Fixed {
        fn name(&self) -> String {
            self.name.to_string()
        }

        fn solve(&mut self) -> Solution {
            self.solution.clone()
        }
    }

    #[test]
    fn test_stats_single_run() {
        let stats = RunStats::from_records(&[record(3.5)]).expect("non-empty");
        assert_eq!(stats.runs, 1);
        assert_eq!(stats.mean, 3.5);
        assert_eq!(stats.best, 3.5);
        assert_eq!(stats.worst, 3.5);
        assert_eq!(stats.std_dev, 0.0);
        assert!(RunStats::from_records(&[]).is_none());
    }

    #[test]
    fn test_stats_valid_runs() {
        let mut bad = record(-1e9);
        bad.valid = false;
        let stats = RunStats::from_records(&[record(1.0), bad]).expect("non-empty");
        assert_eq!(stats.valid_runs, 1);
        assert_eq!(stats.worst, -1e9);
    }

    #[test]
    fn test_ranking_by_best_then_mean() {
        let cities = vec![City::new(0.0, 0.0), City::new(0.0, 3.0), City::new(4.0, 0.0)];
        let inst = Instance::from_cities(cities, vec![Item::new(20, 5, 2)], 10, 0.1, 1.0, 1.0)
            .expect("valid")
            .with_name("tiny");
        let mut experiment = Experiment::new(&inst, 2);
        experiment.add_heuristic(Box::new(Fixed {
            name: "empty",
            solution: Solution::new(vec![0, 1, 2], vec![false]),
        }));
        experiment.add_heuristic(Box::new(Fixed {
            name: "picked",
            solution: Solution::new(vec![0, 1, 2], vec![true]),
        }));

        let report = experiment.run();
        assert_eq!(report.instance, "tiny");
        assert_eq!(report.heuristics[0].stats.best, -12.0);
        assert!((report.heuristics[1].stats.best - 4.7273).abs() < 1e-3);
        assert_eq!(report.heuristics[1].stats.std_dev, 0.0);

        let ranked: Vec<&str> = report.ranking().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(ranked, vec!["picked", "empty"]);
        assert_eq!(report.best().map(|r| r.name.as_str()), Some("picked"));
    }

    #[test]
    fn test_from_config_runs_line_up() {
        let inst = instance();
        let config = ExperimentConfig::default().with_runs(2).with_seed(3);
        let mut experiment = Experiment::from_config(&inst, &config);
        assert_eq!(experiment.len(), presets::line_up().len());

        let report = experiment.run();
        for heuristic in &report.heuristics {
            assert_eq!(heuristic.runs.len(), 2);
            assert_eq!(heuristic.stats.valid_runs, 2);
            assert_eq!(heuristic.best_solution.objective(), heuristic.stats.best);
        }
    }

    #[test]
    fn test_reproducible() {
        let inst = instance();
        let config = ExperimentConfig::default()
            .with_runs(3)
            .with_seed(11)
            .with_strategy(presets::balanced_lns(3, 10));
        let a = Experiment::from_config(&inst, &config).run();
        let b = Experiment::from_config(&inst, &config).run();
        assert_eq!(a.heuristics[0].runs, b.heuristics[0].runs);
    }

    #[test]
    fn test_empty_experiment() {
        let inst = instance();
        let mut experiment = Experiment::new(&inst, 0);
        assert!(experiment.is_empty());
        let report = experiment.run();
        assert!(report.heuristics.is_empty());
        assert!(report.best().is_none());
    }
}
