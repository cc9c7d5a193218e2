//! TOML configuration for strategies and experiments.
//!
//! Every building block of a strategy is a serde enum tagged by `type`, so a
//! full experiment line-up can be declared without code changes.
//!
//! # Examples
//!
//! ```
//! use u_ttp::config::ExperimentConfig;
//!
//! let config = ExperimentConfig::from_toml_str(r#"
//!     runs = 3
//!     seed = 7
//!
//!     [[strategies]]
//!     label = "NN + LNS"
//!     tour = { type = "nearest_neighbor" }
//!     picking = { type = "adaptive_fill", fill_ratio = 0.7 }
//!     driver = { type = "lns", destroy_size = 10, max_iterations = 20 }
//!
//!     [[strategies]]
//!     tour = { type = "probabilistic_nearest_neighbor", temperature = 0.5 }
//!     driver = { type = "repeated_two_opt", window = 15, max_repeats = 100 }
//! "#).unwrap();
//!
//! assert_eq!(config.runs, 3);
//! assert_eq!(config.strategies.len(), 2);
//! assert_eq!(config.strategies[0].name(), "NN + LNS");
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constructive::TourConstruction;
use crate::metaheuristics::Driver;
use crate::models::Instance;
use crate::picking::PickingConstruction;
use crate::strategy::{presets, Strategy};

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// One strategy: tour builder, picking builder and improvement driver.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrategyConfig {
    /// Display name; composed from the parts when absent.
    #[serde(default)]
    pub label: Option<String>,
    /// Tour construction.
    #[serde(default)]
    pub tour: TourConstruction,
    /// Picking construction, also used for every rebuild during search.
    #[serde(default)]
    pub picking: PickingConstruction,
    /// Improvement driver.
    #[serde(default)]
    pub driver: Driver,
}

impl StrategyConfig {
    /// Creates an unlabeled strategy.
    pub fn new(tour: TourConstruction, picking: PickingConstruction, driver: Driver) -> Self {
        Self {
            label: None,
            tour,
            picking,
            driver,
        }
    }

    /// Sets the display name.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Display name qualified by the strategy's parameters.
    pub fn name(&self) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => format!("{} + {} + {}", self.tour, self.picking, self.driver),
        }
    }

    /// Checks parameter ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a non-positive temperature, a
    /// fill ratio outside `(0, 1]`, a non-positive ladder factor or an LNS
    /// stall limit of 0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let TourConstruction::ProbabilisticNearestNeighbor { temperature } = self.tour {
            if !(temperature.is_finite() && temperature > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{}: temperature must be positive, got {temperature}",
                    self.name()
                )));
            }
        }
        if let PickingConstruction::AdaptiveFill { fill_ratio, ladder } = &self.picking {
            if !(*fill_ratio > 0.0 && *fill_ratio <= 1.0) {
                return Err(ConfigError::Invalid(format!(
                    "{}: fill ratio must be in (0, 1], got {fill_ratio}",
                    self.name()
                )));
            }
            if let Some(step) = ladder
                .steps
                .iter()
                .find(|step| !(step.factor.is_finite() && step.factor > 0.0))
            {
                return Err(ConfigError::Invalid(format!(
                    "{}: ladder factor must be positive, got {}",
                    self.name(),
                    step.factor
                )));
            }
        }
        if let Driver::Lns(params) = &self.driver {
            if params.stall_limit == 0 {
                return Err(ConfigError::Invalid(format!(
                    "{}: LNS stall limit must be at least 1",
                    self.name()
                )));
            }
        }
        Ok(())
    }
}

fn default_runs() -> usize {
    5
}

/// Experiment configuration: which strategies to run and how often.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Path of the TTP instance file, if the experiment names one.
    #[serde(default)]
    pub instance: Option<PathBuf>,
    /// Runs per strategy.
    #[serde(default = "default_runs")]
    pub runs: usize,
    /// Base seed; strategy `i` is seeded with `seed + i`.
    #[serde(default)]
    pub seed: u64,
    /// Strategies to compare; the standard line-up when empty.
    #[serde(default)]
    pub strategies: Vec<StrategyConfig>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            instance: None,
            runs: default_runs(),
            seed: 0,
            strategies: Vec::new(),
        }
    }
}

impl ExperimentConfig {
    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, contains invalid TOML or
    /// holds out-of-range parameters.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the number of runs per strategy.
    pub fn with_runs(mut self, runs: usize) -> Self {
        self.runs = runs;
        self
    }

    /// Sets the base seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Adds a strategy.
    pub fn with_strategy(mut self, strategy: StrategyConfig) -> Self {
        self.strategies.push(strategy);
        self
    }

    /// Checks the run count and every strategy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.runs == 0 {
            return Err(ConfigError::Invalid("runs must be at least 1".to_string()));
        }
        self.strategies.iter().try_for_each(StrategyConfig::validate)
    }

    /// Configured strategies, or the standard line-up when none are given.
    pub fn strategy_configs(&self) -> Vec<StrategyConfig> {
        if self.strategies.is_empty() {
            presets::line_up()
        } else {
            self.strategies.clone()
        }
    }

    /// Instantiates the strategies for `instance`, each with its own seed.
    pub fn build_strategies<'a>(&self, instance: &'a Instance) -> Vec<Strategy<'a>> {
        self.strategy_configs()
            .into_iter()
            .enumerate()
            .map(|(i, config)| Strategy::new(instance, config, self.seed.wrapping_add(i as u64)))
            .collect()
    }
}
