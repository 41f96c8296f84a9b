use crate::error::{TfResult, TypeForgeError};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub evolution: EvolutionParams,
    #[command(flatten)]
    pub fitness: FitnessWeights,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionParams {
    #[arg(long, default_value_t = 300)]
    pub generations: usize,
    #[arg(long, default_value_t = 200)]
    pub population: usize,
    #[arg(long, default_value_t = 0.1)]
    pub mutation_rate: f64,
    #[arg(long, default_value_t = 0.7)]
    pub crossover_rate: f64,
    #[arg(long, default_value_t = 5)]
    pub elitism: usize,
    #[arg(long, default_value_t = 1234)]
    pub seed: u64,
}

impl Default for EvolutionParams {
    fn default() -> Self {
        Self {
            generations: 300,
            population: 200,
            mutation_rate: 0.1,
            crossover_rate: 0.7,
            elitism: 5,
            seed: 1234,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FitnessWeights {
    /// Added per bigram occurrence for each of its characters on the home row.
    #[arg(long, default_value_t = 2.0)]
    pub home_row_bonus: f64,
    /// Subtracted per bigram occurrence for each grid step between its keys.
    #[arg(long, default_value_t = 0.1)]
    pub distance_penalty: f64,
}

impl Default for FitnessWeights {
    fn default() -> Self {
        Self {
            home_row_bonus: 2.0,
            distance_penalty: 0.1,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> TfResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            TypeForgeError::Config(format!("Failed to read config '{}': {}", path.display(), e))
        })?;
        let config: Config = serde_json::from_str(&content)?;
        config.evolution.validate()?;
        Ok(config)
    }

    /// Overlays values the user typed on the command line onto `self`,
    /// leaving file-provided values alone for flags left at their defaults.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident, $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(evolution, generations);
        update_if_present!(evolution, population);
        update_if_present!(evolution, mutation_rate);
        update_if_present!(evolution, crossover_rate);
        update_if_present!(evolution, elitism);
        update_if_present!(evolution, seed);

        update_if_present!(fitness, home_row_bonus);
        update_if_present!(fitness, distance_penalty);
    }
}

impl EvolutionParams {
    pub fn validate(&self) -> TfResult<()> {
        if self.generations == 0 {
            return Err(TypeForgeError::Config(
                "generations must be at least 1".to_string(),
            ));
        }
        if self.population == 0 {
            return Err(TypeForgeError::Config(
                "population must be at least 1".to_string(),
            ));
        }
        if self.elitism > self.population {
            return Err(TypeForgeError::Config(format!(
                "elitism ({}) cannot exceed population ({})",
                self.elitism, self.population
            )));
        }
        for (name, rate) in [
            ("mutation_rate", self.mutation_rate),
            ("crossover_rate", self.crossover_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(TypeForgeError::Config(format!(
                    "{} must be within [0, 1], got {}",
                    name, rate
                )));
            }
        }
        Ok(())
    }
}
