use crate::config::EvolutionParams;
use crate::consts::{PROGRESS_INTERVAL, TOURNAMENT_SIZE};
use crate::error::{TfResult, TypeForgeError};
use crate::layouts::Layout;
use crate::optimizer::crossover::crossover_single_point;
use crate::optimizer::initialization::random_population;
use crate::optimizer::mutation::swap_mutation;
use crate::optimizer::selection::{rank_by_fitness, tournament_select};
use crate::optimizer::template::LayoutTemplate;
use crate::scorer::Scorer;
use rayon::prelude::*;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct OptimizationOptions {
    pub generations: usize,
    pub population_size: usize,
    pub mutation_rate: f64,
    pub crossover_rate: f64,
    pub elitism: usize,
    pub tournament_size: usize,
    pub seed: u64,
}

impl From<&EvolutionParams> for OptimizationOptions {
    fn from(p: &EvolutionParams) -> Self {
        Self {
            generations: p.generations,
            population_size: p.population,
            mutation_rate: p.mutation_rate,
            crossover_rate: p.crossover_rate,
            elitism: p.elitism,
            tournament_size: TOURNAMENT_SIZE,
            seed: p.seed,
        }
    }
}

impl Default for OptimizationOptions {
    fn default() -> Self {
        Self::from(&EvolutionParams::default())
    }
}

impl OptimizationOptions {
    fn validate(&self) -> TfResult<()> {
        if self.tournament_size == 0 {
            return Err(TypeForgeError::Config(
                "tournament_size must be at least 1".to_string(),
            ));
        }
        EvolutionParams {
            generations: self.generations,
            population: self.population_size,
            mutation_rate: self.mutation_rate,
            crossover_rate: self.crossover_rate,
            elitism: self.elitism,
            seed: self.seed,
        }
        .validate()
    }
}

#[derive(Debug, Clone)]
pub struct OptimizationResult {
    pub layout: Layout,
    pub fitness: f64,
    pub generations_run: usize,
    /// Best-ever fitness after each evaluated generation.
    pub history: Vec<f64>,
    pub cancelled: bool,
}

/// Receives `(message, percent)` updates during a run.
/// Boolean return value indicates if the search should continue (true) or abort (false).
/// Only generation reports act on the return value.
pub trait ProgressCallback: Send + Sync {
    fn on_progress(&self, message: &str, percent: Option<f32>) -> bool;
}

impl<F> ProgressCallback for F
where
    F: Fn(&str, Option<f32>) -> bool + Send + Sync,
{
    fn on_progress(&self, message: &str, percent: Option<f32>) -> bool {
        self(message, percent)
    }
}

pub struct SilentProgress;

impl ProgressCallback for SilentProgress {
    fn on_progress(&self, _message: &str, _percent: Option<f32>) -> bool {
        true
    }
}

pub struct Optimizer {
    scorer: Arc<Scorer>,
    template: LayoutTemplate,
    options: OptimizationOptions,
}

impl Optimizer {
    pub fn new(
        scorer: Arc<Scorer>,
        template: LayoutTemplate,
        options: OptimizationOptions,
    ) -> TfResult<Self> {
        options.validate()?;
        Ok(Self {
            scorer,
            template,
            options,
        })
    }

    pub fn options(&self) -> &OptimizationOptions {
        &self.options
    }

    pub fn run<CB: ProgressCallback>(&self, callback: &CB) -> OptimizationResult {
        let opts = &self.options;
        let mut rng = fastrand::Rng::with_seed(opts.seed);

        // 1. Initialize Population
        let mut population = random_population(&self.template, opts.population_size, &mut rng);
        info!(
            "Initialized {} layouts (seed {})",
            population.len(),
            opts.seed
        );
        callback.on_progress("Population initialized", Some(15.0));
        callback.on_progress(
            &format!("Evolving for {} generations", opts.generations),
            Some(20.0),
        );

        // 2. Global State
        let mut best_layout = population[0];
        let mut best_fitness = f64::NEG_INFINITY;
        let mut history = Vec::with_capacity(opts.generations);
        let mut cancelled = false;

        // 3. Main Loop
        for generation in 0..opts.generations {
            // A. Evaluate in Parallel (scorer is shared read-only)
            let fitness: Vec<f64> = population
                .par_iter()
                .map(|layout| self.scorer.fitness(layout))
                .collect();

            // B. Track Best-Ever
            for (layout, &f) in population.iter().zip(&fitness) {
                if f > best_fitness {
                    best_fitness = f;
                    best_layout = *layout;
                }
            }
            history.push(best_fitness);

            let completed = generation + 1;
            let is_last = completed == opts.generations;

            // C. Report Progress
            if generation % PROGRESS_INTERVAL == 0 || is_last {
                let percent = 20.0 + 75.0 * completed as f32 / opts.generations as f32;
                debug!(
                    "Gen {:4} | Best: {:.2} | Layout: {}",
                    completed, best_fitness, best_layout
                );
                let keep_going = callback.on_progress(
                    &format!(
                        "Generation {}/{}: best fitness {:.2}",
                        completed, opts.generations, best_fitness
                    ),
                    Some(percent),
                );
                if !keep_going {
                    info!("Run cancelled after generation {}", completed);
                    cancelled = true;
                    break;
                }
            }

            // D. Breed (offspring of the last generation would never be scored)
            if !is_last {
                population = self.breed(&population, &fitness, &mut rng);
            }
        }

        OptimizationResult {
            layout: best_layout,
            fitness: best_fitness,
            generations_run: history.len(),
            history,
            cancelled,
        }
    }

    /// Elites first, then tournament-selected offspring until the population is full.
    fn breed(&self, population: &[Layout], fitness: &[f64], rng: &mut fastrand::Rng) -> Vec<Layout> {
        let opts = &self.options;
        let size = population.len();
        let mut next = Vec::with_capacity(size);

        next.extend(
            rank_by_fitness(fitness)
                .into_iter()
                .take(opts.elitism)
                .map(|i| population[i]),
        );

        while next.len() < size {
            let a = tournament_select(fitness, opts.tournament_size, rng);
            let b = tournament_select(fitness, opts.tournament_size, rng);

            let (mut c1, mut c2) = if rng.f64() < opts.crossover_rate {
                crossover_single_point(&population[a], &population[b], &self.template, rng)
            } else {
                (population[a], population[b])
            };

            if rng.f64() < opts.mutation_rate {
                swap_mutation(&mut c1, &self.template, rng);
            }
            if rng.f64() < opts.mutation_rate {
                swap_mutation(&mut c2, &self.template, rng);
            }

            next.push(c1);
            if next.len() < size {
                next.push(c2);
            }
        }

        next
    }
}
