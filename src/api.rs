use crate::config::{Config, FitnessWeights};
use crate::consts::{LAYOUT_LEN, QWERTY_BASE};
use crate::error::{TfResult, TypeForgeError};
use crate::layouts::{resolve_layout, Layout};
use crate::optimizer::{LayoutTemplate, OptimizationOptions, Optimizer, ProgressCallback};
use crate::scorer::{ScoreDetails, Scorer};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, OnceLock};
use tracing::{info, warn};

/// The long-lived resource the optimizer runs in: the validated base
/// template, built once on first use and kept for the host's lifetime.
pub struct OptimizerEnvironment {
    base: String,
    template: OnceLock<LayoutTemplate>,
}

impl Default for OptimizerEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl OptimizerEnvironment {
    pub fn new() -> Self {
        Self::with_base(QWERTY_BASE)
    }

    /// `base` may be a known layout name or a literal 45-char layout.
    pub fn with_base(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            template: OnceLock::new(),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.template.get().is_some()
    }

    /// Idempotent: the first successful call builds the template, later
    /// calls return it. A failed call leaves the environment uninitialized.
    pub fn ensure_initialized(&self) -> TfResult<&LayoutTemplate> {
        if let Some(template) = self.template.get() {
            return Ok(template);
        }

        let base = resolve_layout(&self.base)
            .map_err(|e| TypeForgeError::Environment(format!("invalid base layout: {}", e)))?;
        let template = LayoutTemplate::new(base)
            .map_err(|e| TypeForgeError::Environment(format!("invalid base layout: {}", e)))?;

        info!(
            "Optimizer environment ready: {} letter slots, {} fixed slots",
            template.letter_slots().len(),
            template.fixed_slots().len()
        );
        Ok(self.template.get_or_init(|| template))
    }
}

/// What the host gets back from a generation request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum GenerationOutcome {
    #[serde(rename_all = "camelCase")]
    Success {
        layout: String,
        fitness: f64,
        generations_run: usize,
        cancelled: bool,
    },
    Failure { message: String },
}

impl GenerationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn into_result(self) -> Result<String, String> {
        match self {
            Self::Success { layout, .. } => Ok(layout),
            Self::Failure { message } => Err(message),
        }
    }
}

/// Service: Evolve a layout for `corpus`.
///
/// Never panics and never retries; every failure comes back as
/// [`GenerationOutcome::Failure`]. Rerunning with the same corpus and seed
/// reproduces the same layout.
pub fn generate_layout<CB: ProgressCallback>(
    env: &OptimizerEnvironment,
    corpus: &str,
    config: &Config,
    callback: &CB,
) -> GenerationOutcome {
    match run_generation(env, corpus, config, callback) {
        Ok(outcome) => outcome,
        Err(e) => {
            warn!("Layout generation failed: {}", e);
            GenerationOutcome::Failure {
                message: e.to_string(),
            }
        }
    }
}

fn run_generation<CB: ProgressCallback>(
    env: &OptimizerEnvironment,
    corpus: &str,
    config: &Config,
    callback: &CB,
) -> TfResult<GenerationOutcome> {
    callback.on_progress("Initializing optimizer", Some(0.0));
    let template = env.ensure_initialized()?.clone();

    // Counted once per invocation; every evaluation shares it read-only.
    let scorer = Arc::new(Scorer::from_corpus(corpus, config.fitness.clone()));
    info!(
        "Analyzed corpus: {} distinct bigrams, {} occurrences",
        scorer.counts.len(),
        scorer.counts.total()
    );
    callback.on_progress(
        &format!("Analyzed {} distinct bigrams", scorer.counts.len()),
        Some(10.0),
    );

    let optimizer = Optimizer::new(
        scorer,
        template.clone(),
        OptimizationOptions::from(&config.evolution),
    )?;
    let result = optimizer.run(callback);

    let layout = result.layout.to_string();
    if layout.chars().count() != LAYOUT_LEN || !template.conforms(&result.layout) {
        return Ok(GenerationOutcome::Failure {
            message: format!(
                "optimizer produced an invalid layout '{}' (expected {} characters)",
                layout, LAYOUT_LEN
            ),
        });
    }

    callback.on_progress("Layout generation complete", Some(100.0));
    info!("Best layout {} (fitness {:.2})", layout, result.fitness);

    Ok(GenerationOutcome::Success {
        layout,
        fitness: result.fitness,
        generations_run: result.generations_run,
        cancelled: result.cancelled,
    })
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub layout_name: String,
    pub layout: Layout,
    pub score: ScoreDetails,
}

/// Service: Score an existing layout (name or 45-char string) against a corpus.
pub fn score_layout(
    layout_spec: &str,
    corpus: &str,
    weights: FitnessWeights,
) -> TfResult<ValidationResult> {
    let scorer = Scorer::from_corpus(corpus, weights);
    let layout = resolve_layout(layout_spec)?;
    Ok(validation_result(layout_spec, layout, &scorer))
}

/// Service: Score several layouts against one scorer, so the corpus is
/// counted once for the whole batch.
pub fn score_layouts<S: AsRef<str>>(
    layout_specs: &[S],
    scorer: &Scorer,
) -> TfResult<Vec<ValidationResult>> {
    layout_specs
        .iter()
        .map(|spec| {
            let spec = spec.as_ref();
            Ok(validation_result(spec, resolve_layout(spec)?, scorer))
        })
        .collect()
}

fn validation_result(name: &str, layout: Layout, scorer: &Scorer) -> ValidationResult {
    ValidationResult {
        layout_name: name.to_string(),
        layout,
        score: scorer.score_details(&layout),
    }
}
