use super::read_corpus;
use crate::reports;
use clap::Args;
use std::path::PathBuf;
use tracing::info;
use typeforge::api::score_layouts;
use typeforge::config::FitnessWeights;
use typeforge::error::TfResult;
use typeforge::layouts::get_all_layouts;
use typeforge::scorer::Scorer;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub weights: FitnessWeights,

    /// Corpus text file
    #[arg(long)]
    pub corpus: PathBuf,

    /// Known layout name or 45-char layout string (default: every known layout)
    #[arg(short, long)]
    pub layout: Option<String>,

    /// Number of most frequent bigrams to list
    #[arg(long, default_value_t = 10)]
    pub top: usize,
}

pub fn run(args: ScoreArgs) -> TfResult<()> {
    let corpus = read_corpus(&args.corpus)?;
    let scorer = Scorer::from_corpus(&corpus, args.weights.clone());
    info!(
        "Analyzed corpus: {} distinct bigrams, {} occurrences",
        scorer.counts.len(),
        scorer.counts.total()
    );

    let specs: Vec<String> = match &args.layout {
        Some(spec) => vec![spec.clone()],
        None => get_all_layouts()
            .into_iter()
            .map(|(name, _)| name.to_string())
            .collect(),
    };

    let mut results = score_layouts(&specs, &scorer)?;

    for r in &results {
        reports::print_layout_grid(&r.layout_name, r.layout.as_bytes());
    }

    results.sort_by(|a, b| b.score.fitness.total_cmp(&a.score.fitness));
    reports::print_bigram_report(&scorer.counts.top(args.top));
    reports::print_fitness_report(&results);
    Ok(())
}
