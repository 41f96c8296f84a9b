use super::read_corpus;
use crate::reports;
use clap::{ArgMatches, Args};
use std::fs;
use std::path::PathBuf;
use tracing::info;
use typeforge::api::{generate_layout, GenerationOutcome, OptimizerEnvironment};
use typeforge::config::Config;
use typeforge::consts::QWERTY_BASE;
use typeforge::error::{TfResult, TypeForgeError};

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub config: Config,

    /// Corpus text file
    #[arg(long)]
    pub corpus: PathBuf,

    /// Base template: a known layout name or a 45-char layout string
    #[arg(long, default_value = QWERTY_BASE)]
    pub base: String,

    /// JSON config file; flags given on the command line override it
    #[arg(long = "config")]
    pub config_file: Option<PathBuf>,

    /// Write the outcome as JSON
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: GenerateArgs, matches: &ArgMatches) -> TfResult<()> {
    let config = match &args.config_file {
        Some(path) => {
            info!("Loading config from {}", path.display());
            let mut file_config = Config::load_from_file(path)?;
            file_config.merge_from_cli(&args.config, matches);
            file_config
        }
        None => args.config.clone(),
    };
    config.evolution.validate()?;

    let corpus = read_corpus(&args.corpus)?;
    let env = OptimizerEnvironment::with_base(args.base.clone());

    let progress = |msg: &str, pct: Option<f32>| {
        match pct {
            Some(p) => info!("[{:>5.1}%] {}", p, msg),
            None => info!("{}", msg),
        }
        true
    };
    let outcome = generate_layout(&env, &corpus, &config, &progress);

    if let Some(path) = &args.output {
        fs::write(path, serde_json::to_string_pretty(&outcome)?)?;
        info!("Wrote outcome to {}", path.display());
    }

    match outcome {
        GenerationOutcome::Success {
            layout,
            fitness,
            generations_run,
            ..
        } => {
            reports::print_layout_grid("generated", layout.as_bytes());
            println!("{}", layout);
            println!("fitness {:.2} after {} generations", fitness, generations_run);
            Ok(())
        }
        GenerationOutcome::Failure { message } => Err(TypeForgeError::Environment(message)),
    }
}
