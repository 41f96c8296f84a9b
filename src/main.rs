use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use tracing::Level;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evolve a layout for a corpus
    Generate(cmd::generate::GenerateArgs),
    /// Score known layouts (or one given layout) against a corpus
    Score(cmd::score::ScoreArgs),
    /// Replay a keystroke log through a typing session
    Replay(cmd::replay::ReplayArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Generate(args) => {
            let Some(sub_matches) = matches.subcommand_matches("generate") else {
                unreachable!("clap matched the generate subcommand");
            };
            cmd::generate::run(args, sub_matches)
        }
        Commands::Score(args) => cmd::score::run(args),
        Commands::Replay(args) => cmd::replay::run(args),
    };

    if let Err(e) = result {
        tracing::error!("{}", e);
        process::exit(1);
    }
}
