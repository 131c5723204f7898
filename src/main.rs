use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod error;
mod flatten;
mod render;
mod resolve;
mod route;
mod stream;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "rda")]
#[command(about = "RDA analyzes rendered Deckhand documents", long_about = None)]
struct Cli {
    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Flatten a set of rendered documents to folders, one folder per schema.
    Flatten {
        /// Multi-document YAML file to flatten.
        input: PathBuf,

        /// Root directory for output [default: current directory].
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("rda={}", level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!("initializing rda");

    match cli.cmd {
        Commands::Flatten { input, output } => {
            let config = flatten::FlattenConfig {
                input,
                output_root: output,
            };
            let report = flatten::flatten(&config)?;
            tracing::debug!(
                input = %report.input.display(),
                documents = report.documents_seen(),
                errors = report.errors.len(),
                "flatten finished"
            );
        }
    }

    Ok(())
}
