//! Espectro CLI - command-line driver for the signal analysis pipeline.

mod commands;
mod config;
mod export;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "espectro")]
#[command(author, version, about = "Espectro signal analysis CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate test signals
    Generate(commands::generate::GenerateArgs),

    /// Compute centered spectra of the canonical test signals
    Analyze(commands::analyze::AnalyzeArgs),

    /// Verify Fourier-transform properties empirically
    Properties(commands::properties::PropertiesArgs),

    /// Design a filter and apply it zero-phase to a noisy composite
    Filter(commands::filter::FilterArgs),

    /// Run a full pipeline from a TOML configuration
    Run(commands::run::RunArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => commands::generate::run(args),
        Commands::Analyze(args) => commands::analyze::run(args),
        Commands::Properties(args) => commands::properties::run(args),
        Commands::Filter(args) => commands::filter::run(args),
        Commands::Run(args) => commands::run::run(args),
    }
}
