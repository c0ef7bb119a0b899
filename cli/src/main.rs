//! Llamatok CLI - Command-line interface for the Llama-style BPE tokenizer.
//!
//! This is the main entry point for the `llamatok` command-line tool.

mod commands;

use clap::{Parser, Subcommand};
use commands::{BenchmarkCommand, DecodeCommand, EncodeCommand, InspectCommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "llamatok")]
#[command(about = "Encode and decode text with a Llama-family BPE tokenizer", long_about = None)]
#[command(version)]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode text to token IDs
    Encode(EncodeCommand),
    /// Decode token IDs back to text
    Decode(DecodeCommand),
    /// Show vocabulary and merge rule statistics
    Inspect(InspectCommand),
    /// Benchmark encoding performance
    Benchmark(BenchmarkCommand),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Encode(cmd) => commands::encode::run(cmd)?,
        Commands::Decode(cmd) => commands::decode::run(cmd)?,
        Commands::Inspect(cmd) => commands::inspect::run(cmd)?,
        Commands::Benchmark(cmd) => commands::benchmark::run(cmd)?,
    }

    Ok(())
}
