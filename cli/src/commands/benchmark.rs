//! Benchmark command implementation.

use clap::Parser;

/// Benchmark command arguments.
#[derive(Parser)]
pub struct BenchmarkCommand {
    /// Path to tokenizer.json (or a directory containing it)
    #[arg(short, long)]
    pub tokenizer: String,

    /// Path to input text file for benchmarking
    #[arg(short, long)]
    pub input: String,

    /// Number of iterations to run
    #[arg(short = 'n', long, default_value_t = 100)]
    pub iterations: usize,
}

use anyhow::{ensure, Context, Result as AnyhowResult};
use llamatok_tokenizer::Tokenizer;
use std::fs;
use std::path::Path;
use std::time::Instant;

pub fn run(cmd: BenchmarkCommand) -> AnyhowResult<()> {
    ensure!(cmd.iterations > 0, "iterations must be at least 1");

    // Load tokenizer
    let tokenizer_path = Path::new(&cmd.tokenizer);
    let tokenizer = Tokenizer::load(tokenizer_path)?;

    // Read input text
    let text = fs::read_to_string(&cmd.input)
        .with_context(|| format!("Failed to read {}", cmd.input))?;

    println!("Benchmarking encoding...");
    println!("  Text length: {} bytes", text.len());
    println!("  Iterations: {}", cmd.iterations);
    println!();

    // Warmup; also surfaces unknown symbols before timing starts
    let token_count = tokenizer.encode(&text)?.len();

    // Benchmark
    let start = Instant::now();
    for _ in 0..cmd.iterations {
        tokenizer.encode(&text)?;
    }
    let elapsed = start.elapsed();

    let avg_secs = elapsed.as_secs_f64() / cmd.iterations as f64;

    println!("Results:");
    println!("  Tokens per encode: {}", token_count);
    println!("  Total time: {:.2}s", elapsed.as_secs_f64());
    println!("  Average time: {:.3}ms", avg_secs * 1000.0);
    if avg_secs > 0.0 {
        println!("  Throughput: {:.0} tokens/s", token_count as f64 / avg_secs);
    }

    Ok(())
}
