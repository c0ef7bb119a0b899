//! Inspect command implementation.

use clap::Parser;

/// Inspect command arguments.
#[derive(Parser)]
pub struct InspectCommand {
    /// Path to tokenizer.json (or a directory containing it)
    #[arg(short, long)]
    pub tokenizer: String,
}

use anyhow::Result as AnyhowResult;
use llamatok_tokenizer::Tokenizer;
use std::path::Path;

pub fn run(cmd: InspectCommand) -> AnyhowResult<()> {
    let tokenizer = Tokenizer::load(Path::new(&cmd.tokenizer))?;

    let singletons = tokenizer
        .vocab()
        .iter()
        .filter(|(_, token)| token.chars().count() == 1)
        .count();

    println!("Vocabulary size: {}", tokenizer.vocab_size());
    println!("  Single-character tokens: {}", singletons);
    println!("Merge rules: {}", tokenizer.merges().len());
    match tokenizer.word_boundary_id() {
        Some(id) => println!("Word-boundary token: {}", id),
        None => println!("Word-boundary token: missing (any non-empty input will fail to encode)"),
    }

    Ok(())
}
