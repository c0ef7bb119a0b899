//! Decode command implementation.

use clap::Parser;

/// Decode command arguments.
#[derive(Parser)]
pub struct DecodeCommand {
    /// Path to tokenizer.json (or a directory containing it)
    #[arg(short, long)]
    pub tokenizer: String,

    /// Token IDs to decode, comma or whitespace separated ("-" reads stdin)
    #[arg(short = 'i', long)]
    pub tokens: String,
}

use anyhow::{Context, Result as AnyhowResult};
use llamatok_tokenizer::{Token, Tokenizer};
use std::path::Path;

pub fn run(cmd: DecodeCommand) -> AnyhowResult<()> {
    // Load tokenizer
    let tokenizer_path = Path::new(&cmd.tokenizer);
    let tokenizer = Tokenizer::load(tokenizer_path)?;

    let tokens = super::read_input(cmd.tokens).context("Failed to read token IDs")?;
    let ids = parse_ids(&tokens)?;

    // Decode
    let text = tokenizer.decode(&ids)?;

    println!("{}", text);

    Ok(())
}

fn parse_ids(tokens: &str) -> AnyhowResult<Vec<Token>> {
    tokens
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<Token>()
                .with_context(|| format!("Invalid token ID '{}'", s))
        })
        .collect()
}
