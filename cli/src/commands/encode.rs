//! Encode command implementation.

use clap::Parser;

/// Encode command arguments.
#[derive(Parser)]
pub struct EncodeCommand {
    /// Path to tokenizer.json (or a directory containing it)
    #[arg(short, long)]
    pub tokenizer: String,

    /// Text to encode ("-" reads stdin)
    #[arg(short, long)]
    pub input: String,

    /// Print token strings instead of IDs
    #[arg(short, long, default_value_t = false)]
    pub pieces: bool,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<String>,
}

use anyhow::{Context, Result as AnyhowResult};
use llamatok_tokenizer::Tokenizer;
use std::path::Path;

pub fn run(cmd: EncodeCommand) -> AnyhowResult<()> {
    // Load tokenizer
    let tokenizer_path = Path::new(&cmd.tokenizer);
    let tokenizer = Tokenizer::load(tokenizer_path)?;

    let input_text = super::read_input(cmd.input).context("Failed to read input")?;

    // Encode text
    let encoding = tokenizer.encode(&input_text)?;

    // Output
    let output = if cmd.pieces {
        tokenizer.decode_pieces(&encoding.ids)?.join(" ")
    } else {
        let ids_str: Vec<String> = encoding.ids.iter().map(|id| id.to_string()).collect();
        ids_str.join(" ")
    };

    match &cmd.output {
        Some(path) => {
            std::fs::write(path, &output).with_context(|| format!("Failed to write {}", path))?;
            println!("Encoded {} tokens to {}", encoding.len(), path);
        }
        None => {
            println!("{}", output);
        }
    }

    Ok(())
}
