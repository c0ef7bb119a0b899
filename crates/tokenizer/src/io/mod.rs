//! Serialization and deserialization for BPE models.
//!
//! This module reads and writes the `model` section of HuggingFace
//! `tokenizer.json` files.

pub mod format;
pub mod load;
pub mod save;

pub use format::{HuggingFaceFormat, HuggingFaceModel, MergeRecord};
pub use load::TokenizerLoader;
pub use save::TokenizerSaver;

use std::path::{Path, PathBuf};

/// File name used when a directory is given instead of a file.
pub const TOKENIZER_FILE: &str = "tokenizer.json";

/// A `.json` path names the file itself; anything else is a directory
/// holding [`TOKENIZER_FILE`].
pub fn resolve_path(path: &Path) -> PathBuf {
    match path.extension() {
        Some(ext) if ext == "json" => path.to_path_buf(),
        _ => path.join(TOKENIZER_FILE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_path() {
        assert_eq!(
            resolve_path(Path::new("models/llama/tokenizer.json")),
            PathBuf::from("models/llama/tokenizer.json")
        );
        assert_eq!(
            resolve_path(Path::new("models/llama")),
            PathBuf::from("models/llama/tokenizer.json")
        );
    }
}
