//! Save functionality for tokenizers.
//!
//! Writes a minimal `tokenizer.json` that [`TokenizerLoader`] reads back
//! into identical tables.
//!
//! [`TokenizerLoader`]: super::TokenizerLoader

use super::format::{HuggingFaceFormat, HuggingFaceModel, HuggingFaceVocab, MergeRecord};
use super::resolve_path;
use llamatok_core::{MergeRules, Result, TokenizerError, Vocabulary};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Tokenizer saver - handles saving tokenizer artifacts.
pub struct TokenizerSaver<'a> {
    /// Vocabulary reference
    vocab: &'a Vocabulary,
    /// Merge rules reference
    merges: &'a MergeRules,
}

impl<'a> TokenizerSaver<'a> {
    /// Create a new tokenizer saver.
    pub fn new(vocab: &'a Vocabulary, merges: &'a MergeRules) -> Self {
        Self { vocab, merges }
    }

    /// Save the tokenizer as `tokenizer.json`.
    ///
    /// # Arguments
    /// * `path` - A `.json` file path, or a directory to create it in
    pub fn save(&self, path: &Path) -> Result<()> {
        let file_path = resolve_path(path);
        if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|err| TokenizerError::Io {
                path: parent.to_path_buf(),
                err,
            })?;
        }

        let file = File::create(&file_path).map_err(|err| TokenizerError::Io {
            path: file_path.clone(),
            err,
        })?;

        let writer = BufWriter::new(file);
        let serialized = self.serialize()?;
        serde_json::to_writer_pretty(writer, &serialized)
            .map_err(|e| TokenizerError::Save(format!("Failed to serialize tokenizer: {}", e)))?;

        tracing::info!(path = %file_path.display(), "saved tokenizer");
        Ok(())
    }

    /// Serialize the tokenizer to a structure.
    fn serialize(&self) -> Result<HuggingFaceFormat> {
        let vocab = HuggingFaceVocab(
            self.vocab
                .iter()
                .map(|(id, token)| (token.to_string(), id))
                .collect(),
        );

        let pairs = self
            .merges
            .iter()
            .map(|rule| -> Result<(&'a str, &'a str)> {
                Ok((self.token(rule.left)?, self.token(rule.right)?))
            })
            .collect::<Result<Vec<_>>>()?;

        // A part containing a space cannot be written as "left right"; the
        // whole list then switches to the array form.
        let pair_form = pairs
            .iter()
            .any(|(left, right)| left.contains(' ') || right.contains(' '));

        let merges = pairs
            .into_iter()
            .map(|(left, right)| {
                if pair_form {
                    MergeRecord::Pair(left.to_string(), right.to_string())
                } else {
                    MergeRecord::Legacy(format!("{} {}", left, right))
                }
            })
            .collect();

        Ok(HuggingFaceFormat {
            version: Some("1.0".to_string()),
            model: HuggingFaceModel {
                model_type: "BPE".to_string(),
                vocab,
                merges,
            },
        })
    }

    fn token(&self, id: u32) -> Result<&'a str> {
        self.vocab.get_token(id).ok_or_else(|| {
            TokenizerError::Save(format!(
                "Merge rule refers to token ID {} outside the vocabulary",
                id
            ))
        })
    }
}
