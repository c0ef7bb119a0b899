//! Load functionality for pre-built tokenizers.
//!
//! This module reads a `tokenizer.json` artifact and hands the parsed
//! vocabulary and merge list to the core for validation.

use super::format::{HuggingFaceFormat, HuggingFaceModel, MergeRecord};
use super::resolve_path;
use llamatok_core::{MergeRules, Result, TokenizerError, Vocabulary};
use std::path::Path;

/// Tokenizer loader - handles loading tokenizer artifacts.
pub struct TokenizerLoader;

impl TokenizerLoader {
    /// Load a tokenizer from a `tokenizer.json` file.
    ///
    /// # Arguments
    /// * `path` - The file itself, or a directory containing `tokenizer.json`
    pub fn load(path: &Path) -> Result<(Vocabulary, MergeRules)> {
        let file_path = resolve_path(path);
        let content = std::fs::read_to_string(&file_path).map_err(|err| TokenizerError::Io {
            path: file_path.clone(),
            err,
        })?;

        let (vocab, merges) = Self::from_json(&content)?;
        tracing::info!(
            path = %file_path.display(),
            vocab_size = vocab.len(),
            merges = merges.len(),
            "loaded tokenizer"
        );
        Ok((vocab, merges))
    }

    /// Parse `tokenizer.json` content.
    pub fn from_json(json: &str) -> Result<(Vocabulary, MergeRules)> {
        let data: HuggingFaceFormat = serde_json::from_str(json)?;
        Self::deserialize(data.model)
    }

    /// Build validated tables from the parsed `model` section.
    fn deserialize(model: HuggingFaceModel) -> Result<(Vocabulary, MergeRules)> {
        if model.model_type != "BPE" {
            tracing::warn!(model_type = %model.model_type, "model type is not BPE, reading it as BPE");
        }

        let vocab = Vocabulary::from_map(model.vocab.0)?;

        let legacy = model
            .merges
            .iter()
            .all(|merge| matches!(merge, MergeRecord::Legacy(_)));

        let merges = if legacy {
            MergeRules::parse(
                &vocab,
                model.merges.into_iter().filter_map(|merge| match merge {
                    MergeRecord::Legacy(description) => Some(description),
                    MergeRecord::Pair(..) => None,
                }),
            )?
        } else {
            let pairs = model
                .merges
                .into_iter()
                .map(|merge| match merge {
                    MergeRecord::Pair(left, right) => Ok((left, right)),
                    MergeRecord::Legacy(description) => Err(TokenizerError::Load(format!(
                        "Mixed merge formats: '{}' is a string among array merges",
                        description
                    ))),
                })
                .collect::<Result<Vec<_>>>()?;
            MergeRules::from_pairs(&vocab, pairs)?
        };

        Ok((vocab, merges))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PICKLES_JSON: &str = r#"{
        "version": "1.0",
        "added_tokens": [],
        "model": {
            "type": "BPE",
            "vocab": {
                "▁": 0, "p": 1, "i": 2, "c": 3, "k": 4, "l": 5, "e": 6, "d": 7, "s": 8,
                "▁p": 9, "ic": 10, "ick": 11, "ed": 12, "▁pick": 13, "▁picked": 14,
                "le": 15, "led": 16, "les": 17
            },
            "merges": ["▁ p", "i c", "ic k", "▁p ick", "e d", "▁pick ed", "l e", "le d", "le s"]
        }
    }"#;

    #[test]
    fn test_from_json() {
        let (vocab, merges) = TokenizerLoader::from_json(PICKLES_JSON).unwrap();

        assert_eq!(vocab.len(), 18);
        assert_eq!(merges.len(), 9);
        assert_eq!(vocab.get_id("▁picked"), Some(14));
        assert_eq!(merges.get(3).map(|rule| rule.result), Some(13));
    }

    #[test]
    fn test_pair_merges() {
        let json = r#"{"model": {"vocab": {"a": 0, "b": 1, "ab": 2}, "merges": [["a", "b"]]}}"#;
        let (_, merges) = TokenizerLoader::from_json(json).unwrap();
        assert_eq!(merges.get(0).map(|rule| rule.result), Some(2));
    }

    #[test]
    fn test_mixed_merge_formats() {
        let json = r#"{"model": {"vocab": {"a": 0, "b": 1, "ab": 2}, "merges": [["a", "b"], "a b"]}}"#;
        let err = TokenizerLoader::from_json(json).unwrap_err();
        assert!(matches!(err, TokenizerError::Load(_)));
    }

    #[test]
    fn test_gap_in_ids() {
        let json = r#"{"model": {"vocab": {"a": 0, "b": 1, "c": 3}, "merges": []}}"#;
        let err = TokenizerLoader::from_json(json).unwrap_err();
        assert!(matches!(err, TokenizerError::MalformedVocabulary { .. }));
    }

    #[test]
    fn test_malformed_merge() {
        let json = r#"{"model": {"vocab": {"a": 0, "b": 1, "ab": 2}, "merges": ["ab"]}}"#;
        let err = TokenizerLoader::from_json(json).unwrap_err();
        assert!(matches!(err, TokenizerError::MalformedMergeRule { .. }));
    }

    #[test]
    fn test_invalid_json() {
        let err = TokenizerLoader::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TokenizerError::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("llamatok_test_missing/tokenizer.json");
        let err = TokenizerLoader::load(&path).unwrap_err();
        assert!(matches!(err, TokenizerError::Io { .. }));
    }

    #[test]
    fn test_load_from_directory() {
        let temp_dir = std::env::temp_dir().join("llamatok_test_load_dir");
        std::fs::create_dir_all(&temp_dir).unwrap();
        std::fs::write(temp_dir.join("tokenizer.json"), PICKLES_JSON).unwrap();

        let (vocab, merges) = TokenizerLoader::load(&temp_dir).unwrap();
        assert_eq!(vocab.len(), 18);
        assert_eq!(merges.len(), 9);

        // Cleanup
        std::fs::remove_dir_all(temp_dir).ok();
    }
}
