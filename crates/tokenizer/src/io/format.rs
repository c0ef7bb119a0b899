//! Format definitions for tokenizer serialization.
//!
//! Only the `model.vocab` and `model.merges` parts of a HuggingFace
//! `tokenizer.json` are read; every other field is ignored.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;

/// Root of `tokenizer.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HuggingFaceFormat {
    /// Format version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// The BPE model: vocab and merges
    pub model: HuggingFaceModel,
}

/// `model` section of `tokenizer.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HuggingFaceModel {
    /// Only `"BPE"` is meaningful here.
    #[serde(rename = "type", default = "default_model_type")]
    pub model_type: String,
    /// Token string -> ID mapping
    pub vocab: HuggingFaceVocab,
    /// Merge rules in priority order
    pub merges: Vec<MergeRecord>,
}

fn default_model_type() -> String {
    "BPE".to_string()
}

/// Vocabulary entries, written out in id order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "HashMap<String, u32>")]
pub struct HuggingFaceVocab(pub Vec<(String, u32)>);

impl From<HashMap<String, u32>> for HuggingFaceVocab {
    fn from(map: HashMap<String, u32>) -> Self {
        let mut entries: Vec<_> = map.into_iter().collect();
        entries.sort_by_key(|&(_, id)| id);
        Self(entries)
    }
}

impl Serialize for HuggingFaceVocab {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (token, id) in &self.0 {
            map.serialize_entry(token, id)?;
        }
        map.end()
    }
}

/// A single merge record.
///
/// Two spellings exist in the wild:
///   - Legacy: `"a b"` (space-separated string)
///   - Pair: `["a", "b"]`, needed when a part contains a space
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MergeRecord {
    Legacy(String),
    Pair(String, String),
}
