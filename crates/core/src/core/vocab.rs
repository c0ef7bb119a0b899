//! Vocabulary storage and lookup.
//!
//! The forward mapping is an `AHashMap` keyed by `CompactString`; since ids are
//! dense from zero, the reverse mapping is a plain vector indexed by id.

use crate::error::{Result, TokenizerError};
use ahash::AHashMap;
use compact_str::CompactString;

/// A token id. Always in `[0, vocabulary size)`.
pub type Token = u32;

/// Forward mapping: token string -> ID
pub type Vocab = AHashMap<CompactString, Token>;

/// Reverse mapping: ID -> token string
pub type VocabR = Vec<CompactString>;

/// Vocabulary with forward and reverse mappings.
///
/// Immutable once built; the two mappings are exact inverses of each other.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    vocab: Vocab,
    vocab_r: VocabR,
}

impl Vocabulary {
    /// Build a vocabulary from a token -> id mapping.
    ///
    /// Fails with [`TokenizerError::MalformedVocabulary`] unless the ids are
    /// exactly `{0, ..., n - 1}` where `n` is the number of entries.
    pub fn from_map<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Token)>,
        S: AsRef<str>,
    {
        let entries: Vec<(S, Token)> = entries.into_iter().collect();
        let size = entries.len();

        let mut slots: Vec<Option<CompactString>> = vec![None; size];
        let mut vocab = Vocab::with_capacity(size);

        for (token, id) in entries {
            let token = CompactString::new(token.as_ref());
            let slot = slots
                .get_mut(id as usize)
                .filter(|slot| slot.is_none())
                .ok_or(TokenizerError::MalformedVocabulary { id, size })?;
            *slot = Some(token.clone());

            // A repeated key would leave a hole in the id range.
            if vocab.insert(token, id).is_some() {
                return Err(TokenizerError::MalformedVocabulary { id, size });
            }
        }

        // n distinct in-range ids fill every slot.
        let vocab_r: VocabR = slots.into_iter().flatten().collect();
        debug_assert_eq!(vocab_r.len(), size);

        tracing::debug!(size, "built vocabulary");
        Ok(Self { vocab, vocab_r })
    }

    /// Get the ID for a token string.
    #[inline]
    pub fn get_id(&self, token: &str) -> Option<Token> {
        self.vocab.get(token).copied()
    }

    /// Get the token string for an ID.
    #[inline]
    pub fn get_token(&self, id: Token) -> Option<&str> {
        self.vocab_r.get(id as usize).map(|s| s.as_str())
    }

    /// Get the size of the vocabulary.
    #[inline]
    pub fn len(&self) -> usize {
        self.vocab_r.len()
    }

    /// Check if the vocabulary is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vocab_r.is_empty()
    }

    /// Iterate over `(id, token)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (Token, &str)> + '_ {
        self.vocab_r
            .iter()
            .enumerate()
            .map(|(id, token)| (id as Token, token.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_map() {
        let vocab = Vocabulary::from_map([("hello", 1), ("world", 0)]).unwrap();

        assert_eq!(vocab.len(), 2);
        assert_eq!(vocab.get_id("hello"), Some(1));
        assert_eq!(vocab.get_id("world"), Some(0));
        assert_eq!(vocab.get_token(0), Some("world"));
        assert_eq!(vocab.get_token(1), Some("hello"));
        assert_eq!(vocab.get_token(2), None);
        assert_eq!(vocab.get_id("missing"), None);
    }

    #[test]
    fn test_gap_is_malformed() {
        let err = Vocabulary::from_map([("a", 0), ("b", 1), ("c", 3)]).unwrap_err();
        assert!(matches!(
            err,
            TokenizerError::MalformedVocabulary { id: 3, size: 3 }
        ));
    }

    #[test]
    fn test_duplicate_id_is_malformed() {
        let err = Vocabulary::from_map([("a", 0), ("b", 0)]).unwrap_err();
        assert!(matches!(err, TokenizerError::MalformedVocabulary { .. }));
    }

    #[test]
    fn test_duplicate_key_is_malformed() {
        let err = Vocabulary::from_map([("a", 0), ("a", 1)]).unwrap_err();
        assert!(matches!(
            err,
            TokenizerError::MalformedVocabulary { id: 1, size: 2 }
        ));
    }

    #[test]
    fn test_empty() {
        let vocab = Vocabulary::from_map(Vec::<(String, Token)>::new()).unwrap();
        assert!(vocab.is_empty());
        assert_eq!(vocab.iter().count(), 0);
    }

    #[test]
    fn test_iter_in_id_order() {
        let vocab = Vocabulary::from_map([("c", 2), ("a", 0), ("b", 1)]).unwrap();
        let tokens: Vec<_> = vocab.iter().collect();
        assert_eq!(tokens, vec![(0, "a"), (1, "b"), (2, "c")]);
    }
}
