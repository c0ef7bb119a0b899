//! Character-level BPE encoding.
//!
//! Text is split into Unicode scalar values, each mapped to its singleton
//! token, and the merge rules are then applied in list order: one greedy
//! left-to-right pass per rule. There is no frequency tracking and no
//! priority queue; the order of the rule list is the whole policy.

use crate::core::{MergeRule, MergeRules, Token, Vocabulary};
use crate::encoding::metaspace;
use crate::error::{Result, TokenizerError};
use std::sync::Arc;

/// Character-level BPE encoder.
///
/// Holds only immutable state, so one encoder can serve any number of
/// threads at once.
#[derive(Debug, Clone)]
pub struct CharLevelEncoder {
    /// Vocabulary for token lookups in both directions
    vocab: Arc<Vocabulary>,
    /// Merge rules in application order
    merges: Arc<MergeRules>,
}

impl CharLevelEncoder {
    /// Create a new character-level encoder.
    pub fn new(vocab: Vocabulary, merges: MergeRules) -> Self {
        Self::with_arcs(Arc::new(vocab), Arc::new(merges))
    }

    /// Create an encoder over already shared tables.
    pub fn with_arcs(vocab: Arc<Vocabulary>, merges: Arc<MergeRules>) -> Self {
        Self { vocab, merges }
    }

    /// Get the vocabulary.
    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Get the merge rules.
    pub fn merges(&self) -> &MergeRules {
        &self.merges
    }

    /// Encode text to token IDs.
    ///
    /// Fails with [`TokenizerError::UnknownSymbol`] on the first character
    /// (after space substitution) that is not a singleton token. There is no
    /// byte fallback.
    pub fn encode(&self, text: &str) -> Result<Vec<Token>> {
        let mut tokens = self.initial_tokens(text)?;
        self.apply_bpe_merges(&mut tokens);
        Ok(tokens)
    }

    /// Map every symbol to its singleton token.
    fn initial_tokens(&self, text: &str) -> Result<Vec<Token>> {
        let mut buf = [0u8; 4];
        metaspace::pre_tokenize(text)
            .into_iter()
            .map(|c| {
                self.vocab
                    .get_id(c.encode_utf8(&mut buf))
                    .ok_or(TokenizerError::UnknownSymbol(c))
            })
            .collect()
    }

    /// Apply every merge rule once, in order.
    fn apply_bpe_merges(&self, tokens: &mut Vec<Token>) {
        for rule in self.merges.iter() {
            if tokens.len() < 2 {
                break;
            }
            merge_pass(tokens, rule);
        }
    }

    /// Decode token IDs back to text.
    pub fn decode(&self, ids: &[Token]) -> Result<String> {
        let text: String = self.decode_pieces(ids)?.concat();
        Ok(metaspace::post_process(&text))
    }

    /// Look up the raw string of every token, markers left in place.
    pub fn decode_pieces(&self, ids: &[Token]) -> Result<Vec<&str>> {
        ids.iter()
            .map(|&id| {
                self.vocab
                    .get_token(id)
                    .ok_or(TokenizerError::UnknownTokenId(id))
            })
            .collect()
    }
}

/// One left-to-right pass of a single rule, compacting `tokens` in place.
///
/// Matches never overlap, and a freshly merged token is not looked at again
/// by the same rule.
fn merge_pass(tokens: &mut Vec<Token>, rule: &MergeRule) {
    let len = tokens.len();
    let mut read = 0;
    let mut write = 0;

    while read < len {
        if read + 1 < len && tokens[read] == rule.left && tokens[read + 1] == rule.right {
            tokens[write] = rule.result;
            read += 2;
        } else {
            tokens[write] = tokens[read];
            read += 1;
        }
        write += 1;
    }

    tokens.truncate(write);
}

#[cfg(test)]
mod tests {
    use super::*;

    const PICKLES_VOCAB: [(&str, Token); 18] = [
        ("▁", 0),
        ("p", 1),
        ("i", 2),
        ("c", 3),
        ("k", 4),
        ("l", 5),
        ("e", 6),
        ("d", 7),
        ("s", 8),
        ("▁p", 9),
        ("ic", 10),
        ("ick", 11),
        ("ed", 12),
        ("▁pick", 13),
        ("▁picked", 14),
        ("le", 15),
        ("led", 16),
        ("les", 17),
    ];

    const PICKLES_MERGES: [&str; 9] = [
        "▁ p", "i c", "ic k", "▁p ick", "e d", "▁pick ed", "l e", "le d", "le s",
    ];

    fn pickles_encoder() -> CharLevelEncoder {
        encoder_with(&PICKLES_MERGES)
    }

    fn encoder_with(merges: &[&str]) -> CharLevelEncoder {
        let vocab = Vocabulary::from_map(PICKLES_VOCAB).unwrap();
        let merges = MergeRules::parse(&vocab, merges).unwrap();
        CharLevelEncoder::new(vocab, merges)
    }

    #[test]
    fn test_decode_picked_pickled_pickles() {
        let encoder = pickles_encoder();
        let text = encoder.decode(&[14, 13, 16, 13, 17]).unwrap();
        assert_eq!(text, "picked pickled pickles");
    }

    #[test]
    fn test_encode_picked_pickled_pickles() {
        let encoder = pickles_encoder();
        let ids = encoder.encode("picked pickled pickles").unwrap();
        // "e d" runs before "l e", so "pickled" ends in "l" + "ed", not "led".
        assert_eq!(ids, vec![14, 13, 5, 12, 13, 17]);
        assert_eq!(encoder.decode(&ids).unwrap(), "picked pickled pickles");
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let encoder = pickles_encoder();
        for text in ["pickles", "picked pickles", "sick deck", "  lid", "pie "] {
            let ids = encoder.encode(text).unwrap();
            assert_eq!(encoder.decode(&ids).unwrap(), text);
        }
    }

    #[test]
    fn test_empty() {
        let encoder = pickles_encoder();
        assert!(encoder.encode("").unwrap().is_empty());
        assert_eq!(encoder.decode(&[]).unwrap(), "");
    }

    #[test]
    fn test_boundary_markers() {
        let encoder = pickles_encoder();
        assert_eq!(encoder.decode(&[0]).unwrap(), "");
        assert_eq!(encoder.decode(&[0, 0]).unwrap(), " ");
        assert_eq!(encoder.encode(" ").unwrap(), vec![0, 0]);
    }

    #[test]
    fn test_unknown_symbol() {
        let encoder = pickles_encoder();
        let err = encoder.encode("pickle jar").unwrap_err();
        assert!(matches!(err, TokenizerError::UnknownSymbol('j')));
    }

    #[test]
    fn test_unknown_token_id() {
        let encoder = pickles_encoder();
        let err = encoder.decode(&[14, 18]).unwrap_err();
        assert!(matches!(err, TokenizerError::UnknownTokenId(18)));
    }

    #[test]
    fn test_merge_order_changes_result() {
        // "le d" before "e d" yields "led"; the other way round "ed" wins.
        let led_first = encoder_with(&["l e", "le d", "e d"]);
        let ed_first = encoder_with(&["e d", "l e", "le d"]);

        assert_eq!(led_first.encode("led").unwrap(), vec![0, 16]);
        assert_eq!(ed_first.encode("led").unwrap(), vec![0, 5, 12]);
        assert_eq!(led_first.decode(&[0, 16]).unwrap(), "led");
        assert_eq!(ed_first.decode(&[0, 5, 12]).unwrap(), "led");
    }

    #[test]
    fn test_merge_pass_is_non_overlapping() {
        let mut tokens = vec![1, 1, 1, 2, 1, 1];
        let rule = MergeRule {
            left: 1,
            right: 1,
            result: 9,
        };
        merge_pass(&mut tokens, &rule);
        assert_eq!(tokens, vec![9, 1, 2, 9]);
    }

    #[test]
    fn test_merged_token_not_reconsidered_by_same_rule() {
        // The merged 3 must not pair with the next 3 during the same pass.
        let mut tokens = vec![3, 3, 3, 3];
        let rule = MergeRule {
            left: 3,
            right: 3,
            result: 3,
        };
        merge_pass(&mut tokens, &rule);
        assert_eq!(tokens, vec![3, 3]);
    }

    #[test]
    fn test_shared_across_threads() {
        let encoder = pickles_encoder();
        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    let ids = encoder.encode("picked pickled pickles").unwrap();
                    assert_eq!(ids, vec![14, 13, 5, 12, 13, 17]);
                });
            }
        });
    }
}
