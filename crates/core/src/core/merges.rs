//! Merge rule management for BPE.
//!
//! Merge rules are stored as token IDs, in the order they must be applied.
//! Position in the list is the only notion of priority: rule `i` is fully
//! applied before rule `i + 1` is considered.

use crate::core::vocab::{Token, Vocabulary};
use crate::error::{Result, TokenizerError};

/// A pair of token IDs that can be merged.
pub type Pair = (Token, Token);

/// Replace every adjacent `(left, right)` with `result`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MergeRule {
    pub left: Token,
    pub right: Token,
    /// Token whose string is `left` followed by `right`.
    pub result: Token,
}

impl MergeRule {
    #[inline]
    pub fn pair(&self) -> Pair {
        (self.left, self.right)
    }
}

/// Ordered collection of BPE merge rules.
#[derive(Debug, Clone, Default)]
pub struct MergeRules {
    rules: Vec<MergeRule>,
}

impl MergeRules {
    /// Compile merge descriptions of the form `"left right"`.
    ///
    /// Each description must split into exactly two parts on a single space;
    /// the parts and their concatenation must all be vocabulary entries.
    pub fn parse<I, S>(vocab: &Vocabulary, descriptions: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let descriptions = descriptions.into_iter();
        let mut rules = Vec::with_capacity(descriptions.size_hint().0);

        for (rank, description) in descriptions.enumerate() {
            let description = description.as_ref();
            let parts: Vec<&str> = description.split(' ').collect();
            let [left, right] = parts.as_slice() else {
                return Err(TokenizerError::MalformedMergeRule {
                    rank,
                    rule: description.to_string(),
                });
            };
            rules.push(compile(vocab, rank, left, right)?);
        }

        tracing::debug!(count = rules.len(), "compiled merge rules");
        Ok(Self { rules })
    }

    /// Compile merge rules given as already separated `(left, right)` pairs.
    ///
    /// The pairs are assigned ranks in order (0, 1, 2, ...).
    pub fn from_pairs<I, L, R>(vocab: &Vocabulary, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (L, R)>,
        L: AsRef<str>,
        R: AsRef<str>,
    {
        let rules = pairs
            .into_iter()
            .enumerate()
            .map(|(rank, (left, right))| compile(vocab, rank, left.as_ref(), right.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(count = rules.len(), "compiled merge rules");
        Ok(Self { rules })
    }

    /// Get the rule at a given rank.
    #[inline]
    pub fn get(&self, rank: usize) -> Option<&MergeRule> {
        self.rules.get(rank)
    }

    /// Iterate over the rules in application order.
    pub fn iter(&self) -> std::slice::Iter<'_, MergeRule> {
        self.rules.iter()
    }

    /// Get the number of merge rules.
    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if there are no merge rules.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'a> IntoIterator for &'a MergeRules {
    type Item = &'a MergeRule;
    type IntoIter = std::slice::Iter<'a, MergeRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn compile(vocab: &Vocabulary, rank: usize, left: &str, right: &str) -> Result<MergeRule> {
    let lookup = |token: &str| {
        vocab
            .get_id(token)
            .ok_or_else(|| TokenizerError::UnknownMergeToken {
                rank,
                token: token.to_string(),
            })
    };

    let left_id = lookup(left)?;
    let right_id = lookup(right)?;
    let merged = [left, right].concat();
    let result = lookup(merged.as_str())?;

    Ok(MergeRule {
        left: left_id,
        right: right_id,
        result,
    })
}
