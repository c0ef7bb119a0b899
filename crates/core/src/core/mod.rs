//! Core BPE data structures.
//!
//! This module contains the vocabulary and the ordered merge rule set,
//! independent of how text is split into initial symbols.

pub mod merges;
pub mod vocab;

pub use merges::{MergeRule, MergeRules, Pair};
pub use vocab::{Token, Vocab, VocabR, Vocabulary};
