//! Llamatok-core - Core BPE algorithm implementation
//!
//! This crate provides the data structures and the merge pipeline for a
//! Llama-style BPE tokenizer whose vocabulary and merge rules are given,
//! never learned.
//!
//! # Features
//!
//! - Vocabulary with dense ids, validated at construction
//! - Ordered merge rules applied once each, in list order
//! - `▁` word-boundary handling isolated in one module
//! - Error handling with detailed diagnostics
//!
//! # Example
//!
//! ```rust
//! use llamatok_core::{CharLevelEncoder, MergeRules, Vocabulary};
//!
//! let vocab = Vocabulary::from_map([("▁", 0), ("h", 1), ("i", 2), ("hi", 3)])?;
//! let merges = MergeRules::parse(&vocab, ["h i"])?;
//! let encoder = CharLevelEncoder::new(vocab, merges);
//!
//! let ids = encoder.encode("hi")?;
//! assert_eq!(ids, vec![0, 3]);
//! assert_eq!(encoder.decode(&ids)?, "hi");
//! # Ok::<(), llamatok_core::TokenizerError>(())
//! ```

pub mod error;
pub use error::{Result, TokenizerError};

// Core BPE data structures
pub mod core;
pub use crate::core::{MergeRule, MergeRules, Pair, Token, Vocab, VocabR, Vocabulary};

// Encoding
pub mod encoding;
pub use encoding::{CharLevelEncoder, WORD_BOUNDARY};
