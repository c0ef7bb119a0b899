//! Llamatok-tokenizer - High-level tokenizer API
//!
//! This crate loads a Llama-family `tokenizer.json` (vocabulary plus ordered
//! merge rules) and exposes encode/decode through a single `Tokenizer`.
//!
//! # Features
//!
//! - Loading and saving the `model` section of HuggingFace `tokenizer.json`
//! - Legacy `"a b"` and array `["a", "b"]` merge spellings
//! - Builder for in-memory vocabularies
//! - Immutable, thread-shareable tokenizer
//!
//! # Example
//!
//! ```rust
//! use llamatok_tokenizer::Tokenizer;
//!
//! let tokenizer = Tokenizer::builder()
//!     .vocab([("▁", 0), ("h", 1), ("i", 2), ("hi", 3), ("▁hi", 4)])
//!     .merges(["h i", "▁ hi"])
//!     .build()?;
//!
//! let encoding = tokenizer.encode("hi hi")?;
//! assert_eq!(encoding.ids, vec![4, 4]);
//! assert_eq!(tokenizer.decode(&encoding.ids)?, "hi hi");
//! # Ok::<(), llamatok_tokenizer::TokenizerError>(())
//! ```

// Re-export core types
pub use llamatok_core::{MergeRule, MergeRules, Result, Token, TokenizerError, Vocabulary};

// Tokenizer API
pub mod tokenizer;
pub use tokenizer::{Encoding, Tokenizer, TokenizerBuilder};

// IO/Serialization
pub mod io;
pub use io::{HuggingFaceFormat, TokenizerLoader, TokenizerSaver};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
