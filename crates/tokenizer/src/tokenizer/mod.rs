//! Main tokenizer implementation.
//!
//! This module provides the high-level `Tokenizer` struct that ties the
//! vocabulary, the merge rules and the character-level encoder together.

use crate::io::{TokenizerLoader, TokenizerSaver};
use llamatok_core::{CharLevelEncoder, MergeRules, Result, Token, Vocabulary, WORD_BOUNDARY};
use std::path::Path;

/// Builder for creating a tokenizer from in-memory tables.
#[derive(Debug, Clone, Default)]
pub struct TokenizerBuilder {
    vocab: Vec<(String, Token)>,
    merges: Vec<String>,
}

impl TokenizerBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the token -> id mapping.
    pub fn vocab<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Token)>,
        S: Into<String>,
    {
        self.vocab = entries
            .into_iter()
            .map(|(token, id)| (token.into(), id))
            .collect();
        self
    }

    /// Set the merge descriptions (`"left right"`), highest priority first.
    pub fn merges<I, S>(mut self, descriptions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.merges = descriptions.into_iter().map(Into::into).collect();
        self
    }

    /// Validate the tables and build the tokenizer.
    pub fn build(self) -> Result<Tokenizer> {
        let vocab = Vocabulary::from_map(self.vocab)?;
        let merges = MergeRules::parse(&vocab, &self.merges)?;
        Ok(Tokenizer::new(vocab, merges))
    }
}

/// Main tokenizer struct.
///
/// Immutable after construction; share it by reference (or `Arc`) across
/// threads and call [`encode`](Self::encode)/[`decode`](Self::decode) freely.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    encoder: CharLevelEncoder,
}

impl Tokenizer {
    /// Create a tokenizer from validated tables.
    pub fn new(vocab: Vocabulary, merges: MergeRules) -> Self {
        Self {
            encoder: CharLevelEncoder::new(vocab, merges),
        }
    }

    /// Create a tokenizer builder.
    pub fn builder() -> TokenizerBuilder {
        TokenizerBuilder::new()
    }

    /// Encode text to token IDs.
    ///
    /// Fails with `UnknownSymbol` if any character lacks a singleton token.
    pub fn encode(&self, text: &str) -> Result<Encoding> {
        let ids = self.encoder.encode(text)?;
        tracing::trace!(chars = text.chars().count(), tokens = ids.len(), "encoded");

        Ok(Encoding {
            ids,
            text: text.to_string(),
        })
    }

    /// Decode token IDs back to text.
    ///
    /// Fails with `UnknownTokenId` if any ID is outside the vocabulary.
    pub fn decode(&self, ids: &[Token]) -> Result<String> {
        self.encoder.decode(ids)
    }

    /// Raw token strings for the given IDs, word-boundary markers included.
    pub fn decode_pieces(&self, ids: &[Token]) -> Result<Vec<&str>> {
        self.encoder.decode_pieces(ids)
    }

    /// Get the ID for a token string.
    pub fn token_to_id(&self, token: &str) -> Option<Token> {
        self.encoder.vocab().get_id(token)
    }

    /// Get the token string for an ID.
    pub fn id_to_token(&self, id: Token) -> Option<&str> {
        self.encoder.vocab().get_token(id)
    }

    /// ID of the `▁` word-boundary token, if the vocabulary has one.
    pub fn word_boundary_id(&self) -> Option<Token> {
        let mut buf = [0u8; 4];
        self.token_to_id(WORD_BOUNDARY.encode_utf8(&mut buf))
    }

    /// Get the vocabulary size.
    pub fn vocab_size(&self) -> usize {
        self.encoder.vocab().len()
    }

    /// Get a reference to the vocabulary.
    pub fn vocab(&self) -> &Vocabulary {
        self.encoder.vocab()
    }

    /// Get a reference to the merge rules.
    pub fn merges(&self) -> &MergeRules {
        self.encoder.merges()
    }

    /// Save the tokenizer as `tokenizer.json`.
    ///
    /// # Arguments
    /// * `path` - A `.json` file path, or a directory
    pub fn save(&self, path: &Path) -> Result<()> {
        TokenizerSaver::new(self.vocab(), self.merges()).save(path)
    }

    /// Load a tokenizer from `tokenizer.json`.
    ///
    /// # Arguments
    /// * `path` - A `.json` file path, or a directory containing `tokenizer.json`
    pub fn load(path: &Path) -> Result<Self> {
        let (vocab, merges) = TokenizerLoader::load(path)?;
        Ok(Self::new(vocab, merges))
    }
}

impl std::str::FromStr for Tokenizer {
    type Err = llamatok_core::TokenizerError;

    /// Parse `tokenizer.json` content.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (vocab, merges) = TokenizerLoader::from_json(s)?;
        Ok(Self::new(vocab, merges))
    }
}

/// Result of encoding text.
#[derive(Debug, Clone)]
pub struct Encoding {
    /// Token IDs
    pub ids: Vec<Token>,
    /// Original text
    pub text: String,
}

impl Encoding {
    /// Get the number of tokens.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if the encoding is empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
