//! Encoding of text into token IDs and back.
//!
//! - `metaspace`: the word-boundary marker convention
//! - `char_level`: scalar-value segmentation plus fixed-order merges

pub mod char_level;
pub mod metaspace;

pub use char_level::CharLevelEncoder;
pub use metaspace::WORD_BOUNDARY;
