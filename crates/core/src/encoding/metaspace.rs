//! Word-boundary marker handling.
//!
//! Llama-family vocabularies spell a space as `▁` (U+2581) and every word
//! starts with one. The marker is an ordinary vocabulary entry; only the two
//! functions here know it is special.

/// The word-boundary marker.
pub const WORD_BOUNDARY: char = '\u{2581}';

/// Split text into scalar values, spelling spaces as the marker.
///
/// Non-empty input gets one leading marker. Empty input stays empty.
pub fn pre_tokenize(text: &str) -> Vec<char> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut symbols = Vec::with_capacity(text.len() + 1);
    symbols.push(WORD_BOUNDARY);
    symbols.extend(
        text.chars()
            .map(|c| if c == ' ' { WORD_BOUNDARY } else { c }),
    );
    symbols
}

/// Turn concatenated token strings back into text.
///
/// Exactly one leading marker is dropped; every other marker becomes a space.
pub fn post_process(text: &str) -> String {
    let text = text.strip_prefix(WORD_BOUNDARY).unwrap_or(text);
    text.replace(WORD_BOUNDARY, " ")
}
