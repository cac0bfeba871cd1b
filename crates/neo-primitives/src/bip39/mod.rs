//! BIP-39 mnemonic validation and word suggestion.
//!
//! Phrase parsing, the checksum, and entropy conversion are delegated to
//! the `bip39` crate over its English word list. This module adds
//! case-insensitive matching and prefix suggestions on top.

use ::bip39::{Language, Mnemonic};

use crate::PrimitivesError;

/// Upper bound on the number of words `suggest` returns.
pub const SUGGEST_MAX_COUNT: usize = 10;

fn word_list() -> &'static [&'static str; 2048] {
    Language::English.word_list()
}

/// Determine whether `word` is in the English word list, ignoring case.
pub fn is_valid_word(word: &str) -> bool {
    let lower = word.to_lowercase();
    word_list()
        .binary_search_by(|candidate| (*candidate).cmp(lower.as_str()))
        .is_ok()
}

/// Determine whether a mnemonic phrase is valid.
///
/// The phrase must have 12, 15, 18, 21 or 24 whitespace-separated words,
/// every word must be in the list, and the checksum carried by the last
/// word must match.
pub fn is_valid(mnemonic: &str) -> bool {
    entropy_from_phrase(mnemonic).is_ok()
}

/// Recover the entropy encoded by a mnemonic phrase. Words are matched
/// case-insensitively.
///
/// # Returns
/// The entropy bytes, or an error describing the first problem found
/// (word count, unknown word, or checksum).
pub fn entropy_from_phrase(mnemonic: &str) -> Result<Vec<u8>, PrimitivesError> {
    let lower = mnemonic.to_lowercase();
    let parsed = Mnemonic::parse_in_normalized(Language::English, &lower)
        .map_err(|e| PrimitivesError::InvalidMnemonic(e.to_string()))?;
    Ok(parsed.to_entropy())
}

/// Encode entropy as a mnemonic phrase.
///
/// # Arguments
/// * `entropy` - 16, 20, 24, 28 or 32 bytes.
pub fn phrase_from_entropy(entropy: &[u8]) -> Result<String, PrimitivesError> {
    let mnemonic = Mnemonic::from_entropy_in(Language::English, entropy)
        .map_err(|_| PrimitivesError::InvalidEntropyLength(entropy.len()))?;
    Ok(mnemonic.to_string())
}

/// Return word-list entries starting with `prefix`.
///
/// The prefix is trimmed and matched case-insensitively against the start
/// of each word. At most `SUGGEST_MAX_COUNT` words are returned, lowercase,
/// alphabetical, and separated by single spaces. An empty prefix or no
/// match yields an empty string.
pub fn suggest(prefix: &str) -> String {
    let prefix = prefix.trim().to_lowercase();
    if prefix.is_empty() {
        return String::new();
    }
    word_list()
        .iter()
        .filter(|w| w.starts_with(prefix.as_str()))
        .take(SUGGEST_MAX_COUNT)
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}
