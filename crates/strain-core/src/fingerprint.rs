//! Content fingerprinting: an exact-match key (normalized blake3 hash) and a
//! coarse approximate-match key (semantic fingerprint).

use serde::{Deserialize, Serialize};

use crate::constants::{MIN_SIGNIFICANT_TOKEN_LEN, SEMANTIC_FINGERPRINT_TOKENS};
use crate::lexicon;

/// The two derived keys for a piece of content.
///
/// `content_hash` is an equality key: identical normalized text always yields
/// the same hash. `semantic_fingerprint` is only a bucketing key for
/// pre-filtering, never an equality key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentFingerprint {
    pub content_hash: String,
    pub semantic_fingerprint: String,
}

impl ContentFingerprint {
    /// Compute both keys for a text.
    pub fn of(text: &str) -> Self {
        Self {
            content_hash: content_hash(text),
            semantic_fingerprint: semantic_fingerprint(text),
        }
    }
}

/// Normalize text for exact-duplicate detection: lowercase, strip everything
/// that is not alphanumeric or whitespace, collapse whitespace runs.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped: String = lowered
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// blake3 hex hash of the normalized text.
pub fn content_hash(text: &str) -> String {
    blake3::hash(normalize(text).as_bytes()).to_hex().to_string()
}

/// blake3 hex hash of the sorted significant-token prefix.
///
/// Tokens of length < 4 and stopwords are discarded, the rest are sorted
/// lexicographically and the first 20 are hashed. Texts sharing most of their
/// significant vocabulary land in the same bucket.
pub fn semantic_fingerprint(text: &str) -> String {
    let mut tokens: Vec<String> = lexicon::words(text)
        .into_iter()
        .filter(|t| t.len() >= MIN_SIGNIFICANT_TOKEN_LEN && !lexicon::is_stopword(t))
        .collect();
    tokens.sort();
    tokens.dedup();
    tokens.truncate(SEMANTIC_FINGERPRINT_TOKENS);
    blake3::hash(tokens.join(" ").as_bytes()).to_hex().to_string()
}
