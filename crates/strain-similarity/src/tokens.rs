//! Canonical significant-token extraction.
//!
//! Pipeline per word: lowercase split → suffix stem → synonym
//! canonicalization → drop numerics, stopwords, and short tokens. Paraphrases
//! ("cures" / "healed", "coronavirus" / "covid-19", "3 days" / "72 hours")
//! end up sharing canonical vocabulary, which is what makes Jaccard usable
//! for variant detection at all.

use std::collections::BTreeSet;

use strain_core::constants::MIN_SIGNIFICANT_TOKEN_LEN;
use strain_core::lexicon;

/// Light suffix stemmer for plurals. Verb inflections are handled by the
/// candidate list in [`canonical_token`], not here.
pub fn stem(token: &str) -> String {
    if token.len() > 4 && token.ends_with("ies") {
        return format!("{}y", &token[..token.len() - 3]);
    }
    if token.len() > 4
        && (token.ends_with("ses")
            || token.ends_with("xes")
            || token.ends_with("zes")
            || token.ends_with("ches")
            || token.ends_with("shes"))
    {
        return token[..token.len() - 2].to_string();
    }
    if token.len() > 3
        && token.ends_with('s')
        && !token.ends_with("ss")
        && !token.ends_with("us")
        && !token.ends_with("is")
    {
        return token[..token.len() - 1].to_string();
    }
    token.to_string()
}

/// Candidate de-inflections tried against the synonym map, most-specific
/// first.
fn candidates(token: &str) -> Vec<String> {
    let mut out = vec![token.to_string(), stem(token)];
    if token.len() > 4 && token.ends_with("ing") {
        out.push(token[..token.len() - 3].to_string());
    }
    if token.len() > 3 && token.ends_with("ed") {
        out.push(token[..token.len() - 2].to_string());
    }
    if token.len() > 3 && token.ends_with('d') {
        out.push(token[..token.len() - 1].to_string());
    }
    out
}

/// Map one raw word to its canonical significant token, or `None` when the
/// word carries no lexical weight (numbers, stopwords, short tokens).
pub fn canonical_token(word: &str) -> Option<String> {
    // Numbers are the classifier's concern, not lexical overlap.
    if word.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    for candidate in candidates(word) {
        if let Some(canon) = lexicon::canonical(&candidate) {
            return Some(canon.to_string());
        }
    }
    let base = stem(word);
    if base.len() < MIN_SIGNIFICANT_TOKEN_LEN || lexicon::is_stopword(&base) {
        return None;
    }
    Some(base)
}

/// The canonical significant-token set for a text.
pub fn significant_tokens(text: &str) -> BTreeSet<String> {
    lexicon::words(text)
        .iter()
        .filter_map(|w| canonical_token(w))
        .collect()
}

/// Jaccard similarity of two token sets. 1.0 when both are empty: the
/// composite scorer rejects contentless significant-token sets before
/// calling this, so the both-empty case only arises on the raw-word
/// fallback path, where equal (even empty) word sets are identical texts.
pub fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    let intersection = a.intersection(b).count();
    let union = a.union(b).count();
    intersection as f64 / union as f64
}
