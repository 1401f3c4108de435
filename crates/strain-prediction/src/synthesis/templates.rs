//! Illustrative content rewrites attached to predictions. These are
//! heuristic templates, not generated text; each is deterministic for a
//! given RNG state.

use std::sync::OnceLock;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use regex::Regex;

use strain_core::models::SemanticCluster;

const ESCALATION_FACTORS: &[u64] = &[2, 3, 5, 10];

const URGENCY_PREFIXES: &[&str] = &["BREAKING:", "URGENT:", "WARNING:"];

fn quantity_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+(?:\.\d+)?").expect("static regex"))
}

/// Digits glued to a name ("COVID-19", "5G") are not quantities. Same
/// standalone rule the change scanner applies.
fn is_standalone(text: &str, m: &regex::Match<'_>) -> bool {
    let attached = |c: Option<char>| {
        matches!(c, Some(c) if c.is_ascii_alphanumeric() || c == '-' || c == '.')
    };
    !attached(text[..m.start()].chars().next_back()) && !attached(text[m.end()..].chars().next())
}

/// Multiply every standalone quantity in the text by one escalation factor.
/// Returns `None` when the text carries no quantities to escalate.
pub fn escalate_numbers(text: &str, rng: &mut StdRng) -> Option<String> {
    if !quantity_re().find_iter(text).any(|m| is_standalone(text, &m)) {
        return None;
    }
    let factor = *ESCALATION_FACTORS.choose(rng).unwrap_or(&2);

    let mut out = String::with_capacity(text.len() + 8);
    let mut last = 0;
    for m in quantity_re().find_iter(text) {
        if !is_standalone(text, &m) {
            continue;
        }
        out.push_str(&text[last..m.start()]);
        if let Ok(n) = m.as_str().parse::<u64>() {
            out.push_str(&n.saturating_mul(factor).to_string());
        } else if let Ok(f) = m.as_str().parse::<f64>() {
            out.push_str(&(f * factor as f64).to_string());
        } else {
            out.push_str(m.as_str());
        }
        last = m.end();
    }
    out.push_str(&text[last..]);
    Some(out)
}

/// Prepend an urgency marker and a share demand.
pub fn urgency_prefix(text: &str, rng: &mut StdRng) -> String {
    let prefix = URGENCY_PREFIXES.choose(rng).unwrap_or(&"BREAKING:");
    format!("{prefix} {text} SHARE BEFORE THIS IS DELETED!")
}

/// Rewrite the text into a short-form platform shape: truncated, tagged
/// with the family's topical cluster.
pub fn platform_adapt(text: &str, cluster: SemanticCluster, rng: &mut StdRng) -> String {
    let tags: &[&str] = &["#truth", "#wakeup", "#sharethis"];
    let tag = tags.choose(rng).unwrap_or(&"#truth");
    let lead: String = text.chars().take(180).collect();
    format!("{lead} #{} {tag}", cluster.as_str())
}
