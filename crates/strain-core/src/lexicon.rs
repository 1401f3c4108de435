//! Fixed keyword sets used across the engine: semantic-cluster vocabularies,
//! stopwords, urgency/location/time/authority lists, and the synonym
//! canonicalization map.
//!
//! These are hand-maintained domain lists, not learned vocabularies. Matching
//! is whole-word over lowercased alphanumeric tokens.

/// Common English stopwords plus short filler words that survive the length
/// filter.
pub const STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "been", "but", "by", "can", "could", "did", "do",
    "does", "for", "from", "had", "has", "have", "her", "his", "how", "into", "is", "it", "its",
    "just", "more", "most", "not", "of", "on", "or", "our", "out", "over", "she", "should",
    "some", "such", "than", "that", "the", "their", "them", "then", "there", "these", "they",
    "this", "those", "to", "very", "was", "were", "what", "when", "where", "which", "while",
    "who", "why", "will", "with", "would", "you", "your",
];

/// Medical / health misinformation vocabulary.
pub const MEDICAL_KEYWORDS: &[&str] = &[
    "covid", "virus", "vaccine", "cure", "treatment", "doctor", "hospital", "medicine",
    "disease", "infection", "symptom", "immune", "health", "cancer", "drug", "pandemic",
    "outbreak", "pill", "remedy", "therapy",
];

/// Disaster / emergency vocabulary.
pub const DISASTER_KEYWORDS: &[&str] = &[
    "earthquake", "flood", "hurricane", "tornado", "wildfire", "tsunami", "storm", "disaster",
    "evacuation", "emergency", "collapse", "explosion", "radiation", "contamination", "blackout",
];

/// Financial scare / scheme vocabulary.
pub const FINANCIAL_KEYWORDS: &[&str] = &[
    "bank", "money", "stock", "market", "crash", "bitcoin", "crypto", "investment", "economy",
    "inflation", "debt", "bankrupt", "savings", "currency", "gold", "recession",
];

/// Political vocabulary.
pub const POLITICAL_KEYWORDS: &[&str] = &[
    "election", "vote", "government", "president", "congress", "senator", "ballot", "fraud",
    "policy", "immigration", "border", "party", "campaign", "corruption", "regime",
];

/// Conspiracy-theory vocabulary.
pub const CONSPIRACY_KEYWORDS: &[&str] = &[
    "secret", "coverup", "agenda", "elite", "illuminati", "chemtrail", "microchip",
    "surveillance", "hoax", "hidden", "truth", "exposed", "control", "shadow", "deep",
];

/// Urgency / emotional-intensity markers. Counted per occurrence; an increase
/// from parent to child indicates emotional amplification.
pub const URGENCY_KEYWORDS: &[&str] = &[
    "urgent", "breaking", "warning", "alert", "shocking", "emergency", "immediately", "danger",
    "dangerous", "deadly", "critical", "terrifying", "horrifying", "must", "share", "everyone",
    "now", "hurry", "panic", "catastrophic",
];

/// Location references, generic and proper.
pub const LOCATION_KEYWORDS: &[&str] = &[
    "city", "town", "state", "country", "local", "nationwide", "worldwide", "global", "region",
    "america", "american", "china", "chinese", "europe", "european", "india", "russia", "texas",
    "california", "florida", "york", "london", "wuhan", "county", "downtown",
];

/// Time references.
pub const TIME_KEYWORDS: &[&str] = &[
    "today", "tomorrow", "yesterday", "tonight", "soon", "now", "immediately", "recently",
    "days", "hours", "weeks", "months", "minutes", "morning", "evening", "midnight", "deadline",
];

/// Authority / source-attribution markers.
pub const AUTHORITY_KEYWORDS: &[&str] = &[
    "scientists", "doctors", "experts", "government", "official", "officials", "study",
    "studies", "research", "researchers", "report", "sources", "insider", "whistleblower",
    "cdc", "who", "fbi", "nasa", "university", "professor",
];

/// Canonicalization map applied after stemming: inflections and common
/// domain synonyms collapse onto one token so paraphrases share vocabulary.
/// Values are the canonical tokens; all are long enough to survive the
/// significance length filter.
pub const SYNONYM_CANON: &[(&str, &str)] = &[
    // Healing verbs.
    ("cure", "cure"),
    ("heal", "cure"),
    ("treat", "cure"),
    ("remedy", "cure"),
    ("fix", "cure"),
    // The virus itself.
    ("covid", "covid"),
    ("covid19", "covid"),
    ("coronavirus", "covid"),
    ("corona", "covid"),
    ("sars", "covid"),
    // Time units collapse to one marker; the classifier still sees the raw
    // numbers and time words.
    ("day", "timespan"),
    ("hour", "timespan"),
    ("week", "timespan"),
    ("month", "timespan"),
    ("minute", "timespan"),
    // Totality adverbs.
    ("completely", "completely"),
    ("fully", "completely"),
    ("totally", "completely"),
    ("entirely", "completely"),
    // Falsity nouns.
    ("hoax", "hoax"),
    ("scam", "hoax"),
    ("fraud", "hoax"),
    ("fake", "hoax"),
];

/// Look up the canonical form of a stemmed token, if one exists.
pub fn canonical(stemmed: &str) -> Option<&'static str> {
    SYNONYM_CANON
        .iter()
        .find(|(from, _)| *from == stemmed)
        .map(|(_, to)| *to)
}

/// Whole-word stopword check over a lowercased token.
pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(&token)
}

/// Lowercased alphanumeric word split. The basis for every keyword count in
/// the engine.
pub fn words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Count occurrences of any keyword from `set` among `words`.
pub fn count_hits(words: &[String], set: &[&str]) -> usize {
    words.iter().filter(|w| set.contains(&w.as_str())).count()
}

/// Count occurrences directly against raw text.
pub fn count_hits_in(text: &str, set: &[&str]) -> usize {
    count_hits(&words(text), set)
}
