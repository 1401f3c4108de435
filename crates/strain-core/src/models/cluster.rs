use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lexicon;

/// Topical keyword buckets used to boost similarity and label families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticCluster {
    Medical,
    Disaster,
    Financial,
    Political,
    Conspiracy,
    General,
}

impl SemanticCluster {
    /// The five keyword-backed clusters (`General` has no vocabulary).
    pub const KEYED: [SemanticCluster; 5] = [
        SemanticCluster::Medical,
        SemanticCluster::Disaster,
        SemanticCluster::Financial,
        SemanticCluster::Political,
        SemanticCluster::Conspiracy,
    ];

    /// Keyword set backing this cluster.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            SemanticCluster::Medical => lexicon::MEDICAL_KEYWORDS,
            SemanticCluster::Disaster => lexicon::DISASTER_KEYWORDS,
            SemanticCluster::Financial => lexicon::FINANCIAL_KEYWORDS,
            SemanticCluster::Political => lexicon::POLITICAL_KEYWORDS,
            SemanticCluster::Conspiracy => lexicon::CONSPIRACY_KEYWORDS,
            SemanticCluster::General => &[],
        }
    }

    /// Number of keyword hits for this cluster in `text`.
    pub fn hits(self, text: &str) -> usize {
        lexicon::count_hits_in(text, self.keywords())
    }

    /// Assign the best-matching cluster for a text: highest hit count wins,
    /// ties broken by declaration order, `General` when nothing matches.
    pub fn assign(text: &str) -> SemanticCluster {
        let words = lexicon::words(text);
        let mut best = (SemanticCluster::General, 0usize);
        for cluster in Self::KEYED {
            let hits = lexicon::count_hits(&words, cluster.keywords());
            // Strict comparison keeps the earliest cluster on ties.
            if hits > best.1 {
                best = (cluster, hits);
            }
        }
        best.0
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SemanticCluster::Medical => "medical",
            SemanticCluster::Disaster => "disaster",
            SemanticCluster::Financial => "financial",
            SemanticCluster::Political => "political",
            SemanticCluster::Conspiracy => "conspiracy",
            SemanticCluster::General => "general",
        }
    }
}

impl fmt::Display for SemanticCluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assigns_medical_for_health_claims() {
        assert_eq!(
            SemanticCluster::assign("this vaccine causes disease, doctors confirm"),
            SemanticCluster::Medical
        );
    }

    #[test]
    fn assigns_general_when_nothing_matches() {
        assert_eq!(
            SemanticCluster::assign("the weather is nice today"),
            SemanticCluster::General
        );
    }
}
