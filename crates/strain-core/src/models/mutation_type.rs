use std::fmt;

use serde::{Deserialize, Serialize};

/// The eight mutation-type labels, in classifier priority order.
///
/// Serialized as SCREAMING_SNAKE_CASE strings so downstream consumers (the
/// immunity tracker, controllers) see `"NUMERICAL_CHANGE"` etc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MutationType {
    NumericalChange,
    EmotionalAmplification,
    LocationChange,
    TimeShift,
    SourceModification,
    PhraseAddition,
    WordSubstitution,
    ContextShift,
}

impl MutationType {
    /// All labels, in priority order.
    pub const ALL: [MutationType; 8] = [
        MutationType::NumericalChange,
        MutationType::EmotionalAmplification,
        MutationType::LocationChange,
        MutationType::TimeShift,
        MutationType::SourceModification,
        MutationType::PhraseAddition,
        MutationType::WordSubstitution,
        MutationType::ContextShift,
    ];

    /// The wire label for this type.
    pub fn as_str(self) -> &'static str {
        match self {
            MutationType::NumericalChange => "NUMERICAL_CHANGE",
            MutationType::EmotionalAmplification => "EMOTIONAL_AMPLIFICATION",
            MutationType::LocationChange => "LOCATION_CHANGE",
            MutationType::TimeShift => "TIME_SHIFT",
            MutationType::SourceModification => "SOURCE_MODIFICATION",
            MutationType::PhraseAddition => "PHRASE_ADDITION",
            MutationType::WordSubstitution => "WORD_SUBSTITUTION",
            MutationType::ContextShift => "CONTEXT_SHIFT",
        }
    }
}

impl fmt::Display for MutationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_uses_wire_labels() {
        let json = serde_json::to_string(&MutationType::NumericalChange).unwrap();
        assert_eq!(json, "\"NUMERICAL_CHANGE\"");
        let back: MutationType = serde_json::from_str("\"CONTEXT_SHIFT\"").unwrap();
        assert_eq!(back, MutationType::ContextShift);
    }
}
