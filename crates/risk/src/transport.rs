//! Transport status codes and the labels shown to planners.
//!
//! The two prediction endpoints grew separate vocabularies: the basic one only
//! knows normal vs disrupted, the extended one distinguishes severe disruption
//! and calls the normal state "Smooth". Both are part of the response text
//! clients see, so they are kept apart.

use serde::{Deserialize, Serialize};

const BASIC_LABELS: [(i64, &str); 2] = [(0, "Normal"), (1, "Disrupted")];

const EXTENDED_LABELS: [(i64, &str); 3] = [
    (0, "Smooth"),
    (1, "Disrupted"),
    (2, "Severely Disrupted"),
];

/// Which label set a pipeline renders transport status with.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusVocabulary {
    /// `0 → Normal`, `1 → Disrupted`, anything else `Normal`.
    Basic,
    /// `0 → Smooth`, `1 → Disrupted`, `2 → Severely Disrupted`, anything else `Smooth`.
    Extended,
}

impl StatusVocabulary {
    /// Label for a status code; unknown codes fall back to the vocabulary's normal state.
    pub fn label(self, transport_status: i64) -> &'static str {
        let table: &[(i64, &'static str)] = match self {
            StatusVocabulary::Basic => &BASIC_LABELS,
            StatusVocabulary::Extended => &EXTENDED_LABELS,
        };

        table
            .iter()
            .find(|(code, _)| *code == transport_status)
            .map(|(_, label)| *label)
            .unwrap_or(table[0].1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_vocabulary() {
        assert_eq!(StatusVocabulary::Basic.label(0), "Normal");
        assert_eq!(StatusVocabulary::Basic.label(1), "Disrupted");
        // severe disruption is not a basic status
        assert_eq!(StatusVocabulary::Basic.label(2), "Normal");
    }

    #[test]
    fn extended_vocabulary() {
        assert_eq!(StatusVocabulary::Extended.label(0), "Smooth");
        assert_eq!(StatusVocabulary::Extended.label(1), "Disrupted");
        assert_eq!(StatusVocabulary::Extended.label(2), "Severely Disrupted");
    }

    #[test]
    fn unknown_codes_fall_back_per_vocabulary() {
        assert_eq!(StatusVocabulary::Basic.label(5), "Normal");
        assert_eq!(StatusVocabulary::Extended.label(5), "Smooth");
        assert_eq!(StatusVocabulary::Basic.label(-1), "Normal");
        assert_eq!(StatusVocabulary::Extended.label(-1), "Smooth");
    }
}
