//! Canonical emotion taxonomy and score distributions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The five canonical emotion categories used throughout EmoTune
///
/// Every classifier output in the system is expressed against this closed
/// set. External vocabularies (e.g. "joy", "rage", "neutral") are mapped
/// onto it by [`crate::normalize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Happy,
    Sad,
    Anxious,
    Calm,
    Angry,
}

impl Emotion {
    /// All categories in canonical order
    ///
    /// Argmax scans in this order with a strict comparison, so equal
    /// scores resolve to the earliest category.
    pub const ALL: [Emotion; 5] = [
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Anxious,
        Emotion::Calm,
        Emotion::Angry,
    ];

    /// Lowercase label for display, serialization, and storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Anxious => "anxious",
            Emotion::Calm => "calm",
            Emotion::Angry => "angry",
        }
    }

    /// Parse a canonical label (case-insensitive)
    ///
    /// Returns `None` for anything outside the closed set. External
    /// vocabularies go through [`crate::normalize`] instead, which never
    /// fails.
    pub fn from_label(label: &str) -> Option<Emotion> {
        match label.trim().to_lowercase().as_str() {
            "happy" => Some(Emotion::Happy),
            "sad" => Some(Emotion::Sad),
            "anxious" => Some(Emotion::Anxious),
            "calm" => Some(Emotion::Calm),
            "angry" => Some(Emotion::Angry),
            _ => None,
        }
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score distribution over the five canonical emotions
///
/// All five categories are always present by construction. Scores are
/// non-negative; scorer outputs sum to 1.0, fusion outputs sum to at most
/// 1.0 when the supplied weights sum to 1.0. Serializes as a JSON object
/// keyed by the lowercase emotion labels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EmotionDistribution {
    pub happy: f64,
    pub sad: f64,
    pub anxious: f64,
    pub calm: f64,
    pub angry: f64,
}

impl EmotionDistribution {
    /// All-zero distribution, the neutral fallback shape
    ///
    /// Used when a modality payload is unreadable. Resolves to calm at
    /// zero confidence under [`EmotionDistribution::primary`].
    pub fn neutral() -> Self {
        Self::default()
    }

    /// Distribution with one dominant category
    ///
    /// Assigns `score` to `primary` and spreads the remaining probability
    /// mass uniformly across the other four categories, so the result
    /// always sums to 1.0.
    pub fn with_primary(primary: Emotion, score: f64) -> Self {
        let remainder = (1.0 - score) / 4.0;
        let mut dist = Self {
            happy: remainder,
            sad: remainder,
            anxious: remainder,
            calm: remainder,
            angry: remainder,
        };
        dist.set(primary, score);
        dist
    }

    /// Score for a single category
    pub fn get(&self, emotion: Emotion) -> f64 {
        match emotion {
            Emotion::Happy => self.happy,
            Emotion::Sad => self.sad,
            Emotion::Anxious => self.anxious,
            Emotion::Calm => self.calm,
            Emotion::Angry => self.angry,
        }
    }

    /// Set the score for a single category
    pub fn set(&mut self, emotion: Emotion, score: f64) {
        match emotion {
            Emotion::Happy => self.happy = score,
            Emotion::Sad => self.sad = score,
            Emotion::Anxious => self.anxious = score,
            Emotion::Calm => self.calm = score,
            Emotion::Angry => self.angry = score,
        }
    }

    /// Iterate categories and scores in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Emotion, f64)> + '_ {
        Emotion::ALL.iter().map(move |&e| (e, self.get(e)))
    }

    /// Sum of all five scores
    pub fn total(&self) -> f64 {
        self.iter().map(|(_, score)| score).sum()
    }

    /// Dominant category and its score
    ///
    /// Argmax over the canonical order with a strict comparison. An
    /// all-zero distribution carries no signal and resolves to calm at
    /// zero confidence, matching the neutral fallback contract.
    pub fn primary(&self) -> (Emotion, f64) {
        if self.total() == 0.0 {
            return (Emotion::Calm, 0.0);
        }

        let mut best = (Emotion::Happy, self.happy);
        for (emotion, score) in self.iter().skip(1) {
            if score > best.1 {
                best = (emotion, score);
            }
        }
        best
    }
}

/// Outcome of a single detection call
///
/// Immutable once returned. Persisting results (session history) is the
/// caller's concern, not the engine's.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionResult {
    /// Dominant emotion
    pub emotion: Emotion,
    /// Score of the dominant emotion, in [0, 1]
    pub confidence: f64,
    /// Full score distribution the primary was drawn from
    pub distribution: EmotionDistribution,
    /// Detection time (UTC)
    pub timestamp: DateTime<Utc>,
}

impl EmotionResult {
    /// Build a result from a distribution, stamping the current time
    pub fn from_distribution(distribution: EmotionDistribution) -> Self {
        let (emotion, confidence) = distribution.primary();
        Self {
            emotion,
            confidence,
            distribution,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_primary_sums_to_one() {
        let dist = EmotionDistribution::with_primary(Emotion::Happy, 0.85);
        assert!((dist.total() - 1.0).abs() < 1e-9);
        assert_eq!(dist.happy, 0.85);

        // Remaining mass is spread evenly
        let remainder = (1.0 - 0.85) / 4.0;
        assert_eq!(dist.sad, remainder);
        assert_eq!(dist.anxious, remainder);
        assert_eq!(dist.calm, remainder);
        assert_eq!(dist.angry, remainder);
    }

    #[test]
    fn test_primary_is_argmax() {
        let dist = EmotionDistribution::with_primary(Emotion::Anxious, 0.9);
        let (emotion, confidence) = dist.primary();
        assert_eq!(emotion, Emotion::Anxious);
        assert_eq!(confidence, 0.9);
    }

    #[test]
    fn test_all_zero_resolves_to_calm() {
        let (emotion, confidence) = EmotionDistribution::neutral().primary();
        assert_eq!(emotion, Emotion::Calm);
        assert_eq!(confidence, 0.0);
    }

    #[test]
    fn test_equal_scores_resolve_in_canonical_order() {
        let dist = EmotionDistribution {
            happy: 0.2,
            sad: 0.2,
            anxious: 0.2,
            calm: 0.2,
            angry: 0.2,
        };
        let (emotion, _) = dist.primary();
        assert_eq!(emotion, Emotion::Happy);
    }

    #[test]
    fn test_label_round_trip() {
        for emotion in Emotion::ALL {
            assert_eq!(Emotion::from_label(emotion.as_str()), Some(emotion));
        }
        assert_eq!(Emotion::from_label("HAPPY"), Some(Emotion::Happy));
        assert_eq!(Emotion::from_label("ecstatic"), None);
    }

    #[test]
    fn test_distribution_serializes_as_labeled_map() {
        let dist = EmotionDistribution::with_primary(Emotion::Sad, 0.8);
        let json = serde_json::to_value(&dist).unwrap();
        assert_eq!(json["sad"], 0.8);
        assert!(json["happy"].is_number());
        assert_eq!(json.as_object().unwrap().len(), 5);
    }
}
