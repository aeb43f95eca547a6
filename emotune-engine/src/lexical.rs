//! Keyword-based text emotion scoring
//!
//! A deliberately simple lexical classifier: the input is lower-cased and
//! scanned against a curated keyword set per category. Categories are
//! checked in fixed priority order and the first match wins; matches are
//! never combined. The function signature is the stable contract here, so
//! a real text model can replace the body without touching fusion or
//! normalization.

use crate::emotion::{Emotion, EmotionDistribution};

/// Keyword sets checked in priority order: happy > sad > anxious > angry
const KEYWORD_SETS: [(Emotion, &[&str], f64); 4] = [
    (Emotion::Happy, &["happy", "joy", "great", "love"], 0.85),
    (Emotion::Sad, &["sad", "cry", "down"], 0.80),
    (Emotion::Anxious, &["anxious", "stress", "nervous"], 0.90),
    (Emotion::Angry, &["angry", "mad", "hate"], 0.80),
];

/// Primary score when no keyword matches
const CALM_SCORE: f64 = 0.75;

/// Score free text against the canonical emotion set
///
/// Matching is case-insensitive substring containment. Empty input and
/// text without any keyword hit fall through to the calm default; that is
/// the designed default path, not an error.
pub fn score_text(text: &str) -> EmotionDistribution {
    let text = text.to_lowercase();

    for (emotion, keywords, score) in KEYWORD_SETS {
        if keywords.iter().any(|keyword| text.contains(keyword)) {
            return EmotionDistribution::with_primary(emotion, score);
        }
    }

    EmotionDistribution::with_primary(Emotion::Calm, CALM_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_keyword_scores_high() {
        let dist = score_text("I am so happy and full of joy");
        let (emotion, confidence) = dist.primary();

        assert_eq!(emotion, Emotion::Happy);
        assert!(confidence >= 0.8 && confidence <= 0.9);

        // The other four categories share the remainder evenly and the
        // whole distribution sums to 1.0
        let remainder = (1.0 - confidence) / 4.0;
        assert_eq!(dist.sad, remainder);
        assert_eq!(dist.anxious, remainder);
        assert_eq!(dist.calm, remainder);
        assert_eq!(dist.angry, remainder);
        assert!((dist.total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_keyword_defaults_to_calm() {
        let dist = score_text("the weather is nice today");
        let (emotion, confidence) = dist.primary();
        assert_eq!(emotion, Emotion::Calm);
        assert_eq!(confidence, 0.75);
    }

    #[test]
    fn test_empty_input_defaults_to_calm() {
        let (emotion, confidence) = score_text("").primary();
        assert_eq!(emotion, Emotion::Calm);
        assert_eq!(confidence, 0.75);
    }

    #[test]
    fn test_first_match_wins_over_later_categories() {
        // Contains both a happy and a sad keyword; happy has priority
        let (emotion, _) = score_text("happy but also sad").primary();
        assert_eq!(emotion, Emotion::Happy);

        // Contains both a sad and an angry keyword; sad has priority
        let (emotion, _) = score_text("crying mad tears").primary();
        assert_eq!(emotion, Emotion::Sad);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let (emotion, _) = score_text("FEELING GREAT").primary();
        assert_eq!(emotion, Emotion::Happy);
    }

    #[test]
    fn test_anxious_keyword_scores_highest_constant() {
        let (emotion, confidence) = score_text("so much stress lately").primary();
        assert_eq!(emotion, Emotion::Anxious);
        assert_eq!(confidence, 0.90);
    }
}
