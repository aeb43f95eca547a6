//! Static per-emotion display and therapeutic metadata

use serde::Serialize;

use crate::emotion::Emotion;

/// Display and recommendation metadata for one emotion
#[derive(Debug, Clone, Serialize)]
pub struct EmotionMetadata {
    /// Display color (hex) for frontend mood indicators
    pub color: &'static str,
    /// Short human-readable description of the emotional state
    pub description: &'static str,
    /// Therapeutic rationale attached to playlists for this emotion
    pub recommendation: &'static str,
}

/// One entry per canonical emotion, indexed by `Emotion::ALL` order
static METADATA: [EmotionMetadata; 5] = [
    EmotionMetadata {
        color: "#f9c74f",
        description: "Positive, energetic mood",
        recommendation: "Uplifting music to maintain and enhance positive emotions",
    },
    EmotionMetadata {
        color: "#577590",
        description: "Low mood, in need of comfort",
        recommendation: "Calming music to provide comfort and emotional support",
    },
    EmotionMetadata {
        color: "#f3722c",
        description: "Stressed or worried state",
        recommendation: "Soothing melodies to reduce stress and promote relaxation",
    },
    EmotionMetadata {
        color: "#90be6d",
        description: "Relaxed, balanced state",
        recommendation: "Peaceful music to maintain your tranquil state",
    },
    EmotionMetadata {
        color: "#f94144",
        description: "Intense, agitated mood",
        recommendation: "Gradual tempo reduction to calm intense emotions",
    },
];

/// Look up metadata for an emotion
///
/// Pure read of a static table. The closed enum makes unknown input
/// unrepresentable, so no fallback entry is needed.
pub fn metadata(emotion: Emotion) -> &'static EmotionMetadata {
    let index = Emotion::ALL
        .iter()
        .position(|&e| e == emotion)
        .unwrap_or(0);
    &METADATA[index]
}
