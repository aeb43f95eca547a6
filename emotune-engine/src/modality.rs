//! Input modalities and the placeholder image/audio scorers
//!
//! The image and audio scorers are placeholders for real models: they
//! validate the payload, ignore its content, and return fixed constant
//! distributions. The signature and distribution-shape guarantee (five
//! categories, scores in [0, 1]) is the stable contract a real
//! implementation must preserve; callers must not assume anything beyond
//! that shape.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::emotion::EmotionDistribution;

/// The three input channels accepted by the detection API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    Text,
    Image,
    Audio,
}

impl Modality {
    /// Lowercase name for display and storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Modality::Text => "text",
            Modality::Image => "image",
            Modality::Audio => "audio",
        }
    }

    /// Parse a modality name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Modality> {
        match name.trim().to_lowercase().as_str() {
            "text" => Some(Modality::Text),
            "image" => Some(Modality::Image),
            "audio" => Some(Modality::Audio),
            _ => None,
        }
    }
}

impl std::fmt::Display for Modality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decode a base64 image payload, tolerating a `data:<mime>;base64,` prefix
///
/// Frontends send camera captures as data URLs; API clients may send bare
/// base64. Both are accepted.
pub fn decode_image_payload(payload: &str) -> Option<Vec<u8>> {
    let encoded = match payload.split_once(',') {
        Some((prefix, rest)) if prefix.starts_with("data:") => rest,
        _ => payload,
    };
    BASE64.decode(encoded.trim()).ok()
}

/// Score an image payload (placeholder)
///
/// Validates that the payload is decodable base64 and returns a fixed
/// calm-dominant distribution. An unreadable or empty payload degrades to
/// the neutral fallback; detection never hard-fails on a malformed
/// modality payload.
pub fn score_image(payload: &str) -> EmotionDistribution {
    match decode_image_payload(payload) {
        Some(bytes) if !bytes.is_empty() => EmotionDistribution {
            happy: 0.15,
            sad: 0.05,
            anxious: 0.0,
            calm: 0.80,
            angry: 0.0,
        },
        _ => {
            debug!("unreadable image payload, degrading to neutral fallback");
            EmotionDistribution::neutral()
        }
    }
}

/// Score an audio resource reference (placeholder)
///
/// The reference is not dereferenced; a fixed anxious-dominant
/// distribution is returned. An empty reference degrades to the neutral
/// fallback.
pub fn score_audio(payload: &str) -> EmotionDistribution {
    if payload.trim().is_empty() {
        debug!("empty audio reference, degrading to neutral fallback");
        return EmotionDistribution::neutral();
    }

    EmotionDistribution {
        happy: 0.10,
        sad: 0.15,
        anxious: 0.65,
        calm: 0.05,
        angry: 0.05,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emotion::Emotion;

    #[test]
    fn test_image_scorer_is_calm_dominant() {
        // "hello" in base64
        let dist = score_image("aGVsbG8=");
        let (emotion, confidence) = dist.primary();
        assert_eq!(emotion, Emotion::Calm);
        assert_eq!(confidence, 0.80);
        assert!((dist.total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_image_scorer_accepts_data_url_prefix() {
        let dist = score_image("data:image/jpeg;base64,aGVsbG8=");
        assert_eq!(dist.primary().0, Emotion::Calm);
    }

    #[test]
    fn test_malformed_image_degrades_to_neutral() {
        let dist = score_image("not!!valid@@base64");
        let (emotion, confidence) = dist.primary();
        assert_eq!(emotion, Emotion::Calm);
        assert_eq!(confidence, 0.0);
        assert_eq!(dist, EmotionDistribution::neutral());
    }

    #[test]
    fn test_empty_image_payload_degrades_to_neutral() {
        assert_eq!(score_image(""), EmotionDistribution::neutral());
    }

    #[test]
    fn test_audio_scorer_is_anxious_dominant() {
        let dist = score_audio("uploads/voice-note.wav");
        let (emotion, confidence) = dist.primary();
        assert_eq!(emotion, Emotion::Anxious);
        assert_eq!(confidence, 0.65);
        assert!((dist.total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_audio_reference_degrades_to_neutral() {
        assert_eq!(score_audio("  "), EmotionDistribution::neutral());
    }

    #[test]
    fn test_modality_name_round_trip() {
        for modality in [Modality::Text, Modality::Image, Modality::Audio] {
            assert_eq!(Modality::from_name(modality.as_str()), Some(modality));
        }
        assert_eq!(Modality::from_name("IMAGE"), Some(Modality::Image));
        assert_eq!(Modality::from_name("video"), None);
    }
}
