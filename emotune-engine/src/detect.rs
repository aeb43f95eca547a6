//! Detection dispatcher
//!
//! Single entry point the API layer calls: routes a payload to the scorer
//! for its modality and stamps the outcome.

use crate::emotion::EmotionResult;
use crate::lexical::score_text;
use crate::modality::{score_audio, score_image, Modality};

/// Detect the emotion carried by one modality payload
///
/// The payload is raw text, a base64-encoded image (optionally a
/// `data:<mime>;base64,` URL), or an audio resource reference, depending
/// on the modality. Never fails: malformed payloads resolve to the neutral
/// fallback inside the scorer.
pub fn detect(modality: Modality, payload: &str) -> EmotionResult {
    let distribution = match modality {
        Modality::Text => score_text(payload),
        Modality::Image => score_image(payload),
        Modality::Audio => score_audio(payload),
    };

    EmotionResult::from_distribution(distribution)
}
