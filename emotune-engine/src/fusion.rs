//! Weighted multimodal fusion
//!
//! Combines per-modality emotion distributions into a single distribution
//! by weighted summation. Fusion is a pure function of its inputs: no
//! randomness, and the sum is commutative so input order is irrelevant.

use serde::{Deserialize, Serialize};

use crate::emotion::{Emotion, EmotionDistribution};
use crate::modality::Modality;

/// Per-modality fusion weights
///
/// Weights should sum to 1.0 for a properly normalized fusion. Partial
/// modality sets are tolerated: modalities absent from the input
/// contribute nothing, and the remaining weights are deliberately not
/// renormalized. Callers expecting fewer active modalities should supply a
/// weight map that reflects that.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModalityWeights {
    pub text: f64,
    pub image: f64,
    pub audio: f64,
}

impl ModalityWeights {
    /// Weight for a single modality
    pub fn get(&self, modality: Modality) -> f64 {
        match modality {
            Modality::Text => self.text,
            Modality::Image => self.image,
            Modality::Audio => self.audio,
        }
    }

    /// Full weight on one modality, zero on the others
    pub fn only(modality: Modality) -> Self {
        let mut weights = Self {
            text: 0.0,
            image: 0.0,
            audio: 0.0,
        };
        match modality {
            Modality::Text => weights.text = 1.0,
            Modality::Image => weights.image = 1.0,
            Modality::Audio => weights.audio = 1.0,
        }
        weights
    }
}

impl Default for ModalityWeights {
    /// Approximately equal weighting across the three modalities
    fn default() -> Self {
        Self {
            text: 0.33,
            image: 0.34,
            audio: 0.33,
        }
    }
}

/// Fuse per-modality distributions into one
///
/// Starts from an all-zero distribution and adds `weight × score` for
/// every (modality, distribution) pair present in the input. Returns the
/// dominant emotion, its combined score as the confidence, and the full
/// combined distribution. An empty input yields the all-zero distribution
/// at confidence 0.0.
pub fn fuse(
    inputs: &[(Modality, EmotionDistribution)],
    weights: &ModalityWeights,
) -> (Emotion, f64, EmotionDistribution) {
    let mut combined = EmotionDistribution::neutral();

    for (modality, distribution) in inputs {
        let weight = weights.get(*modality);
        for (emotion, score) in distribution.iter() {
            combined.set(emotion, combined.get(emotion) + weight * score);
        }
    }

    let (primary, confidence) = combined.primary();
    (primary, confidence, combined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical::score_text;
    use crate::modality::{score_audio, score_image};

    #[test]
    fn test_empty_input_fuses_to_zero() {
        let (emotion, confidence, combined) = fuse(&[], &ModalityWeights::default());
        assert_eq!(combined, EmotionDistribution::neutral());
        assert_eq!(confidence, 0.0);
        // Deterministic resolution of the zero distribution
        assert_eq!(emotion, Emotion::Calm);
    }

    #[test]
    fn test_single_full_weight_modality_is_identity() {
        let dist = score_text("I am so happy and full of joy");
        let (emotion, confidence, combined) =
            fuse(&[(Modality::Text, dist)], &ModalityWeights::only(Modality::Text));

        assert_eq!(combined, dist);
        assert_eq!(emotion, Emotion::Happy);
        assert_eq!(confidence, dist.happy);
    }

    #[test]
    fn test_fusion_is_a_weighted_sum() {
        let text = EmotionDistribution::with_primary(Emotion::Happy, 0.85);
        let audio = EmotionDistribution::with_primary(Emotion::Anxious, 0.90);
        let weights = ModalityWeights {
            text: 0.5,
            image: 0.0,
            audio: 0.5,
        };

        let (_, _, combined) = fuse(&[(Modality::Text, text), (Modality::Audio, audio)], &weights);

        for (emotion, score) in combined.iter() {
            let expected = 0.5 * text.get(emotion) + 0.5 * audio.get(emotion);
            assert!((score - expected).abs() < 1e-12);
        }
        // Inputs sum to 1.0 and weights sum to 1.0, so the output does too
        assert!((combined.total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_fusion_is_commutative() {
        let text = score_text("great day");
        let image = score_image("aGVsbG8=");
        let weights = ModalityWeights::default();

        let (_, _, forward) = fuse(&[(Modality::Text, text), (Modality::Image, image)], &weights);
        let (_, _, reverse) = fuse(&[(Modality::Image, image), (Modality::Text, text)], &weights);

        assert_eq!(forward, reverse);
    }

    #[test]
    fn test_absent_modalities_are_not_renormalized() {
        // Text alone under default weights keeps its 0.33 weight; the
        // image/audio share is simply missing from the output mass
        let dist = EmotionDistribution::with_primary(Emotion::Sad, 0.80);
        let (emotion, confidence, combined) =
            fuse(&[(Modality::Text, dist)], &ModalityWeights::default());

        assert_eq!(emotion, Emotion::Sad);
        assert!((confidence - 0.33 * 0.80).abs() < 1e-12);
        assert!((combined.total() - 0.33).abs() < 1e-9);
    }

    #[test]
    fn test_fused_output_is_fusable_again() {
        // Scorer outputs remain valid fusion inputs; the pipeline is
        // closed under composition
        let stage_one = [
            (Modality::Text, score_text("stressed out")),
            (Modality::Image, score_image("aGVsbG8=")),
            (Modality::Audio, score_audio("clip.wav")),
        ];
        let (_, _, combined) = fuse(&stage_one, &ModalityWeights::default());

        let (emotion, confidence, refused) =
            fuse(&[(Modality::Text, combined)], &ModalityWeights::only(Modality::Text));
        assert_eq!(refused, combined);
        assert_eq!((emotion, confidence), combined.primary());
    }
}
