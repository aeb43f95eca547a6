//! External label normalization
//!
//! Classifier vocabularies differ: a facial-emotion service may answer
//! "fear" or "surprise", a text model "joy" or "grief". This module maps
//! any external label onto the canonical five-category set so the rest of
//! the system never sees a foreign vocabulary.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::emotion::Emotion;

/// Many-to-one mapping from external vocabulary to canonical categories
static LABEL_MAP: Lazy<HashMap<&'static str, Emotion>> = Lazy::new(|| {
    let mut map = HashMap::new();

    for label in ["joy", "joyful", "happiness", "excited", "excitement", "cheerful", "content", "surprise"] {
        map.insert(label, Emotion::Happy);
    }
    for label in ["grief", "sorrow", "depressed", "melancholy", "lonely", "heartbroken", "gloomy"] {
        map.insert(label, Emotion::Sad);
    }
    for label in ["fear", "afraid", "nervous", "stressed", "worried", "worry", "panic", "anxiety", "uneasy"] {
        map.insert(label, Emotion::Anxious);
    }
    for label in ["rage", "furious", "irritated", "annoyed", "disgust", "resentful"] {
        map.insert(label, Emotion::Angry);
    }
    for label in ["neutral", "emotionless", "peaceful", "relaxed", "serene", "chill", "tranquil"] {
        map.insert(label, Emotion::Calm);
    }

    map
});

/// Map an external emotion label onto the canonical set
///
/// Case-insensitive; surrounding whitespace is ignored. Canonical labels
/// pass through unchanged. Unknown labels map to calm, silently; an
/// unrecognized vocabulary entry is not an error.
pub fn normalize(raw_label: &str) -> Emotion {
    let label = raw_label.trim().to_lowercase();

    if let Some(emotion) = Emotion::from_label(&label) {
        return emotion;
    }

    LABEL_MAP.get(label.as_str()).copied().unwrap_or(Emotion::Calm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_external_vocabulary_maps_to_canonical() {
        assert_eq!(normalize("joy"), Emotion::Happy);
        assert_eq!(normalize("grief"), Emotion::Sad);
        assert_eq!(normalize("fear"), Emotion::Anxious);
        assert_eq!(normalize("rage"), Emotion::Angry);
        assert_eq!(normalize("neutral"), Emotion::Calm);
    }

    #[test]
    fn test_normalization_is_case_insensitive() {
        assert_eq!(normalize("JOY"), Emotion::Happy);
        assert_eq!(normalize("  Excited  "), Emotion::Happy);
    }

    #[test]
    fn test_canonical_labels_pass_through() {
        assert_eq!(normalize("anxious"), Emotion::Anxious);
        assert_eq!(normalize("Angry"), Emotion::Angry);
    }

    #[test]
    fn test_unknown_label_defaults_to_calm() {
        assert_eq!(normalize("unknown_xyz"), Emotion::Calm);
        assert_eq!(normalize(""), Emotion::Calm);
    }

    #[test]
    fn test_facial_service_vocabulary() {
        // Labels returned by the hosted facial-emotion model
        assert_eq!(normalize("surprise"), Emotion::Happy);
        assert_eq!(normalize("disgust"), Emotion::Angry);
        assert_eq!(normalize("emotionless"), Emotion::Calm);
    }
}
