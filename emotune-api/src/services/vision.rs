//! Facial-emotion inference client
//!
//! Posts decoded image bytes to a hosted facial-emotion-recognition model
//! and maps the returned label vocabulary onto the canonical emotion set.
//! This is the only network call in the detection path, so it carries a
//! hard timeout and a catch-all fallback: any failure degrades to the
//! neutral distribution instead of surfacing an error to the caller.

use serde::Deserialize;
use std::time::Duration;
use tracing::{info, warn};

use emotune_common::config::TomlConfig;
use emotune_engine::modality::decode_image_payload;
use emotune_engine::{normalize, Emotion, EmotionDistribution};

/// Upper bound on one inference round trip
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// One classification entry in the inference response
#[derive(Debug, Deserialize)]
struct LabelScore {
    label: String,
    score: f64,
}

/// Client for a remote facial-emotion model
pub struct VisionClient {
    http: reqwest::Client,
    endpoint: String,
    token: String,
}

impl VisionClient {
    /// Build the client from configuration
    ///
    /// Endpoint and token come from `EMOTUNE_VISION_URL` /
    /// `EMOTUNE_VISION_TOKEN` or the config file. Returns `None` when
    /// either is missing; the placeholder image scorer handles detection
    /// in that case.
    pub fn from_config(config: &TomlConfig) -> Option<VisionClient> {
        let endpoint = std::env::var("EMOTUNE_VISION_URL")
            .ok()
            .filter(|v| !v.is_empty())
            .or_else(|| config.vision_endpoint.clone())?;
        let token = std::env::var("EMOTUNE_VISION_TOKEN")
            .ok()
            .filter(|v| !v.is_empty())
            .or_else(|| config.vision_token.clone())?;

        Some(Self::new(endpoint, token))
    }

    /// Build a client for a known endpoint
    pub fn new(endpoint: String, token: String) -> VisionClient {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();

        info!("Facial-emotion inference enabled: {}", endpoint);
        VisionClient {
            http,
            endpoint,
            token,
        }
    }

    /// Classify an image payload
    ///
    /// Never fails: network errors, non-2xx statuses, unreadable base64,
    /// and malformed response bodies all degrade to the neutral fallback.
    /// The failure reason is logged server-side only.
    pub async fn classify(&self, payload: &str) -> EmotionDistribution {
        match self.request(payload).await {
            Ok(distribution) => distribution,
            Err(reason) => {
                warn!("facial-emotion inference failed ({}), degrading to neutral fallback", reason);
                EmotionDistribution::neutral()
            }
        }
    }

    async fn request(&self, payload: &str) -> Result<EmotionDistribution, String> {
        let bytes = decode_image_payload(payload).ok_or("unreadable image payload")?;
        if bytes.is_empty() {
            return Err("empty image payload".to_string());
        }

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .body(bytes)
            .send()
            .await
            .map_err(|e| format!("request error: {}", e))?;

        if !response.status().is_success() {
            return Err(format!("inference endpoint returned {}", response.status()));
        }

        let labels: Vec<LabelScore> = response
            .json()
            .await
            .map_err(|e| format!("invalid response body: {}", e))?;
        if labels.is_empty() {
            return Err("empty label list".to_string());
        }

        Ok(distribution_from_labels(&labels))
    }
}

/// Fold external (label, score) pairs into a canonical distribution
///
/// Labels are normalized first, so scores for synonyms (e.g. "fear" and
/// "nervous") accumulate on the same canonical category. Each final score
/// is clamped to [0, 1] to preserve the distribution shape contract.
fn distribution_from_labels(labels: &[LabelScore]) -> EmotionDistribution {
    let mut distribution = EmotionDistribution::neutral();

    for entry in labels {
        let emotion = normalize(&entry.label);
        let score = distribution.get(emotion) + entry.score.clamp(0.0, 1.0);
        distribution.set(emotion, score);
    }

    for emotion in Emotion::ALL {
        distribution.set(emotion, distribution.get(emotion).min(1.0));
    }

    distribution
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_fold_through_normalizer() {
        let labels = vec![
            LabelScore { label: "joy".to_string(), score: 0.7 },
            LabelScore { label: "surprise".to_string(), score: 0.2 },
            LabelScore { label: "fear".to_string(), score: 0.1 },
        ];

        let distribution = distribution_from_labels(&labels);
        // joy and surprise both normalize to happy
        assert!((distribution.happy - 0.9).abs() < 1e-9);
        assert!((distribution.anxious - 0.1).abs() < 1e-9);
        assert_eq!(distribution.primary().0, Emotion::Happy);
    }

    #[test]
    fn test_scores_are_clamped_to_unit_range() {
        let labels = vec![
            LabelScore { label: "joy".to_string(), score: 0.8 },
            LabelScore { label: "excited".to_string(), score: 0.9 },
            LabelScore { label: "grief".to_string(), score: 7.0 },
        ];

        let distribution = distribution_from_labels(&labels);
        assert_eq!(distribution.happy, 1.0);
        assert_eq!(distribution.sad, 1.0);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_degrades_to_neutral() {
        // Nothing listens on this port; the request fails fast
        let client = VisionClient::new(
            "http://127.0.0.1:9/models/face".to_string(),
            "test-token".to_string(),
        );

        let distribution = client.classify("aGVsbG8=").await;
        assert_eq!(distribution, EmotionDistribution::neutral());
    }

    #[tokio::test]
    async fn test_bad_payload_degrades_without_network_call() {
        let client = VisionClient::new(
            "http://127.0.0.1:9/models/face".to_string(),
            "test-token".to_string(),
        );

        let distribution = client.classify("%%not-base64%%").await;
        assert_eq!(distribution, EmotionDistribution::neutral());
    }
}
