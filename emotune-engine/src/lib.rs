//! # EmoTune Engine
//!
//! Pure emotion scoring and fusion core for the EmoTune backend:
//! - Canonical emotion taxonomy and score distributions
//! - Lexical (keyword-based) text scoring
//! - Placeholder image/audio scorers with a stable output contract
//! - External label normalization
//! - Weighted multimodal fusion
//! - Static per-emotion display/therapeutic metadata
//!
//! Every operation in this crate is synchronous, stateless, and total:
//! malformed input degrades to a well-formed neutral distribution instead
//! of returning an error. Network-backed scorers live in the service layer,
//! not here.

pub mod detect;
pub mod emotion;
pub mod fusion;
pub mod lexical;
pub mod metadata;
pub mod modality;
pub mod normalize;

pub use detect::detect;
pub use emotion::{Emotion, EmotionDistribution, EmotionResult};
pub use fusion::{fuse, ModalityWeights};
pub use lexical::score_text;
pub use metadata::{metadata, EmotionMetadata};
pub use modality::{score_audio, score_image, Modality};
pub use normalize::normalize;
