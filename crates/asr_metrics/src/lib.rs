//! Transcription accuracy metrics: WER/CER scoring of hypothesis text
//! against reference text.

pub mod align;
pub mod normalize;
pub mod score;

pub use align::{align, Alignment};
pub use normalize::normalize;
pub use score::{score_batch, score_pair, BatchMetrics, PairMetrics};
