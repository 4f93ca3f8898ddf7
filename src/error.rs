//! Error types for wordstamp.

use thiserror::Error;

/// Transcription error variants organized by collaborator.
///
/// The wrapper performs no recovery and adds no context: every variant
/// except [`Error::ModelDir`] is a transparent pass-through of an error
/// raised by an external collaborator.
#[derive(Debug, Error)]
pub enum Error {
    /// Hugging Face Hub download error
    #[error(transparent)]
    Hub(#[from] hf_hub::api::sync::ApiError),

    /// Inference engine error
    #[error(transparent)]
    Engine(#[from] parakeet_rs::Error),

    /// ONNX Runtime session error
    #[error(transparent)]
    Ort(#[from] ort::Error),

    /// WAV file error
    #[error(transparent)]
    Audio(#[from] hound::Error),

    /// Model files resolved to no usable directory
    #[error("failed to resolve model directory for {0}")]
    ModelDir(String),
}

/// Result type alias for wordstamp operations.
pub type Result<T> = std::result::Result<T, Error>;
