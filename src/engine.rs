//! Engine boundary: chunking parameters, raw engine output, and the traits
//! that connect the wrapper to a speech-recognition backend.

use crate::error::Result;
use std::path::Path;

/// Default chunk duration in seconds (2 minutes)
const DEFAULT_CHUNK_DURATION: f32 = 120.0;

/// Default chunk overlap in seconds
const DEFAULT_CHUNK_OVERLAP: f32 = 15.0;

/// Chunking parameters forwarded to the engine for long audio.
///
/// How (and whether) an engine honors them is backend-specific; the wrapper
/// passes them through untouched and performs no chunk merging of its own.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChunkConfig {
    /// Chunk duration in seconds
    pub duration: f32,
    /// Chunk overlap in seconds
    pub overlap: f32,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            duration: DEFAULT_CHUNK_DURATION,
            overlap: DEFAULT_CHUNK_OVERLAP,
        }
    }
}

impl ChunkConfig {
    /// Create a new chunk configuration.
    pub fn new(duration_sec: f32, overlap_sec: f32) -> Self {
        Self {
            duration: duration_sec,
            overlap: overlap_sec,
        }
    }
}

/// Smallest unit of recognized text emitted by an engine, with timing.
///
/// Token text is kept exactly as emitted; SentencePiece-style engines mark
/// word starts with a leading space.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// Token text as emitted by the engine
    pub text: String,
    /// Start time in seconds
    pub start: f32,
    /// End time in seconds
    pub end: f32,
}

impl Token {
    /// Create a new token.
    pub fn new(text: impl Into<String>, start: f32, end: f32) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }
}

/// A group of consecutive tokens, as segmented by the engine.
#[derive(Clone, Debug, PartialEq)]
pub struct Sentence {
    /// Tokens in emission order
    pub tokens: Vec<Token>,
}

/// Engine output before flattening: verbatim transcript text plus the
/// nested sentence/token structure it was decoded into.
#[derive(Clone, Debug, PartialEq)]
pub struct RawTranscript {
    /// Full transcript text as assembled by the engine
    pub text: String,
    /// Sentences in temporal order
    pub sentences: Vec<Sentence>,
}

/// A loaded speech-recognition engine.
pub trait AsrEngine {
    /// Transcribe the audio file at `path`.
    fn transcribe(&mut self, path: &Path, chunk: ChunkConfig) -> Result<RawTranscript>;
}

/// Materializes an engine for a model identifier.
pub trait EngineLoader {
    /// The engine type this loader produces.
    type Engine: AsrEngine;

    /// Load the model named by `model_id`.
    fn load(&self, model_id: &str) -> Result<Self::Engine>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_chunking_is_two_minutes_with_fifteen_second_overlap() {
        let config = ChunkConfig::default();

        assert_eq!(config.duration, 120.0);
        assert_eq!(config.overlap, 15.0);
    }

    #[test]
    fn new_sets_both_fields() {
        let config = ChunkConfig::new(90.0, 5.0);

        assert_eq!(config.duration, 90.0);
        assert_eq!(config.overlap, 5.0);
    }
}
