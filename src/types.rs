//! Core result types for word-level transcription.

use serde::{Deserialize, Serialize};

/// A single recognized word with timing.
///
/// Timestamps are in seconds from the start of the audio, exactly as the
/// recognition engine reported them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Word {
    /// Recognized text, trimmed of surrounding whitespace
    pub text: String,
    /// Start time in seconds
    pub start: f32,
    /// End time in seconds
    pub end: f32,
}

impl Word {
    /// Create a new word.
    pub fn new(text: impl Into<String>, start: f32, end: f32) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }

    /// Word duration in seconds (`end - start`).
    pub fn duration(&self) -> f32 {
        self.end - self.start
    }
}

/// The output of one transcription call.
///
/// `text` is the full transcript as assembled by the engine; it is not
/// reconstructed from `words`, so punctuation and spacing survive intact.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TranscriptResult {
    /// Full transcript text as reported by the engine
    pub text: String,
    /// Recognized words in the order the engine emitted them
    pub words: Vec<Word>,
}
