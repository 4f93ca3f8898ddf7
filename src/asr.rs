//! Lazy-loading transcription wrapper.

use crate::engine::{AsrEngine, ChunkConfig, EngineLoader, RawTranscript};
use crate::error::Result;
use crate::parakeet::ParakeetLoader;
use crate::types::{TranscriptResult, Word};
use std::path::Path;

/// Default model identifier on the Hugging Face Hub.
pub const DEFAULT_MODEL: &str = "istupakov/parakeet-tdt-0.6b-v3-onnx";

/// Per-call transcription options.
#[derive(Clone, Debug, Default)]
pub struct TranscribeOptions {
    /// Language hint. Accepted for interface symmetry with other ASR
    /// frontends but not forwarded: the engine detects the spoken language
    /// itself.
    pub language: Option<String>,
    /// Chunking parameters forwarded to the engine
    pub chunk: ChunkConfig,
}

/// Lazy-loading wrapper around a speech-recognition engine.
///
/// Holds a model identifier and defers loading until the first
/// [`transcribe`](AsrModel::transcribe) call, printing two progress lines to
/// standard output while the load runs. A failed load leaves the wrapper
/// unloaded, so the next call attempts loading again; once loaded, the
/// engine is retained for the lifetime of the wrapper.
pub struct AsrModel<L: EngineLoader> {
    model_id: String,
    loader: L,
    engine: Option<L::Engine>,
}

impl<L: EngineLoader> AsrModel<L> {
    /// Create a wrapper with a custom engine loader.
    ///
    /// Nothing is loaded here; construction cannot fail.
    pub fn with_loader(model_id: impl Into<String>, loader: L) -> Self {
        Self {
            model_id: model_id.into(),
            loader,
            engine: None,
        }
    }

    /// The model identifier this wrapper loads.
    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// Whether the engine has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.engine.is_some()
    }

    /// Transcribe the audio file at `path`, loading the engine on first use.
    ///
    /// The engine's nested sentence/token output is flattened into
    /// [`Word`]s: sentences in order, tokens in order, each token's text
    /// trimmed and tokens that trim to nothing dropped. Timestamps are kept
    /// exactly as the engine reported them; the word list is not re-sorted.
    ///
    /// Engine errors propagate unchanged, with no retry and no partial
    /// result.
    pub fn transcribe(
        &mut self,
        path: impl AsRef<Path>,
        options: TranscribeOptions,
    ) -> Result<TranscriptResult> {
        let engine = self.ensure_loaded()?;
        let raw = engine.transcribe(path.as_ref(), options.chunk)?;

        Ok(flatten(raw))
    }

    fn ensure_loaded(&mut self) -> Result<&mut L::Engine> {
        match &mut self.engine {
            Some(engine) => Ok(engine),
            slot @ None => {
                println!("Loading ASR model: {}", self.model_id);
                let engine = self.loader.load(&self.model_id)?;
                println!("ASR model loaded.");

                Ok(slot.insert(engine))
            }
        }
    }
}

/// Parakeet-backed transcription wrapper.
///
/// Fetches the model from the Hugging Face Hub and runs it through ONNX
/// Runtime on first use.
pub type ParakeetAsr = AsrModel<ParakeetLoader>;

impl ParakeetAsr {
    /// Create a wrapper for a Parakeet TDT ONNX model on the Hugging Face
    /// Hub, such as [`DEFAULT_MODEL`].
    pub fn new(model_id: impl Into<String>) -> Self {
        Self::with_loader(model_id, ParakeetLoader::default())
    }
}

/// Transcribe a single file with a freshly constructed [`ParakeetAsr`].
///
/// Convenience for one-shot use; the model load is paid on every call, so
/// reuse an [`AsrModel`] when transcribing more than one file.
pub fn transcribe_audio(
    path: impl AsRef<Path>,
    model_id: impl Into<String>,
    options: TranscribeOptions,
) -> Result<TranscriptResult> {
    ParakeetAsr::new(model_id).transcribe(path, options)
}

/// Flatten nested engine output into the public result shape.
fn flatten(raw: RawTranscript) -> TranscriptResult {
    let mut words = Vec::new();

    for sentence in raw.sentences {
        for token in sentence.tokens {
            let text = token.text.trim();
            if text.is_empty() {
                continue;
            }

            words.push(Word::new(text, token.start, token.end));
        }
    }

    TranscriptResult {
        text: raw.text,
        words,
    }
}
