//! Parakeet TDT backend: model files from the Hugging Face Hub, inference
//! through ONNX Runtime.

use crate::engine::{AsrEngine, ChunkConfig, EngineLoader, RawTranscript, Sentence, Token};
use crate::error::{Error, Result};
use hf_hub::api::sync::Api;
use hound::WavReader;
#[allow(unused_imports)]
use ort::execution_providers::*;
use ort::session::Session;
use ort::session::builder::SessionBuilder;
use parakeet_rs::{ParakeetTDT, Transcriber};
use std::path::{Path, PathBuf};

/// Files fetched from the model repository.
const MODEL_FILES: &[&str] = &[
    "encoder-model.onnx",
    "encoder-model.onnx.data",
    "decoder_joint-model.onnx",
    "vocab.txt",
];

/// Loader for Parakeet TDT ONNX models hosted on the Hugging Face Hub.
///
/// By default the ONNX Runtime session uses the execution providers enabled
/// via Cargo features, with CPU as the fallback.
#[derive(Default)]
pub struct ParakeetLoader {
    builder: Option<SessionBuilder>,
}

impl ParakeetLoader {
    /// Use a custom ONNX Runtime session builder instead of the
    /// feature-selected execution providers.
    pub fn with_session_builder(builder: SessionBuilder) -> Self {
        Self {
            builder: Some(builder),
        }
    }
}

impl EngineLoader for ParakeetLoader {
    type Engine = ParakeetEngine;

    fn load(&self, model_id: &str) -> Result<ParakeetEngine> {
        let model_dir = fetch_model(model_id)?;

        let builder = match &self.builder {
            Some(builder) => builder.clone(),
            None => default_session_builder()?,
        };

        tracing::info!(dir = %model_dir.display(), "loading model");
        let model = ParakeetTDT::from_pretrained(&model_dir, Some(builder))?;

        Ok(ParakeetEngine { model })
    }
}

/// Loaded Parakeet TDT model.
pub struct ParakeetEngine {
    model: ParakeetTDT,
}

impl AsrEngine for ParakeetEngine {
    /// Transcribe a WAV file in a single pass.
    ///
    /// `parakeet_rs` exposes no chunked entry point, so the chunking
    /// parameters are recorded for diagnostics and the file is decoded
    /// whole. Tokens come back at the engine's native granularity and are
    /// regrouped into sentences at sentence-final punctuation.
    fn transcribe(&mut self, path: &Path, chunk: ChunkConfig) -> Result<RawTranscript> {
        log_wav_spec(path)?;
        tracing::debug!(
            chunk_duration = chunk.duration,
            chunk_overlap = chunk.overlap,
            "transcribing in a single pass"
        );

        let result = self.model.transcribe_file(path, None)?;

        let tokens = result
            .tokens
            .into_iter()
            .map(|token| Token::new(token.text, token.start, token.end))
            .collect();

        Ok(RawTranscript {
            text: result.text,
            sentences: group_sentences(tokens),
        })
    }
}

/// Fetch model files from the Hugging Face Hub and resolve their directory.
///
/// The model directory is the parent of the first fetched file; the
/// remaining files are fetched into the same snapshot alongside it.
fn fetch_model(model_id: &str) -> Result<PathBuf> {
    tracing::info!(model = model_id, "locating model...");

    let api = Api::new()?;
    let repo = api.model(model_id.to_string());

    let (first, rest) = MODEL_FILES
        .split_first()
        .ok_or_else(|| Error::ModelDir(model_id.to_string()))?;

    let model_dir = repo
        .get(first)?
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| Error::ModelDir(model_id.to_string()))?;

    for file in rest {
        repo.get(file)?;
    }

    Ok(model_dir)
}

/// Session builder with execution providers configured by Cargo features.
///
/// Providers are listed in priority order; the first available one is used
/// and CPU is always available as fallback. Ensure required hardware,
/// drivers, and runtime dependencies are installed for the desired
/// provider.
fn default_session_builder() -> Result<SessionBuilder> {
    Ok(Session::builder()?.with_execution_providers([
        #[cfg(feature = "cuda")]
        CUDAExecutionProvider::default().build(),
        #[cfg(feature = "tensorrt")]
        TensorRTExecutionProvider::default().build(),
        #[cfg(feature = "openvino")]
        OpenVINOExecutionProvider::default()
            .with_device_type("GPU")
            .build(),
        #[cfg(feature = "directml")]
        DirectMLExecutionProvider::default().build(),
        #[cfg(feature = "coreml")]
        CoreMLExecutionProvider::default().build(),
    ])?)
}

/// Log the WAV header of the input file.
fn log_wav_spec(path: &Path) -> Result<()> {
    let reader = WavReader::open(path)?;

    let spec = reader.spec();
    let duration = reader.duration() as f32 / spec.sample_rate as f32;

    tracing::debug!(
        path = %path.display(),
        duration_sec = duration,
        channels = spec.channels,
        sample_rate = spec.sample_rate,
        bits_per_sample = spec.bits_per_sample,
        format = ?spec.sample_format,
        "wav spec"
    );

    Ok(())
}

/// Group a flat token stream into sentences.
///
/// A sentence ends after a token ending in `.`, `!`, or `?`; a trailing
/// unterminated run forms the last sentence. Token text and timestamps are
/// not modified.
fn group_sentences(tokens: Vec<Token>) -> Vec<Sentence> {
    let mut sentences = Vec::new();
    let mut current = Vec::new();

    for token in tokens {
        let ends_sentence = token.text.ends_with(['.', '!', '?']);
        current.push(token);

        if ends_sentence {
            sentences.push(Sentence {
                tokens: std::mem::take(&mut current),
            });
        }
    }

    if !current.is_empty() {
        sentences.push(Sentence { tokens: current });
    }

    sentences
}
