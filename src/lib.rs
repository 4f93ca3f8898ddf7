//! wordstamp: word-level ASR timestamps for diarisation alignment.
//!
//! A lazy-loading wrapper around a pretrained speech-recognition engine.
//! The engine is loaded on first use, transcription is delegated to it, and
//! its nested sentence/token output is flattened into a plain list of
//! timestamped words plus the full transcript text.
//!
//! The bundled backend runs NVIDIA Parakeet TDT through ONNX Runtime, with
//! model files fetched from the Hugging Face Hub; other engines plug in
//! through the [`engine`] traits.
//!
//! # Quick Start
//!
//! ```ignore
//! use wordstamp::{DEFAULT_MODEL, ParakeetAsr, TranscribeOptions};
//!
//! let mut asr = ParakeetAsr::new(DEFAULT_MODEL);
//!
//! // The model is fetched and loaded here, on the first call.
//! let result = asr.transcribe("audio.wav", TranscribeOptions::default())?;
//!
//! println!("{}", result.text);
//! for word in &result.words {
//!     println!("[{:.2}s - {:.2}s]: {}", word.start, word.end, word.text);
//! }
//! ```

pub mod asr;
pub mod engine;
pub mod error;
pub mod parakeet;
pub mod types;

pub use asr::{AsrModel, DEFAULT_MODEL, ParakeetAsr, TranscribeOptions, transcribe_audio};
pub use engine::{AsrEngine, ChunkConfig, EngineLoader, RawTranscript, Sentence, Token};
pub use error::{Error, Result};
pub use parakeet::{ParakeetEngine, ParakeetLoader};
pub use types::{TranscriptResult, Word};
