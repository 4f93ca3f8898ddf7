//! Public API tests with a custom engine plugged into the wrapper.

use std::path::Path;
use wordstamp::{
    AsrEngine, AsrModel, ChunkConfig, DEFAULT_MODEL, EngineLoader, ParakeetAsr, RawTranscript,
    Result, Sentence, Token, TranscribeOptions, TranscriptResult, Word,
};

struct FixedEngine {
    raw: RawTranscript,
}

impl AsrEngine for FixedEngine {
    fn transcribe(&mut self, _path: &Path, _chunk: ChunkConfig) -> Result<RawTranscript> {
        Ok(self.raw.clone())
    }
}

struct FixedLoader {
    raw: RawTranscript,
}

impl EngineLoader for FixedLoader {
    type Engine = FixedEngine;

    fn load(&self, _model_id: &str) -> Result<FixedEngine> {
        Ok(FixedEngine {
            raw: self.raw.clone(),
        })
    }
}

#[test]
fn custom_engines_plug_into_the_wrapper() {
    let raw = RawTranscript {
        text: "Guten Morgen.".to_string(),
        sentences: vec![Sentence {
            tokens: vec![
                Token::new("Guten", 0.0, 0.4),
                Token::new(" Morgen.", 0.4, 0.9),
            ],
        }],
    };

    let mut asr = AsrModel::with_loader("custom/model", FixedLoader { raw });
    let result = asr
        .transcribe("unused.wav", TranscribeOptions::default())
        .expect("scripted transcription failed");

    assert_eq!(result.text, "Guten Morgen.");
    assert_eq!(
        result.words,
        vec![Word::new("Guten", 0.0, 0.4), Word::new("Morgen.", 0.4, 0.9)]
    );
}

#[test]
fn parakeet_wrapper_starts_unloaded() {
    let asr = ParakeetAsr::new(DEFAULT_MODEL);

    assert_eq!(asr.model_id(), DEFAULT_MODEL);
    assert!(!asr.is_loaded());
}

#[test]
fn results_round_trip_through_json() {
    let result = TranscriptResult {
        text: "Hello world".to_string(),
        words: vec![Word::new("Hello", 0.0, 0.5), Word::new("world", 0.5, 1.0)],
    };

    let json = serde_json::to_string(&result).expect("serialization failed");
    let back: TranscriptResult = serde_json::from_str(&json).expect("deserialization failed");

    assert_eq!(back, result);
}
