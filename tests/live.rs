//! End-to-end test against the real model.
//!
//! Fetching the default model downloads several gigabytes on first run, so
//! everything here is ignored by default.

use std::f32::consts::PI;
use std::path::PathBuf;
use wordstamp::{DEFAULT_MODEL, TranscribeOptions, transcribe_audio};

/// Write a two second 440 Hz tone as 16 kHz mono PCM.
fn write_test_wav() -> PathBuf {
    let path = std::env::temp_dir().join("wordstamp-live-test.wav");

    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 16000,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(&path, spec).expect("failed to create test wav");
    for n in 0..(16000 * 2) {
        let t = n as f32 / 16000.0;
        let amplitude = (t * 440.0 * 2.0 * PI).sin() * 0.3;
        writer
            .write_sample((amplitude * i16::MAX as f32) as i16)
            .expect("failed to write sample");
    }
    writer.finalize().expect("failed to finalize test wav");

    path
}

#[test]
#[ignore = "network I/O and model download required"]
fn transcribes_generated_audio_with_default_model() {
    let path = write_test_wav();

    let result = transcribe_audio(&path, DEFAULT_MODEL, TranscribeOptions::default())
        .expect("transcription failed");

    // A pure tone carries no speech, so the transcript may well be empty;
    // whatever comes back must still be trimmed, non-empty words.
    for word in &result.words {
        assert!(!word.text.is_empty());
        assert_eq!(word.text, word.text.trim());
    }
}
