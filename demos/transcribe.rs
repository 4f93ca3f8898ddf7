//! Transcribe a WAV file and print word-level timestamps.
//!
//! Usage: cargo run --example transcribe -- <audio.wav>

use eyre::Result;
use std::env;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use wordstamp::{DEFAULT_MODEL, ParakeetAsr, TranscribeOptions};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let audio_path = parse_args()?;
    let start = Instant::now();

    let mut asr = ParakeetAsr::new(DEFAULT_MODEL);
    let result = asr.transcribe(&audio_path, TranscribeOptions::default())?;

    println!("\n{}", result.text);
    println!("\nWords:");
    for word in &result.words {
        println!("[{:.2}s - {:.2}s]: {}", word.start, word.end, word.text);
    }
    println!("\n✓ Completed in {:.2}s", start.elapsed().as_secs_f32());

    Ok(())
}

fn parse_args() -> Result<PathBuf> {
    env::args()
        .nth(1)
        .map(PathBuf::from)
        .ok_or_else(|| eyre::eyre!("usage: transcribe <audio.wav>"))
}
