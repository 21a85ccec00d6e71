pub mod catalog;
pub mod config;
pub mod dsp;
pub mod error;
pub mod tone;

pub use crate::config::SynthConfig;
pub use crate::dsp::oscillator::Waveform;
pub use crate::error::{ChimeError, Result};
pub use crate::tone::{SoundEffect, ToneSpec, Voicing};

/// The crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Render one tone to mono float samples at `sample_rate`.
pub fn render(tone: &ToneSpec, sample_rate: u32) -> Vec<f64> {
    dsp::voice::render_tone(tone, sample_rate)
}

/// Mix tones at their delays with the default settings.
pub fn mix(tones: &[ToneSpec], silence_prefix: bool) -> Vec<f64> {
    dsp::mixer::mix(tones, silence_prefix, &SynthConfig::default())
}

/// Encode mono float samples as a 16-bit 44.1 kHz WAV byte buffer.
pub fn encode(samples: &[f64]) -> Vec<u8> {
    dsp::renderer::encode_wav(samples, config::SAMPLE_RATE)
}
