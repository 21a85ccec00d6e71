//! WAV renderer — renders a sound effect to a mono 16-bit WAV byte buffer.

use tracing::debug;

use crate::config::SynthConfig;
use crate::tone::{SoundEffect, Voicing};

use super::mixer::mix;
use super::voice::render_tone;

/// Size of the canonical RIFF/WAVE header written before the samples.
pub const WAV_HEADER_LEN: usize = 44;

const CHANNELS: u16 = 1;
const BITS_PER_SAMPLE: u16 = 16;

/// Render a sound effect to float samples.
///
/// Single tones are rendered as-is. Layered effects go through the mixer
/// (lead-in, fade-out, normalization).
pub fn render_effect(effect: &SoundEffect, config: &SynthConfig) -> Vec<f64> {
    let samples = match &effect.voicing {
        Voicing::Single { tone } => render_tone(tone, config.sample_rate),
        Voicing::Layered {
            tones,
            silence_prefix,
        } => mix(tones, *silence_prefix, config),
    };
    debug!(
        effect = %effect.name,
        samples = samples.len(),
        peak = samples.iter().fold(0.0_f64, |m, s| m.max(s.abs())),
        "rendered effect"
    );
    samples
}

/// Render a sound effect straight to WAV bytes.
pub fn render_effect_wav(effect: &SoundEffect, config: &SynthConfig) -> Vec<u8> {
    encode_wav(&render_effect(effect, config), config.sample_rate)
}

/// Clamp to [-1, 1] and scale to i16, rounding toward negative infinity.
pub fn quantize(samples: &[f64]) -> Vec<i16> {
    samples
        .iter()
        .map(|&s| (s.clamp(-1.0, 1.0) * i16::MAX as f64).floor() as i16)
        .collect()
}

/// Encode float samples as a mono 16-bit PCM WAV byte buffer.
pub fn encode_wav(samples: &[f64], sample_rate: u32) -> Vec<u8> {
    let block_align = CHANNELS * (BITS_PER_SAMPLE / 8);
    let byte_rate = sample_rate * block_align as u32;
    let data_size = (samples.len() * block_align as usize) as u32;
    let file_size = 36 + data_size;

    let mut buf = Vec::with_capacity(WAV_HEADER_LEN + data_size as usize);

    // RIFF header
    buf.extend_from_slice(b"RIFF");
    buf.extend_from_slice(&file_size.to_le_bytes());
    buf.extend_from_slice(b"WAVE");

    // fmt chunk
    buf.extend_from_slice(b"fmt ");
    buf.extend_from_slice(&16u32.to_le_bytes()); // chunk size
    buf.extend_from_slice(&1u16.to_le_bytes()); // PCM format
    buf.extend_from_slice(&CHANNELS.to_le_bytes());
    buf.extend_from_slice(&sample_rate.to_le_bytes());
    buf.extend_from_slice(&byte_rate.to_le_bytes());
    buf.extend_from_slice(&block_align.to_le_bytes());
    buf.extend_from_slice(&BITS_PER_SAMPLE.to_le_bytes());

    // data chunk
    buf.extend_from_slice(b"data");
    buf.extend_from_slice(&data_size.to_le_bytes());
    for sample in quantize(samples) {
        buf.extend_from_slice(&sample.to_le_bytes());
    }

    buf
}
