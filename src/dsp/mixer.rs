//! Mixer — sums rendered tones into one buffer, then fades and normalizes it.

use std::f64::consts::FRAC_PI_2;

use tracing::debug;

use crate::config::SynthConfig;
use crate::tone::ToneSpec;

use super::voice::render_tone;

/// A summing mixer that accumulates audio from multiple tones.
#[derive(Debug, Clone, Default)]
pub struct Mixer {
    buffer: Vec<f64>,
}

impl Mixer {
    pub fn new() -> Self {
        Mixer { buffer: Vec::new() }
    }

    /// Prepare a buffer of `num_samples` filled with zeros.
    pub fn clear(&mut self, num_samples: usize) {
        self.buffer.clear();
        self.buffer.resize(num_samples, 0.0);
    }

    /// Add a sample at the given index. Out-of-range indices are dropped.
    pub fn add(&mut self, index: usize, sample: f64) {
        if index < self.buffer.len() {
            self.buffer[index] += sample;
        }
    }

    /// Accumulate `samples` starting at `offset`, clipped to the buffer.
    pub fn add_buffer(&mut self, offset: usize, samples: &[f64]) {
        let Some(dest) = self.buffer.get_mut(offset..) else {
            return;
        };
        for (d, s) in dest.iter_mut().zip(samples) {
            *d += s;
        }
    }

    /// Cosine taper over the last `num_samples`, reaching zero at the final sample.
    pub fn fade_out(&mut self, num_samples: usize) {
        let len = self.buffer.len();
        let fade = num_samples.min(len);
        if fade == 0 {
            return;
        }
        let start = len - fade;
        let span = (fade - 1).max(1) as f64;
        for (i, s) in self.buffer[start..].iter_mut().enumerate() {
            let progress = (i as f64 / span).min(1.0);
            *s *= (progress * FRAC_PI_2).cos();
        }
    }

    /// Largest absolute sample value.
    pub fn peak(&self) -> f64 {
        self.buffer.iter().fold(0.0_f64, |m, s| m.max(s.abs()))
    }

    /// Scale the buffer down so its peak sits at `headroom`, if it is above it.
    /// Returns the gain applied (1.0 when untouched).
    pub fn normalize(&mut self, headroom: f64) -> f64 {
        let peak = self.peak();
        if peak <= headroom {
            return 1.0;
        }
        let scale = headroom / peak;
        for s in &mut self.buffer {
            *s = (*s * scale).clamp(-headroom, headroom);
        }
        debug!(peak, scale, "normalized mix");
        scale
    }

    /// Take the mixed output buffer.
    pub fn into_output(self) -> Vec<f64> {
        self.buffer
    }

    /// Access the raw buffer.
    pub fn samples(&self) -> &[f64] {
        &self.buffer
    }

    /// Access the raw buffer length.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Is the buffer empty?
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

/// Mix `tones` at their delays into one buffer.
///
/// With `silence_prefix` the whole mix is pushed back by
/// `config.silence_prefix`. The result always ends with a
/// `config.fade_out` cosine tail and never peaks above `config.headroom`.
/// Overlapping tones sum before normalization, so they may exceed the
/// ceiling until the final pass.
pub fn mix(tones: &[ToneSpec], silence_prefix: bool, config: &SynthConfig) -> Vec<f64> {
    let prefix = if silence_prefix {
        config.silence_prefix
    } else {
        0.0
    };

    let end = tones
        .iter()
        .map(|t| prefix + t.delay + t.duration)
        .fold(0.0, f64::max);
    let total = end + config.fade_out;

    let mut mixer = Mixer::new();
    mixer.clear(config.samples_for(total));

    for tone in tones {
        let samples = render_tone(tone, config.sample_rate);
        let offset = config.samples_for(prefix + tone.delay);
        mixer.add_buffer(offset, &samples);
    }

    mixer.fade_out(config.samples_for(config.fade_out));
    mixer.normalize(config.headroom);
    mixer.into_output()
}
