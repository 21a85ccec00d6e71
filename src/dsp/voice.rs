//! Voice — a single tone combining oscillator + envelope.

use crate::tone::ToneSpec;

use super::envelope::Envelope;
use super::oscillator::Waveform;

/// One tone being rendered: a waveform shaped by its envelope.
#[derive(Debug, Clone, Copy)]
pub struct Voice {
    pub waveform: Waveform,
    pub frequency: f64,
    pub envelope: Envelope,
    sample_rate: f64,
}

impl Voice {
    /// Configure a voice from a tone, deriving the attack from its frequency.
    pub fn from_tone(tone: &ToneSpec, sample_rate: u32) -> Self {
        Voice {
            waveform: tone.waveform,
            frequency: tone.frequency,
            envelope: Envelope::for_tone(tone.frequency, tone.duration, tone.volume),
            sample_rate: sample_rate as f64,
        }
    }

    /// Number of samples this voice produces.
    pub fn len(&self) -> usize {
        (self.sample_rate * self.envelope.duration).floor() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sample at index `i` (time `i / sample_rate`).
    pub fn sample_at(&self, i: usize) -> f64 {
        let t = i as f64 / self.sample_rate;
        self.waveform.sample(t, self.frequency) * self.envelope.gain(t)
    }

    /// Render every sample of this voice.
    pub fn render(&self) -> Vec<f64> {
        (0..self.len()).map(|i| self.sample_at(i)).collect()
    }
}

/// Render one tone to `floor(sample_rate * duration)` samples.
///
/// The tone's delay is ignored here; placement is the mixer's job.
pub fn render_tone(tone: &ToneSpec, sample_rate: u32) -> Vec<f64> {
    Voice::from_tone(tone, sample_rate).render()
}
