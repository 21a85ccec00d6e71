//! Declarative tone and sound-effect descriptions.
//!
//! These types map directly to the JSON catalog format accepted by
//! [`crate::catalog::from_json`].

use serde::{Deserialize, Serialize};

use crate::dsp::oscillator::Waveform;
use crate::error::{ChimeError, Result};

// ── Tone ────────────────────────────────────────────────────

/// One tone: an oscillator shaped by a percussive envelope, placed at an
/// onset delay within its sound effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToneSpec {
    /// Frequency in Hz.
    pub frequency: f64,
    /// Length in seconds.
    pub duration: f64,
    /// Oscillator shape.
    #[serde(default)]
    pub waveform: Waveform,
    /// Peak amplitude (0, 1].
    pub volume: f64,
    /// Onset delay in seconds, relative to the start of the effect.
    #[serde(default)]
    pub delay: f64,
}

impl ToneSpec {
    /// A tone starting at time zero.
    pub const fn new(frequency: f64, duration: f64, waveform: Waveform, volume: f64) -> Self {
        ToneSpec {
            frequency,
            duration,
            waveform,
            volume,
            delay: 0.0,
        }
    }

    /// The same tone, starting `delay` seconds in.
    pub const fn delayed(self, delay: f64) -> Self {
        ToneSpec { delay, ..self }
    }

    /// Time at which this tone stops sounding, relative to the effect start.
    pub fn end(&self) -> f64 {
        self.delay + self.duration
    }

    /// Check the tone's preconditions, describing the first violation.
    pub fn check(&self) -> std::result::Result<(), String> {
        if !self.frequency.is_finite() || self.frequency <= 0.0 {
            return Err(format!("frequency must be > 0, got {}", self.frequency));
        }
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(format!("duration must be > 0, got {}", self.duration));
        }
        if !self.volume.is_finite() || self.volume <= 0.0 || self.volume > 1.0 {
            return Err(format!("volume must be in (0, 1], got {}", self.volume));
        }
        if !self.delay.is_finite() || self.delay < 0.0 {
            return Err(format!("delay must be >= 0, got {}", self.delay));
        }
        Ok(())
    }
}

// ── Sound Effect ────────────────────────────────────────────

/// How a sound effect's tones are put together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Voicing {
    /// One tone rendered as-is: no lead-in, fade or normalization.
    Single { tone: ToneSpec },
    /// Tones mixed at their delays into one buffer.
    Layered {
        tones: Vec<ToneSpec>,
        #[serde(default = "default_silence_prefix", rename = "silencePrefix")]
        silence_prefix: bool,
    },
}

fn default_silence_prefix() -> bool {
    true
}

/// A named entry in a catalog, written out as `<name>.wav`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundEffect {
    pub name: String,
    #[serde(flatten)]
    pub voicing: Voicing,
}

impl SoundEffect {
    pub fn single(name: impl Into<String>, tone: ToneSpec) -> Self {
        SoundEffect {
            name: name.into(),
            voicing: Voicing::Single { tone },
        }
    }

    /// Mixed effect with the silence lead-in enabled.
    pub fn layered(name: impl Into<String>, tones: Vec<ToneSpec>) -> Self {
        SoundEffect {
            name: name.into(),
            voicing: Voicing::Layered {
                tones,
                silence_prefix: true,
            },
        }
    }

    /// All tones of this effect, in order.
    pub fn tones(&self) -> &[ToneSpec] {
        match &self.voicing {
            Voicing::Single { tone } => std::slice::from_ref(tone),
            Voicing::Layered { tones, .. } => tones,
        }
    }

    /// File name this effect is written to.
    pub fn file_name(&self) -> String {
        format!("{}.wav", self.name)
    }

    /// Validate the name and every tone.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(ChimeError::InvalidEffect {
                name: self.name.clone(),
                reason: "name must not be empty".to_string(),
            });
        }
        if self.name.contains(['/', '\\']) || self.name == "." || self.name == ".." {
            return Err(ChimeError::InvalidEffect {
                name: self.name.clone(),
                reason: "name must be a plain file stem".to_string(),
            });
        }
        if self.tones().is_empty() {
            return Err(ChimeError::InvalidEffect {
                name: self.name.clone(),
                reason: "layered effect needs at least one tone".to_string(),
            });
        }
        for (index, tone) in self.tones().iter().enumerate() {
            tone.check().map_err(|reason| ChimeError::InvalidTone {
                effect: self.name.clone(),
                index,
                reason,
            })?;
        }
        Ok(())
    }
}
