//! Stateless oscillators evaluated directly at a point in time.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChimeError;

/// Supported waveform shapes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Waveform {
    #[default]
    Sine,
    Triangle,
    #[serde(alias = "saw")]
    Sawtooth,
}

impl Waveform {
    /// Amplitude in [-1, 1] of this waveform at time `t` (seconds).
    ///
    /// `frequency` must be positive.
    pub fn sample(self, t: f64, frequency: f64) -> f64 {
        match self {
            Waveform::Sine => sine(t, frequency),
            Waveform::Triangle => triangle(t, frequency),
            Waveform::Sawtooth => sawtooth(t, frequency),
        }
    }

    /// Lowercase name used in catalogs and file listings.
    pub fn name(self) -> &'static str {
        match self {
            Waveform::Sine => "sine",
            Waveform::Triangle => "triangle",
            Waveform::Sawtooth => "sawtooth",
        }
    }
}

impl fmt::Display for Waveform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Waveform {
    type Err = ChimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sine" => Ok(Waveform::Sine),
            "triangle" => Ok(Waveform::Triangle),
            "sawtooth" | "saw" => Ok(Waveform::Sawtooth),
            other => Err(ChimeError::UnknownWaveform(other.to_string())),
        }
    }
}

/// Evaluate `shape` at time `t` for the given frequency.
pub fn wave(shape: Waveform, t: f64, frequency: f64) -> f64 {
    shape.sample(t, frequency)
}

fn sine(t: f64, frequency: f64) -> f64 {
    (2.0 * PI * frequency * t).sin()
}

/// Position within the current period, in [0, 1).
fn phase(t: f64, frequency: f64) -> f64 {
    let period = 1.0 / frequency;
    (t % period) / period
}

/// +1 at the start of each period, -1 at its midpoint.
fn triangle(t: f64, frequency: f64) -> f64 {
    4.0 * (phase(t, frequency) - 0.5).abs() - 1.0
}

/// Rises from -1 to +1 over each period, then resets.
fn sawtooth(t: f64, frequency: f64) -> f64 {
    2.0 * phase(t, frequency) - 1.0
}
