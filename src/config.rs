//! Synthesis settings shared by the mixer, encoder and catalog driver.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Output sample rate in Hz.
pub const SAMPLE_RATE: u32 = 44100;

/// Settings applied when mixing and encoding sound effects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SynthConfig {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Silence in seconds inserted before layered effects, so playback
    /// engines that pop on initialization do it over silence.
    pub silence_prefix: f64,
    /// Length in seconds of the cosine fade at the end of layered effects.
    pub fade_out: f64,
    /// Peak ceiling applied by normalization.
    pub headroom: f64,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            sample_rate: SAMPLE_RATE,
            silence_prefix: 0.035,
            fade_out: 0.01,
            headroom: 0.9,
        }
    }
}

impl SynthConfig {
    /// Number of whole samples in `seconds`.
    pub fn samples_for(&self, seconds: f64) -> usize {
        (self.sample_rate as f64 * seconds).floor() as usize
    }
}

/// Where the `chime` binary writes its files: `assets/sounds` under the crate root.
pub fn default_output_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("assets")
        .join("sounds")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = SynthConfig::default();
        assert_eq!(cfg.sample_rate, 44100);
        assert_eq!(cfg.silence_prefix, 0.035);
        assert_eq!(cfg.fade_out, 0.01);
        assert_eq!(cfg.headroom, 0.9);
    }

    #[test]
    fn samples_for_floors() {
        let cfg = SynthConfig::default();
        assert_eq!(cfg.samples_for(0.05), 2205);
        assert_eq!(cfg.samples_for(0.01), 441);
        assert_eq!(cfg.samples_for(1.0 / 44100.0 * 0.5), 0);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let cfg: SynthConfig = serde_json::from_str(r#"{ "headroom": 0.5 }"#).unwrap();
        assert_eq!(cfg.headroom, 0.5);
        assert_eq!(cfg.sample_rate, 44100);
        assert_eq!(cfg.silence_prefix, 0.035);
    }

    #[test]
    fn output_dir_under_crate() {
        let dir = default_output_dir();
        assert!(dir.ends_with("assets/sounds"));
    }
}
