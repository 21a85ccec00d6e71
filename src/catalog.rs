//! Built-in game sound catalog and the driver that writes it to disk.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::SynthConfig;
use crate::dsp::oscillator::Waveform::{self, Sawtooth, Sine};
use crate::dsp::renderer::render_effect_wav;
use crate::error::{ChimeError, Result};
use crate::tone::{SoundEffect, ToneSpec};

const fn tone(
    frequency: f64,
    duration: f64,
    waveform: Waveform,
    volume: f64,
    delay: f64,
) -> ToneSpec {
    ToneSpec::new(frequency, duration, waveform, volume).delayed(delay)
}

/// The game's sound effects.
pub fn builtin() -> Vec<SoundEffect> {
    vec![
        // Countdown tick
        SoundEffect::single("tick", ToneSpec::new(600.0, 0.05, Sine, 0.15)),
        // Warning: a longer, lower tick
        SoundEffect::single("time_up", ToneSpec::new(440.0, 0.1, Sine, 0.2)),
        // Ascending C-E-G
        SoundEffect::layered(
            "correct",
            vec![
                tone(523.0, 0.15, Sine, 0.3, 0.0),
                tone(659.0, 0.15, Sine, 0.3, 0.1),
                tone(784.0, 0.2, Sine, 0.3, 0.2),
            ],
        ),
        // Descending buzz
        SoundEffect::layered(
            "wrong",
            vec![
                tone(400.0, 0.2, Sawtooth, 0.2, 0.0),
                tone(300.0, 0.3, Sawtooth, 0.15, 0.15),
            ],
        ),
        // Sparkle
        SoundEffect::layered(
            "bonus",
            vec![
                tone(800.0, 0.1, Sine, 0.25, 0.0),
                tone(1000.0, 0.1, Sine, 0.25, 0.08),
                tone(1200.0, 0.15, Sine, 0.3, 0.16),
            ],
        ),
        SoundEffect::layered(
            "streak",
            vec![
                tone(700.0, 0.1, Sine, 0.25, 0.0),
                tone(900.0, 0.1, Sine, 0.25, 0.07),
                tone(1100.0, 0.15, Sine, 0.3, 0.14),
                tone(1300.0, 0.15, Sine, 0.25, 0.21),
            ],
        ),
        SoundEffect::layered(
            "round_start",
            vec![
                tone(400.0, 0.15, Sine, 0.25, 0.0),
                tone(500.0, 0.15, Sine, 0.25, 0.15),
                tone(600.0, 0.2, Sine, 0.3, 0.3),
            ],
        ),
        // Starts at 300 Hz; lower fundamentals distort on phone speakers
        SoundEffect::layered(
            "reveal",
            vec![
                tone(300.0, 0.35, Sine, 0.15, 0.0),
                tone(500.0, 0.3, Sine, 0.25, 0.25),
            ],
        ),
        // Fanfare C-E-G-C, volumes kept low where the notes overlap
        SoundEffect::layered(
            "victory",
            vec![
                tone(523.0, 0.25, Sine, 0.2, 0.0),
                tone(659.0, 0.25, Sine, 0.2, 0.2),
                tone(784.0, 0.25, Sine, 0.2, 0.4),
                tone(1047.0, 0.35, Sine, 0.25, 0.6),
            ],
        ),
        SoundEffect::layered(
            "game_over",
            vec![
                tone(400.0, 0.3, Sine, 0.15, 0.0),
                tone(300.0, 0.4, Sine, 0.2, 0.25),
            ],
        ),
    ]
}

/// Validate a whole catalog: every effect, plus unique names.
pub fn validate(effects: &[SoundEffect]) -> Result<()> {
    let mut seen = HashSet::new();
    for effect in effects {
        effect.validate()?;
        if !seen.insert(effect.name.as_str()) {
            return Err(ChimeError::InvalidEffect {
                name: effect.name.clone(),
                reason: "duplicate name".to_string(),
            });
        }
    }
    Ok(())
}

/// Parse and validate a JSON array of sound effects.
pub fn from_json(json: &str) -> Result<Vec<SoundEffect>> {
    let effects: Vec<SoundEffect> = serde_json::from_str(json)?;
    validate(&effects)?;
    Ok(effects)
}

/// Serialize a catalog as pretty-printed JSON.
pub fn to_json(effects: &[SoundEffect]) -> Result<String> {
    Ok(serde_json::to_string_pretty(effects)?)
}

/// Create the output directory if it does not exist yet.
pub fn prepare_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| ChimeError::io(dir, e))
}

/// Render one effect and write it to `<dir>/<name>.wav`.
pub fn write_effect(effect: &SoundEffect, config: &SynthConfig, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(effect.file_name());
    let wav = render_effect_wav(effect, config);
    fs::write(&path, &wav).map_err(|e| ChimeError::io(&path, e))?;
    info!("Generated: {}", effect.file_name());
    Ok(path)
}

/// Render and write every effect in `effects`, in order.
///
/// Stops at the first I/O failure. Returns the paths written.
pub fn generate_all(
    effects: &[SoundEffect],
    config: &SynthConfig,
    dir: &Path,
) -> Result<Vec<PathBuf>> {
    validate(effects)?;
    prepare_output_dir(dir)?;

    let written = effects
        .iter()
        .map(|effect| write_effect(effect, config, dir))
        .collect::<Result<Vec<_>>>()?;

    info!(count = written.len(), dir = %dir.display(), "All sounds generated successfully");
    Ok(written)
}
