//! chime - writes the game's sound effects as WAV files.
//!
//! Renders every built-in effect into `assets/sounds/<name>.wav`.

use anyhow::{Context, Result};

use chime::SynthConfig;
use chime::catalog;
use chime::config::default_output_dir;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let out_dir = default_output_dir();
    tracing::info!("Generating game sounds (chime {})", chime::VERSION);

    catalog::generate_all(&catalog::builtin(), &SynthConfig::default(), &out_dir)
        .with_context(|| format!("Failed to generate sounds into {}", out_dir.display()))?;

    tracing::info!("Output directory: {}", out_dir.display());
    Ok(())
}
