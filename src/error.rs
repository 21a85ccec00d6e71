use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ChimeError>;

#[derive(Debug, Error)]
pub enum ChimeError {
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid tone #{index} in '{effect}': {reason}")]
    InvalidTone {
        effect: String,
        index: usize,
        reason: String,
    },

    #[error("Invalid sound effect '{name}': {reason}")]
    InvalidEffect { name: String, reason: String },

    #[error("Unknown waveform '{0}'")]
    UnknownWaveform(String),

    #[error("Catalog JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ChimeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ChimeError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_names_path() {
        let err = ChimeError::io(
            "/tmp/out/tick.wav",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/tmp/out/tick.wav"), "{msg}");
        assert!(msg.contains("denied"), "{msg}");
    }

    #[test]
    fn tone_error_display() {
        let err = ChimeError::InvalidTone {
            effect: "wrong".to_string(),
            index: 1,
            reason: "volume must be in (0, 1], got 2".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid tone #1 in 'wrong': volume must be in (0, 1], got 2"
        );
    }
}
