// src/error.rs

use std::path::PathBuf;

/// Failures while loading or interpreting a scene file.
#[derive(thiserror::Error, Debug)]
pub enum SceneError {
    #[error("failed to read scene file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("scene parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid room {w}x{h}: width and height must be finite and positive")]
    InvalidRoom { w: f64, h: f64 },

    #[error("obstacle {index}: {reason}")]
    InvalidObstacle { index: usize, reason: String },
}
