//! Error types for the user generator.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Errors that can occur while generating users.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Input file argument missing or pointing at nothing
    #[error("File [{}] not found", display_path(.file))]
    Usage { file: Option<PathBuf> },

    /// Hash name outside the supported set
    #[error("Hash [{0}] not supported")]
    UnsupportedHash(String),

    /// Failed to read the input file after it passed validation
    #[error("Was not able to read file [{}] [{source}]", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the output
    #[error("Was not able to write to file [{}] [{source}]", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the output to stdout
    #[error("Was not able to write to stdout [{0}]")]
    Stdout(#[source] std::io::Error),

    /// The system random source failed
    #[error("Random source error: {0}")]
    Random(#[from] rand::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GeneratorError {
    /// Returns `true` for errors that should be followed by the usage text.
    pub fn is_usage(&self) -> bool {
        matches!(self, GeneratorError::Usage { .. })
    }
}

fn display_path(file: &Option<PathBuf>) -> String {
    file.as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_default()
}
