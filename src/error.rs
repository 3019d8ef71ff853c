//! Error types for generation and the preference store.

use std::path::PathBuf;

use thiserror::Error;

/// A generation request failed; no output is produced.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The input text is not a JSON document.
    #[error("invalid JSON input: {0}")]
    Input(#[from] serde_json::Error),

    /// Convention and declaration kind contradict each other.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Nothing in the document can become a declaration.
    #[error("no object found to generate a model from")]
    NoModel,
}

/// Reading or writing the persisted selection failed.
#[derive(Debug, Error)]
pub enum ConfigStoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but does not hold a valid record.
    #[error("malformed config {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),

    /// No home directory to place the default config file under.
    #[error("HOME is not set; no default config location")]
    NoHome,
}
