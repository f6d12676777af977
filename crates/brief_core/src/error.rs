use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read config file at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid executive summary payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// The API answered but could not produce a summary
    #[error("executive summary unavailable: {0}")]
    SummaryUnavailable(String),

    #[error("Typst compilation failed: {0}")]
    Typst(String),

    #[error("PDF generation failed: {0}")]
    Pdf(String),
}

pub type Result<T> = std::result::Result<T, Error>;
