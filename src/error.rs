//! Error handling for the resume analyzer

use crate::llm::client::ModelError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeAnalyzerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("API key not found: set the {0} environment variable")]
    MissingApiKey(String),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("API rate limit exceeded after {attempts} attempts")]
    RateLimitExhausted { attempts: u32 },

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ResumeAnalyzerError>;
