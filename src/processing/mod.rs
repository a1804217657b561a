//! Resume text handling and the analysis engine

pub mod analyzer;
pub mod document;

pub use analyzer::ResumeAnalyzer;
pub use document::{ResumeText, TextChunk};
