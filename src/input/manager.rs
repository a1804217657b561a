//! Resume loading: routes a file to the right extractor

use crate::error::{Result, ResumeAnalyzerError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{
    MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor,
};
use crate::processing::document::ResumeText;
use log::info;
use std::path::Path;

#[derive(Debug, Default)]
pub struct ResumeLoader;

impl ResumeLoader {
    pub fn new() -> Self {
        Self
    }

    /// Read the resume at `path` and return its extracted text.
    pub async fn load(&self, path: &Path) -> Result<ResumeText> {
        if !path.exists() {
            return Err(ResumeAnalyzerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }
        if !path.is_file() {
            return Err(ResumeAnalyzerError::InvalidInput(format!(
                "Not a regular file: {}",
                path.display()
            )));
        }

        let file_type = FileType::detect(path).ok_or_else(|| {
            ResumeAnalyzerError::InvalidInput(format!("File has no extension: {}", path.display()))
        })?;

        let text = match file_type {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            FileType::Unknown => {
                return Err(ResumeAnalyzerError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        info!("Extracted {} characters of resume text", text.chars().count());
        Ok(ResumeText::new(text))
    }
}
