//! Text extraction from various file formats

use crate::error::{Result, ResumeAnalyzerError};
use log::debug;
use pulldown_cmark::{html, Parser};
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Concatenate page texts in order, skipping pages that yielded no text.
pub fn concat_pages<I>(pages: I) -> String
where
    I: IntoIterator<Item = String>,
{
    pages
        .into_iter()
        .filter(|page| !page.trim().is_empty())
        .collect()
}

pub struct PdfExtractor;

impl PdfExtractor {
    /// Extract the text of every page, in page order. Pages without text come back empty.
    pub async fn extract_pages(&self, path: &Path) -> Result<Vec<String>> {
        let bytes = fs::read(path).await?;

        // pdf-extract can panic on malformed input; run it where a panic surfaces as a JoinError.
        let pages = tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem_by_pages(&bytes)
        })
        .await
        .map_err(|e| {
            ResumeAnalyzerError::PdfExtraction(format!(
                "PDF parser aborted on '{}': {}",
                path.display(),
                e
            ))
        })?
        .map_err(|e| {
            ResumeAnalyzerError::PdfExtraction(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))
        })?;

        Ok(pages)
    }
}

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let pages = self.extract_pages(path).await?;
        let total = pages.len();
        let empty = pages.iter().filter(|p| p.trim().is_empty()).count();
        if empty > 0 {
            debug!("Skipping {} of {} pages without text", empty, total);
        }
        Ok(concat_pages(pages))
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).await?;
        Ok(content)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await?;
        Ok(Self::markdown_to_text(&markdown_content))
    }
}

impl MarkdownExtractor {
    pub fn markdown_to_text(markdown: &str) -> String {
        let parser = Parser::new(markdown);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);
        Self::html_to_text(&html_output)
    }

    fn html_to_text(html: &str) -> String {
        static TAG: OnceLock<Regex> = OnceLock::new();
        let tag = TAG.get_or_init(|| Regex::new(r"<[^>]*>").expect("Invalid tag regex"));

        let text = html.replace("<br>", "\n").replace("</p>", "\n\n");
        let stripped = tag.replace_all(&text, "");

        // Entities last so escaped angle brackets are not mistaken for tags.
        let decoded = stripped
            .replace("&nbsp;", " ")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&amp;", "&");

        decoded
            .lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
