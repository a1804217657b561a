//! Resume text and chunking

use crate::error::{Result, ResumeAnalyzerError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The extracted text of one resume. Built once per run and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeText(String);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextChunk {
    pub content: String,
    pub start_index: usize,
    pub end_index: usize,
    pub chunk_id: usize,
}

impl ResumeText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn word_count(&self) -> usize {
        self.0.split_whitespace().count()
    }

    /// Split into overlapping windows of `chunk_size` characters.
    ///
    /// A window that does not reach the end of the text is cut back to the last
    /// whitespace or sentence punctuation inside it. The next window starts
    /// `overlap` characters before that cut, so every character lands in some
    /// chunk. Indices are character offsets.
    pub fn chunks(&self, chunk_size: usize, overlap: usize) -> Result<Vec<TextChunk>> {
        if chunk_size <= overlap {
            return Err(ResumeAnalyzerError::Processing(
                "Chunk size must be greater than overlap".to_string(),
            ));
        }

        let content_chars: Vec<char> = self.0.chars().collect();
        let total_length = content_chars.len();
        let mut chunks = Vec::new();

        if total_length == 0 {
            return Ok(chunks);
        }

        let mut start = 0;

        while start < total_length {
            let end = std::cmp::min(start + chunk_size, total_length);

            let mut actual_end = end;
            if end < total_length {
                for i in (start..end).rev() {
                    let c = content_chars[i];
                    if c.is_whitespace() || c == '.' || c == '!' || c == '?' {
                        actual_end = i + 1;
                        break;
                    }
                }
            }

            let chunk_content: String = content_chars[start..actual_end].iter().collect();
            let trimmed = chunk_content.trim();
            if !trimmed.is_empty() {
                chunks.push(TextChunk {
                    content: trimmed.to_string(),
                    start_index: start,
                    end_index: actual_end,
                    chunk_id: chunks.len(),
                });
            }

            if end == total_length {
                break;
            }
            // Always move forward, even when the cut leaves less than `overlap`.
            start = actual_end.saturating_sub(overlap).max(start + 1);
        }

        Ok(chunks)
    }
}

impl fmt::Display for ResumeText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ResumeText {
    fn from(text: String) -> Self {
        Self(text)
    }
}
