//! Analysis engine: runs the four analyses in order and collects the result

use crate::config::ProcessingConfig;
use crate::error::Result;
use crate::llm::analyzer::AnalysisClient;
use crate::llm::prompts::AnalysisKind;
use crate::output::report::ResultSet;
use crate::processing::document::ResumeText;
use log::{debug, info, warn};
use std::time::Instant;

/// Condenses the resume into a summary, then derives strengths, weaknesses and
/// job suggestions from that summary.
pub struct ResumeAnalyzer {
    client: AnalysisClient,
    processing: ProcessingConfig,
}

impl ResumeAnalyzer {
    pub fn new(client: AnalysisClient, processing: ProcessingConfig) -> Self {
        Self { client, processing }
    }

    /// Run all four analyses strictly in sequence. The first failure aborts the
    /// run and no partial result is returned.
    pub async fn analyze(&self, resume: &ResumeText) -> Result<ResultSet> {
        let start_time = Instant::now();

        if resume.is_empty() {
            warn!("Resume text is empty; the model will only see the instructions");
        }

        // Chunks are only reported; every prompt carries the whole text.
        let chunks = resume.chunks(self.processing.chunk_size, self.processing.chunk_overlap)?;
        debug!(
            "Resume: {} words, {} chunks of up to {} chars",
            resume.word_count(),
            chunks.len(),
            self.processing.chunk_size
        );

        info!("Using model {}", self.client.model_name());

        let summary = self.run(AnalysisKind::Summary, resume.as_str()).await?;
        let strengths = self.run(AnalysisKind::Strengths, &summary).await?;
        let weaknesses = self.run(AnalysisKind::Weaknesses, &summary).await?;
        let job_suggestions = self.run(AnalysisKind::JobSuggestions, &summary).await?;

        info!(
            "Analysis completed in {}ms",
            start_time.elapsed().as_millis()
        );

        Ok(ResultSet {
            summary,
            strengths,
            weaknesses,
            job_suggestions,
        })
    }

    async fn run(&self, kind: AnalysisKind, text: &str) -> Result<String> {
        info!("Generating {}...", kind);
        let prompt = kind.render(text);
        self.client.analyze(&prompt).await
    }
}
