//! The four-part analysis result emitted once per run

use crate::error::Result;
use crate::llm::prompts::AnalysisKind;
use crate::output::formatter::OutputFormatter;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Model output for each analysis. Every field is required, so a partial
/// result cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSet {
    pub summary: String,
    pub strengths: String,
    pub weaknesses: String,
    pub job_suggestions: String,
}

impl ResultSet {
    pub fn get(&self, kind: AnalysisKind) -> &str {
        match kind {
            AnalysisKind::Summary => &self.summary,
            AnalysisKind::Strengths => &self.strengths,
            AnalysisKind::Weaknesses => &self.weaknesses,
            AnalysisKind::JobSuggestions => &self.job_suggestions,
        }
    }

    /// Write the formatted result followed by a newline, then flush.
    /// Takes `self` so a result is emitted at most once.
    pub fn emit<W: Write>(self, formatter: &dyn OutputFormatter, writer: &mut W) -> Result<()> {
        let rendered = formatter.format(&self)?;
        writeln!(writer, "{}", rendered)?;
        writer.flush()?;
        Ok(())
    }
}
