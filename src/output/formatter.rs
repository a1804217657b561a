//! Output formatters for the analysis result

use crate::config::OutputFormat;
use crate::error::Result;
use crate::llm::prompts::AnalysisKind;
use crate::output::report::ResultSet;

pub trait OutputFormatter {
    fn format(&self, results: &ResultSet) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, results: &ResultSet) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(results)?)
        } else {
            Ok(serde_json::to_string(results)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

/// One `##` section per analysis, in run order.
pub struct MarkdownFormatter;

impl OutputFormatter for MarkdownFormatter {
    fn format(&self, results: &ResultSet) -> Result<String> {
        let sections: Vec<String> = AnalysisKind::ALL
            .iter()
            .map(|kind| format!("## {}\n\n{}\n", kind.title(), results.get(*kind).trim()))
            .collect();
        Ok(sections.join("\n"))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

pub fn formatter_for(format: OutputFormat, pretty: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter::new(pretty)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter),
    }
}
