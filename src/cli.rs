//! CLI interface for the resume analyzer

use crate::config::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "resume-analyzer")]
#[command(about = "AI-powered resume analysis")]
#[command(long_about = "Extract the text of a resume and ask a hosted generative model for a summary, strengths, weaknesses and job suggestions. Prints a single JSON object.")]
pub struct Cli {
    /// Path to resume file (PDF, TXT, MD)
    pub resume: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format: json, markdown
    #[arg(short, long, value_parser = parse_output_format)]
    pub format: Option<OutputFormat>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Generative model to use (overrides the configured model)
    #[arg(short, long)]
    pub model: Option<String>,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!("Invalid output format: {}. Supported: json, markdown", format)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_positional_argument() {
        let cli = Cli::try_parse_from(["resume-analyzer", "resume.pdf"]).unwrap();
        assert_eq!(cli.resume, PathBuf::from("resume.pdf"));
        assert!(!cli.verbose);
        assert!(cli.format.is_none());
    }

    #[test]
    fn test_wrong_argument_count_is_usage_error() {
        assert!(Cli::try_parse_from(["resume-analyzer"]).is_err());
        assert!(Cli::try_parse_from(["resume-analyzer", "a.pdf", "b.pdf"]).is_err());
    }

    #[test]
    fn test_options() {
        let cli = Cli::try_parse_from([
            "resume-analyzer",
            "-v",
            "--format",
            "md",
            "--model",
            "gemini-pro",
            "cv.pdf",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.format, Some(OutputFormat::Markdown));
        assert_eq!(cli.model.as_deref(), Some("gemini-pro"));
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert!(parse_output_format("html").is_err());
    }
}
