//! Resume analyzer: AI-powered resume summary, strengths, weaknesses and job suggestions

use anyhow::Context;
use clap::Parser;
use log::{debug, info};
use resume_analyzer::cli::Cli;
use resume_analyzer::config::Config;
use resume_analyzer::input::ResumeLoader;
use resume_analyzer::llm::analyzer::AnalysisClient;
use resume_analyzer::llm::client::GeminiClient;
use resume_analyzer::output::formatter_for;
use resume_analyzer::processing::ResumeAnalyzer;
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(model) = cli.model {
        config.model.name = model;
    }
    debug!(
        "Model {} at {} ({} attempts, {}ms backoff unit)",
        config.model.name, config.model.base_url, config.retry.max_attempts, config.retry.base_delay_ms
    );

    // The credential is required before any work starts.
    let api_key = config.api_key()?;

    let resume = ResumeLoader::new()
        .load(&cli.resume)
        .await
        .context("failed to load resume")?;

    let model = GeminiClient::new(&config.model, api_key).context("failed to build model client")?;
    let client = AnalysisClient::new(Box::new(model), config.retry_policy());
    let analyzer = ResumeAnalyzer::new(client, config.processing.clone());

    info!("Starting resume analysis: {}", cli.resume.display());
    let results = analyzer.analyze(&resume).await.context("analysis failed")?;

    let format = cli.format.unwrap_or(config.output.format);
    let formatter = formatter_for(format, cli.pretty || config.output.pretty);
    let stdout = std::io::stdout();
    results
        .emit(formatter.as_ref(), &mut stdout.lock())
        .context("failed to write results")?;

    Ok(())
}
