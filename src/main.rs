mod cli;
mod config;
mod llm;
mod models;
mod service;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::AppConfig;
use llm::LlmClient;

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional; the process environment is used otherwise
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env(cli.overrides())?;
    let client = LlmClient::new(&config.provider)?;

    service::find(&client, &cli.query(), &config.output_dir).await?;

    Ok(())
}
