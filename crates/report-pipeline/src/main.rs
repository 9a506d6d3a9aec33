//! Pipeline binary entry point.

use anyhow::Result;
use clap::Parser;
use report_artifacts::ArtifactStore;
use report_llm::{ApiLlmClient, ApiLlmConfig};
use report_pipeline::{run_all, run_cluster, run_overview, run_summarize, run_translate};
use report_pipeline::{Cli, Commands};
use report_types::PipelineConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = PipelineConfig::load(&cli.config)?;
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .init();

    info!(config = %cli.config, output_dir = %config.output_dir, "Pipeline starting");
    let store = ArtifactStore::at(config.output_dir.clone());

    match cli.command {
        Commands::Cluster => run_cluster(&config, &store)?,
        Commands::Summarize => {
            let llm = llm_client()?;
            run_summarize(&config, &store, &llm).await?;
        }
        Commands::Overview => {
            let llm = llm_client()?;
            run_overview(&config, &store, &llm).await?;
        }
        Commands::Translate => {
            let llm = llm_client()?;
            run_translate(&config, &store, &llm).await?;
        }
        Commands::All => {
            let llm = llm_client()?;
            run_all(&config, &store, &llm).await?;
        }
    }

    Ok(())
}

fn llm_client() -> Result<ApiLlmClient> {
    Ok(ApiLlmClient::new(ApiLlmConfig::from_env()?)?)
}
