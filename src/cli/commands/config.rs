//! Config command - show the effective configuration

use crate::cli::output::{colors, print_header};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::services::Services;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the show-config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Also show where the config file is read from
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<String>,
    #[serde(flatten)]
    pub config: Config,
}

/// Execute the show-config command
pub async fn execute(
    args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config_file = args
        .all
        .then(|| XdgDirs::new().config_file().display().to_string());

    let response = ConfigResponse {
        config_file,
        config: services.config.as_ref().clone(),
    };

    match format {
        OutputFormat::Human => {
            let config = &response.config;
            print_header("Configuration:");
            if let Some(path) = &response.config_file {
                println!("  config_file: {}", colors::file_path(path));
            }
            println!("  ingest:");
            println!(
                "    source_dir: {}",
                colors::file_path(&config.ingest.source_dir.display().to_string())
            );
            println!("    extension: {}", config.ingest.extension);
            println!("    concurrency: {}", config.ingest.concurrency);
            println!("    batch_delay_ms: {}", config.ingest.batch_delay_ms);
            println!("  storage:");
            println!(
                "    data_dir: {}",
                colors::file_path(&config.storage.data_dir.display().to_string())
            );
            println!("    retry_attempts: {}", config.storage.retry_attempts);
            println!("    retry_delay_ms: {}", config.storage.retry_delay_ms);
            println!("  search:");
            println!("    default_limit: {}", config.search.default_limit);
            println!("    max_limit: {}", config.search.max_limit);
            println!("    max_query_length: {}", config.search.max_query_length);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
