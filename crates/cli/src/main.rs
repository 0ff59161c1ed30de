//! Shard Planner CLI
//!
//! Decides how many primary shards an index template should use, from the
//! cluster's data-node count or from recent index volume, and creates or
//! replaces the template on the cluster.

mod commands;
mod config;
mod output;

use anyhow::{Context, Result};
use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser, Subcommand};
use commands::{inspect, put_template};
use planner_lib::{
    ClusterApi, ClusterClient, ConnectionConfig, ShardCount, ShardSizingRequest, SizingStrategy,
    StructuredLogger, TemplateOrchestrator,
};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Shard Planner CLI
#[derive(Parser)]
#[command(name = "shard-planner")]
#[command(author, version, about = "Shard Planner: size primary shards and apply index templates", long_about = None)]
pub struct Cli {
    /// Connection properties file (INI, section ELASTICSEARCH_PROPERTIES)
    #[arg(long, env = "SHARD_PLANNER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Template definition with {{index_patterns}} and {{number_of_shards}} placeholders
    #[arg(long, env = "SHARD_PLANNER_TEMPLATE")]
    pub template: Option<PathBuf>,

    /// Output format
    #[arg(long, short, default_value = "table")]
    pub format: output::OutputFormat,

    /// Enable verbose output
    #[arg(long, short)]
    pub verbose: bool,

    /// Also append JSON log lines to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create or update the index template for a pattern
    PutTemplate {
        /// Index pattern, e.g. metrics_*, logs_*
        #[arg(long)]
        index_pattern: String,

        /// Size by data-node count (true) or by recent index volume (false)
        #[arg(long, action = ArgAction::Set, value_parser = BoolishValueParser::new())]
        use_data_nodes: bool,

        /// Explicit primary shard count; skips both strategies
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        number_of_shards: Option<u32>,

        /// Render the template without submitting it
        #[arg(long)]
        dry_run: bool,
    },

    /// Show cluster health and the volume sample for a pattern
    Inspect {
        /// Index pattern, e.g. metrics_*, logs_*
        #[arg(long)]
        index_pattern: String,
    },
}

fn init_tracing(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let file_layer = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            Some(fmt::layer().json().with_writer(Mutex::new(file)))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    init_tracing(cli.verbose, cli.log_file.as_deref())?;

    // Load connection properties
    let config_path = config::config_path(cli.config.as_deref())?;
    info!(config = %config_path.display(), "Starting shard-planner");
    let properties = ConnectionConfig::load(&config_path).with_context(|| {
        format!("Failed to load configuration from {}", config_path.display())
    })?;
    let logger = StructuredLogger::for_config(&properties);
    logger.log_properties(&properties);

    // Initialize client
    let cluster: Arc<dyn ClusterApi> =
        Arc::new(ClusterClient::new(&properties).context("Failed to create cluster client")?);
    let renderer = config::template_renderer(cli.template.as_deref());
    debug!(source = ?renderer.source(), "Template definition selected");
    let orchestrator = TemplateOrchestrator::new(
        cluster.clone(),
        renderer,
        properties.sample_window_days,
        logger,
    );

    // Execute command
    match cli.command {
        Commands::PutTemplate {
            index_pattern,
            use_data_nodes,
            number_of_shards,
            dry_run,
        } => {
            let request = ShardSizingRequest::new(
                index_pattern,
                SizingStrategy::from_use_data_nodes(use_data_nodes),
            )
            .with_explicit_count(number_of_shards.and_then(ShardCount::new));

            put_template::put_template(&orchestrator, &request, dry_run, cli.format).await?;
        }
        Commands::Inspect { index_pattern } => {
            inspect::inspect(cluster.as_ref(), &orchestrator, &index_pattern, cli.format).await?;
        }
    }

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::print_error(&format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_put_template_arguments() {
        let cli = Cli::try_parse_from([
            "shard-planner",
            "put-template",
            "--index-pattern",
            "metrics_*",
            "--use-data-nodes",
            "True",
            "--number-of-shards",
            "4",
        ])
        .unwrap();

        match cli.command {
            Commands::PutTemplate {
                index_pattern,
                use_data_nodes,
                number_of_shards,
                dry_run,
            } => {
                assert_eq!(index_pattern, "metrics_*");
                assert!(use_data_nodes);
                assert_eq!(number_of_shards, Some(4));
                assert!(!dry_run);
            }
            _ => panic!("expected put-template"),
        }
    }

    #[test]
    fn test_zero_shards_rejected() {
        let result = Cli::try_parse_from([
            "shard-planner",
            "put-template",
            "--index-pattern",
            "metrics_*",
            "--use-data-nodes",
            "false",
            "--number-of-shards",
            "0",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_strategy_selector_is_required() {
        let result = Cli::try_parse_from(["shard-planner", "put-template", "--index-pattern", "x_*"]);
        assert!(result.is_err());
    }
}
