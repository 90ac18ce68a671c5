//! storefront-config CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;

use storefront_config::cli::{commands, handle_error, Cli, Commands};
use storefront_config::domain::errors::ConfigError;
use storefront_config::domain::models::{LoggerOptions, RuntimeConfig};
use storefront_config::infrastructure::config::ConfigLoader;
use storefront_config::infrastructure::logging::{LoggerImpl, TracingWarnLogger};
use storefront_config::services::{ConfigResolver, ConfigService};

type Resolved = Result<Result<RuntimeConfig, ConfigError>>;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli).await {
        handle_error(err, json);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut loader = ConfigLoader::new().with_development_defaults(cli.dev);
    if let Some(path) = &cli.config {
        loader = loader.with_file(path);
    }
    let resolver = ConfigResolver::from_env();
    let resolved: Resolved = loader
        .load_partial()
        .context("Failed to load configuration layers")
        .map(|partial| resolver.resolve(&partial));

    // Logger settings are part of the configuration itself; fall back to the
    // defaults when the configuration does not load or resolve.
    let logger_options = match &resolved {
        Ok(Ok(config)) => config.logger_options.clone(),
        _ => LoggerOptions::default(),
    };
    let _logger = LoggerImpl::init(&logger_options)?;
    let warn_logger = TracingWarnLogger;

    match cli.command {
        Commands::Validate => commands::validate::execute(resolved?, &warn_logger, cli.json),
        Commands::Defaults => commands::defaults::execute(&resolver, cli.json),
        Commands::Init { force, path } => {
            commands::init::execute(&resolver, &path, force, cli.json).await
        }
        Commands::Show { domain } => {
            let service = into_service(resolved, &warn_logger)?;
            commands::show::execute(&service, domain, cli.json)
        }
        Commands::Plugins => {
            let service = into_service(resolved, &warn_logger)?;
            commands::plugins::execute(&service, cli.json)
        }
    }
}

fn into_service(resolved: Resolved, warn_logger: &TracingWarnLogger) -> Result<ConfigService> {
    let config = resolved?.context("Failed to resolve configuration")?;
    Ok(ConfigService::from_resolved(config, warn_logger))
}
