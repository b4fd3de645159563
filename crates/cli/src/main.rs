//! pokecache CLI entry point.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokecache::CatalogService;
use pokecache_cli::cli::{Cli, Commands, OutputFormat};
use pokecache_cli::demo::run_demo;
use pokecache_cli::output::{json, pretty};
use pokecache_core::catalog::{
    catalog_error_to_status_code, page_request_error_to_status_code, CatalogError, PageRequest,
    PageRequestError,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays machine readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokecache=info,pokecache_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", describe(&err));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Get { id } => {
            let service = connect(&cli)?;
            let entity = service.get_entity(id).await?;
            match cli.format {
                OutputFormat::Json => println!("{}", json::format_json(&entity)?),
                OutputFormat::Pretty => println!("{}", pretty::format_entity(&entity)),
            }
        }
        Commands::List { page, limit } => {
            let config = cli.config();
            let limit = limit.unwrap_or(config.default_page_limit);
            let request = PageRequest::from_query(page, Some(limit))?;
            let service = connect(&cli)?;
            let entities = service.list_entities(request).await?;
            match cli.format {
                OutputFormat::Json => println!("{}", json::format_json(&entities)?),
                OutputFormat::Pretty => {
                    if !cli.quiet {
                        println!("Page {} (limit {})", request.page(), request.limit());
                    }
                    println!("{}", pretty::format_entities(&entities))
                }
            }
        }
        Commands::Demo => {
            let report = run_demo().await?;
            match cli.format {
                OutputFormat::Json => println!("{}", json::format_json(&report)?),
                OutputFormat::Pretty => println!("{}", pretty::format_demo(&report)),
            }
        }
    }

    Ok(())
}

fn connect(cli: &Cli) -> Result<CatalogService> {
    let config = cli.config();
    tracing::debug!(
        url = %config.pokeapi_url,
        timeout = config.upstream_timeout_seconds,
        "Connecting to upstream"
    );
    CatalogService::from_config(&config).context("failed to build upstream HTTP client")
}

/// Prefixes domain errors with the HTTP status they map to.
fn describe(err: &anyhow::Error) -> String {
    if let Some(catalog) = err.downcast_ref::<CatalogError>() {
        format!("[{}] {}", catalog_error_to_status_code(catalog), catalog)
    } else if let Some(request) = err.downcast_ref::<PageRequestError>() {
        format!("[{}] {}", page_request_error_to_status_code(request), request)
    } else {
        format!("{:#}", err)
    }
}
