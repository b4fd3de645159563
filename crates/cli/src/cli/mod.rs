//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};

use pokecache::config::{Config, DEFAULT_POKEAPI_URL};
use pokecache_core::catalog::EntityId;

/// CLI for the pokecache catalog service.
#[derive(Debug, Parser)]
#[command(name = "pokecache")]
#[command(version, about = "Cached lookups against the PokeAPI catalog", long_about = None)]
pub struct Cli {
    /// Upstream base URL.
    #[arg(long, env = "POKEAPI_URL", default_value = DEFAULT_POKEAPI_URL)]
    pub base_url: String,

    /// Per-call upstream timeout in seconds.
    #[arg(long, env = "UPSTREAM_TIMEOUT_SECONDS")]
    pub timeout_seconds: Option<u64>,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Builds the service configuration, letting flags override the environment.
    pub fn config(&self) -> Config {
        let mut config = Config::from_env();
        config.pokeapi_url = self.base_url.trim_end_matches('/').to_string();
        if let Some(seconds) = self.timeout_seconds {
            config.upstream_timeout_seconds = seconds;
        }
        config
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Get one pokemon by id.
    Get {
        /// Pokemon ID.
        id: EntityId,
    },
    /// List one page of pokemon.
    List {
        /// Page number, starting at 1.
        #[arg(long)]
        page: Option<u32>,
        /// Page size (defaults to DEFAULT_PAGE_LIMIT).
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Run a scripted session against an offline catalog and report upstream calls.
    Demo,
}
