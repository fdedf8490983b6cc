//! kgsearch - terminal client for the knowledge-graph search backend.
//!
//! # Usage
//!
//! ```bash
//! # Interactive terminal UI
//! kgsearch
//!
//! # One-shot search
//! kgsearch "summer dress"
//! kgsearch "summer dress" --json
//!
//! # Is the backend up?
//! kgsearch --check
//! ```

use anyhow::Result;
use clap::Parser;
use kgsearch::{output, utils, BackendStatus, Config, HttpSearchBackend, SearchBackend, SearchOrchestrator};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};

/// Search a knowledge-graph backed catalogue from the terminal.
///
/// Without a query, starts the interactive interface.
#[derive(Parser)]
#[command(name = "kgsearch", version, about)]
struct Cli {
    /// Run a single search and print the result
    query: Option<String>,

    /// Backend base URL (overrides SEARCH_BACKEND_URL)
    #[arg(long)]
    backend_url: Option<String>,

    /// Request timeout in seconds, 0 for none (overrides SEARCH_TIMEOUT_SECS)
    #[arg(long)]
    timeout: Option<u64>,

    /// Print the one-shot result as JSON
    #[arg(long, requires = "query")]
    json: bool,

    /// Check backend health and exit
    #[arg(long, conflicts_with = "query")]
    check: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = Config::from_env()?.with_overrides(cli.backend_url.clone(), cli.timeout);
    let backend = Arc::new(HttpSearchBackend::new(&config.backend)?);

    if cli.check {
        utils::init_stderr_logger(cli.verbose)?;
        return Ok(check(backend.as_ref()).await);
    }

    if let Some(query) = cli.query.as_deref() {
        utils::init_stderr_logger(cli.verbose)?;
        return Ok(search_once(backend.as_ref(), query, cli.json).await);
    }

    let _guard = utils::init_file_logger(&config.logging.dir, cli.verbose)?;
    info!("Configuration loaded: {:?}", config);
    kgsearch::tui::run(config, backend).await?;
    Ok(ExitCode::SUCCESS)
}

async fn check(backend: &HttpSearchBackend) -> ExitCode {
    match backend.health().await {
        BackendStatus::Ready => {
            println!("Backend at {} is running", backend.base_url());
            ExitCode::SUCCESS
        }
        _ => {
            println!("Backend at {} is unreachable", backend.base_url());
            ExitCode::FAILURE
        }
    }
}

async fn search_once(backend: &HttpSearchBackend, query: &str, json: bool) -> ExitCode {
    if query.trim().is_empty() {
        warn!("Ignoring blank query");
        return ExitCode::SUCCESS;
    }

    let mut orchestrator = SearchOrchestrator::new();
    orchestrator.search(backend, query).await;
    let state = orchestrator.state();

    if json {
        println!("{}", output::format_json(query, state));
    } else {
        print!("{}", output::format_human(state));
    }

    if state.has_error() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
