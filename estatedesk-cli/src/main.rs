//! EstateDesk data layer binary.
//!
//! Two jobs:
//! 1. `serve`: expose the seed fixtures (or a fixture file) over the same
//!    HTTP API the dashboard stores read from
//! 2. `load`: build the stores, refresh them and print a JSON summary
//!
//! Usage:
//!   estatedesk serve --port 4010
//!   estatedesk load --base-url http://127.0.0.1:4010
//!   estatedesk load --fixtures --kind leases

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use estatedesk_cli::{AppConfig, build_router};
use estatedesk_model::RecordKind;
use estatedesk_store::{FixtureData, Stores};
use std::{fs, path::PathBuf, sync::Arc};
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "estatedesk")]
#[command(about = "EstateDesk fixture API and store loader")]
struct Args {
    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve fixture collections over HTTP
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4010")]
        port: u16,

        /// JSON fixture file (defaults to the built-in seed data)
        #[arg(long)]
        data: Option<PathBuf>,
    },
    /// Refresh the stores and print their state
    Load {
        /// Only refresh this collection
        #[arg(short, long)]
        kind: Option<RecordKind>,

        /// API root, overriding the config file
        #[arg(long)]
        base_url: Option<String>,

        /// Use the built-in seed data instead of the HTTP API
        #[arg(long, conflicts_with = "base_url")]
        fixtures: bool,

        /// Path to a JSON config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    match args.command {
        Command::Serve { port, data } => serve(port, data).await,
        Command::Load {
            kind,
            base_url,
            fixtures,
            config,
        } => load(kind, base_url, fixtures, config).await,
    }
}

fn load_fixture_data(path: Option<PathBuf>) -> Result<FixtureData> {
    match path {
        Some(path) => {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("reading fixture file {}", path.display()))?;
            FixtureData::from_json(&raw)
                .with_context(|| format!("parsing fixture file {}", path.display()))
        }
        None => FixtureData::seed().context("parsing built-in seed data"),
    }
}

async fn serve(port: u16, data: Option<PathBuf>) -> Result<()> {
    let data = load_fixture_data(data)?;
    for kind in RecordKind::ALL {
        info!("Serving {} {}", data.count(kind), kind);
    }

    let app = build_router(Arc::new(data));
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .with_context(|| format!("binding HTTP port {port}"))?;

    println!("\n========================================");
    println!("  EstateDesk Fixture API Running");
    println!("========================================");
    println!("  Port:      {}", port);
    println!("  Base URL:  http://127.0.0.1:{}", port);
    println!("  Example:   GET /api/v1/properties");
    println!("========================================\n");

    axum::serve(listener, app).await.context("HTTP server failed")
}

async fn load(
    kind: Option<RecordKind>,
    base_url: Option<String>,
    fixtures: bool,
    config: Option<PathBuf>,
) -> Result<()> {
    let config = AppConfig::load(config.as_deref())?.with_base_url(base_url);

    let stores = if fixtures {
        info!("Loading from built-in fixtures");
        Stores::with_fixtures(FixtureData::seed()?, config.store)
    } else {
        info!("Loading from {}", config.source.base_url);
        Stores::with_http(&config.source, config.store)?
    };

    let summaries = match kind {
        Some(kind) => {
            stores.refresh_kind(kind).await;
            vec![stores.summary_of(kind)]
        }
        None => {
            stores.refresh_all().await;
            stores.summary()
        }
    };

    println!("{}", serde_json::to_string_pretty(&summaries)?);

    let failed: Vec<_> = summaries.iter().filter(|s| s.error.is_some()).collect();
    for summary in &failed {
        warn!(
            "{} failed to load: {}",
            summary.kind,
            summary.error.as_deref().unwrap_or_default()
        );
    }
    if !failed.is_empty() {
        bail!("{} of {} stores failed to load", failed.len(), summaries.len());
    }
    Ok(())
}
