//! Pokedex - An interactive PokeAPI client
//!
//! Reads commands from stdin and answers them from the catalog API, caching
//! responses for the configured interval.

use std::io::BufReader;

use anyhow::Context;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::repl::{run_repl, spawn_line_reader};
use pokedex::{Config, PokeApiClient, Session};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Load configuration from environment variables
/// 3. Create the catalog client, which starts the cache reaper
/// 4. Run the read-eval-print loop until `exit`, EOF or Ctrl+C
/// 5. Shut the cache reaper down
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn" so logs stay out of the way of the prompt,
    // can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_interval={}ms, api_base_url={}",
        config.cache_interval_ms, config.api_base_url
    );

    let client = PokeApiClient::new(&config).context("failed to start the catalog client")?;
    let mut session = Session::new(client, config.catch_difficulty);

    // Stdin is read on its own thread; a pending read never blocks exit
    let mut lines = spawn_line_reader(BufReader::new(std::io::stdin()));
    let mut stdout = std::io::stdout();

    let result = tokio::select! {
        result = run_repl(&mut session, &mut lines, &mut stdout) => result,
        _ = signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down...");
            Ok(())
        }
    };

    session.shutdown().await;
    info!("Pokedex closed");
    Ok(result?)
}
