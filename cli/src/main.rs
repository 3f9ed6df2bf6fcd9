//! Task tracker
//!
//! Text-menu front end for the in-memory task store. Everything the user
//! sees goes to stdout; tracing output goes to stderr.

mod config;
mod shell;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ShellConfig;
use crate::shell::Shell;
use tracker_core::task::TaskStore;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "task_tracker=warn,tracker_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ShellConfig::from_env();
    tracing::debug!(?config, "loaded configuration");

    let mut store = TaskStore::new();
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    Shell::new(&mut store, stdin.lock(), stdout.lock(), config)
        .run()
        .context("terminal I/O failed")?;

    tracing::info!(tasks = store.len(), "session ended");
    Ok(())
}
