//! wanwatch - Headless Daemon
//!
//! A small Rust service for OpenWrt-class routers that:
//! - Accepts mwan3 failover events (`to_reserve` / `to_main`) over HTTP POST
//! - Tracks outage duration and per-day / per-month downtime in JSON files
//! - Notifies the operator on Telegram and answers `/status`
//! - Prunes the stats every local midnight
//!
//! Default listen port: 8081

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod api;
mod cli;
mod commands;
mod config;
mod logging;
mod router;
mod scheduler;
mod server_utils;
mod state;

#[cfg(test)]
mod test_helpers;

use cli::{Cli, Commands};
use config::{ServerConfig, TelegramConfig};
use state::AppState;
use wanwatch_core::{StatusResponder, SystemClock, TelegramClient};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = logging::init(&cli.log_level, cli.log_file.as_deref())?;

    match cli.command {
        Some(Commands::Status { json }) => commands::handle_status(&cli.data_dir, json).await,
        Some(Commands::Serve) | None => serve(&cli).await,
    }
}

async fn serve(cli: &Cli) -> Result<()> {
    let config = ServerConfig::from_cli(cli);
    let telegram_config = TelegramConfig::from_cli(cli)?;

    info!("🚀 wanwatch starting on {}:{}...", config.bind, config.port);

    let http_client = reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .build()
        .context("Failed to build HTTP client")?;
    let telegram = Arc::new(TelegramClient::new(
        http_client,
        &telegram_config.api_base,
        telegram_config.token,
        telegram_config.chat_id,
    )?);

    let clock = Arc::new(SystemClock);
    let state = AppState::initialize(config.clone(), telegram.clone(), clock).await?;
    info!("✅ Application state initialized (data dir: {})", config.data_dir.display());
    if let Some(start) = state.outage().current().await.start_ts {
        info!("📡 Link has been on backup since {} (resuming outage)", start);
    }

    let cancel = CancellationToken::new();
    let retention = scheduler::retention::start(state.clone(), cancel.clone());
    let responder = Arc::new(StatusResponder::new(
        Arc::clone(state.stats()),
        telegram.clone(),
        Arc::clone(state.clock()),
        telegram.chat_id(),
    ));
    let poller = scheduler::status_poll::start(responder, telegram, config.poll, cancel.clone());

    let served = run_http(state, &config, cancel.clone()).await;

    cancel.cancel();
    let (retention, poller) = tokio::join!(retention, poller);
    if let Err(e) = retention {
        error!("Retention task ended abnormally: {}", e);
    }
    if let Err(e) = poller {
        error!("Status poller ended abnormally: {}", e);
    }

    info!("👋 wanwatch stopped");
    served
}

/// Bind and serve until shutdown. A bind failure is fatal for the process.
async fn run_http(state: AppState, config: &ServerConfig, cancel: CancellationToken) -> Result<()> {
    let listener = match server_utils::create_listener(config.bind, config.port).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("❌ Could not start HTTP server on port {}: {:#}", config.port, e);
            return Err(e);
        },
    };
    info!("🌐 Listening for mwan3 events on http://{}", listener.local_addr()?);

    let app = router::build_router(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(server_utils::shutdown_signal(cancel))
        .await
        .context("HTTP server failed")
}
