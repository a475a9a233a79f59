//! Runtime configuration resolved from the CLI.

use anyhow::{bail, Result};
use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

use wanwatch_core::store::{STATE_FILE, STATS_FILE};

use crate::cli::Cli;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: IpAddr,
    pub port: u16,
    pub data_dir: PathBuf,
    pub log_file: Option<PathBuf>,
    pub poll: PollConfig,
}

/// Status poller cadence.
#[derive(Debug, Clone, Copy)]
pub struct PollConfig {
    /// Server-side `getUpdates` timeout
    pub timeout: Duration,
    /// Pause after a successful cycle
    pub idle_delay: Duration,
    /// Pause after a failed cycle
    pub retry_delay: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            idle_delay: Duration::from_secs(1),
            retry_delay: Duration::from_secs(1),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub api_base: String,
    pub token: String,
    pub chat_id: String,
}

impl ServerConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            bind: IpAddr::from([0, 0, 0, 0]),
            port: 8081,
            data_dir,
            log_file: None,
            poll: PollConfig::default(),
        }
    }

    pub fn from_cli(cli: &Cli) -> Self {
        let delay = Duration::from_millis(cli.serve.poll_delay_ms);
        Self {
            bind: cli.serve.bind,
            port: cli.serve.port,
            log_file: cli.log_file.clone(),
            poll: PollConfig {
                timeout: Duration::from_secs(cli.serve.poll_timeout_secs),
                idle_delay: delay,
                retry_delay: delay,
            },
            ..Self::new(cli.data_dir.clone())
        }
    }

    pub fn state_path(&self) -> PathBuf {
        self.data_dir.join(STATE_FILE)
    }

    pub fn stats_path(&self) -> PathBuf {
        self.data_dir.join(STATS_FILE)
    }
}

impl TelegramConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let token = cli.serve.telegram_token.clone().unwrap_or_default();
        let chat_id = cli.serve.chat_id.clone().unwrap_or_default();
        if token.trim().is_empty() {
            bail!("Telegram bot token is required (--telegram-token or WANWATCH_TELEGRAM_TOKEN)");
        }
        if chat_id.trim().is_empty() {
            bail!("Operator chat id is required (--chat-id or WANWATCH_CHAT_ID)");
        }
        Ok(Self { api_base: cli.serve.telegram_api.clone(), token, chat_id: chat_id.trim().to_string() })
    }
}
