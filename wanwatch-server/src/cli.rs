use clap::{Args, Parser, Subcommand};
use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "wanwatch",
    about = "wanwatch - mwan3 failover watcher with Telegram notifications",
    version = env!("CARGO_PKG_VERSION"),
    author,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(long, global = true, env = "WANWATCH_DATA_DIR", default_value = ".")]
    pub data_dir: PathBuf,

    #[arg(short, long, global = true, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    #[arg(
        long,
        global = true,
        env = "WANWATCH_LOG_FILE",
        help = "Also log to this file (truncated nightly)"
    )]
    pub log_file: Option<PathBuf>,

    #[command(flatten)]
    pub serve: ServeArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run the watcher daemon (default if no command specified)")]
    Serve,

    #[command(about = "Show today's and this month's downtime from the local stats file")]
    Status {
        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    #[arg(short, long, global = true, env = "WANWATCH_PORT", default_value = "8081")]
    pub port: u16,

    #[arg(long, global = true, env = "WANWATCH_BIND", default_value = "0.0.0.0")]
    pub bind: IpAddr,

    #[arg(long, global = true, env = "WANWATCH_TELEGRAM_TOKEN", hide_env_values = true)]
    pub telegram_token: Option<String>,

    #[arg(long, global = true, env = "WANWATCH_CHAT_ID")]
    pub chat_id: Option<String>,

    #[arg(
        long,
        global = true,
        env = "WANWATCH_TELEGRAM_API",
        default_value = wanwatch_core::notify::telegram::DEFAULT_API_BASE
    )]
    pub telegram_api: String,

    #[arg(
        long,
        global = true,
        env = "WANWATCH_POLL_TIMEOUT",
        default_value = "30",
        help = "Server-side long-poll timeout (seconds)"
    )]
    pub poll_timeout_secs: u64,

    #[arg(
        long,
        global = true,
        env = "WANWATCH_POLL_DELAY_MS",
        default_value = "1000",
        help = "Pause between poll cycles and after poll errors (ms)"
    )]
    pub poll_delay_ms: u64,
}
