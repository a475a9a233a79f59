//! Telegram Bot API client (`sendMessage` + `getUpdates` long polling).

mod updates;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use super::Notifier;
use crate::error::{AppError, AppResult};

pub use updates::{IncomingMessage, UpdateBatch};

pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";

/// Extra client-side time on top of the server-side long-poll timeout.
pub const LONG_POLL_GRACE: Duration = Duration::from_secs(5);

const SEND_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    ok: bool,
    #[serde(default)]
    result: serde_json::Value,
    #[serde(default)]
    description: Option<String>,
}

pub struct TelegramClient {
    http: Client,
    api_base: String,
    token: String,
    chat_id: String,
}

impl TelegramClient {
    /// Create a client bound to a single bot token and operator chat.
    ///
    /// Accepts a pre-built `reqwest::Client` so the connection pool is shared
    /// between the notifier and the poller.
    pub fn new(
        http: Client,
        api_base: &str,
        token: impl Into<String>,
        chat_id: impl Into<String>,
    ) -> AppResult<Self> {
        let api_base = api_base.trim().trim_end_matches('/').to_string();
        url::Url::parse(&api_base)
            .map_err(|e| AppError::Config(format!("Invalid Telegram API URL '{}': {}", api_base, e)))?;

        let token = token.into();
        if token.trim().is_empty() {
            return Err(AppError::Config("Telegram bot token is empty".to_string()));
        }
        let chat_id = chat_id.into();
        if chat_id.trim().is_empty() {
            return Err(AppError::Config("Telegram chat id is empty".to_string()));
        }

        Ok(Self { http, api_base, token, chat_id })
    }

    /// The only chat this bot talks to.
    pub fn chat_id(&self) -> &str {
        &self.chat_id
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_base, self.token, method)
    }

    pub async fn send_message(&self, text: &str) -> AppResult<()> {
        let response = self
            .http
            .post(self.method_url("sendMessage"))
            .form(&[("chat_id", self.chat_id.as_str()), ("text", text)])
            .timeout(SEND_TIMEOUT)
            .send()
            .await
            .map_err(|e| AppError::Network(e.without_url()))?;

        Self::into_result(response, "sendMessage").await.map(|_| ())
    }

    /// Long-poll for updates after `offset`, waiting up to `timeout` server-side.
    pub async fn get_updates(
        &self,
        offset: Option<i64>,
        timeout: Duration,
    ) -> AppResult<UpdateBatch> {
        let mut request =
            self.http.get(self.method_url("getUpdates")).query(&[("timeout", timeout.as_secs())]);
        if let Some(offset) = offset {
            request = request.query(&[("offset", offset)]);
        }

        let response = request
            .timeout(timeout + LONG_POLL_GRACE)
            .send()
            .await
            .map_err(|e| AppError::Network(e.without_url()))?;

        let result = Self::into_result(response, "getUpdates").await?;
        Ok(UpdateBatch::from_value(&result))
    }

    async fn into_result(
        response: reqwest::Response,
        method: &str,
    ) -> AppResult<serde_json::Value> {
        let status = response.status();
        let body = response.text().await.map_err(|e| AppError::Network(e.without_url()))?;

        match serde_json::from_str::<ApiResponse>(&body) {
            Ok(parsed) if parsed.ok && status.is_success() => Ok(parsed.result),
            Ok(parsed) => Err(AppError::Telegram(format!(
                "{} failed ({}): {}",
                method,
                status,
                parsed.description.unwrap_or_else(|| "no description".to_string())
            ))),
            Err(e) if status.is_success() => Err(AppError::Json(e)),
            Err(_) => Err(AppError::Telegram(format!(
                "{} failed ({}): {}",
                method,
                status,
                body.chars().take(200).collect::<String>()
            ))),
        }
    }
}

#[async_trait]
impl Notifier for TelegramClient {
    async fn send(&self, text: &str) -> AppResult<()> {
        self.send_message(text).await
    }
}
