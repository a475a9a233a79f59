use async_trait::async_trait;
use std::sync::Mutex;

use super::Notifier;
use crate::error::{AppError, AppResult};

/// Notifier that keeps messages in memory instead of sending them.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    messages: Mutex<Vec<String>>,
    fail: bool,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier whose every send fails.
    pub fn failing() -> Self {
        Self { messages: Mutex::new(Vec::new()), fail: true }
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().map(|m| m.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl Notifier for MemoryNotifier {
    async fn send(&self, text: &str) -> AppResult<()> {
        if self.fail {
            return Err(AppError::Telegram("delivery disabled".to_string()));
        }
        self.messages
            .lock()
            .map_err(|_| AppError::Telegram("message buffer poisoned".to_string()))?
            .push(text.to_string());
        Ok(())
    }
}
