//! Outbound notifications.
//!
//! Delivery is best-effort: callers go through [`dispatch`], which logs
//! failures and never returns them.

mod memory;
pub mod telegram;

use async_trait::async_trait;

use crate::error::AppResult;

pub use memory::MemoryNotifier;
pub use telegram::TelegramClient;

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, text: &str) -> AppResult<()>;
}

/// Send `text`, logging instead of failing. Returns whether it was delivered.
pub async fn dispatch(notifier: &dyn Notifier, text: &str) -> bool {
    match notifier.send(text).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("[Notify] Failed to deliver message: {}", e);
            false
        },
    }
}
