use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use wanwatch_core::{StatusResponder, TelegramClient, UpdateCursor};

use crate::config::PollConfig;

/// Start the Telegram `/status` poller as a background tokio task
pub fn start(
    responder: Arc<StatusResponder>,
    telegram: Arc<TelegramClient>,
    poll: PollConfig,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tracing::info!("[StatusPoll] Polling Telegram for commands");
        let mut cursor = UpdateCursor::default();

        loop {
            let result = tokio::select! {
                () = cancel.cancelled() => break,
                result = telegram.get_updates(cursor.offset(), poll.timeout) => result,
            };

            let delay = match result {
                Ok(batch) => {
                    if batch.skipped > 0 {
                        tracing::warn!("[StatusPoll] Skipped {} malformed update(s)", batch.skipped);
                    }
                    cursor.advance(&batch);
                    let answered = responder.handle_batch(&batch).await;
                    if answered > 0 {
                        tracing::debug!("[StatusPoll] Answered {} status request(s)", answered);
                    }
                    poll.idle_delay
                },
                Err(e) => {
                    tracing::error!("[StatusPoll] Polling error: {}", e);
                    poll.retry_delay
                },
            };

            if !pause(&cancel, delay).await {
                break;
            }
        }

        tracing::info!("[StatusPoll] Poller stopped");
    })
}

/// Sleep for `delay`; false if cancelled meanwhile.
async fn pause(cancel: &CancellationToken, delay: Duration) -> bool {
    tokio::select! {
        () = cancel.cancelled() => false,
        () = tokio::time::sleep(delay) => true,
    }
}
