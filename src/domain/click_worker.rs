//! Background worker that persists click events off the redirect path.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::StatsRepository;

/// Drains click events from the channel and records them.
///
/// Failures are logged and swallowed: click tracking must never affect
/// redirect traffic, so a lost click is a log line, not an error. When an
/// event carries an ack sender it is fired after the write attempt completes,
/// whether or not the write succeeded.
///
/// The worker exits when every sender half of the channel has been dropped.
pub async fn run_click_worker(mut rx: mpsc::Receiver<ClickEvent>, repo: Arc<dyn StatsRepository>) {
    while let Some(event) = rx.recv().await {
        let (new_click, ack) = event.into_parts();
        let url_id = new_click.url_id;

        if let Err(e) = repo.record_click(new_click).await {
            tracing::warn!(url_id, error = %e, "failed to record click");
        }

        if let Some(ack) = ack {
            // The receiver may have given up waiting; that is not an error.
            let _ = ack.send(());
        }
    }

    tracing::debug!("click worker shutting down, channel closed");
}
