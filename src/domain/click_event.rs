//! Click event model for asynchronous click tracking.

use tokio::sync::oneshot;

use crate::domain::entities::NewClick;

/// An in-memory representation of a click event for async processing.
///
/// Used to pass click information from the redirect handler to the background
/// worker via a channel. This decouples the HTTP response from database
/// writes, allowing fast redirects without blocking.
///
/// # Design
///
/// - Carries the record id the redirect handler already resolved, so the
///   worker never repeats the lookup
/// - All client metadata is optional to handle missing headers gracefully
/// - `ack` is an optional completion signal: the worker fires it after the
///   event has been processed (successfully or not), so a caller can wait for
///   the write instead of polling
///
/// # Usage Flow
///
/// 1. Created in the redirect handler with request metadata
/// 2. Sent to the channel (non-blocking `try_send`)
/// 3. Processed by [`crate::domain::click_worker::run_click_worker`]
/// 4. Converted to [`NewClick`] for persistence
#[derive(Debug)]
pub struct ClickEvent {
    pub url_id: i64,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
    pub ip_address: Option<String>,
    pub ack: Option<oneshot::Sender<()>>,
}

impl ClickEvent {
    /// Creates a new click event without a completion signal.
    pub fn new(
        url_id: i64,
        ip_address: Option<String>,
        user_agent: Option<&str>,
        referer: Option<&str>,
    ) -> Self {
        Self {
            url_id,
            user_agent: user_agent.map(|s| s.to_string()),
            referer: referer.map(|s| s.to_string()),
            ip_address,
            ack: None,
        }
    }

    /// Attaches a completion signal fired once the worker has processed the
    /// event.
    pub fn with_ack(mut self, ack: oneshot::Sender<()>) -> Self {
        self.ack = Some(ack);
        self
    }

    /// Converts the event into its persistence input, splitting off the ack.
    pub fn into_parts(self) -> (NewClick, Option<oneshot::Sender<()>>) {
        (
            NewClick {
                url_id: self.url_id,
                user_agent: self.user_agent,
                referer: self.referer,
                ip_address: self.ip_address,
            },
            self.ack,
        )
    }
}
