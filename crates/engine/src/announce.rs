//! Output channel for composed messages.

use crate::compose::Message;
use std::sync::Arc;

/// Speaks or displays a message. Fire-and-forget.
pub trait Announcer: Send + Sync {
    fn announce(&self, message: &Message);
}

pub type AnnouncerRef = Arc<dyn Announcer>;

/// Announcer that only logs.
pub struct LogAnnouncer;

impl Announcer for LogAnnouncer {
    fn announce(&self, message: &Message) {
        tracing::info!(text = %message.text, includes_payload = message.includes_payload, "announce");
    }
}
