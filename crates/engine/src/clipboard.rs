//! Clipboard state probe.

use std::sync::Arc;

/// Reads the live clipboard. Queried fresh on every run.
pub trait ClipboardProbe: Send + Sync {
    /// Whether the clipboard currently holds usable data.
    fn has_valid_data(&self) -> bool;

    /// Current text payload, if the clipboard holds text.
    fn text(&self) -> Option<String>;
}

pub type ClipboardProbeRef = Arc<dyn ClipboardProbe>;

/// Empty clipboard.
pub struct NullClipboard;

impl ClipboardProbe for NullClipboard {
    fn has_valid_data(&self) -> bool {
        false
    }

    fn text(&self) -> Option<String> {
        None
    }
}
