//! Clipboard adapter for the operation gate.
//!
//! Implements ClipboardProbe using arboard for cross-platform clipboard access.

use crate::clipboard::ClipboardProbe;
use std::path::PathBuf;

/// ClipboardProbe implementation using arboard.
///
/// Opens a fresh clipboard handle per query; the clipboard is never cached.
pub struct PlatformClipboard;

impl PlatformClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlatformClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardProbe for PlatformClipboard {
    fn has_valid_data(&self) -> bool {
        let Ok(mut clipboard) = arboard::Clipboard::new() else {
            tracing::warn!("Clipboard unavailable");
            return false;
        };

        has_pasteable_data(
            &mut clipboard,
            |cb| cb.get_text().ok(),
            |cb| cb.get().file_list().ok(),
            |cb| cb.get_image().is_ok(),
        )
    }

    fn text(&self) -> Option<String> {
        arboard::Clipboard::new()
            .ok()
            .and_then(|mut cb| cb.get_text().ok())
            .filter(|s| !s.is_empty())
    }
}

/// Text, then copied files, then an image. Stops at the first format present.
fn has_pasteable_data<C>(
    clipboard: &mut C,
    text: impl FnOnce(&mut C) -> Option<String>,
    files: impl FnOnce(&mut C) -> Option<Vec<PathBuf>>,
    image: impl FnOnce(&mut C) -> bool,
) -> bool {
    if text(clipboard).is_some_and(|text| !text.is_empty()) {
        return true;
    }
    if files(clipboard).is_some_and(|files| !files.is_empty()) {
        tracing::debug!("Clipboard holds a file list");
        return true;
    }
    image(clipboard)
}
