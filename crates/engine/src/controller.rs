//! Operation controller: runs one gesture through the whole pipeline.

use crate::announce::AnnouncerRef;
use crate::clipboard::ClipboardProbeRef;
use crate::compose::{compose, Message};
use crate::error::Result;
use crate::gate::permit;
use crate::operation::Operation;
use crate::settings::{Settings, SettingsStore};
use clipspeak_focus::{classify, ContentType, FocusProviderRef};
use clipspeak_gesture::{
    Gesture, GestureInterceptor, GestureSinkRef, Interception, ScriptBinding, TreeContext,
};

/// What happened to one gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GestureOutcome {
    /// A context handler claimed the gesture. Nothing was forwarded or announced.
    HandledElsewhere(ScriptBinding),

    /// Gesture forwarded and a confirmation announced.
    Announced(Message),

    /// Gesture forwarded; the focus was irrelevant or the operation denied.
    Silent,
}

/// Orchestrates classification, gating and composition per operation.
///
/// Every run reads focus and clipboard fresh. Settings can only change
/// through `&mut self`, so they are fixed for the duration of a run.
pub struct OperationController {
    focus: FocusProviderRef,
    clipboard: ClipboardProbeRef,
    announcer: AnnouncerRef,
    sink: GestureSinkRef,
    interceptor: GestureInterceptor,
    settings: Settings,
    secure: bool,
}

impl OperationController {
    pub fn new(
        focus: FocusProviderRef,
        clipboard: ClipboardProbeRef,
        announcer: AnnouncerRef,
        sink: GestureSinkRef,
    ) -> Self {
        Self {
            focus,
            clipboard,
            announcer,
            sink,
            interceptor: GestureInterceptor::default(),
            settings: Settings::default(),
            secure: false,
        }
    }

    pub fn with_interceptor(mut self, interceptor: GestureInterceptor) -> Self {
        self.interceptor = interceptor;
        self
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Secure desktop: gestures are forwarded, focus is never inspected and
    /// nothing is announced.
    pub fn secure_mode(mut self) -> Self {
        self.secure = true;
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    /// Replace the settings with the contents of `store`. On error the
    /// current settings are kept.
    pub fn reload_settings(&mut self, store: &SettingsStore) -> Result<()> {
        let settings = store.load()?;
        tracing::debug!(path = %store.path().display(), ?settings, "Reloaded settings");
        self.settings = settings;
        Ok(())
    }

    pub fn is_secure(&self) -> bool {
        self.secure
    }

    /// Handle a captured gesture end to end.
    ///
    /// A claimed gesture is never forwarded; an unclaimed one is forwarded
    /// before the confirmation is composed.
    pub fn handle_gesture(
        &self,
        op: Operation,
        gesture: &Gesture,
        tree: Option<&mut dyn TreeContext>,
    ) -> Result<GestureOutcome> {
        tracing::debug!(operation = %op, gesture = %gesture, "script activated");

        if !self.secure {
            let interception = self.interceptor.intercept(gesture, tree)?;
            if let Interception::HandledElsewhere(script) = interception {
                return Ok(GestureOutcome::HandledElsewhere(script));
            }
        }

        self.sink.send(gesture)?;

        Ok(match self.run(op) {
            Some(message) => GestureOutcome::Announced(message),
            None => GestureOutcome::Silent,
        })
    }

    /// Classify, gate, compose and announce one operation.
    ///
    /// Returns the announced message, or `None` when the run stayed silent.
    pub fn run(&self, op: Operation) -> Option<Message> {
        if self.secure {
            return None;
        }

        let snapshot = self.focus.focus();
        let content = classify(snapshot.as_ref());
        if content == ContentType::None {
            return None;
        }

        let clipboard_valid = op == Operation::Paste && self.clipboard.has_valid_data();
        if !permit(op, content, clipboard_valid) {
            tracing::debug!(operation = %op, content = %content, "operation denied");
            return None;
        }

        let terse = self.settings.terse_announcements;
        let payload = if content.is_text() && op.transfers_content() && !terse {
            self.clipboard.text()
        } else {
            None
        };

        let message = compose(op, content, payload.as_deref(), terse);
        tracing::debug!(
            operation = %op,
            content = %content,
            includes_payload = message.includes_payload,
            "speaking message"
        );
        self.announcer.announce(&message);
        Some(message)
    }
}

impl std::fmt::Debug for OperationController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OperationController")
            .field("settings", &self.settings)
            .field("secure", &self.secure)
            .field("gesture_maps", &self.interceptor.maps().len())
            .finish_non_exhaustive()
    }
}
