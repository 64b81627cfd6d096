//! Spoken clipboard confirmations for clipspeak.
//!
//! Cut, copy, paste, undo and redo produce no feedback for a screen reader
//! user. This crate watches the gestures bound to them and announces a short
//! confirmation that fits the focused control.
//!
//! # Pipeline
//!
//! ```text
//! key press ─► GestureInterceptor ─► OperationController
//!                 (may short-circuit)      │
//!                                          ▼
//!               classify ─► permit ─► compose ─► Announcer
//! ```
//!
//! Irrelevant focus and denied operations stay silent. Handler failures
//! propagate as [`EngineError`].
//!
//! # Example
//!
//! ```
//! use clipspeak::focus::{FocusSnapshot, Role, State, StaticProvider};
//! use clipspeak::gesture::NullSink;
//! use clipspeak::{LogAnnouncer, NullClipboard, Operation, OperationController};
//! use std::sync::Arc;
//!
//! let focus = FocusSnapshot::new("Edit", Role::EditableText).with_state(State::Editable);
//! let controller = OperationController::new(
//!     Arc::new(StaticProvider::new(Some(focus))),
//!     Arc::new(NullClipboard),
//!     Arc::new(LogAnnouncer),
//!     Arc::new(NullSink),
//! );
//!
//! let message = controller.run(Operation::Copy).unwrap();
//! assert_eq!(message.text, "Copy");
//! ```

pub mod adapters;
mod announce;
mod clipboard;
mod compose;
mod controller;
mod error;
mod gate;
mod operation;
mod settings;

pub use announce::{Announcer, AnnouncerRef, LogAnnouncer};
pub use clipboard::{ClipboardProbe, ClipboardProbeRef, NullClipboard};
pub use compose::{compose, payload_word, Message, FILE_WORD, ITEM_WORD, MAX_SPOKEN_PAYLOAD_CHARS};
pub use controller::{GestureOutcome, OperationController};
pub use error::{EngineError, Result};
pub use gate::permit;
pub use operation::{Operation, GESTURE_CATEGORY};
pub use settings::{Settings, SettingsError, SettingsStore, CONFIG_DIR_NAME, SETTINGS_FILE_NAME};

// Re-export the crates the public API is built from
pub use clipspeak_focus as focus;
pub use clipspeak_gesture as gesture;
