//! Focus awareness for clipspeak.
//!
//! This crate turns the host's view of the focused control into a
//! clipboard content type. It holds:
//! - Focus snapshots (window class, role, state set)
//! - Content classification (which kind of clipboard data the focus represents)
//! - Provider traits the host implements to hand out snapshots
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Domain Layer                             │
//! │  classify.rs - ContentType and the ordered rule table (pure) │
//! │  snapshot.rs - FocusSnapshot, Role, State                    │
//! │  provider.rs - Traits for reading the host focus             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use clipspeak_focus::{classify, ContentType, FocusSnapshot, Role, State};
//!
//! let snapshot = FocusSnapshot::new("Edit", Role::EditableText).with_state(State::Editable);
//! assert_eq!(classify(Some(&snapshot)), ContentType::PlainText);
//! ```

mod classify;
mod provider;
mod snapshot;

pub use classify::{
    classify, matching_rule, ClassificationRule, ContentType, CLASSIFICATION_RULES,
    FILE_LIST_WINDOW_CLASSES, RICH_TEXT_WINDOW_CLASSES,
};
pub use provider::{FocusProvider, FocusProviderRef, NullProvider, StaticProvider};
pub use snapshot::{FocusSnapshot, Role, State};
