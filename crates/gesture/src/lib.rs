//! Gesture interception for clipspeak.
//!
//! Decides whether a captured key gesture is already claimed by a handler in
//! the focused context, or must be passed straight through to the system.
//!
//! # Flow
//!
//! 1. Collect candidate scripts from the gesture maps (user map first, then
//!    the locale map).
//! 2. If the focus has a ready tree context, let it pick the best candidate.
//! 3. Invoke the picked handler, or report pass-through so the caller can
//!    forward the raw gesture through a [`GestureSink`].
//!
//! # Example
//!
//! ```
//! use clipspeak_gesture::{Gesture, GestureInterceptor, GestureMap, Interception};
//!
//! let interceptor = GestureInterceptor::new(vec![GestureMap::new()]);
//! let gesture = Gesture::new(["kb:Control+C"]);
//! let outcome = interceptor.intercept(&gesture, None).unwrap();
//! assert_eq!(outcome, Interception::PassThrough);
//! ```

mod error;
mod interceptor;
mod map;
mod tree;

use std::sync::Arc;

pub use error::{GestureError, HandlerError};
pub use interceptor::{collect_candidates, intercept, GestureInterceptor, Interception};
pub use map::{GestureMap, ScriptBinding};
pub use tree::{ResolvedScript, TreeContext};

/// Normalize a gesture identifier for comparison.
///
/// Host gesture maps compare identifiers case-insensitively, so
/// `"kb:Control+X"` and `"kb:control+x"` refer to the same binding.
pub fn normalize_identifier(identifier: &str) -> String {
    identifier.trim().to_ascii_lowercase()
}

/// A physical input event with its ordered identifiers.
///
/// Identifiers go from most to least specific (e.g. a layout-specific name
/// before the generic one).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gesture {
    identifiers: Vec<String>,
}

impl Gesture {
    pub fn new<I, S>(identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            identifiers: identifiers
                .into_iter()
                .map(|id| normalize_identifier(id.as_ref()))
                .filter(|id| !id.is_empty())
                .collect(),
        }
    }

    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    /// Most specific identifier, used for logging.
    pub fn display_name(&self) -> &str {
        self.identifiers.first().map(String::as_str).unwrap_or("<empty>")
    }
}

impl std::fmt::Display for Gesture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Forwards an unclaimed gesture to the underlying system unmodified.
pub trait GestureSink: Send + Sync {
    fn send(&self, gesture: &Gesture) -> Result<(), GestureError>;
}

/// Sink that drops every gesture. Useful on hosts that forward on their own.
pub struct NullSink;

impl GestureSink for NullSink {
    fn send(&self, _gesture: &Gesture) -> Result<(), GestureError> {
        Ok(())
    }
}

pub type GestureSinkRef = Arc<dyn GestureSink>;
