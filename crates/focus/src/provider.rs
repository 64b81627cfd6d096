//! Provider traits for reading the host focus.
//!
//! These traits abstract the host accessibility API,
//! allowing classification to remain pure and testable.

use crate::snapshot::FocusSnapshot;
use std::sync::Arc;

/// Provider for the currently focused control.
pub trait FocusProvider: Send + Sync {
    /// Take a fresh snapshot of the focused control.
    ///
    /// Returns `None` when nothing has focus.
    fn focus(&self) -> Option<FocusSnapshot>;
}

pub type FocusProviderRef = Arc<dyn FocusProvider>;

/// Null implementation for testing or unsupported hosts.
pub struct NullProvider;

impl FocusProvider for NullProvider {
    fn focus(&self) -> Option<FocusSnapshot> {
        None
    }
}

/// Provider that always reports the same snapshot.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    snapshot: Option<FocusSnapshot>,
}

impl StaticProvider {
    pub fn new(snapshot: Option<FocusSnapshot>) -> Self {
        Self { snapshot }
    }
}

impl FocusProvider for StaticProvider {
    fn focus(&self) -> Option<FocusSnapshot> {
        self.snapshot.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::Role;

    #[test]
    fn test_null_provider_has_no_focus() {
        assert!(NullProvider.focus().is_none());
    }

    #[test]
    fn test_static_provider_returns_copy() {
        let provider = StaticProvider::new(Some(FocusSnapshot::new("Edit", Role::EditableText)));
        let first = provider.focus().unwrap();
        let second = provider.focus().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.window_class_name, "Edit");
    }
}
