//! Focus snapshot structures.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Role of the focused control, as reported by the host accessibility API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    ListItem,
    TableRow,
    EditableText,
    Document,
    List,
    Table,
    TreeViewItem,
    Button,
    CheckBox,
    MenuItem,
    Pane,
    Window,
    StaticText,
    #[default]
    Unknown,
}

/// A single state flag on the focused control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum State {
    Selected,
    Editable,
    Multiline,
    ReadOnly,
    Focused,
    Focusable,
    Selectable,
    Protected,
    Invisible,
    Unavailable,
}

/// Read-only view of the focused control at the moment a gesture fired.
///
/// The host owns the underlying object; this is a copy taken per run and is
/// never carried over to the next gesture.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FocusSnapshot {
    /// Native window class (e.g., "DirectUIHWND")
    #[serde(default)]
    pub window_class_name: String,

    #[serde(default)]
    pub role: Role,

    #[serde(default)]
    pub states: HashSet<State>,
}

impl FocusSnapshot {
    pub fn new(window_class_name: impl Into<String>, role: Role) -> Self {
        Self {
            window_class_name: window_class_name.into(),
            role,
            states: HashSet::new(),
        }
    }

    /// Builder-style helper that adds one state flag.
    pub fn with_state(mut self, state: State) -> Self {
        self.states.insert(state);
        self
    }

    pub fn with_states(mut self, states: impl IntoIterator<Item = State>) -> Self {
        self.states.extend(states);
        self
    }

    pub fn has_state(&self, state: State) -> bool {
        self.states.contains(&state)
    }

    pub fn has_any_state(&self, states: &[State]) -> bool {
        states.iter().any(|s| self.states.contains(s))
    }

    /// Case-sensitive comparison; host window classes are exact identifiers.
    pub fn window_class_in(&self, classes: &[&str]) -> bool {
        classes.iter().any(|&c| c == self.window_class_name)
    }
}
