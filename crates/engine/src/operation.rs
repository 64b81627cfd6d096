//! Clipboard-style operations and their default gestures.

use serde::{Deserialize, Serialize};

/// Input-help category all operation gestures are listed under.
pub const GESTURE_CATEGORY: &str = "Clipboard";

/// Operation selected by the triggering gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Cut,
    Copy,
    Paste,
    Undo,
    Redo,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::Cut,
        Operation::Copy,
        Operation::Paste,
        Operation::Undo,
        Operation::Redo,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Operation::Cut => "Cut",
            Operation::Copy => "Copy",
            Operation::Paste => "Paste",
            Operation::Undo => "Undo",
            Operation::Redo => "Redo",
        }
    }

    /// Word spoken to confirm the operation.
    pub fn spoken_name(&self) -> &'static str {
        match self {
            Operation::Paste => "Pasted",
            other => other.label(),
        }
    }

    /// Conventional key combination bound to the operation.
    pub fn default_gesture(&self) -> &'static str {
        match self {
            Operation::Cut => "kb:control+x",
            Operation::Copy => "kb:control+c",
            Operation::Paste => "kb:control+v",
            Operation::Undo => "kb:control+z",
            Operation::Redo => "kb:control+y",
        }
    }

    /// Keyboard-help description.
    pub fn description(&self) -> &'static str {
        match self {
            Operation::Cut => "Cut selected item to clipboard, if appropriate.",
            Operation::Copy => "Copy selected item to clipboard, if appropriate.",
            Operation::Paste => "Paste item from clipboard, if appropriate.",
            Operation::Undo => "Undo operation.",
            Operation::Redo => "Redo operation.",
        }
    }

    /// Whether the operation moves content through the clipboard.
    pub fn transfers_content(&self) -> bool {
        matches!(self, Operation::Cut | Operation::Copy | Operation::Paste)
    }

    /// Look up the operation bound to a gesture identifier by default.
    pub fn from_gesture(identifier: &str) -> Option<Operation> {
        let identifier = clipspeak_gesture::normalize_identifier(identifier);
        Self::ALL
            .into_iter()
            .find(|op| op.default_gesture() == identifier)
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
