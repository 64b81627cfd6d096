//! Content type definitions and classification rules.
//!
//! Pure domain logic - no I/O, no platform dependencies.

use crate::snapshot::{FocusSnapshot, Role, State};
use serde::{Deserialize, Serialize};

/// What kind of clipboard-relevant content the focused control represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    /// Control is not clipboard-relevant. Nothing is announced.
    #[default]
    None,

    /// Ordinary editable text field.
    PlainText,

    /// Text that can be copied but not modified.
    ReadOnlyText,

    /// Selected entry in a native file list.
    FileSelection,

    /// Selected list item or table row.
    ListItem,

    Other,
}

impl ContentType {
    pub fn label(&self) -> &'static str {
        match self {
            ContentType::None => "None",
            ContentType::PlainText => "PlainText",
            ContentType::ReadOnlyText => "ReadOnlyText",
            ContentType::FileSelection => "FileSelection",
            ContentType::ListItem => "ListItem",
            ContentType::Other => "Other",
        }
    }

    /// Whether the content is text whose payload can be spoken.
    pub fn is_text(&self) -> bool {
        matches!(self, ContentType::PlainText | ContentType::ReadOnlyText)
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Window classes of the native file-list container.
pub const FILE_LIST_WINDOW_CLASSES: &[&str] = &["DirectUIHWND"];

/// Window classes of rich-text controls that do not always expose an
/// editable state.
pub const RICH_TEXT_WINDOW_CLASSES: &[&str] = &["RichEditD2DPT"];

/// One entry of the ordered classification table.
#[derive(Clone, Copy)]
pub struct ClassificationRule {
    pub name: &'static str,
    pub matches: fn(&FocusSnapshot) -> bool,
    pub content: ContentType,
}

impl std::fmt::Debug for ClassificationRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassificationRule")
            .field("name", &self.name)
            .field("content", &self.content)
            .finish_non_exhaustive()
    }
}

fn is_selected_file(s: &FocusSnapshot) -> bool {
    s.window_class_in(FILE_LIST_WINDOW_CLASSES) && s.has_state(State::Selected)
}

fn is_selected_list_entry(s: &FocusSnapshot) -> bool {
    matches!(s.role, Role::ListItem | Role::TableRow) && s.has_state(State::Selected)
}

fn is_text_state(s: &FocusSnapshot) -> bool {
    s.has_any_state(&[State::Editable, State::Multiline])
}

fn is_read_only_text_state(s: &FocusSnapshot) -> bool {
    is_text_state(s) && s.has_state(State::ReadOnly)
}

fn is_editable_role(s: &FocusSnapshot) -> bool {
    s.role == Role::EditableText
}

fn is_read_only(s: &FocusSnapshot) -> bool {
    s.has_state(State::ReadOnly)
}

fn is_rich_text_window(s: &FocusSnapshot) -> bool {
    s.window_class_in(RICH_TEXT_WINDOW_CLASSES)
}

/// Ordered classification rules. First match wins.
///
/// Selection signals come before the generic editable and read-only
/// fallbacks, so a read-only multiline field is never reported as a list
/// item. The read-only text rule must stay ahead of the plain text-state
/// rule.
pub const CLASSIFICATION_RULES: &[ClassificationRule] = &[
    ClassificationRule {
        name: "selected-file",
        matches: is_selected_file,
        content: ContentType::FileSelection,
    },
    ClassificationRule {
        name: "selected-list-entry",
        matches: is_selected_list_entry,
        content: ContentType::ListItem,
    },
    ClassificationRule {
        name: "read-only-text-state",
        matches: is_read_only_text_state,
        content: ContentType::ReadOnlyText,
    },
    ClassificationRule {
        name: "text-state",
        matches: is_text_state,
        content: ContentType::PlainText,
    },
    // Not all controls expose an editable state even when they are.
    ClassificationRule {
        name: "editable-role",
        matches: is_editable_role,
        content: ContentType::PlainText,
    },
    ClassificationRule {
        name: "read-only",
        matches: is_read_only,
        content: ContentType::ReadOnlyText,
    },
    ClassificationRule {
        name: "rich-text-window",
        matches: is_rich_text_window,
        content: ContentType::PlainText,
    },
];

/// Find the first rule that matches the snapshot.
pub fn matching_rule(snapshot: &FocusSnapshot) -> Option<&'static ClassificationRule> {
    CLASSIFICATION_RULES.iter().find(|rule| (rule.matches)(snapshot))
}

/// Classify the focused control.
///
/// Total: an absent snapshot or an unrecognized control yields
/// [`ContentType::None`].
pub fn classify(snapshot: Option<&FocusSnapshot>) -> ContentType {
    let Some(snapshot) = snapshot else {
        tracing::debug!("No focus object, nothing to classify");
        return ContentType::None;
    };

    match matching_rule(snapshot) {
        Some(rule) => {
            tracing::debug!(
                rule = rule.name,
                content = %rule.content,
                window_class = %snapshot.window_class_name,
                role = ?snapshot.role,
                "focus classified"
            );
            rule.content
        }
        None => {
            tracing::debug!(
                window_class = %snapshot.window_class_name,
                role = ?snapshot.role,
                "Control type would not suggest clipboard operations"
            );
            ContentType::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(class: &str, role: Role, states: &[State]) -> FocusSnapshot {
        FocusSnapshot::new(class, role).with_states(states.iter().copied())
    }

    #[test]
    fn test_no_snapshot_is_none() {
        assert_eq!(classify(None), ContentType::None);
    }

    #[test]
    fn test_selected_file() {
        let s = snap("DirectUIHWND", Role::ListItem, &[State::Selected]);
        assert_eq!(classify(Some(&s)), ContentType::FileSelection);
    }

    #[test]
    fn test_unselected_file_list_is_not_file() {
        let s = snap("DirectUIHWND", Role::List, &[]);
        assert_eq!(classify(Some(&s)), ContentType::None);
    }

    #[test]
    fn test_selected_list_item_and_table_row() {
        let item = snap("SysListView32", Role::ListItem, &[State::Selected]);
        let row = snap("", Role::TableRow, &[State::Selected]);
        assert_eq!(classify(Some(&item)), ContentType::ListItem);
        assert_eq!(classify(Some(&row)), ContentType::ListItem);
    }

    #[test]
    fn test_selected_state_alone_is_not_list_item() {
        let s = snap("", Role::Button, &[State::Selected]);
        assert_eq!(classify(Some(&s)), ContentType::None);
    }

    #[test]
    fn test_unselected_list_item_is_none() {
        let s = snap("", Role::ListItem, &[State::Focused]);
        assert_eq!(classify(Some(&s)), ContentType::None);
    }

    #[test]
    fn test_editable_and_multiline_are_text() {
        let editable = snap("", Role::Unknown, &[State::Editable]);
        let multiline = snap("", Role::Document, &[State::Multiline]);
        assert_eq!(classify(Some(&editable)), ContentType::PlainText);
        assert_eq!(classify(Some(&multiline)), ContentType::PlainText);
    }

    #[test]
    fn test_read_only_multiline_is_read_only_text() {
        let s = snap("", Role::Document, &[State::Multiline, State::ReadOnly]);
        assert_eq!(classify(Some(&s)), ContentType::ReadOnlyText);
    }

    #[test]
    fn test_editable_role_without_state() {
        let s = snap("", Role::EditableText, &[]);
        assert_eq!(classify(Some(&s)), ContentType::PlainText);
    }

    #[test]
    fn test_read_only_fallback() {
        let s = snap("", Role::StaticText, &[State::ReadOnly]);
        assert_eq!(classify(Some(&s)), ContentType::ReadOnlyText);
    }

    #[test]
    fn test_editable_role_beats_read_only_fallback() {
        let s = snap("", Role::EditableText, &[State::ReadOnly]);
        assert_eq!(classify(Some(&s)), ContentType::PlainText);
    }

    #[test]
    fn test_rich_text_window() {
        let s = snap("RichEditD2DPT", Role::Pane, &[]);
        assert_eq!(classify(Some(&s)), ContentType::PlainText);
    }

    #[test]
    fn test_selection_beats_text_state() {
        // Selected row inside an editable grid is still a list entry.
        let s = snap("", Role::TableRow, &[State::Selected, State::Editable]);
        assert_eq!(classify(Some(&s)), ContentType::ListItem);
    }

    #[test]
    fn test_unrecognized_control_is_none() {
        let s = snap("Button", Role::Button, &[State::Focused]);
        assert_eq!(classify(Some(&s)), ContentType::None);
        assert!(matching_rule(&s).is_none());
    }

    #[test]
    fn test_matching_rule_names() {
        let s = snap("", Role::Document, &[State::Editable, State::ReadOnly]);
        assert_eq!(matching_rule(&s).map(|r| r.name), Some("read-only-text-state"));
    }

    #[test]
    fn test_classify_is_idempotent() {
        let s = snap("DirectUIHWND", Role::ListItem, &[State::Selected, State::Editable]);
        assert_eq!(classify(Some(&s)), classify(Some(&s)));
    }

    #[test]
    fn test_rule_table_order() {
        let names: Vec<_> = CLASSIFICATION_RULES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            [
                "selected-file",
                "selected-list-entry",
                "read-only-text-state",
                "text-state",
                "editable-role",
                "read-only",
                "rich-text-window",
            ]
        );
    }
}
