//! Message composition.

use crate::operation::Operation;
use clipspeak_focus::ContentType;
use serde::Serialize;

/// Payloads at or above this many characters are announced by length.
pub const MAX_SPOKEN_PAYLOAD_CHARS: usize = 500;

/// Word spoken for a selected file.
pub const FILE_WORD: &str = "file";

/// Word spoken for a selected list item.
pub const ITEM_WORD: &str = "item";

/// A composed announcement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub text: String,

    /// Whether `text` contains the literal clipboard payload.
    pub includes_payload: bool,
}

impl Message {
    fn bare(op: Operation) -> Self {
        Self {
            text: op.spoken_name().to_string(),
            includes_payload: false,
        }
    }
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Pick the word that stands for a text payload.
///
/// Returns the word and whether it is the literal payload.
pub fn payload_word(text: &str) -> (String, bool) {
    let chars = text.chars().count();
    if chars < MAX_SPOKEN_PAYLOAD_CHARS {
        (text.to_string(), true)
    } else {
        (format!("{} characters", chars), false)
    }
}

/// Compose the confirmation for a gated operation.
///
/// Files and list items always get their fixed noun. Text gets the payload
/// (or its length) unless `terse` is set. Undo and Redo never carry a
/// content word.
pub fn compose(op: Operation, content: ContentType, payload: Option<&str>, terse: bool) -> Message {
    if !op.transfers_content() {
        return Message::bare(op);
    }

    match content {
        ContentType::FileSelection => Message {
            text: format!("{} {}", op.spoken_name(), FILE_WORD),
            includes_payload: false,
        },
        ContentType::ListItem => Message {
            text: format!("{} {}", op.spoken_name(), ITEM_WORD),
            includes_payload: false,
        },
        content if content.is_text() && !terse => match payload.filter(|p| !p.is_empty()) {
            Some(text) => {
                let (word, literal) = payload_word(text);
                Message {
                    text: format!("{}: {}", op.spoken_name(), word),
                    includes_payload: literal,
                }
            }
            None => Message::bare(op),
        },
        _ => Message::bare(op),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paste_text_verbose() {
        let msg = compose(Operation::Paste, ContentType::PlainText, Some("hello"), false);
        assert_eq!(msg.text, "Pasted: hello");
        assert!(msg.includes_payload);
    }

    #[test]
    fn test_long_payload_announces_length() {
        let payload = "x".repeat(600);
        let msg = compose(Operation::Copy, ContentType::PlainText, Some(&payload), false);
        assert_eq!(msg.text, "Copy: 600 characters");
        assert!(!msg.includes_payload);
    }

    #[test]
    fn test_length_threshold_boundary() {
        assert!(payload_word(&"a".repeat(499)).1);
        assert_eq!(payload_word(&"a".repeat(500)).0, "500 characters");
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let payload = "é".repeat(300);
        let (word, literal) = payload_word(&payload);
        assert!(literal);
        assert_eq!(word, payload);
    }

    #[test]
    fn test_terse_text_is_bare() {
        let msg = compose(Operation::Copy, ContentType::PlainText, Some("hello"), true);
        assert_eq!(msg.text, "Copy");
        assert!(!msg.includes_payload);

        let msg = compose(Operation::Paste, ContentType::PlainText, Some("hello"), true);
        assert_eq!(msg.text, "Pasted");
    }

    #[test]
    fn test_file_and_item_ignore_terse() {
        for terse in [true, false] {
            assert_eq!(
                compose(Operation::Copy, ContentType::FileSelection, Some("C:\\a.txt"), terse).text,
                "Copy file"
            );
            assert_eq!(
                compose(Operation::Cut, ContentType::ListItem, None, terse).text,
                "Cut item"
            );
            assert_eq!(
                compose(Operation::Paste, ContentType::FileSelection, None, terse).text,
                "Pasted file"
            );
        }
    }

    #[test]
    fn test_undo_redo_never_carry_content() {
        for content in [ContentType::PlainText, ContentType::FileSelection, ContentType::ListItem] {
            assert_eq!(compose(Operation::Undo, content, Some("hello"), false).text, "Undo");
            assert_eq!(compose(Operation::Redo, content, Some("hello"), false).text, "Redo");
        }
    }

    #[test]
    fn test_read_only_copy_speaks_payload() {
        let msg = compose(Operation::Copy, ContentType::ReadOnlyText, Some("terms"), false);
        assert_eq!(msg.text, "Copy: terms");
    }

    #[test]
    fn test_missing_or_empty_payload_is_bare() {
        assert_eq!(compose(Operation::Cut, ContentType::PlainText, None, false).text, "Cut");
        assert_eq!(compose(Operation::Cut, ContentType::PlainText, Some(""), false).text, "Cut");
    }

    #[test]
    fn test_other_content_is_bare() {
        assert_eq!(compose(Operation::Copy, ContentType::Other, Some("x"), false).text, "Copy");
    }
}
