//! Operation gate: whether an operation makes sense on the focused content.
//!
//! Heuristic only. It never asks the application whether it really
//! supports the operation.

use crate::operation::Operation;
use clipspeak_focus::ContentType;

/// Decide whether `op` is permitted on `content`.
///
/// Read-only text blocks everything except Copy. Paste also needs usable
/// clipboard data. Copy is always permitted.
pub fn permit(op: Operation, content: ContentType, clipboard_valid: bool) -> bool {
    let read_only = content == ContentType::ReadOnlyText;
    match op {
        Operation::Copy => true,
        Operation::Cut | Operation::Undo | Operation::Redo => !read_only,
        Operation::Paste => !read_only && clipboard_valid,
    }
}
