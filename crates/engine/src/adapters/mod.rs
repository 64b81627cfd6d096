//! Adapters that bridge external crates to internal abstractions.

mod clipboard;

pub use clipboard::PlatformClipboard;
