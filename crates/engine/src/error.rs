//! Error types for the engine.

use clipspeak_gesture::GestureError;
use thiserror::Error;

use crate::settings::SettingsError;

/// Errors surfaced by the engine. Denied or irrelevant operations are not
/// errors; they stay silent.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Handler dispatch or gesture forwarding failed.
    #[error(transparent)]
    Gesture(#[from] GestureError),

    #[error(transparent)]
    Settings(#[from] SettingsError),
}

pub type Result<T> = std::result::Result<T, EngineError>;
