//! Tree context: the host object that may claim gestures in the focus.

use crate::error::HandlerError;
use crate::map::ScriptBinding;
use crate::Gesture;

/// A candidate script the tree context picked for a gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedScript {
    pub binding: ScriptBinding,

    /// Handler runs even while the context is in pass-through mode.
    pub ignore_pass_through: bool,
}

impl ResolvedScript {
    pub fn new(binding: ScriptBinding) -> Self {
        Self {
            binding,
            ignore_pass_through: false,
        }
    }

    pub fn ignoring_pass_through(mut self) -> Self {
        self.ignore_pass_through = true;
        self
    }
}

/// Host-side context attached to the focus (e.g. a browse-mode document).
///
/// Implement this over the host's tree interceptor. Tests substitute a
/// double.
pub trait TreeContext {
    /// Whether the context has finished loading and can handle scripts.
    fn is_ready(&self) -> bool;

    /// Whether the context currently lets keys through to the control.
    fn pass_through(&self) -> bool;

    /// Pick the single best candidate using the host's script-resolution
    /// rule. `candidates` is in discovery order.
    fn resolve_script(
        &self,
        gesture: &Gesture,
        candidates: &[ScriptBinding],
    ) -> Option<ResolvedScript>;

    /// Run the handler synchronously.
    fn invoke(&mut self, script: &ResolvedScript) -> Result<(), HandlerError>;
}
