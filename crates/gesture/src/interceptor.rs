//! Gesture interceptor: decides handled-elsewhere vs. pass-through.

use crate::error::GestureError;
use crate::map::{GestureMap, ScriptBinding};
use crate::tree::TreeContext;
use crate::Gesture;

/// Outcome of intercepting one gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interception {
    /// A context handler claimed the gesture and has already run.
    HandledElsewhere(ScriptBinding),

    /// Nobody claimed the gesture. The caller must forward it unmodified.
    PassThrough,
}

impl Interception {
    pub fn is_handled(&self) -> bool {
        matches!(self, Interception::HandledElsewhere(_))
    }
}

/// Collect every script bound to any of the gesture's identifiers.
///
/// Order is maps in priority order, then identifiers in gesture order.
pub fn collect_candidates(gesture: &Gesture, maps: &[GestureMap]) -> Vec<ScriptBinding> {
    let mut scripts = Vec::new();
    for map in maps {
        for identifier in gesture.identifiers() {
            scripts.extend_from_slice(map.scripts_for_gesture(identifier));
        }
    }
    scripts
}

/// Intercept a gesture against the given maps and the active tree context.
///
/// When a ready context resolves a candidate and is allowed to run it, the
/// handler is invoked synchronously. A handler failure is returned as
/// [`GestureError::Handler`] and is never retried.
pub fn intercept(
    gesture: &Gesture,
    maps: &[GestureMap],
    tree: Option<&mut dyn TreeContext>,
) -> Result<Interception, GestureError> {
    let scripts = collect_candidates(gesture, maps);
    tracing::debug!(gesture = %gesture, candidates = scripts.len(), "collected gesture scripts");

    let Some(tree) = tree else {
        tracing::debug!("No tree context, passing gesture through");
        return Ok(Interception::PassThrough);
    };

    if !tree.is_ready() {
        tracing::debug!("Tree context not ready, passing gesture through");
        return Ok(Interception::PassThrough);
    }

    let Some(resolved) = tree.resolve_script(gesture, &scripts) else {
        tracing::debug!("Nothing associated here, passing gesture through");
        return Ok(Interception::PassThrough);
    };

    if tree.pass_through() && !resolved.ignore_pass_through {
        tracing::debug!(
            script = %resolved.binding,
            "Tree context in pass-through mode, passing gesture through"
        );
        return Ok(Interception::PassThrough);
    }

    tracing::debug!(script = %resolved.binding, "gesture already handled elsewhere, invoking");
    tree.invoke(&resolved).map_err(|source| GestureError::Handler {
        script: resolved.binding.to_string(),
        source,
    })?;

    Ok(Interception::HandledElsewhere(resolved.binding))
}

/// Interceptor holding the gesture maps in priority order.
#[derive(Debug, Clone, Default)]
pub struct GestureInterceptor {
    maps: Vec<GestureMap>,
}

impl GestureInterceptor {
    /// Maps are searched in the given order.
    pub fn new(maps: Vec<GestureMap>) -> Self {
        Self { maps }
    }

    /// User map first, then the locale-default map.
    pub fn with_user_and_locale(user: GestureMap, locale: GestureMap) -> Self {
        Self::new(vec![user, locale])
    }

    pub fn maps(&self) -> &[GestureMap] {
        &self.maps
    }

    pub fn candidates(&self, gesture: &Gesture) -> Vec<ScriptBinding> {
        collect_candidates(gesture, &self.maps)
    }

    pub fn intercept(
        &self,
        gesture: &Gesture,
        tree: Option<&mut dyn TreeContext>,
    ) -> Result<Interception, GestureError> {
        intercept(gesture, &self.maps, tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_order_maps_then_identifiers() {
        let user = GestureMap::new()
            .with_binding("kb:control+c", ScriptBinding::new("User", "generic"))
            .with_binding("kb(laptop):control+c", ScriptBinding::new("User", "laptop"));
        let locale =
            GestureMap::new().with_binding("kb:control+c", ScriptBinding::new("Locale", "generic"));

        let gesture = Gesture::new(["kb(laptop):control+c", "kb:control+c"]);
        let candidates = collect_candidates(&gesture, &[user, locale]);

        let names: Vec<String> = candidates.iter().map(|s| s.to_string()).collect();
        assert_eq!(names, ["User.laptop", "User.generic", "Locale.generic"]);
    }

    #[test]
    fn test_no_tree_passes_through() {
        let interceptor = GestureInterceptor::default();
        let gesture = Gesture::new(["kb:control+x"]);
        assert_eq!(
            interceptor.intercept(&gesture, None).unwrap(),
            Interception::PassThrough
        );
    }
}
