//! Gesture maps: identifier to script bindings.

use crate::error::GestureError;
use crate::normalize_identifier;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// A script a gesture map binds to an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScriptBinding {
    /// Class the script belongs to (e.g., "browseMode.BrowseModeTreeInterceptor")
    pub class_name: String,

    /// Script name without prefix (e.g., "copyToClipboard")
    pub script: String,
}

impl ScriptBinding {
    pub fn new(class_name: impl Into<String>, script: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            script: script.into(),
        }
    }
}

impl std::fmt::Display for ScriptBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.class_name, self.script)
    }
}

/// Bindings from normalized gesture identifiers to scripts.
///
/// Bindings for one identifier keep insertion order. When loading, keys that
/// normalize to the same identifier are merged in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(into = "HashMap<String, Vec<ScriptBinding>>")]
pub struct GestureMap {
    bindings: HashMap<String, Vec<ScriptBinding>>,
}

struct GestureMapVisitor;

impl<'de> Visitor<'de> for GestureMapVisitor {
    type Value = GestureMap;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("a map from gesture identifiers to script bindings")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut map = GestureMap::new();
        while let Some((identifier, scripts)) =
            access.next_entry::<String, Vec<ScriptBinding>>()?
        {
            if normalize_identifier(&identifier).is_empty() {
                return Err(serde::de::Error::custom("empty gesture identifier"));
            }
            for script in scripts {
                map.bind(&identifier, script);
            }
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for GestureMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(GestureMapVisitor)
    }
}

impl From<GestureMap> for HashMap<String, Vec<ScriptBinding>> {
    fn from(map: GestureMap) -> Self {
        map.bindings
    }
}

impl GestureMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a map from JSON of the form
    /// `{ "kb:control+c": [{ "class_name": "...", "script": "..." }] }`.
    pub fn from_json(json: &str) -> Result<Self, GestureError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Bind a script to an identifier. Duplicate bindings are ignored.
    pub fn bind(&mut self, identifier: &str, binding: ScriptBinding) {
        let scripts = self
            .bindings
            .entry(normalize_identifier(identifier))
            .or_default();
        if !scripts.contains(&binding) {
            scripts.push(binding);
        }
    }

    pub fn with_binding(mut self, identifier: &str, binding: ScriptBinding) -> Self {
        self.bind(identifier, binding);
        self
    }

    /// Scripts bound to an identifier, in binding order.
    pub fn scripts_for_gesture(&self, identifier: &str) -> &[ScriptBinding] {
        self.bindings
            .get(&normalize_identifier(identifier))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of bound identifiers.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_and_lookup_case_insensitive() {
        let map = GestureMap::new().with_binding(
            "kb:Control+C",
            ScriptBinding::new("BrowseMode", "copyToClipboard"),
        );

        let scripts = map.scripts_for_gesture("KB:control+c");
        assert_eq!(scripts.len(), 1);
        assert_eq!(scripts[0].script, "copyToClipboard");
        assert!(map.scripts_for_gesture("kb:control+v").is_empty());
    }

    #[test]
    fn test_duplicate_bindings_ignored() {
        let binding = ScriptBinding::new("A", "copy");
        let map = GestureMap::new()
            .with_binding("kb:control+c", binding.clone())
            .with_binding("kb:CONTROL+C", binding);
        assert_eq!(map.scripts_for_gesture("kb:control+c").len(), 1);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_binding_order_preserved() {
        let map = GestureMap::new()
            .with_binding("kb:control+c", ScriptBinding::new("A", "first"))
            .with_binding("kb:control+c", ScriptBinding::new("B", "second"));
        let names: Vec<_> = map
            .scripts_for_gesture("kb:control+c")
            .iter()
            .map(|s| s.script.as_str())
            .collect();
        assert_eq!(names, ["first", "second"]);
    }

    #[test]
    fn test_from_json() {
        let map = GestureMap::from_json(
            r#"{"kb:Control+X": [{"class_name": "Editor", "script": "cut"}]}"#,
        )
        .unwrap();
        assert_eq!(
            map.scripts_for_gesture("kb:control+x"),
            [ScriptBinding::new("Editor", "cut")]
        );
    }

    #[test]
    fn test_from_json_merges_colliding_keys_in_document_order() {
        let json = r#"{
            "kb:Control+C": [{"class_name": "A", "script": "first"}],
            "kb:control+c": [{"class_name": "B", "script": "second"}],
            "KB:CONTROL+C": [{"class_name": "C", "script": "third"}]
        }"#;

        for _ in 0..50 {
            let map = GestureMap::from_json(json).unwrap();
            let names: Vec<String> = map
                .scripts_for_gesture("kb:control+c")
                .iter()
                .map(|s| s.to_string())
                .collect();
            assert_eq!(names, ["A.first", "B.second", "C.third"]);
            assert_eq!(map.len(), 1);
        }
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            GestureMap::from_json("[1, 2]"),
            Err(GestureError::InvalidMap(_))
        ));
        assert!(matches!(
            GestureMap::from_json(r#"{"  ": []}"#),
            Err(GestureError::InvalidMap(_))
        ));
    }
}
