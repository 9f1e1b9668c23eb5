//! Component Registry - name to definition mapping.
//!
//! Each application instance owns one registry. Registering a name makes the
//! component reachable by that name from anywhere in the instance's tree,
//! with no structural reference needed.
//!
//! Semantics:
//! - Names are unique per registry and case-sensitive
//! - Re-registering a name overwrites the previous definition (last write wins)
//! - Lookup of an unregistered name is a hard error, never a silent no-op

use std::collections::HashMap;

use tracing::debug;

use crate::component::ComponentDefinition;
use crate::error::AppError;

// =============================================================================
// Name Validation
// =============================================================================

/// Check a component name against the host naming rules.
///
/// Valid names start with an ASCII letter and continue with ASCII
/// alphanumerics, `-`, or `_` (e.g. `flip-text`, `status_bar`).
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    first.is_ascii_alphabetic()
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

// =============================================================================
// Registry
// =============================================================================

/// Instance-owned mapping from component name to definition.
#[derive(Debug, Default)]
pub struct ComponentRegistry {
    entries: HashMap<String, ComponentDefinition>,
}

impl ComponentRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Insert or overwrite the entry for `name`.
    ///
    /// Idempotent under repeated identical calls; under conflicting calls the
    /// last write wins without error.
    pub fn insert(&mut self, name: &str, definition: ComponentDefinition) -> Result<(), AppError> {
        if !is_valid_name(name) {
            return Err(AppError::InvalidComponentName(name.to_string()));
        }

        let replaced = self.entries.insert(name.to_string(), definition);
        debug!(name, replaced = replaced.is_some(), "component registered");
        Ok(())
    }

    /// Look up a definition by name.
    pub fn get(&self, name: &str) -> Option<&ComponentDefinition> {
        self.entries.get(name)
    }

    /// Resolve a definition by name, failing for unregistered names.
    pub fn resolve(&self, name: &str) -> Result<&ComponentDefinition, AppError> {
        self.entries
            .get(name)
            .ok_or_else(|| AppError::UnknownComponent(name.to_string()))
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the registry holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over registered names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn def(output: &str) -> ComponentDefinition {
        let output = output.to_string();
        ComponentDefinition::from_fn(move |_| Ok(output.clone()))
    }

    #[test]
    fn test_valid_names() {
        assert!(is_valid_name("flip-text"));
        assert!(is_valid_name("status_bar"));
        assert!(is_valid_name("a"));
        assert!(is_valid_name("Panel2"));
    }

    #[test]
    fn test_invalid_names() {
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("1st"));
        assert!(!is_valid_name("-leading"));
        assert!(!is_valid_name("has space"));
        assert!(!is_valid_name("dotted.name"));
    }

    #[test]
    fn test_insert_and_get() {
        let mut registry = ComponentRegistry::new();
        assert!(registry.is_empty());

        registry.insert("flip-text", def("x")).unwrap();
        assert_eq!(registry.len(), 1);
        assert!(registry.get("flip-text").is_some());
    }

    #[test]
    fn test_insert_rejects_invalid_name() {
        let mut registry = ComponentRegistry::new();

        let err = registry.insert("", def("x")).unwrap_err();
        assert!(matches!(err, AppError::InvalidComponentName(_)));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_entries_are_independent() {
        let mut registry = ComponentRegistry::new();
        let a = def("a");
        let b = def("b");
        registry.insert("a", a.clone()).unwrap();
        registry.insert("b", b.clone()).unwrap();

        assert!(ComponentDefinition::ptr_eq(registry.get("a").unwrap(), &a));
        assert!(ComponentDefinition::ptr_eq(registry.get("b").unwrap(), &b));
    }

    #[test]
    fn test_last_write_wins() {
        let mut registry = ComponentRegistry::new();
        let first = def("first");
        let second = def("second");

        registry.insert("flip-text", first).unwrap();
        registry.insert("flip-text", second.clone()).unwrap();

        assert_eq!(registry.len(), 1);
        assert!(ComponentDefinition::ptr_eq(
            registry.get("flip-text").unwrap(),
            &second
        ));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let mut registry = ComponentRegistry::new();
        registry.insert("FlipText", def("x")).unwrap();

        assert!(registry.get("FlipText").is_some());
        assert!(registry.get("fliptext").is_none());
        assert!(matches!(
            registry.resolve("fliptext"),
            Err(AppError::UnknownComponent(_))
        ));
    }
}
