//! Application instance - factory, registry access, lifecycle.
//!
//! An [`App`] is the single process-wide object tying the bootstrap together:
//! the root component definition, the instance-owned component registry, and
//! the one-way mount lifecycle.
//!
//! The intended call order is fixed:
//!
//! ```text
//! create_app(root) -> App::register(name, def)* -> App::mount(host, target)
//! ```
//!
//! Registration after mount still mutates the registry (last write wins) but
//! cannot affect output that is already attached; the runtime warns when it
//! happens.

pub mod registry;

mod mount;

use tracing::{debug, warn};

use crate::component::ComponentDefinition;
use crate::error::AppError;
use crate::types::Lifecycle;

use registry::ComponentRegistry;

// =============================================================================
// Factory
// =============================================================================

/// Create an application instance from a root component definition.
///
/// The instance starts in [`Lifecycle::Unmounted`] with an empty registry and
/// touches nothing in the host environment.
///
/// Fails with [`AppError::InvalidRootDefinition`] when the definition reports
/// itself structurally invalid.
///
/// # Example
///
/// ```
/// use glint_tui::{create_app, ComponentDefinition};
///
/// let root = ComponentDefinition::from_fn(|_| Ok("hello".to_string()));
/// let app = create_app(root).unwrap();
/// assert!(!app.is_mounted());
/// ```
pub fn create_app(root: ComponentDefinition) -> Result<App, AppError> {
    if !root.is_valid() {
        return Err(AppError::InvalidRootDefinition);
    }

    debug!("application instance created");
    Ok(App {
        root,
        registry: ComponentRegistry::new(),
        lifecycle: Lifecycle::Unmounted,
    })
}

// =============================================================================
// Application Instance
// =============================================================================

/// A configured UI application: root definition, registry, lifecycle.
#[derive(Debug)]
pub struct App {
    root: ComponentDefinition,
    registry: ComponentRegistry,
    lifecycle: Lifecycle,
}

impl App {
    /// Register a component definition under a global name.
    ///
    /// After this call any component rendered under this instance can
    /// reference `name` through its render context. Re-registering a name
    /// overwrites the previous definition; the last write wins, silently.
    ///
    /// Fails with [`AppError::InvalidComponentName`] for empty or malformed
    /// names.
    pub fn register(&mut self, name: &str, definition: ComponentDefinition) -> Result<(), AppError> {
        if self.lifecycle.is_mounted() {
            // Accepted, but it cannot change what is already on screen.
            warn!(name, "component registered after mount; attached output is unaffected");
        }
        self.registry.insert(name, definition)
    }

    /// The root component definition this instance was created from.
    pub fn root(&self) -> &ComponentDefinition {
        &self.root
    }

    /// The instance-owned component registry.
    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    /// Current lifecycle state.
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Check whether the instance has been mounted.
    pub fn is_mounted(&self) -> bool {
        self.lifecycle.is_mounted()
    }

    pub(crate) fn set_mounted(&mut self) {
        self.lifecycle = Lifecycle::Mounted;
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{Component, RenderContext};

    struct Broken;

    impl Component for Broken {
        fn render(&self, _cx: &RenderContext<'_>) -> Result<String, AppError> {
            Ok(String::new())
        }

        fn is_valid(&self) -> bool {
            false
        }
    }

    fn root() -> ComponentDefinition {
        ComponentDefinition::from_fn(|_| Ok("root".to_string()))
    }

    #[test]
    fn test_create_app_starts_unmounted_and_empty() {
        let app = create_app(root()).unwrap();

        assert_eq!(app.lifecycle(), Lifecycle::Unmounted);
        assert!(!app.is_mounted());
        assert!(app.registry().is_empty());
    }

    #[test]
    fn test_create_app_rejects_invalid_root() {
        let err = create_app(ComponentDefinition::new(Broken)).unwrap_err();
        assert!(matches!(err, AppError::InvalidRootDefinition));
    }

    #[test]
    fn test_register_populates_registry() {
        let mut app = create_app(root()).unwrap();
        app.register("flip-text", root()).unwrap();

        assert_eq!(app.registry().len(), 1);
        assert!(app.registry().get("flip-text").is_some());
    }

    #[test]
    fn test_register_rejects_bad_names() {
        let mut app = create_app(root()).unwrap();

        for name in ["", "9lives", "bad name"] {
            let err = app.register(name, root()).unwrap_err();
            assert!(matches!(err, AppError::InvalidComponentName(_)), "{name:?}");
        }
        assert!(app.registry().is_empty());
    }

    #[test]
    fn test_register_last_write_wins() {
        let mut app = create_app(root()).unwrap();
        let first = root();
        let second = root();

        app.register("flip-text", first).unwrap();
        app.register("flip-text", second.clone()).unwrap();

        assert!(ComponentDefinition::ptr_eq(
            app.registry().get("flip-text").unwrap(),
            &second
        ));
    }
}
