//! Component seam - definitions and render-time context.
//!
//! Components are opaque to the runtime. The runtime never looks inside a
//! definition; it only needs two things from it:
//! - a render interface, so mount can produce output for the host
//! - a structural validation hook, so the factory can reject broken roots
//!
//! What a component actually draws (markup, styling, state) belongs to the
//! collaborator that supplied it.
//!
//! # By-name composition
//!
//! During a render pass every component receives a [`RenderContext`] that
//! views the owning instance's registry. A component can resolve and render
//! registered components purely by string name, without holding a structural
//! reference to them. Lookups happen at render time, on every pass.

use std::fmt;
use std::rc::Rc;

use crate::app::registry::ComponentRegistry;
use crate::error::AppError;

// =============================================================================
// Component Trait
// =============================================================================

/// A unit of UI behavior, supplied by a collaborator.
///
/// Implementations are treated as immutable values: the runtime clones the
/// handle, never the component, and only ever takes `&self`.
pub trait Component {
    /// Produce this component's output for one render pass.
    ///
    /// Registered components are reachable by name through `cx`.
    fn render(&self, cx: &RenderContext<'_>) -> Result<String, AppError>;

    /// Structural validity hook, checked by the factory for root definitions.
    ///
    /// The runtime defines no structure of its own, so the default accepts
    /// everything; collaborators override this with their own rules.
    fn is_valid(&self) -> bool {
        true
    }
}

// =============================================================================
// Component Definition
// =============================================================================

/// Cheaply clonable handle to a [`Component`].
///
/// This is what flows through the runtime: the factory takes one as the root,
/// the registry stores them by name, and render passes resolve them back out.
#[derive(Clone)]
pub struct ComponentDefinition {
    inner: Rc<dyn Component>,
}

impl ComponentDefinition {
    /// Wrap a component into a definition handle.
    pub fn new(component: impl Component + 'static) -> Self {
        Self {
            inner: Rc::new(component),
        }
    }

    /// Build a definition from a plain render closure.
    ///
    /// Convenient for small components that carry no state of their own.
    pub fn from_fn<F>(render: F) -> Self
    where
        F: Fn(&RenderContext<'_>) -> Result<String, AppError> + 'static,
    {
        Self::new(FnComponent { render })
    }

    /// Render this definition for one pass.
    pub fn render(&self, cx: &RenderContext<'_>) -> Result<String, AppError> {
        self.inner.render(cx)
    }

    /// Check the collaborator-supplied structural validity hook.
    pub fn is_valid(&self) -> bool {
        self.inner.is_valid()
    }

    /// Check whether two definitions are the same underlying component.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.inner, &b.inner)
    }
}

impl fmt::Debug for ComponentDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentDefinition").finish_non_exhaustive()
    }
}

/// Adapter turning a closure into a [`Component`].
struct FnComponent<F> {
    render: F,
}

impl<F> Component for FnComponent<F>
where
    F: Fn(&RenderContext<'_>) -> Result<String, AppError> + 'static,
{
    fn render(&self, cx: &RenderContext<'_>) -> Result<String, AppError> {
        (self.render)(cx)
    }
}

// =============================================================================
// Render Context
// =============================================================================

/// Per-pass view of an application instance's registry.
///
/// Name resolution is lazy: every call hits the registry again, so the
/// definition registered last before the pass is the one that renders.
pub struct RenderContext<'a> {
    registry: &'a ComponentRegistry,
}

impl<'a> RenderContext<'a> {
    pub(crate) fn new(registry: &'a ComponentRegistry) -> Self {
        Self { registry }
    }

    /// Resolve a registered component by name.
    ///
    /// Referencing an unregistered name is an error, not a silent no-op.
    pub fn resolve(&self, name: &str) -> Result<&ComponentDefinition, AppError> {
        self.registry.resolve(name)
    }

    /// Resolve a registered component by name and render it in this context.
    pub fn render(&self, name: &str) -> Result<String, AppError> {
        self.resolve(name)?.render(self)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fn_renders() {
        let registry = ComponentRegistry::new();
        let cx = RenderContext::new(&registry);

        let def = ComponentDefinition::from_fn(|_| Ok("hello".to_string()));
        assert_eq!(def.render(&cx).unwrap(), "hello");
    }

    #[test]
    fn test_default_validity() {
        let def = ComponentDefinition::from_fn(|_| Ok(String::new()));
        assert!(def.is_valid());
    }

    #[test]
    fn test_ptr_eq_tracks_identity() {
        let a = ComponentDefinition::from_fn(|_| Ok(String::new()));
        let b = ComponentDefinition::from_fn(|_| Ok(String::new()));
        let a2 = a.clone();

        assert!(ComponentDefinition::ptr_eq(&a, &a2));
        assert!(!ComponentDefinition::ptr_eq(&a, &b));
    }

    #[test]
    fn test_context_resolves_registered_names() {
        let mut registry = ComponentRegistry::new();
        registry
            .insert("greeting", ComponentDefinition::from_fn(|_| Ok("hi".to_string())))
            .unwrap();

        let cx = RenderContext::new(&registry);
        assert_eq!(cx.render("greeting").unwrap(), "hi");
    }

    #[test]
    fn test_context_unknown_name_is_an_error() {
        let registry = ComponentRegistry::new();
        let cx = RenderContext::new(&registry);

        let err = cx.resolve("missing").unwrap_err();
        assert!(matches!(err, AppError::UnknownComponent(name) if name == "missing"));
    }

    #[test]
    fn test_nested_by_name_render() {
        let mut registry = ComponentRegistry::new();
        registry
            .insert("inner", ComponentDefinition::from_fn(|_| Ok("core".to_string())))
            .unwrap();

        let outer = ComponentDefinition::from_fn(|cx| Ok(format!("[{}]", cx.render("inner")?)));

        let cx = RenderContext::new(&registry);
        assert_eq!(outer.render(&cx).unwrap(), "[core]");
    }
}
