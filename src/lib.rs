//! # glint-tui
//!
//! Component application runtime for terminal UIs.
//!
//! glint-tui is the bootstrap layer of a component-based terminal UI stack.
//! It owns exactly three concerns, composed in strict order:
//!
//! ```text
//! create_app(root) → App::register(name, definition) → App::mount(host, target)
//! ```
//!
//! 1. **Factory** - [`create_app`] turns a root [`ComponentDefinition`] into
//!    an [`App`] in unmounted state with an empty registry.
//! 2. **Registry** - [`App::register`] maps string names to component
//!    definitions, instance-scoped, last write wins. Registered components
//!    are reachable by name from anywhere in the tree via [`RenderContext`].
//! 3. **Mount** - [`App::mount`] resolves a target selector through a
//!    [`Host`], attaches the rendered tree at the anchor, and flips the
//!    one-way `Unmounted -> Mounted` lifecycle.
//!
//! Component internals are collaborator territory: the runtime only asks a
//! [`Component`] to render and to vouch for its own structure.
//!
//! ## Example
//!
//! ```
//! use glint_tui::{create_app, ComponentDefinition, MockHost};
//!
//! let root = ComponentDefinition::from_fn(|cx| {
//!     Ok(format!("== {} ==", cx.render("flip-text")?))
//! });
//!
//! let mut app = create_app(root)?;
//! app.register("flip-text", ComponentDefinition::from_fn(|_| Ok("olleh".to_string())))?;
//!
//! let mut host = MockHost::with_anchors(["#app"]);
//! app.mount(&mut host, "#app")?;
//!
//! assert!(app.is_mounted());
//! assert_eq!(host.content("#app"), Some("== olleh =="));
//! # Ok::<(), glint_tui::AppError>(())
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Lifecycle state
//! - [`component`] - Component trait, definitions, render context
//! - [`app`] - Application instance, factory, registry, mount
//! - [`host`] - Host seam (terminal host, mock host)
//! - [`error`] - Error taxonomy

pub mod app;
pub mod component;
pub mod error;
pub mod host;
pub mod types;

// Re-export commonly used items
pub use app::registry::ComponentRegistry;
pub use app::{create_app, App};
pub use component::{Component, ComponentDefinition, RenderContext};
pub use error::AppError;
pub use host::{Anchor, Host, MockHost, TerminalHost};
pub use types::Lifecycle;
