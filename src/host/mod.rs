//! Host environment seam.
//!
//! The runtime never owns the surface it renders into; it asks a [`Host`] to
//! resolve a target selector to an anchor and to accept attached output.
//! Everything else about the surface (what a selector means, where the
//! output goes) is the host's business.
//!
//! Two hosts ship with the crate:
//! - [`TerminalHost`] - the production host, writes to the terminal screen
//! - [`MockHost`] - in-memory host for tests, records what was attached

pub mod mock;
pub mod terminal;

pub use mock::MockHost;
pub use terminal::TerminalHost;

use crate::error::AppError;

// =============================================================================
// Anchor
// =============================================================================

/// A resolved mount point inside a host environment.
///
/// Obtained from [`Host::resolve`]; opaque to the runtime beyond its
/// selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    selector: String,
}

impl Anchor {
    /// Create an anchor for a selector. Intended for [`Host`] implementors.
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
        }
    }

    /// The selector this anchor was resolved from.
    pub fn selector(&self) -> &str {
        &self.selector
    }
}

// =============================================================================
// Host Trait
// =============================================================================

/// A surface that can resolve mount targets and accept rendered output.
pub trait Host {
    /// Resolve a target selector to exactly one existing anchor.
    ///
    /// Returns `None` when no such anchor exists; the host never creates
    /// anchors on demand.
    fn resolve(&self, target: &str) -> Option<Anchor>;

    /// Attach rendered output at a previously resolved anchor.
    fn attach(&mut self, anchor: &Anchor, content: &str) -> Result<(), AppError>;
}
