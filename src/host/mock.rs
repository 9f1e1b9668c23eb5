//! Mock host for tests.
//!
//! Implements the same [`Host`] API as the production terminal host but
//! operates entirely in-memory: anchors are declared up front and attached
//! content is recorded per anchor for assertion. Fast and deterministic, no
//! terminal required.
//!
//! Shipped as a public module so downstream crates can test their own
//! bootstrap code against it.

use std::collections::HashMap;

use crate::error::AppError;

use super::{Anchor, Host};

/// In-memory host with a fixed set of named anchors.
#[derive(Default)]
pub struct MockHost {
    anchors: HashMap<String, Option<String>>,
}

impl MockHost {
    /// Create a host with no anchors. Every mount against it fails.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a host with the given anchor selectors, none attached yet.
    pub fn with_anchors<I, S>(selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            anchors: selectors.into_iter().map(|s| (s.into(), None)).collect(),
        }
    }

    /// Declare an additional anchor.
    pub fn add_anchor(&mut self, selector: impl Into<String>) {
        self.anchors.entry(selector.into()).or_insert(None);
    }

    /// Content attached at `selector`, if any.
    pub fn content(&self, selector: &str) -> Option<&str> {
        self.anchors.get(selector).and_then(|c| c.as_deref())
    }
}

impl Host for MockHost {
    fn resolve(&self, target: &str) -> Option<Anchor> {
        self.anchors.contains_key(target).then(|| Anchor::new(target))
    }

    fn attach(&mut self, anchor: &Anchor, content: &str) -> Result<(), AppError> {
        self.anchors
            .insert(anchor.selector().to_string(), Some(content.to_string()));
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
