//! Runtime errors.
//!
//! Centralized error definitions for the bootstrap sequence. Every failure
//! here is synchronous and unrecoverable at this layer: the caller is
//! expected to abort startup rather than retry.

/// Errors that can occur while configuring or mounting an application.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The root component definition is absent or structurally invalid.
    #[error("invalid root component definition")]
    InvalidRootDefinition,

    /// A component was registered under an empty or malformed name.
    #[error("invalid component name: {0:?}")]
    InvalidComponentName(String),

    /// The mount target did not resolve to an anchor in the host.
    #[error("mount target not found: {0}")]
    TargetNotFound(String),

    /// `mount` was called on an instance that is already mounted.
    #[error("application is already mounted")]
    AlreadyMounted,

    /// A component was referenced by name but never registered.
    #[error("unknown component: {0:?}")]
    UnknownComponent(String),

    /// The host failed while attaching rendered output.
    #[error("host i/o error: {0}")]
    Io(#[from] std::io::Error),
}
