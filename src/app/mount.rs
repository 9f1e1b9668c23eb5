//! Mount lifecycle - attaching an application to a host anchor.
//!
//! Mounting is the only externally visible effect of the runtime: it renders
//! the root definition (resolving by-name references through the registry)
//! and hands the output to the host at the resolved anchor, then transitions
//! the instance `Unmounted -> Mounted`. The transition is terminal; no
//! unmount or re-mount exists.
//!
//! Failure leaves no partial state: target resolution and rendering both
//! happen before the host is touched, and the lifecycle flips only after the
//! host accepted the output.

use tracing::info;

use crate::component::RenderContext;
use crate::error::AppError;
use crate::host::Host;

use super::App;

impl App {
    /// Mount this instance to `target` in the host environment.
    ///
    /// Resolves `target` to an anchor, renders the root component tree (any
    /// registered component it references by name resolves through the
    /// registry, lazily, at render time), attaches the output, and marks the
    /// instance mounted.
    ///
    /// # Errors
    ///
    /// - [`AppError::AlreadyMounted`] when called on a mounted instance
    /// - [`AppError::TargetNotFound`] when `target` resolves to no anchor
    /// - [`AppError::UnknownComponent`] when the tree references a name that
    ///   was never registered
    /// - [`AppError::Io`] when the host fails to attach the output
    ///
    /// On any error the instance remains unmounted.
    pub fn mount(&mut self, host: &mut dyn Host, target: &str) -> Result<(), AppError> {
        if self.is_mounted() {
            return Err(AppError::AlreadyMounted);
        }

        let anchor = host
            .resolve(target)
            .ok_or_else(|| AppError::TargetNotFound(target.to_string()))?;

        // Render before touching the host so a bad tree cannot half-mount.
        let output = {
            let cx = RenderContext::new(self.registry());
            self.root().render(&cx)?
        };

        host.attach(&anchor, &output)?;
        self.set_mounted();

        info!(target, "application mounted");
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
