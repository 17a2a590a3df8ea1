//! Host-detection and navigation contract.
//!
//! A running viewer must know whether it is itself hosted inside
//! another instance's embedded surface; opening a target from an
//! embedded context degrades to a top-level navigation instead of
//! nesting a window inside a window. The contract is a trait so the
//! manager stays independent of whatever navigation machinery the
//! embedding application has.

use thiserror::Error;

use crate::state::TargetId;

/// Build the canonical content path for a target. This is the only
/// thing handed across the embedding boundary.
pub fn content_path(route: &str, target: &TargetId) -> String {
    format!("/{}/{}", route.trim_matches('/'), target)
}

/// Navigation failures an embedding host can report.
#[derive(Debug, Error)]
pub enum NavigationError {
    /// The top-level context refused the navigation (typically a
    /// cross-origin policy). Recovered by navigating the local context
    /// instead; never surfaced to the user.
    #[error("top-level navigation blocked: {0}")]
    Blocked(String),
}

/// What the manager needs to know about its own execution context.
pub trait HostContext {
    /// Whether this instance is running inside another instance's
    /// embedded surface.
    fn is_embedded(&self) -> bool;

    /// Redirect the top-level context to `path`.
    fn navigate_top(&self, path: &str) -> Result<(), NavigationError>;

    /// Navigate the local context to `path`. Infallible fallback for a
    /// blocked top-level redirect.
    fn navigate_here(&self, path: &str);
}

/// Default host: a standalone process that is never embedded. The
/// navigation methods only log; a standalone viewer has nowhere to
/// navigate to.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedHost;

impl HostContext for DetachedHost {
    fn is_embedded(&self) -> bool {
        false
    }

    fn navigate_top(&self, path: &str) -> Result<(), NavigationError> {
        log::info!("detached host ignoring top-level navigation to {path}");
        Ok(())
    }

    fn navigate_here(&self, path: &str) {
        log::info!("detached host ignoring local navigation to {path}");
    }
}
