//! Graceful shutdown: drop the host view, then the window.

use super::core::HelloApp;

impl HelloApp {
    /// Tear down in dependency order. The web view is a child of the window,
    /// so it goes first.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        if self.host.take().is_some() {
            tracing::debug!("Host view destroyed");
        }
        self.window = None;
        self.should_exit = true;

        tracing::info!("Graceful shutdown complete");
    }
}
