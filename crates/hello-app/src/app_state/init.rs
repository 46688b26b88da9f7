//! Window creation and host view setup.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use hello_config::schema::WebViewSection;
use hello_webview::host::bounds::fill_window;
use hello_webview::{HostView, WebViewConfig};

use super::core::HelloApp;

impl HelloApp {
    /// Create the window and embed the host view in it.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.clone())
            .with_resizable(self.config.window.resizable)
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width as f64,
                self.config.window.height as f64,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let size = window.inner_size();
        let config = webview_config(&self.config.webview);
        let host = match HostView::new(
            window.as_ref(),
            fill_window(size.width, size.height),
            &config,
            &self.shell.binding(),
        ) {
            Ok(host) => host,
            Err(e) => {
                tracing::error!("Failed to create host view: {e}");
                return false;
            }
        };

        self.host = Some(host);
        self.window = Some(window);
        tracing::info!("Window created and host view initialized");
        true
    }
}

/// Translate the `[webview]` config section into builder options.
pub(super) fn webview_config(section: &WebViewSection) -> WebViewConfig {
    WebViewConfig {
        transparent: section.transparent,
        devtools: section.devtools,
        user_agent: section.user_agent.clone(),
        ..WebViewConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn webview_config_copies_section() {
        let section = WebViewSection {
            devtools: true,
            user_agent: None,
            transparent: true,
        };
        let config = webview_config(&section);
        assert!(config.devtools);
        assert!(config.transparent);
        assert!(config.user_agent.is_none());
    }

    #[test]
    fn webview_config_always_renders_bundled_payload() {
        let config = webview_config(&WebViewSection::default());
        assert_eq!(config.html, hello_webview::content::CONTENT_PAYLOAD);
    }
}
