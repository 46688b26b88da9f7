use std::cell::RefCell;
use std::rc::Rc;

use hello_common::{Binding, WebViewError};
use tracing::debug;
use wry::raw_window_handle;
use wry::WebViewBuilder;

use super::types::WebViewConfig;
use super::HostView;

impl HostView {
    /// Create the host view as a child of `window`, positioned at `bounds`.
    ///
    /// The bridge is attached before the page loads, so the page can post
    /// on `showAlert` as soon as its script runs.
    pub fn new<W: raw_window_handle::HasWindowHandle>(
        window: &W,
        bounds: wry::Rect,
        config: &WebViewConfig,
        show_alert: &Binding<bool>,
    ) -> Result<Self, WebViewError> {
        let (_, controller) = Self::make_bridge(show_alert);
        let events = Rc::new(RefCell::new(Vec::new()));

        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_transparent(config.transparent)
            .with_devtools(config.devtools)
            .with_initialization_script(&controller.init_script());

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = Self::attach_ipc_handler(builder, Rc::clone(&controller));
        builder = Self::attach_page_load_handler(builder, Rc::clone(&events));
        builder = Self::attach_title_handler(builder, Rc::clone(&events));
        builder = Self::attach_navigation_handler(builder, Rc::clone(&events));

        // Inline document, loaded once, no base URL.
        builder = builder.with_html(config.html.as_str());

        let webview = builder
            .build_as_child(window)
            .map_err(|e| WebViewError::Build(e.to_string()))?;

        debug!(
            channels = ?controller.channel_names(),
            html_len = config.html.len(),
            "host view created"
        );

        Ok(Self {
            webview,
            events,
        })
    }
}
