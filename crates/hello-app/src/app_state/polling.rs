//! Per-iteration work: drain web view events, run the popup cycle.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use hello_webview::WebViewEvent;

use super::core::HelloApp;
use super::types::POLL_INTERVAL;

impl HelloApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_webview_events();
        }

        self.run_popup_cycle();

        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }

    /// Log queued page events. Bridge messages never pass through here.
    pub(super) fn poll_webview_events(&self) {
        let events = match &self.host {
            Some(host) => host.drain_events(),
            None => return,
        };

        for event in events {
            match event {
                WebViewEvent::PageLoad { state, url } => {
                    tracing::debug!(?state, url = %url, "WebView page load event");
                }
                WebViewEvent::TitleChanged { title } => {
                    tracing::debug!(title = %title, "WebView title changed");
                }
                WebViewEvent::NavigationBlocked { url } => {
                    tracing::debug!(url = %url, "WebView navigation blocked");
                }
            }
        }
    }

    /// Show the dialog if the page raised the flag since the last frame.
    pub(super) fn run_popup_cycle(&mut self) {
        if self.shell.observe() == crate::shell::ShellState::Visible {
            self.shell.present_with(self.presenter.as_ref());
        }
    }
}
