//! The host view: a `wry` web surface with the bridge wired in.
//!
//! Construction mirrors the usual representable-view split. First the
//! coordinator is made and pointed at the popup flag, then the content
//! controller registers it on the `showAlert` channel, then the web view
//! is built with that controller attached and the bundled page loaded.
//! The flag is never reflected back into the page.

use std::cell::RefCell;
use std::rc::Rc;

use hello_common::{Binding, WebViewError};
use tracing::info;
use wry::WebView;

use crate::controller::UserContentController;
use crate::coordinator::{WebViewCoordinator, SHOW_ALERT_CHANNEL};
use crate::events::WebViewEvent;

pub mod bounds;
pub mod handlers;
mod lifecycle;
mod types;

pub use types::WebViewConfig;

/// A web view embedded in the native window, owning the bridge.
pub struct HostView {
    webview: WebView,
    events: Rc<RefCell<Vec<WebViewEvent>>>,
}

impl HostView {
    /// Coordinator whose callback raises `show_alert`.
    pub fn make_coordinator(show_alert: &Binding<bool>) -> Rc<WebViewCoordinator> {
        let coordinator = WebViewCoordinator::new();
        let flag = show_alert.clone();
        coordinator.set_on_message(move |_body| {
            if !flag.replace(true) {
                info!("popup requested by page");
            }
        });
        Rc::new(coordinator)
    }

    /// Content controller with `coordinator` registered on `showAlert`.
    pub fn make_content_controller(
        coordinator: Rc<WebViewCoordinator>,
    ) -> Rc<UserContentController> {
        let controller = UserContentController::new();
        controller.add(coordinator, SHOW_ALERT_CHANNEL);
        Rc::new(controller)
    }

    /// The full bridge for `show_alert`: coordinator plus the controller it
    /// is registered on. Used by [`HostView::new`]; usable without a window.
    pub fn make_bridge(
        show_alert: &Binding<bool>,
    ) -> (Rc<WebViewCoordinator>, Rc<UserContentController>) {
        let coordinator = Self::make_coordinator(show_alert);
        let controller = Self::make_content_controller(Rc::clone(&coordinator));
        (coordinator, controller)
    }

    /// Resize the web surface, e.g. after the window was resized.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), WebViewError> {
        self.webview
            .set_bounds(bounds)
            .map_err(|e| WebViewError::Bounds(e.to_string()))
    }

    /// Drain queued page-load, title and navigation events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{DispatchOutcome, MessageHandler};
    use crate::ipc::ScriptMessage;
    use hello_common::State;

    fn post(controller: &UserContentController, name: &str, body: &str) -> DispatchOutcome {
        controller.dispatch_raw(&ScriptMessage::text(name, body).to_json())
    }

    #[test]
    fn open_on_show_alert_raises_flag() {
        let flag = State::new(false);
        let (_, controller) = HostView::make_bridge(&flag.binding());

        assert_eq!(post(&controller, "showAlert", "open"), DispatchOutcome::Delivered);
        assert!(flag.get());
    }

    #[test]
    fn other_tokens_leave_flag_unchanged() {
        let flag = State::new(false);
        let (_, controller) = HostView::make_bridge(&flag.binding());

        for body in ["close", "", "OPEN", "open\n", "{\"open\":true}"] {
            post(&controller, "showAlert", body);
            assert!(!flag.get(), "body {body:?} must not raise the flag");
        }
    }

    #[test]
    fn other_tokens_leave_raised_flag_raised() {
        let flag = State::new(true);
        let (_, controller) = HostView::make_bridge(&flag.binding());

        post(&controller, "showAlert", "close");
        assert!(flag.get());
    }

    #[test]
    fn other_channels_have_no_effect() {
        let flag = State::new(false);
        let (_, controller) = HostView::make_bridge(&flag.binding());

        for name in ["hideAlert", "showalert", "", "showAlert "] {
            assert_eq!(post(&controller, name, "open"), DispatchOutcome::UnknownChannel);
        }
        assert!(!flag.get());
    }

    #[test]
    fn non_string_body_has_no_effect() {
        let flag = State::new(false);
        let (_, controller) = HostView::make_bridge(&flag.binding());

        controller.dispatch_raw(r#"{"name":"showAlert","body":true}"#);
        assert!(!flag.get());
    }

    #[test]
    fn repeated_open_while_raised_is_harmless() {
        let flag = State::new(false);
        let (_, controller) = HostView::make_bridge(&flag.binding());

        post(&controller, "showAlert", "open");
        post(&controller, "showAlert", "open");
        assert!(flag.get());
    }

    #[test]
    fn bridge_registers_exactly_one_channel() {
        let flag = State::new(false);
        let (coordinator, controller) = HostView::make_bridge(&flag.binding());

        assert_eq!(controller.channel_names(), vec![SHOW_ALERT_CHANNEL.to_string()]);
        coordinator.handle_message(SHOW_ALERT_CHANNEL, "open");
        assert!(flag.get());
    }
}
