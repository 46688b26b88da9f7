//! Adapter from bridge messages to UI state changes.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::controller::MessageHandler;

/// Channel the page posts on to request the native popup.
pub const SHOW_ALERT_CHANNEL: &str = "showAlert";

/// The only body with defined behaviour on [`SHOW_ALERT_CHANNEL`].
pub const OPEN_TOKEN: &str = "open";

type OnMessage = Rc<dyn Fn(&str)>;

/// Stateless adapter registered on the `showAlert` channel.
///
/// Forwards the body to `on_message` only when it is exactly `"open"`.
/// No trimming or case folding is applied.
#[derive(Default)]
pub struct WebViewCoordinator {
    on_message: RefCell<Option<OnMessage>>,
}

impl WebViewCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the callback, replacing any previous one.
    pub fn set_on_message(&self, callback: impl Fn(&str) + 'static) {
        *self.on_message.borrow_mut() = Some(Rc::new(callback));
    }

    pub fn clear_on_message(&self) {
        self.on_message.borrow_mut().take();
    }
}

impl MessageHandler for WebViewCoordinator {
    fn handle_message(&self, channel: &str, body: &str) {
        if channel != SHOW_ALERT_CHANNEL || body != OPEN_TOKEN {
            debug!(channel, body_len = body.len(), "coordinator ignored message");
            return;
        }

        // Released before the call so the callback may replace itself.
        let callback = self.on_message.borrow().clone();
        if let Some(callback) = callback {
            callback(body);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counting_coordinator() -> (WebViewCoordinator, Rc<Cell<u32>>) {
        let coordinator = WebViewCoordinator::new();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        coordinator.set_on_message(move |body| {
            assert_eq!(body, OPEN_TOKEN);
            counter.set(counter.get() + 1);
        });
        (coordinator, calls)
    }

    #[test]
    fn open_invokes_callback() {
        let (coordinator, calls) = counting_coordinator();
        coordinator.handle_message(SHOW_ALERT_CHANNEL, "open");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn other_bodies_are_ignored() {
        let (coordinator, calls) = counting_coordinator();
        for body in ["close", "", "OPEN", "Open", " open", "open ", "opened", "\"open\""] {
            coordinator.handle_message(SHOW_ALERT_CHANNEL, body);
        }
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn other_channels_are_ignored() {
        let (coordinator, calls) = counting_coordinator();
        coordinator.handle_message("showalert", "open");
        coordinator.handle_message("hideAlert", "open");
        coordinator.handle_message("", "open");
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn missing_callback_is_a_no_op() {
        let coordinator = WebViewCoordinator::new();
        coordinator.handle_message(SHOW_ALERT_CHANNEL, "open");
    }

    #[test]
    fn cleared_callback_is_not_invoked() {
        let (coordinator, calls) = counting_coordinator();
        coordinator.clear_on_message();
        coordinator.handle_message(SHOW_ALERT_CHANNEL, "open");
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn callback_may_clear_itself() {
        let coordinator = Rc::new(WebViewCoordinator::new());
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let weak = Rc::downgrade(&coordinator);
        coordinator.set_on_message(move |_| {
            counter.set(counter.get() + 1);
            if let Some(coordinator) = weak.upgrade() {
                coordinator.clear_on_message();
            }
        });

        coordinator.handle_message(SHOW_ALERT_CHANNEL, "open");
        coordinator.handle_message(SHOW_ALERT_CHANNEL, "open");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn callback_may_replace_itself() {
        let coordinator = Rc::new(WebViewCoordinator::new());
        let replaced = Rc::new(Cell::new(false));
        let flag = Rc::clone(&replaced);
        let weak = Rc::downgrade(&coordinator);
        coordinator.set_on_message(move |_| {
            let flag = Rc::clone(&flag);
            if let Some(coordinator) = weak.upgrade() {
                coordinator.set_on_message(move |_| flag.set(true));
            }
        });

        coordinator.handle_message(SHOW_ALERT_CHANNEL, "open");
        assert!(!replaced.get());
        coordinator.handle_message(SHOW_ALERT_CHANNEL, "open");
        assert!(replaced.get());
    }

    #[test]
    fn repeated_open_invokes_each_time() {
        let (coordinator, calls) = counting_coordinator();
        coordinator.handle_message(SHOW_ALERT_CHANNEL, "open");
        coordinator.handle_message(SHOW_ALERT_CHANNEL, "open");
        assert_eq!(calls.get(), 2);
    }
}
