//! Named script-message channels.
//!
//! `UserContentController` owns the channel table. The web view's IPC
//! handler hands every raw frame to [`UserContentController::dispatch_raw`],
//! which routes it to the handler registered under the frame's channel
//! name. Delivery is synchronous and fire-and-forget: nothing is sent back
//! to the page, and frames that don't fit the contract are dropped silently.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use tracing::debug;

use crate::ipc::{bridge_init_script, ScriptMessage};

/// Receiver side of a named channel.
pub trait MessageHandler {
    /// Called with the channel name and the string body posted by the page.
    fn handle_message(&self, channel: &str, body: &str);
}

/// What happened to a raw frame handed to [`UserContentController::dispatch_raw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A handler was invoked.
    Delivered,
    /// The frame wasn't a `{name, body}` object.
    Malformed,
    /// No handler is registered under the frame's channel name.
    UnknownChannel,
    /// The page posted something other than a string.
    NonStringBody,
}

/// Registry of named channels the page may post on.
#[derive(Default)]
pub struct UserContentController {
    handlers: RefCell<BTreeMap<String, Rc<dyn MessageHandler>>>,
}

impl UserContentController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` under `name`, replacing any previous handler.
    pub fn add(&self, handler: Rc<dyn MessageHandler>, name: impl Into<String>) {
        let name = name.into();
        debug!(channel = %name, "script message channel registered");
        self.handlers.borrow_mut().insert(name, handler);
    }

    /// Unregister a channel. Returns `true` if it existed.
    pub fn remove(&self, name: &str) -> bool {
        self.handlers.borrow_mut().remove(name).is_some()
    }

    /// Registered channel names, sorted.
    pub fn channel_names(&self) -> Vec<String> {
        self.handlers.borrow().keys().cloned().collect()
    }

    /// Initialization script exposing every registered channel to page script.
    pub fn init_script(&self) -> String {
        bridge_init_script(&self.channel_names())
    }

    /// Route a raw IPC frame to its channel handler.
    pub fn dispatch_raw(&self, raw: &str) -> DispatchOutcome {
        match ScriptMessage::from_json(raw) {
            Some(message) => self.dispatch(&message),
            None => {
                debug!(body_len = raw.len(), "script message ignored: malformed frame");
                DispatchOutcome::Malformed
            }
        }
    }

    /// Route a parsed message to its channel handler.
    pub fn dispatch(&self, message: &ScriptMessage) -> DispatchOutcome {
        // Clone the handler out so it may touch the registry while running.
        let handler = match self.handlers.borrow().get(&message.name) {
            Some(h) => Rc::clone(h),
            None => {
                debug!(channel = %message.name, "script message ignored: unknown channel");
                return DispatchOutcome::UnknownChannel;
            }
        };

        let Some(body) = message.body_str() else {
            debug!(channel = %message.name, "script message ignored: body is not a string");
            return DispatchOutcome::NonStringBody;
        };

        debug!(channel = %message.name, body_len = body.len(), "script message delivered");
        handler.handle_message(&message.name, body);
        DispatchOutcome::Delivered
    }
}
