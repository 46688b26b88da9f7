//! Web view bridge for HelloWebView.
//!
//! Wraps the `wry` crate to provide:
//! - Named script-message channels layered over wry's single IPC sink
//! - The coordinator that turns the `"open"` token into a popup request
//! - The host view that embeds the bundled page and wires the bridge in
//! - Event handling (page load, title change, blocked navigation)

pub mod content;
pub mod controller;
pub mod coordinator;
pub mod events;
pub mod host;
pub mod ipc;

pub use controller::{DispatchOutcome, MessageHandler, UserContentController};
pub use coordinator::{WebViewCoordinator, OPEN_TOKEN, SHOW_ALERT_CHANNEL};
pub use events::{PageLoadState, WebViewEvent};
pub use host::{HostView, WebViewConfig};
pub use ipc::ScriptMessage;
