//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the window, the host view and the presentation shell.

mod core;
mod event_handler;
mod init;
mod polling;
mod shutdown;
mod types;

pub use core::HelloApp;
