//! HelloApp struct definition and constructor.

use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use hello_config::HelloConfig;
use hello_webview::HostView;

use crate::shell::{AlertPresenter, PresentationShell};

/// Top-level application state.
pub struct HelloApp {
    pub(super) config: HelloConfig,

    // Windowing
    pub(super) window: Option<Arc<Window>>,

    // Embedded page + bridge
    pub(super) host: Option<HostView>,

    // Popup flag owner and the dialog it drives
    pub(super) shell: PresentationShell,
    pub(super) presenter: Box<dyn AlertPresenter>,

    // Whether the app should exit
    pub(super) should_exit: bool,
    pub(super) last_poll: Instant,
}

impl HelloApp {
    pub fn new(config: HelloConfig, presenter: Box<dyn AlertPresenter>) -> Self {
        Self {
            config,
            window: None,
            host: None,
            shell: PresentationShell::new(),
            presenter,
            should_exit: false,
            last_poll: Instant::now(),
        }
    }
}
