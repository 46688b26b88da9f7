//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use hello_webview::host::bounds::fill_window;

use super::core::HelloApp;

impl ApplicationHandler for HelloApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.sync_host_bounds(size.width, size.height);
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }
}

impl HelloApp {
    /// Keep the web surface covering the whole window.
    fn sync_host_bounds(&self, width: u32, height: u32) {
        if let Some(ref host) = self.host {
            if let Err(e) = host.set_bounds(fill_window(width, height)) {
                tracing::warn!(error = %e, "Failed to update host view bounds");
            }
        }
    }
}
