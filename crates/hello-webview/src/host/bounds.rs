//! Placement of the web surface inside the native window.

// =============================================================================
// COORDINATE CONVERSION
// =============================================================================

/// Bounds covering the whole window, ignoring safe-area insets.
///
/// `width` and `height` are the window's inner size in physical pixels.
pub fn fill_window(width: u32, height: u32) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Physical(wry::dpi::PhysicalPosition::new(0, 0)),
        size: wry::dpi::Size::Physical(wry::dpi::PhysicalSize::new(width, height)),
    }
}

// =============================================================================
// TESTS
// =============================================================================
