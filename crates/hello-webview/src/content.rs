//! The page rendered inside the host view.
//!
//! Loaded once from an inline string with no base URL, so every asset it
//! references must be absolute. The stylesheets and script it pulls from the
//! CDN are decorative; the bridge works without them.

/// Bundled HTML document.
pub const CONTENT_PAYLOAD: &str = include_str!("content/index.html");
