//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Size and chrome of the native window hosting the web view.
///
/// Defaults approximate a phone-sized portrait window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Static window title.
    pub title: String,
    /// Initial inner width in logical pixels (valid range: 200-7680).
    pub width: u32,
    /// Initial inner height in logical pixels (valid range: 200-4320).
    pub height: u32,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "HelloWebView".into(),
            width: 390,
            height: 844,
            resizable: true,
        }
    }
}
