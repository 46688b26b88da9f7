//! Embedded web view settings.

use serde::{Deserialize, Serialize};

/// Options forwarded to the web view builder.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebViewSection {
    /// Enable the web inspector. Defaults to on in debug builds.
    pub devtools: bool,
    /// Custom user agent string. `None` keeps the platform default.
    pub user_agent: Option<String>,
    /// Whether the web view background should be transparent.
    pub transparent: bool,
}

impl Default for WebViewSection {
    fn default() -> Self {
        Self {
            devtools: cfg!(debug_assertions),
            user_agent: Some("HelloWebView/0.1".to_string()),
            transparent: false,
        }
    }
}
