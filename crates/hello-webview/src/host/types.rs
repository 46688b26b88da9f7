/// Configuration for creating the host view's web surface.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Document rendered once at creation. No base URL is set.
    pub html: String,
    /// Whether the WebView background should be transparent.
    pub transparent: bool,
    /// Whether to enable dev tools (on by default in debug builds).
    pub devtools: bool,
    /// Custom user agent string.
    pub user_agent: Option<String>,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            html: crate::content::CONTENT_PAYLOAD.to_string(),
            transparent: false,
            devtools: cfg!(debug_assertions),
            user_agent: Some("HelloWebView/0.1".to_string()),
        }
    }
}
