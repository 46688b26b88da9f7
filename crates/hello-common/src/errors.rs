use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum WebViewError {
    #[error("webview build failed: {0}")]
    Build(String),

    #[error("webview bounds update failed: {0}")]
    Bounds(String),
}

#[derive(Debug, thiserror::Error)]
pub enum HelloError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    WebView(#[from] WebViewError),

    #[error("event loop error: {0}")]
    EventLoop(String),
}
