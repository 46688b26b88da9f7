//! Configuration schema types for HelloWebView.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Nothing here can alter the bridge channel name, the trigger token, or
//! the dialog strings; those are fixed in code.

mod logging;
mod webview;
mod window;

pub use logging::*;
pub use webview::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct HelloConfig {
    pub window: WindowConfig,
    pub webview: WebViewSection,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config: HelloConfig = toml::from_str("").unwrap();
        assert_eq!(config.window.title, "HelloWebView");
        assert_eq!(config.window.width, 390);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn sections_can_be_overridden_independently() {
        let config: HelloConfig = toml::from_str(
            r#"
[window]
width = 1024

[logging]
level = "debug"
"#,
        )
        .unwrap();
        assert_eq!(config.window.width, 1024);
        assert_eq!(config.window.height, 844);
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(
            config.webview.user_agent.as_deref(),
            Some("HelloWebView/0.1")
        );
    }

    #[test]
    fn unknown_log_level_is_a_parse_error() {
        let result: Result<HelloConfig, _> = toml::from_str(
            r#"
[logging]
level = "chatty"
"#,
        );
        assert!(result.is_err());
    }
}
