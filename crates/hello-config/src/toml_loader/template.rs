//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# HelloWebView Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "HelloWebView"
# width = 390            # 200-7680
# height = 844           # 200-4320
# resizable = true

[webview]
# devtools = false       # defaults to true in debug builds
# user_agent = "HelloWebView/0.1"
# transparent = false

[logging]
# level = "info"         # trace, debug, info, warn, error
"##
}
