//! Configuration validation.
//!
//! Checks numeric ranges and required strings, collecting every problem
//! into a single `ConfigError`.

mod helpers;


use crate::schema::HelloConfig;
use hello_common::ConfigError;

use helpers::validate_range;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &HelloConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_window(&mut errors, config);
    validate_webview(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_window(errors: &mut Vec<String>, config: &HelloConfig) {
    validate_range(errors, "window.width", config.window.width, 200, 7680);
    validate_range(errors, "window.height", config.window.height, 200, 4320);
    if config.window.title.trim().is_empty() {
        errors.push("window.title must not be empty".into());
    }
}

fn validate_webview(errors: &mut Vec<String>, config: &HelloConfig) {
    if let Some(ua) = &config.webview.user_agent {
        if ua.trim().is_empty() {
            errors.push("webview.user_agent must not be empty when set".into());
        }
    }
}
