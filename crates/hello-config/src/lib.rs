//! HelloWebView configuration.
//!
//! TOML-based configuration with validation. All sections use defaults so
//! partial configs work out of the box.
//!
//! ```rust,no_run
//! use hello_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{HelloConfig, LogLevel, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use hello_common::ConfigError;

/// Load config from the platform default path and validate it.
///
/// Creates a documented default file if none exists.
pub fn load_config() -> Result<HelloConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path (the `--config` override) and validate it.
pub fn load_config_from(path: &Path) -> Result<HelloConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &HelloConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = HelloConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"window\""));
        assert!(json.contains("\"webview\""));
        assert!(json.contains("\"logging\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = HelloConfig::default();
        let json = config_to_json(&config);
        let parsed: HelloConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.window.title, "HelloWebView");
        assert_eq!(parsed.logging.level, LogLevel::Info);
    }

    #[test]
    fn load_config_from_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[window]\nheight = 1\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn load_config_from_accepts_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[logging]\nlevel = \"warn\"\n").unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.logging.level, LogLevel::Warn);
    }
}
