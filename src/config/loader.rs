//! Configuration loading from disk.

use std::path::Path;
use std::fs;
use thiserror::Error;
use crate::config::schema::ClientConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ClientConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: ClientConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp_config(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_valid_config() {
        let path = write_temp_config(
            "market-client-valid.toml",
            r#"
            [api]
            base_url = "https://market.example.edu/api"

            [probe]
            path = "/health"
            "#,
        );

        let config = load_config(&path).unwrap();
        assert_eq!(config.api.base_url, "https://market.example.edu/api");
        assert_eq!(config.probe.path, "/health");

        fs::remove_file(path).unwrap_or_default();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_config(Path::new("/nonexistent/market-client.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let path = write_temp_config("market-client-broken.toml", "api = not toml {{");
        let result = load_config(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
        fs::remove_file(path).unwrap_or_default();
    }

    #[test]
    fn test_semantic_errors_surface_as_validation() {
        let path = write_temp_config(
            "market-client-semantic.toml",
            r#"
            [timeouts]
            request_secs = 0
            "#,
        );
        match load_config(&path) {
            Err(ConfigError::Validation(errors)) => assert_eq!(errors.len(), 1),
            other => panic!("expected validation error, got {:?}", other.map(|_| ())),
        }
        fs::remove_file(path).unwrap_or_default();
    }
}
