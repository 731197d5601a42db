use serde::{Deserialize, Serialize};
use std::path::Path;

/// Production RugCalculation endpoint
pub const DEFAULT_ENDPOINT: &str = "https://pmapapi.prestigemills.com/ViewItem/RugCalculation";

/// Binding method used when `get_price` has to populate an absent entry
pub const DEFAULT_BINDING_METHOD: &str = "Serging";

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ClientConfig {
    /// Pricing endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Per-request timeout
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_binding_method")]
    pub default_binding_method: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// "text" or "json"
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_binding_method() -> String {
    DEFAULT_BINDING_METHOD.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_seconds: default_timeout_seconds(),
            default_binding_method: default_binding_method(),
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

/// Load configuration from an optional TOML file, then `RUG_PRICING__*`
/// environment variables.
///
/// A missing file is not an error; every field has a default.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<ClientConfig> {
    let mut builder = config::Config::builder();

    if let Some(path) = path {
        builder = builder.add_source(config::File::from(path).required(false));
    }

    let config = builder
        .add_source(
            config::Environment::with_prefix("RUG_PRICING")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let cfg: ClientConfig = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn validate_config(cfg: &ClientConfig) -> anyhow::Result<()> {
    if cfg.endpoint.trim().is_empty() {
        anyhow::bail!("Pricing endpoint cannot be empty");
    }

    if !cfg.endpoint.starts_with("http://") && !cfg.endpoint.starts_with("https://") {
        anyhow::bail!("Pricing endpoint must be an http(s) URL: {}", cfg.endpoint);
    }

    if cfg.timeout_seconds == 0 {
        anyhow::bail!("timeout_seconds must be greater than zero");
    }

    if cfg.default_binding_method.trim().is_empty() {
        anyhow::bail!("default_binding_method cannot be empty");
    }

    match cfg.log_format.as_str() {
        "text" | "json" => {}
        other => anyhow::bail!("Invalid log_format '{}', expected 'text' or 'json'", other),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let cfg = ClientConfig::default();
        assert_eq!(cfg.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(cfg.default_binding_method, "Serging");
        assert!(validate_config(&cfg).is_ok());
    }

    #[test]
    fn test_validate_config_rejects_empty_endpoint() {
        let mut cfg = ClientConfig::default();
        cfg.endpoint = "  ".to_string();

        let result = validate_config(&cfg);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_validate_config_rejects_non_http_endpoint() {
        let mut cfg = ClientConfig::default();
        cfg.endpoint = "ftp://example.com/prices".to_string();
        assert!(validate_config(&cfg).is_err());
    }

    #[test]
    fn test_validate_config_rejects_zero_timeout() {
        let mut cfg = ClientConfig::default();
        cfg.timeout_seconds = 0;

        let result = validate_config(&cfg);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("timeout_seconds"));
    }

    #[test]
    fn test_validate_config_rejects_unknown_log_format() {
        let mut cfg = ClientConfig::default();
        cfg.log_format = "yaml".to_string();
        assert!(validate_config(&cfg).is_err());
    }

    #[test]
    fn test_load_config_from_file_keeps_defaults_for_missing_fields() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "endpoint = \"http://localhost:9999/RugCalculation\"").unwrap();
        writeln!(file, "timeout_seconds = 5").unwrap();

        let cfg = load_config(Some(file.path())).unwrap();
        assert_eq!(cfg.endpoint, "http://localhost:9999/RugCalculation");
        assert_eq!(cfg.timeout_seconds, 5);
        assert_eq!(cfg.default_binding_method, DEFAULT_BINDING_METHOD);
        assert_eq!(cfg.log_format, "text");
    }

    #[test]
    fn test_load_config_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let cfg = load_config(Some(&path)).unwrap();
        assert_eq!(cfg, ClientConfig::default());
    }
}
