//! API server configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

/// API server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Listen address
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Listen port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Maximum texts accepted per batch request
    #[serde(default = "default_max_batch_size")]
    pub max_batch_size: usize,
}

impl ApiConfig {
    /// Load configuration from a YAML file, falling back to defaults when
    /// the file does not exist.
    pub fn load(config_path: &str) -> anyhow::Result<Self> {
        if Path::new(config_path).exists() {
            let content = std::fs::read_to_string(config_path)?;
            Ok(serde_yaml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            port: default_port(),
            max_batch_size: default_max_batch_size(),
        }
    }
}

fn default_listen() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_max_batch_size() -> usize {
    100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = ApiConfig::load("/nonexistent/sentiscope.yaml").unwrap();
        assert_eq!(config.port, 8000);
        assert_eq!(config.max_batch_size, 100);
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let config: ApiConfig = serde_yaml::from_str("port: 9100").unwrap();
        assert_eq!(config.port, 9100);
        assert_eq!(config.listen, "0.0.0.0");
        assert_eq!(config.max_batch_size, 100);
    }
}
