//! Configuration structures for the analyzer.

use serde::{Deserialize, Serialize};

/// Main configuration for the fiscan tools.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FiscanConfig {
    /// Classification lookup settings.
    pub lookup: LookupConfig,
}

/// Classification lookup service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Base URL of the NCM/CEST registry endpoint; the NCM code is appended
    /// as a path segment.
    pub base_url: String,

    /// Request timeout in seconds. No retries are attempted.
    pub timeout_secs: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.sefaz.gov.br/ncm-cest".to_string(),
            timeout_secs: 10,
        }
    }
}

impl FiscanConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = FiscanConfig::default();
        assert_eq!(config.lookup.timeout_secs, 10);
        assert!(config.lookup.base_url.starts_with("https://"));
    }

    #[test]
    fn test_roundtrip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = FiscanConfig::default();
        config.lookup.base_url = "http://localhost:8080/ncm-cest".to_string();
        config.lookup.timeout_secs = 3;
        config.save(&path).unwrap();

        let loaded = FiscanConfig::from_file(&path).unwrap();
        assert_eq!(loaded.lookup.base_url, "http://localhost:8080/ncm-cest");
        assert_eq!(loaded.lookup.timeout_secs, 3);
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"lookup": {"timeout_secs": 5}}"#).unwrap();

        let loaded = FiscanConfig::from_file(&path).unwrap();
        assert_eq!(loaded.lookup.timeout_secs, 5);
        assert_eq!(loaded.lookup.base_url, LookupConfig::default().base_url);
    }
}
