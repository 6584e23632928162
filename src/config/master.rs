use std::path::PathBuf;

use serde::Deserialize;

use crate::SavedFile;

pub const DEFAULT_PORT: u16 = 8899;
pub const DEFAULT_TARGET: &str = "/usr/share/nginx/html/data/config.json";

/// Optional on-disk server config. Missing fields take their defaults.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct MasterConfig {
    pub host: String,
    pub port: u16,
    pub target: PathBuf,
    pub reverse_proxy: bool,
    /// Unlimited when absent.
    pub max_body_bytes: Option<usize>,
}

impl Default for MasterConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            target: PathBuf::from(DEFAULT_TARGET),
            reverse_proxy: false,
            max_body_bytes: None,
        }
    }
}

impl SavedFile for MasterConfig {
    const PATH: &'static str = ".config/config-saver/master.json";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config: MasterConfig =
            serde_json::from_str(r#"{"port": 9000, "reverseProxy": true}"#).unwrap();

        assert_eq!(config.port, 9000);
        assert!(config.reverse_proxy);
        assert_eq!(config.target, PathBuf::from(DEFAULT_TARGET));
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.max_body_bytes, None);
    }

    #[tokio::test]
    async fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = MasterConfig::load_from(dir.path().join("master.json"))
            .await
            .unwrap();

        assert_eq!(config, MasterConfig::default());
    }

    #[tokio::test]
    async fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("master.json");
        std::fs::write(&path, "{port: nope").unwrap();

        let err = MasterConfig::load_from(path).await.unwrap_err();
        assert!(matches!(err, crate::ConfigError::Malformed { .. }));
    }
}
