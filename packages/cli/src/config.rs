use anyhow::Context;
use screencraft_editor::{SessionConfig, DEFAULT_MAX_LEVELS};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "screencraft.config.json";

/// Screencraft configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Maximum undo depth for editing sessions
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Document edited by default
    #[serde(default = "default_schema_file")]
    pub schema_file: String,

    /// Fixed seed for generated component ids
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_seed: Option<String>,
}

fn default_history_limit() -> usize {
    DEFAULT_MAX_LEVELS
}

fn default_schema_file() -> String {
    "app.json".to_string()
}

impl Config {
    /// Load config from a directory, falling back to defaults
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file {}", config_path.display()))?;
        Ok(config)
    }

    pub fn get_schema_path(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.schema_file)
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            history_limit: self.history_limit,
            id_seed: self.id_seed.clone(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
            schema_file: default_schema_file(),
            id_seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "historyLimit": 10,
            "schemaFile": "shop.json",
            "idSeed": "demo"
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.history_limit, 10);
        assert_eq!(config.schema_file, "shop.json");
        assert_eq!(config.id_seed.as_deref(), Some("demo"));

        let session = config.session_config();
        assert_eq!(session.history_limit, 10);
        assert_eq!(session.id_seed.as_deref(), Some("demo"));
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.history_limit, 50);
        assert_eq!(config.schema_file, "app.json");
        assert!(config.id_seed.is_none());

        let partial: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(partial, config);
    }

    #[test]
    fn test_load_missing_and_present() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().to_str().unwrap();

        assert_eq!(Config::load(cwd).unwrap(), Config::default());

        std::fs::write(
            dir.path().join(DEFAULT_CONFIG_NAME),
            r#"{ "historyLimit": 5 }"#,
        )
        .unwrap();
        let config = Config::load(cwd).unwrap();
        assert_eq!(config.history_limit, 5);
        assert_eq!(config.get_schema_path(cwd), dir.path().join("app.json"));
    }

    #[test]
    fn test_load_rejects_malformed_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DEFAULT_CONFIG_NAME), "{ nope").unwrap();

        assert!(Config::load(dir.path().to_str().unwrap()).is_err());
    }
}
