use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Configuration consumed by the translation resolver.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Namespace prefix tried when a key is not found directly in the
    /// catalog, e.g. `validation` turns `name` into `validation.name`.
    #[serde(default = "default_translate_from")]
    pub translate_from: String,
}

fn default_translate_from() -> String {
    "validation".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            translate_from: default_translate_from(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_default_namespace() {
        assert_eq!(Config::default().translate_from, "validation");
    }

    #[test]
    fn test_load_from_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "translate_from: forms").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.translate_from, "forms");
    }

    #[test]
    fn test_load_applies_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "{}").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.translate_from, "validation");
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load(Path::new("does_not_exist.yaml"));
        assert!(result.is_err());
    }
}
