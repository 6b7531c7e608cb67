use drillbook_engine::Topic;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Root that topic directories are resolved against.
    pub exercises_path: PathBuf,
    #[serde(default = "Topic::defaults")]
    pub topics: Vec<Topic>,
}

impl Config {
    /// Config for `exercises_path` with the stock topic table.
    pub fn new(exercises_path: PathBuf) -> Self {
        Self {
            exercises_path,
            topics: Topic::defaults(),
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded exercises path
        config.exercises_path =
            Self::expand_path(&config.exercises_path).unwrap_or(config.exercises_path);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/drillbook");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drillbook_engine::ContentKind;
    use pretty_assertions::assert_eq;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/drillbook/config.toml"));
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config::new(PathBuf::from("/tmp/exercises"));

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original.exercises_path, deserialized.exercises_path);
        assert_eq!(original.topics, deserialized.topics);
    }

    #[test]
    fn test_topics_default_when_omitted() {
        let config: Config = toml::from_str(r#"exercises_path = "/srv/exercises""#).unwrap();
        assert_eq!(config.topics, Topic::defaults());
    }

    #[test]
    fn test_custom_topics() {
        let config_content = r#"
exercises_path = "/srv/exercises"

[[topics]]
title = "Window functions"
dir = "sql/windows"
kind = "sql"
challenges_dir = "sql/windows_challenges"

[[topics]]
title = "Polars"
dir = "polars"
kind = "notebook"
"#;

        let config: Config = toml::from_str(config_content).unwrap();

        assert_eq!(config.topics.len(), 2);
        assert_eq!(config.topics[0].kind, ContentKind::Sql);
        assert_eq!(
            config.topics[0].challenges_dir.as_ref().map(|d| d.as_str()),
            Some("sql/windows_challenges")
        );
        assert_eq!(config.topics[1].kind, ContentKind::Notebook);
        assert_eq!(config.topics[1].colab_url, None);
    }

    #[test]
    fn test_unknown_topic_kind_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_file,
            "exercises_path = \"/x\"\n[[topics]]\ntitle = \"R\"\ndir = \"r\"\nkind = \"rmarkdown\"\n",
        )
        .unwrap();

        let result = Config::load_from_path(&config_file);

        assert!(matches!(result, Err(ConfigError::ConfigParseError { .. })));
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/path");
        let expanded = Config::expand_path(&path).unwrap();

        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_expand_path_with_env_var() {
        unsafe {
            env::set_var("DRILLBOOK_TEST_VAR", "/test/env/path");
        }

        let path = PathBuf::from("$DRILLBOOK_TEST_VAR/subdir");
        let expanded = Config::expand_path(&path).unwrap();

        assert_eq!(expanded, PathBuf::from("/test/env/path/subdir"));

        unsafe {
            env::remove_var("DRILLBOOK_TEST_VAR");
        }
    }

    #[test]
    fn test_expand_path_with_absolute_path() {
        let path = PathBuf::from("/absolute/path");
        let expanded = Config::expand_path(&path).unwrap();

        assert_eq!(expanded, path);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_config_with_env_var_in_toml() {
        unsafe {
            env::set_var("DRILLBOOK_ROOT", "/custom/root");
        }

        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_file,
            "exercises_path = \"$DRILLBOOK_ROOT/nfl-ds-challenges\"\n",
        )
        .unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(
            config.exercises_path,
            PathBuf::from("/custom/root/nfl-ds-challenges")
        );

        unsafe {
            env::remove_var("DRILLBOOK_ROOT");
        }
    }
}
