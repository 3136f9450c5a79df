//! Configuration loading and management.

use crate::cli::Args;
use miette::{IntoDiagnostic, Result};
use serde::{Deserialize, Serialize};
use sfc_templates::{DEFAULT_TEMPLATE_IDS, DEFAULT_TEMPLATE_NAME};
use std::path::{Path, PathBuf};

/// Name of the project configuration file.
pub const CONFIG_FILE_NAME: &str = "sfc-studio.json";

/// An error reading the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Contents of `sfc-studio.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileConfig {
    /// Template store location.
    #[serde(default)]
    pub template_store: Option<String>,
    /// Identifiers of the templates the store holds.
    #[serde(default)]
    pub templates: Option<Vec<String>>,
    /// Name of the default template.
    #[serde(default)]
    pub default_template: Option<String>,
}

impl FileConfig {
    /// Load a configuration file.
    pub fn load(path: &Path) -> std::result::Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Find `sfc-studio.json` in a directory or its parents, then in the
    /// user configuration directory.
    pub fn find(dir: &Path) -> Option<PathBuf> {
        let mut current = Some(dir);
        while let Some(path) = current {
            let candidate = path.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                return Some(candidate);
            }
            current = path.parent();
        }

        dirs::config_dir()
            .map(|dir| dir.join("sfc-studio").join(CONFIG_FILE_NAME))
            .filter(|path| path.is_file())
    }
}

/// Resolved configuration for sfc-studio.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the configuration came from, if a file was used.
    pub source: Option<PathBuf>,
    /// Template store location.
    pub template_store: Option<String>,
    /// Identifiers of the templates the store holds.
    pub template_ids: Vec<String>,
    /// Name of the default template.
    pub default_template: String,
}

impl Config {
    /// Load configuration from CLI arguments and the working directory.
    pub fn load(cwd: &Path, args: &Args) -> Result<Self> {
        let source = args.config.clone().or_else(|| FileConfig::find(cwd));

        let file = match &source {
            Some(path) => FileConfig::load(path).into_diagnostic()?,
            None => FileConfig::default(),
        };

        Ok(Self::merge(source, file, args))
    }

    fn merge(source: Option<PathBuf>, file: FileConfig, args: &Args) -> Self {
        Self {
            source,
            template_store: args.store.clone().or(file.template_store),
            template_ids: file.templates.unwrap_or_else(|| {
                DEFAULT_TEMPLATE_IDS.iter().map(|s| s.to_string()).collect()
            }),
            default_template: file
                .default_template
                .unwrap_or_else(|| DEFAULT_TEMPLATE_NAME.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["sfc-studio"];
        argv.extend_from_slice(extra);
        argv.extend_from_slice(&["templates", "list"]);
        Args::parse_from(argv)
    }

    #[test]
    fn test_find_in_parent_directory() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("src").join("components");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.path().join(CONFIG_FILE_NAME), "{}").unwrap();

        assert_eq!(
            FileConfig::find(&nested),
            Some(root.path().join(CONFIG_FILE_NAME))
        );
    }

    #[test]
    fn test_load_file_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            r#"{ "templateStore": "./templates", "templates": ["basic"], "defaultTemplate": "Basic" }"#,
        )
        .unwrap();

        let config = Config::load(dir.path(), &args(&[])).unwrap();
        assert_eq!(config.source, Some(path));
        assert_eq!(config.template_store.as_deref(), Some("./templates"));
        assert_eq!(config.template_ids, vec!["basic".to_string()]);
        assert_eq!(config.default_template, "Basic");
    }

    #[test]
    fn test_flags_override_file() {
        let file = FileConfig {
            template_store: Some("./templates".to_string()),
            ..Default::default()
        };
        let config = Config::merge(None, file, &args(&["--store", "https://cdn.example.com"]));
        assert_eq!(config.template_store.as_deref(), Some("https://cdn.example.com"));
        assert_eq!(config.template_ids, vec!["basic", "card", "form"]);
        assert_eq!(config.default_template, DEFAULT_TEMPLATE_NAME);
    }

    #[test]
    fn test_invalid_config_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "{ not json").unwrap();
        let err = FileConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
