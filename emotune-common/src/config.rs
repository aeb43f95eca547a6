//! Configuration loading and data directory resolution

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default HTTP port for the EmoTune API
pub const DEFAULT_PORT: u16 = 8000;

/// Optional settings read from the TOML config file
///
/// All keys are optional; anything absent falls back to the next
/// resolution tier.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    /// Data directory holding emotune.db
    pub data_dir: Option<String>,
    /// HTTP listen port
    pub port: Option<u16>,
    /// Facial-emotion inference endpoint URL
    pub vision_endpoint: Option<String>,
    /// API token for the inference endpoint
    pub vision_token: Option<String>,
}

impl TomlConfig {
    /// Parse config file contents
    pub fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| Error::Config(format!("Invalid config file: {}", e)))
    }

    /// Load the platform config file, or defaults when none exists
    ///
    /// Looks for `config.toml` under the user config directory
    /// (e.g. `~/.config/emotune/` on Linux). A missing file is not an
    /// error; a present-but-unparseable file is.
    pub fn load() -> Result<Self> {
        let Some(path) = config_file_path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(&path)?;
        Self::parse(&contents)
    }
}

/// Platform config file location
fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("emotune").join("config.toml"))
}

/// Resolve the data directory in priority order:
/// 1. Command-line argument
/// 2. `EMOTUNE_DATA` environment variable
/// 3. `data_dir` key in the TOML config file
/// 4. OS-dependent default (e.g. `~/.local/share/emotune` on Linux)
pub fn resolve_data_dir(cli_arg: Option<&str>, toml_config: &TomlConfig) -> PathBuf {
    if let Some(path) = cli_arg {
        return PathBuf::from(path);
    }

    if let Ok(path) = std::env::var("EMOTUNE_DATA") {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }

    if let Some(path) = &toml_config.data_dir {
        return PathBuf::from(path);
    }

    default_data_dir()
}

/// Resolve the HTTP port: CLI argument, then config file, then default
pub fn resolve_port(cli_arg: Option<u16>, toml_config: &TomlConfig) -> u16 {
    cli_arg.or(toml_config.port).unwrap_or(DEFAULT_PORT)
}

/// OS-dependent default data directory
fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("emotune"))
        .unwrap_or_else(|| PathBuf::from("./emotune_data"))
}

/// Database file location inside the data directory
pub fn database_path(data_dir: &Path) -> PathBuf {
    data_dir.join("emotune.db")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = TomlConfig::parse(
            r#"
            data_dir = "/tmp/emotune"
            port = 9000
            vision_endpoint = "https://inference.example/models/face"
            vision_token = "secret"
            "#,
        )
        .unwrap();

        assert_eq!(config.data_dir.as_deref(), Some("/tmp/emotune"));
        assert_eq!(config.port, Some(9000));
        assert!(config.vision_endpoint.is_some());
    }

    #[test]
    fn test_parse_empty_config() {
        let config = TomlConfig::parse("").unwrap();
        assert!(config.data_dir.is_none());
        assert!(config.port.is_none());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(TomlConfig::parse("port = \"not a number").is_err());
    }

    #[test]
    fn test_cli_argument_wins() {
        let toml_config = TomlConfig {
            data_dir: Some("/from/toml".to_string()),
            ..Default::default()
        };
        let resolved = resolve_data_dir(Some("/from/cli"), &toml_config);
        assert_eq!(resolved, PathBuf::from("/from/cli"));
    }

    #[test]
    fn test_port_resolution_order() {
        let toml_config = TomlConfig {
            port: Some(9000),
            ..Default::default()
        };
        assert_eq!(resolve_port(Some(9100), &toml_config), 9100);
        assert_eq!(resolve_port(None, &toml_config), 9000);
        assert_eq!(resolve_port(None, &TomlConfig::default()), DEFAULT_PORT);
    }

    #[test]
    fn test_database_path_is_inside_data_dir() {
        let path = database_path(Path::new("/var/lib/emotune"));
        assert_eq!(path, PathBuf::from("/var/lib/emotune/emotune.db"));
    }
}
