//! Server configuration loaded from `chess-web.toml`.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings for the HTTP server.
///
/// Every field has a default, so an empty or missing file is valid.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind. Defaults to `127.0.0.1`.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind. Defaults to 5000.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Name of the cookie carrying the session id.
    #[serde(default = "default_session_cookie")]
    pub session_cookie: String,
    /// Requests slower than this are logged as warnings.
    #[serde(default = "default_slow_request_ms")]
    pub slow_request_ms: u64,
    /// Sessions unused for this many seconds are dropped. Defaults to 3600.
    #[serde(default = "default_session_ttl_secs")]
    pub session_ttl_secs: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_session_cookie() -> String {
    "chess_session".to_string()
}

fn default_slow_request_ms() -> u64 {
    100
}

fn default_session_ttl_secs() -> u64 {
    3600
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: default_host(),
            port: default_port(),
            session_cookie: default_session_cookie(),
            slow_request_ms: default_slow_request_ms(),
            session_ttl_secs: default_session_ttl_secs(),
        }
    }
}

impl ServerConfig {
    /// Default location of the configuration file.
    pub fn default_path() -> PathBuf {
        PathBuf::from("chess-web.toml")
    }

    /// Loads the configuration from `path`, falling back to defaults when the
    /// file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file exists but cannot be read,
    /// or [`ConfigError::Parse`] if it contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "No config file found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        tracing::info!(path = %path.display(), "Loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_gives_defaults() {
        let config: ServerConfig = toml::from_str("").unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.port, 5000);
        assert_eq!(config.session_cookie, "chess_session");
        assert_eq!(config.session_ttl_secs, 3600);
    }

    #[test]
    fn partial_override() {
        let config: ServerConfig = toml::from_str("port = 8080\nhost = \"0.0.0.0\"").unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.slow_request_ms, 100);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ServerConfig::load(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "session_cookie = \"game\"").unwrap();
        writeln!(file, "slow_request_ms = 250").unwrap();
        writeln!(file, "session_ttl_secs = 60").unwrap();

        let config = ServerConfig::load(file.path()).unwrap();
        assert_eq!(config.session_cookie, "game");
        assert_eq!(config.slow_request_ms, 250);
        assert_eq!(config.session_ttl_secs, 60);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = \"not a number\"").unwrap();

        let err = ServerConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("Failed to parse config"));
    }
}
