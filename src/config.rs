//! Configuration loading and validation.
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! environment variables (`TRADEBOARD_SERVER_URL`, `TRADEBOARD_SIGNUP_URL`,
//! `TRADEBOARD_SESSION_PATH`), then command-line overrides.
//!
//! ```toml
//! server_url = "https://orders.example.com"
//! signup_url = "http://localhost:3000"
//!
//! [http]
//! timeout_secs = 30
//! max_retries = 2
//!
//! [logging]
//! level = "info"
//! format = "pretty"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::ConfigError;
use crate::network::{DEFAULT_SERVER_URL, DEFAULT_SIGNUP_URL};

pub const ENV_SERVER_URL: &str = "TRADEBOARD_SERVER_URL";
pub const ENV_SIGNUP_URL: &str = "TRADEBOARD_SIGNUP_URL";
pub const ENV_SESSION_PATH: &str = "TRADEBOARD_SESSION_PATH";

const APP_DIR: &str = "tradeboard";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL for every call except signup.
    pub server_url: String,
    /// Base URL for signup only.
    pub signup_url: String,
    /// Where the session token is kept. Defaults under the user config dir.
    pub session_path: Option<PathBuf>,
    pub http: HttpConfig,
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            signup_url: DEFAULT_SIGNUP_URL.to_string(),
            session_path: None,
            http: HttpConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub timeout_secs: u64,
    /// Retries for the order list. The token check and writes never retry.
    pub max_retries: u32,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            max_retries: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`.
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: "pretty".into(),
        }
    }
}

impl LoggingConfig {
    /// Install the global tracing subscriber. `RUST_LOG` wins over `level`.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
            _ => {
                fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }
    }
}

/// Values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub server_url: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    pub fn parse_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load from `path`, or from the default location when it exists, then
    /// apply the environment and validate.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => Some(path.to_path_buf()),
            None => default_config_path().filter(|p| p.is_file()),
        };

        let mut config = match path {
            Some(path) => {
                let content =
                    std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
                        path: path.display().to_string(),
                        source,
                    })?;
                tracing::debug!(path = %path.display(), "Loaded config file");
                Self::parse_toml(&content)?
            }
            None => Self::default(),
        };

        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Overlay environment values. Unset or blank variables are ignored.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = get(ENV_SERVER_URL) {
            self.server_url = url;
        }
        if let Some(url) = get(ENV_SIGNUP_URL) {
            self.signup_url = url;
        }
        if let Some(path) = get(ENV_SESSION_PATH) {
            self.session_path = Some(PathBuf::from(path));
        }
    }

    pub fn apply_overrides(&mut self, overrides: Overrides) -> Result<(), ConfigError> {
        if let Some(url) = overrides.server_url {
            self.server_url = url;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        self.validate()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server_url.trim().is_empty() {
            return Err(ConfigError::Empty("server_url"));
        }
        if self.signup_url.trim().is_empty() {
            return Err(ConfigError::Empty("signup_url"));
        }
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Empty("logging.level"));
        }
        Ok(())
    }

    /// Session file location: the configured path, else
    /// `<config dir>/tradeboard/session.json`.
    pub fn session_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.session_path {
            Some(path) => Ok(path.clone()),
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR).join("session.json"))
                .ok_or(ConfigError::NoConfigDir),
        }
    }

    pub fn init_logging(&self) {
        self.logging.init();
    }
}

/// `<config dir>/tradeboard/config.toml`, when the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
}
