//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Input dataset configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_path")]
    pub path: PathBuf,

    /// Re-read the CSV on every page view instead of once at startup
    #[serde(default)]
    pub reload_per_request: bool,
}

fn default_data_path() -> PathBuf {
    PathBuf::from("data.csv")
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: default_data_path(),
            reload_per_request: false,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_chart_width")]
    pub chart_width: u32,

    #[serde(default = "default_chart_height")]
    pub chart_height: u32,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8501
}

fn default_chart_width() -> u32 {
    640
}

fn default_chart_height() -> u32 {
    400
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            chart_width: default_chart_width(),
            chart_height: default_chart_height(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::from("<inline>"),
            error: e.to_string(),
        })
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides().log();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides().log();
        Ok(config)
    }

    /// Load from an explicit path, else default locations, else environment
    ///
    /// An explicit path that fails to load is an error; a default location
    /// that fails is skipped and reported in [`Resolved::warnings`]. Nothing
    /// is logged here, so this can run before tracing is initialized.
    pub fn resolve(explicit: Option<&Path>) -> Result<Resolved, ConfigError> {
        match explicit {
            Some(path) => {
                let config = Self::load(path)?;
                Ok(Resolved::new(config, Some(path.to_path_buf()), Vec::new()))
            }
            None => Ok(Self::search(&default_locations())),
        }
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let resolved = Self::search(&default_locations());
        resolved.log();
        resolved.config
    }

    /// First candidate that loads wins; broken candidates become warnings
    fn search(candidates: &[PathBuf]) -> Resolved {
        let mut warnings = Vec::new();

        for path in candidates.iter().filter(|p| p.exists()) {
            match Self::load(path) {
                Ok(config) => return Resolved::new(config, Some(path.clone()), warnings),
                Err(e) => warnings.push(format!("Skipping config {:?}: {}", path, e)),
            }
        }

        Resolved::new(Config::default(), None, warnings)
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) -> EnvWarnings {
        let mut warnings = Vec::new();

        if let Ok(path) = std::env::var("ENERGY_VIZ_DATA") {
            self.data.path = PathBuf::from(path);
        }

        if let Ok(host) = std::env::var("ENERGY_VIZ_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("ENERGY_VIZ_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => warnings.push(format!("Ignoring invalid ENERGY_VIZ_PORT {:?}", port)),
            }
        }

        if let Ok(level) = std::env::var("ENERGY_VIZ_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("ENERGY_VIZ_LOG_FORMAT") {
            self.logging.format = format;
        }

        EnvWarnings(warnings)
    }
}

fn default_locations() -> Vec<PathBuf> {
    [
        dirs::config_dir().map(|p| p.join("energy-viz").join("config.toml")),
        Some(PathBuf::from("./energy-viz.toml")),
    ]
    .into_iter()
    .flatten()
    .collect()
}

struct EnvWarnings(Vec<String>);

impl EnvWarnings {
    fn log(self) {
        for warning in self.0 {
            tracing::warn!("{}", warning);
        }
    }
}

/// Result of [`Config::resolve`]
///
/// Holds the diagnostics gathered while resolving so the caller can log them
/// once its subscriber is installed.
#[derive(Debug)]
pub struct Resolved {
    pub config: Config,
    /// File the config came from, `None` for defaults plus environment
    pub source: Option<PathBuf>,
    pub warnings: Vec<String>,
}

impl Resolved {
    fn new(mut config: Config, source: Option<PathBuf>, mut warnings: Vec<String>) -> Self {
        warnings.extend(config.apply_env_overrides().0);
        Self {
            config,
            source,
            warnings,
        }
    }

    /// Emit the collected diagnostics
    pub fn log(&self) {
        for warning in &self.warnings {
            tracing::warn!("{}", warning);
        }
        match &self.source {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::debug!("Using default config with environment overrides"),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# energy-viz Configuration
#
# Environment variables override these settings:
# - ENERGY_VIZ_DATA
# - ENERGY_VIZ_HOST
# - ENERGY_VIZ_PORT
# - ENERGY_VIZ_LOG_LEVEL
# - ENERGY_VIZ_LOG_FORMAT

[data]
# CSV with columns: year, DataCenter_Electricity_Twh, Ai_Compute_Index
path = "data.csv"

# Re-read the CSV on every page view
reload_per_request = false

[server]
# Host to bind to
host = "127.0.0.1"

# Port to listen on
port = 8501

# Chart canvas size in pixels
chart_width = 640
chart_height = 400

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
