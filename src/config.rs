use caltrack_core::Calories;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Source of a configuration value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigSource {
    Default,
    File,
    Environment,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Default => write!(f, "default"),
            ConfigSource::File => write!(f, "file"),
            ConfigSource::Environment => write!(f, "environment"),
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }
}

/// Application configuration with source tracking
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// Directory holding the tracker document
    pub data_dir: ConfigValue<PathBuf>,
    /// Calorie limit used until one is set with `caltrack limit set`
    pub default_limit: ConfigValue<Calories>,
    /// Config file path used (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<PathBuf>,
}

/// Internal struct for deserializing config file
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ConfigFile {
    data_dir: Option<PathBuf>,
    default_limit: Option<f64>,
}

impl Config {
    /// Load configuration with priority: env vars > config file > defaults
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        // Start with defaults
        let mut data_dir = ConfigValue::new(Self::default_data_dir(), ConfigSource::Default);
        let mut default_limit = ConfigValue::new(Calories::DEFAULT_LIMIT, ConfigSource::Default);
        let mut config_file = None;

        // Try to load from config file
        let path = config_path.unwrap_or_else(Self::default_config_path);
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| ConfigError::ReadError(path.clone(), e))?;
            let file_config: ConfigFile = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::ParseError(path.clone(), e))?;

            config_file = Some(path.clone());

            if let Some(dir) = file_config.data_dir {
                // Resolve relative paths against config file's directory
                let resolved = if dir.is_relative() {
                    path.parent().map(|p| p.join(&dir)).unwrap_or(dir)
                } else {
                    dir
                };
                data_dir = ConfigValue::new(resolved, ConfigSource::File);
            }
            if let Some(limit) = file_config.default_limit {
                let limit = Calories::new(limit)
                    .map_err(|e| ConfigError::InvalidValue("default_limit", e.to_string()))?;
                default_limit = ConfigValue::new(limit, ConfigSource::File);
            }
        }

        // Apply environment variable overrides
        if let Ok(dir) = std::env::var("CALTRACK_DATA_DIR") {
            data_dir = ConfigValue::new(PathBuf::from(dir), ConfigSource::Environment);
        }
        if let Ok(limit) = std::env::var("CALTRACK_DEFAULT_LIMIT") {
            let limit: Calories = limit
                .parse()
                .map_err(|e: caltrack_core::TrackerError| {
                    ConfigError::InvalidValue("CALTRACK_DEFAULT_LIMIT", e.to_string())
                })?;
            default_limit = ConfigValue::new(limit, ConfigSource::Environment);
        }

        Ok(Self {
            data_dir,
            default_limit,
            config_file,
        })
    }

    /// Default config directory (platform-specific):
    /// - Linux: ~/.config/caltrack/
    /// - macOS: ~/Library/Application Support/caltrack/
    /// - Windows: %APPDATA%/caltrack/
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("caltrack")
    }

    /// Default data directory (platform-specific):
    /// - Linux: ~/.local/share/caltrack/
    /// - macOS: ~/Library/Application Support/caltrack/
    /// - Windows: %APPDATA%/caltrack/
    pub fn default_data_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("caltrack")
    }

    /// Default config file path (platform-specific config dir + config.yaml)
    pub fn default_config_path() -> PathBuf {
        Self::default_config_dir().join("config.yaml")
    }
}

#[derive(Debug)]
pub enum ConfigError {
    ReadError(PathBuf, std::io::Error),
    ParseError(PathBuf, serde_yaml::Error),
    InvalidValue(&'static str, String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError(path, e) => {
                write!(f, "Failed to read config file '{}': {}", path.display(), e)
            }
            ConfigError::ParseError(path, e) => {
                write!(f, "Failed to parse config file '{}': {}", path.display(), e)
            }
            ConfigError::InvalidValue(name, e) => {
                write!(f, "Invalid value for {}: {}", name, e)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
