//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub shell: ShellConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How command results are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned text table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue {
                key: "output_format".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Interactive shell configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ShellConfig {
    #[serde(default = "default_prompt")]
    pub prompt: String,

    #[serde(default)]
    pub output_format: OutputFormat,

    #[serde(default = "default_banner")]
    pub banner: bool,
}

fn default_prompt() -> String {
    "uevent> ".to_string()
}

fn default_banner() -> bool {
    true
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            output_format: OutputFormat::default(),
            banner: default_banner(),
        }
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
    "warn".to_string()
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

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("uevent").join("config.toml")),
            Some(PathBuf::from("/etc/uevent/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        // Shell overrides
        if let Ok(prompt) = std::env::var("UEVENT_PROMPT") {
            self.shell.prompt = prompt;
        }
        if let Ok(format) = std::env::var("UEVENT_OUTPUT_FORMAT") {
            match format.parse() {
                Ok(f) => self.shell.output_format = f,
                Err(e) => tracing::warn!("Ignoring UEVENT_OUTPUT_FORMAT: {}", e),
            }
        }

        // Logging overrides
        if let Ok(level) = std::env::var("UEVENT_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("UEVENT_LOG_FORMAT") {
            self.logging.format = format;
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

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# UEvent Organizer Configuration
#
# Environment variables override these settings:
# - UEVENT_PROMPT
# - UEVENT_OUTPUT_FORMAT
# - UEVENT_LOG_LEVEL
# - UEVENT_LOG_FORMAT

[shell]
# Prompt shown before each command
prompt = "uevent> "

# Result format: table or json
output_format = "table"

# Print the banner and command summary on startup
banner = true

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
