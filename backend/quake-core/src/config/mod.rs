use crate::USGS_QUERY_ENDPOINT;
use crate::error::config::ConfigError;
use crate::usgs::query::{DEFAULT_LIMIT, DEFAULT_MIN_MAGNITUDE, OrderBy, QueryParameters};
use crate::usgs::ParsePolicy;

use common::ErrorLocation;

use std::panic::Location;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{info, warn};
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "config.json";
const CONFIG_DIR_NAME: &str = "quakereport";
const CONFIG_VERSION: u32 = 1;

const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 15_000;
const DEFAULT_READ_TIMEOUT_MS: u64 = 10_000;

/// Largest `limit` the USGS event service accepts.
pub const MAX_LIMIT: u32 = 20_000;
const MAX_MAGNITUDE: f64 = 10.0;

// ============================================
// CONFIG STRUCTS
// ============================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UsgsConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_min_magnitude")]
    pub min_magnitude: f64,
    #[serde(default)]
    pub order_by: OrderBy,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl Default for UsgsConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            min_magnitude: default_min_magnitude(),
            order_by: OrderBy::default(),
            limit: default_limit(),
        }
    }
}

impl UsgsConfig {
    pub fn query_parameters(&self) -> QueryParameters {
        QueryParameters {
            min_magnitude: self.min_magnitude,
            order_by: self.order_by,
            limit: self.limit,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HttpConfig {
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    #[serde(default = "default_read_timeout_ms")]
    pub read_timeout_ms: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_ms: default_connect_timeout_ms(),
            read_timeout_ms: default_read_timeout_ms(),
        }
    }
}

impl HttpConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub usgs: UsgsConfig,

    #[serde(default)]
    pub http: HttpConfig,

    #[serde(default)]
    pub parse_policy: ParsePolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            usgs: UsgsConfig::default(),
            http: HttpConfig::default(),
            parse_policy: ParsePolicy::default(),
        }
    }
}

// ============================================
// DEFAULT FUNCTIONS
// ============================================

fn default_version() -> u32 {
    CONFIG_VERSION
}
fn default_endpoint() -> String {
    USGS_QUERY_ENDPOINT.to_string()
}
fn default_min_magnitude() -> f64 {
    DEFAULT_MIN_MAGNITUDE
}
fn default_limit() -> u32 {
    DEFAULT_LIMIT
}
fn default_connect_timeout_ms() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_MS
}
fn default_read_timeout_ms() -> u64 {
    DEFAULT_READ_TIMEOUT_MS
}

/// Location of the config file inside `config_dir`.
pub fn config_path(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_FILE_NAME)
}

/// Platform config directory for the app, e.g. `~/.config/quakereport`.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME))
}

// ============================================
// IMPLEMENTATION
// ============================================

impl AppConfig {
    /// Load config from {config_dir}/config.json.
    ///
    /// # Returns
    ///
    /// Returns `Ok(AppConfig)` if loaded successfully or defaults if file missing.
    /// Returns `Err(ConfigError)` if file exists but is corrupted/invalid.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_path(config_dir);

        if !config_path.exists() {
            info!(
                "Config file not found at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path).map_err(|e| {
            warn!("Failed to read config file: {}", e);
            ConfigError::ReadError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.clone(),
                source: e,
            }
        })?;

        let config: AppConfig = serde_json::from_str(&contents).map_err(|e| {
            warn!("Failed to parse config JSON: {}", e);
            ConfigError::ParseError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.clone(),
                reason: e.to_string(),
            }
        })?;

        config.validate()?;

        info!("Config loaded from {}", config_path.display());
        Ok(config)
    }

    /// Save config to {config_dir}/config.json using atomic write.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if validation, directory creation,
    /// serialization, the write or the final rename fails.
    pub fn save(&self, config_dir: &Path) -> Result<PathBuf, ConfigError> {
        self.validate()?;

        std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: config_dir.to_path_buf(),
            source: e,
        })?;

        let config_path = config_path(config_dir);
        let temp_path = config_dir.join(format!("{}.tmp", CONFIG_FILE_NAME));

        let json = serde_json::to_string_pretty(self).map_err(|e| ConfigError::SerializeError {
            location: ErrorLocation::from(Location::caller()),
            reason: e.to_string(),
        })?;

        std::fs::write(&temp_path, json).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: temp_path.clone(),
            source: e,
        })?;

        std::fs::rename(&temp_path, &config_path).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: config_path.clone(),
            source: e,
        })?;

        info!("Config saved to {}", config_path.display());
        Ok(config_path)
    }

    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version == 0 || self.version > CONFIG_VERSION {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Invalid version: {} (expected 1-{})",
                    self.version, CONFIG_VERSION
                ),
            });
        }

        let endpoint = &self.usgs.endpoint;
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!("Invalid endpoint URL format: {endpoint}"),
            });
        }

        let magnitude = self.usgs.min_magnitude;
        if !(0.0..=MAX_MAGNITUDE).contains(&magnitude) {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!("Invalid min_magnitude: {magnitude} (must be 0.0-{MAX_MAGNITUDE})"),
            });
        }

        if self.usgs.limit == 0 || self.usgs.limit > MAX_LIMIT {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!("Invalid limit: {} (must be 1-{MAX_LIMIT})", self.usgs.limit),
            });
        }

        if self.http.connect_timeout_ms == 0 || self.http.read_timeout_ms == 0 {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: String::from("HTTP timeouts must be non-zero"),
            });
        }

        Ok(())
    }
}
