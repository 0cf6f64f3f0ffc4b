//! Configuration module
//!
//! Everything is read from a single TOML file. Each section falls back to
//! its defaults when omitted, so an empty file is a valid configuration.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::shared::types::{ConfigError, ConfigResult};

/// Pagination policy applied to every paged request.
///
/// Passed explicitly to the constructors instead of living in globals, so
/// several routers in one process can use different limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "validate_limit_bounds"))]
pub struct PaginationConfig {
    /// Query key holding the page number
    #[validate(length(min = 1))]
    pub page_param: String,
    /// Query key holding the page size
    #[validate(length(min = 1))]
    pub limit_param: String,
    /// Upper bound for the page size; larger requests are capped
    #[validate(range(min = 1))]
    pub max_limit: i64,
    /// Page used when the request carries no usable page number
    #[validate(range(min = 1))]
    pub default_page: i64,
    /// Page size used when the request carries no usable limit
    #[validate(range(min = 1))]
    pub default_limit: i64,
}

pub const DEFAULT_PAGE_PARAM: &str = "page";
pub const DEFAULT_LIMIT_PARAM: &str = "limit";
pub const DEFAULT_MAX_LIMIT: i64 = 1000;
pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 20;

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_param: DEFAULT_PAGE_PARAM.to_string(),
            limit_param: DEFAULT_LIMIT_PARAM.to_string(),
            max_limit: DEFAULT_MAX_LIMIT,
            default_page: DEFAULT_PAGE,
            default_limit: DEFAULT_LIMIT,
        }
    }
}

impl PaginationConfig {
    /// Same policy, different query keys.
    pub fn with_params(mut self, page_param: impl Into<String>, limit_param: impl Into<String>) -> Self {
        self.page_param = page_param.into();
        self.limit_param = limit_param.into();
        self
    }

    pub fn with_max_limit(mut self, max_limit: i64) -> Self {
        self.max_limit = max_limit;
        self
    }
}

fn validate_limit_bounds(cfg: &PaginationConfig) -> Result<(), ValidationError> {
    if cfg.default_limit > cfg.max_limit {
        let mut err = ValidationError::new("default_limit_exceeds_max");
        err.message = Some(Cow::Borrowed("default_limit must not exceed max_limit"));
        return Err(err);
    }
    Ok(())
}

/// `[server]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub host: String,
    pub port: u16,
    /// Size of the generated catalog served by the demo endpoint
    pub demo_items: usize,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            demo_items: 250,
        }
    }
}

impl ServerSection {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// `[logging]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Default filter when `RUST_LOG` is not set
    pub level: String,
    /// `text` or `json`
    pub format: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerSection,
    pub logging: LoggingSection,
    #[validate(nested)]
    pub pagination: PaginationConfig,
}

impl AppConfig {
    /// Load and validate the configuration file at `path`.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> ConfigResult<Self> {
        let config: AppConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }
}

/// `~/.config/page-params/config.toml`, or `./config.toml` when the platform
/// has no config directory.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .map(|dir| dir.join("page-params").join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("config.toml"))
}
