use serde::Deserialize;

use crate::utils::constants::{
    DEFAULT_ELEMENT_ID, DEFAULT_HEADER_SELECTOR, DEFAULT_METRICS_PATH, DEFAULT_POLL_INTERVAL_MS,
    DEFAULT_STATUS_PATH,
};

/// ================================
/// Full service configuration
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    pub settings: SettingsConfig,
}

/// ================================
/// Global service-wide settings
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct SettingsConfig {
    pub poller: PollerConfig,
    #[serde(default)]
    pub page: PageConfig,
    pub metrics: MetricsConfig,
    pub server: ServerConfig,
    pub logging: Option<LoggingConfig>,
}

/// Where and how often the token status endpoint is checked
#[derive(Debug, Deserialize, Clone)]
pub struct PollerConfig {
    /// scheme + authority of the backend, e.g. http://127.0.0.1:5000
    pub base_url: String,
    #[serde(default = "default_status_path")]
    pub path: String,
    /// invariant: > 0
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// None leaves the transport default in place
    pub timeout_ms: Option<u64>,
}

impl PollerConfig {
    pub fn status_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.path)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct PageConfig {
    #[serde(default = "default_header_selector")]
    pub header_selector: String,
    #[serde(default = "default_element_id")]
    pub element_id: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            header_selector: default_header_selector(),
            element_id: default_element_id(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct MetricsConfig {
    #[serde(default = "default_metrics_path")]
    pub path: String,
    #[serde(default)]
    pub is_enabled: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: String
}

/// ================================
/// Logging
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String, // allowed: trace, debug, info, warn, error
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn new (level: String, format: LogFormat) -> Self {
        Self { level, format }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Compact,
}

fn default_status_path() -> String {
    DEFAULT_STATUS_PATH.to_string()
}

fn default_interval_ms() -> u64 {
    DEFAULT_POLL_INTERVAL_MS
}

fn default_header_selector() -> String {
    DEFAULT_HEADER_SELECTOR.to_string()
}

fn default_element_id() -> String {
    DEFAULT_ELEMENT_ID.to_string()
}

fn default_metrics_path() -> String {
    DEFAULT_METRICS_PATH.to_string()
}
