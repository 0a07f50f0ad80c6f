//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the guide
//! server. All types derive Serde traits for deserialization from config
//! files, and every field has a default so an empty file is valid.

use serde::{Deserialize, Serialize};

use crate::routing::{HistoryKind, HistoryMode, MatchOptions};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP listener and page shell settings.
    pub server: ServerConfig,

    /// History mode and matching options.
    pub router: RouterConfig,

    /// Logging and metrics.
    pub observability: ObservabilityConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Request timeout in seconds.
    pub request_timeout_secs: u64,

    /// Serve `GET /healthz`.
    pub health_endpoint: bool,

    /// Document title prefix for every page.
    pub site_title: String,

    /// Client bundle loaded into the page shell, if any.
    pub script_src: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            request_timeout_secs: 30,
            health_endpoint: true,
            site_title: "Huashan Guide".to_string(),
            script_src: None,
        }
    }
}

/// Router configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct RouterConfig {
    /// History strategy ("web", "hash" or "memory").
    pub history: HistoryKind,

    /// Base path the application is mounted under.
    pub base: String,

    /// Compare paths case-sensitively.
    pub case_sensitive: bool,

    /// Reject a trailing slash the route does not declare.
    pub strict: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            history: HistoryKind::Web,
            base: "/".to_string(),
            case_sensitive: false,
            strict: false,
        }
    }
}

impl RouterConfig {
    pub fn history_mode(&self) -> HistoryMode {
        HistoryMode::new(self.history, &self.base)
    }

    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            case_sensitive: self.case_sensitive,
            strict: self.strict,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
