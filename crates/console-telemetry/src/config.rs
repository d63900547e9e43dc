//! Telemetry configuration from environment variables.

use std::env;

/// Configuration for console logging.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name stamped on every log line
    pub service_name: String,

    /// Subsystem identifier (01-04)
    pub subsystem_id: String,

    /// Log level filter (trace, debug, info, warn, error)
    pub log_level: String,

    /// Whether to emit JSON formatted logs
    pub json_logs: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "mercato-console".to_string(),
            subsystem_id: "00".to_string(),
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `MC_SERVICE_NAME`: Service name (default: mercato-console)
    /// - `MC_SUBSYSTEM_ID`: Subsystem ID (default: 00)
    /// - `MC_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `MC_JSON_LOGS`: Enable JSON logs (default: false in dev, true in containers)
    pub fn from_env() -> Self {
        let is_container =
            env::var("KUBERNETES_SERVICE_HOST").is_ok() || env::var("DOCKER_CONTAINER").is_ok();

        Self {
            service_name: env::var("MC_SERVICE_NAME")
                .unwrap_or_else(|_| "mercato-console".to_string()),

            subsystem_id: env::var("MC_SUBSYSTEM_ID").unwrap_or_else(|_| "00".to_string()),

            log_level: env::var("MC_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string()),

            json_logs: env::var("MC_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(is_container),
        }
    }

    /// Create configuration for a specific subsystem.
    pub fn for_subsystem(subsystem_id: &str, subsystem_name: &str) -> Self {
        let mut config = Self::from_env();
        config.subsystem_id = subsystem_id.to_string();
        config.service_name = format!("mc-{subsystem_id}-{subsystem_name}");
        config
    }

    /// Get the full service name including subsystem.
    pub fn full_service_name(&self) -> String {
        if self.subsystem_id == "00" {
            self.service_name.clone()
        } else {
            format!("{}-{}", self.service_name, self.subsystem_id)
        }
    }
}
