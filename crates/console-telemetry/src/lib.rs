//! # Console Telemetry
//!
//! Structured logging for the Mercato console services.
//!
//! Every subsystem initializes the same `tracing` pipeline: an env-filter
//! built from configuration, a plain or JSON fmt layer, and a guard held
//! for the lifetime of the process.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use console_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     let config = TelemetryConfig::from_env();
//!     let _guard = init_telemetry(&config).expect("telemetry init");
//!
//!     // Application code here; tracing is live.
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `MC_SERVICE_NAME` | `mercato-console` | Service name on log lines |
//! | `MC_SUBSYSTEM_ID` | `00` | Subsystem identifier |
//! | `MC_LOG_LEVEL` | `info` | Log level filter |
//! | `MC_JSON_LOGS` | `false` | JSON log output |

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;

pub use config::TelemetryConfig;

use thiserror::Error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// The configured log level did not parse as an env filter.
    #[error("Invalid log filter '{filter}': {message}")]
    Filter {
        /// The rejected filter string.
        filter: String,
        /// Parser message.
        message: String,
    },

    /// A global subscriber was already installed.
    #[error("Failed to install tracing subscriber: {0}")]
    Install(String),
}

/// Guard that keeps telemetry active for the process lifetime.
pub struct TelemetryGuard {
    _private: (),
}

/// Initialize the logging pipeline.
///
/// Returns a guard to hold for the lifetime of the application. Fails if
/// the configured level does not parse or a subscriber is already set,
/// so a second init in the same process is a hard error, not a silent
/// override.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    let filter = EnvFilter::try_new(&config.log_level).map_err(|e| TelemetryError::Filter {
        filter: config.log_level.clone(),
        message: e.to_string(),
    })?;

    let registry = tracing_subscriber::registry().with(filter);
    let install = if config.json_logs {
        registry
            .with(fmt::layer().json().with_current_span(true))
            .try_init()
    } else {
        registry.with(fmt::layer().with_target(true)).try_init()
    };
    install.map_err(|e| TelemetryError::Install(e.to_string()))?;

    tracing::info!(
        service = %config.full_service_name(),
        level = %config.log_level,
        "telemetry initialized"
    );
    Ok(TelemetryGuard { _private: () })
}
