//! # Mercato Console Test Suite
//!
//! Unified test crate for cross-subsystem choreography.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # Cross-subsystem flows
//!     ├── dashboard_flows.rs   # gateway → engine → dashboard stats
//!     ├── listing_flows.rs     # filters → controller → gateway wire
//!     └── moderation_flows.rs  # state machine → store → gateway wire
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p mc-tests
//!
//! # By category
//! cargo test -p mc-tests integration::
//! ```

#![allow(unused_imports)]
#![allow(dead_code)]

pub mod integration;

use console_telemetry::{init_telemetry, TelemetryConfig};
use std::sync::Once;

static INIT: Once = Once::new();

/// Bring up the logging pipeline once for the whole suite.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let config = TelemetryConfig {
            log_level: "debug".to_string(),
            ..Default::default()
        };
        // A subscriber may already be installed by the harness.
        let _ = init_telemetry(&config);
    });
}
