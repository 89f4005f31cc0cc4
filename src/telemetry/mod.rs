// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Logging and metrics infrastructure.
//!
//! - **Logging**: `tracing` events, written to stderr by [`init_telemetry`]
//! - **Metrics**: per-outcome counters and a latency histogram for
//!   highlight calls (enabled by the `telemetry` feature)
//!
//! # Usage
//!
//! ```rust,ignore
//! use codeglow::telemetry::{init_telemetry, TelemetryConfig};
//!
//! init_telemetry(&TelemetryConfig::default())?;
//! ```

mod init;
pub mod metrics;

pub use init::{init_telemetry, TelemetryConfig};
pub use metrics::{
    HighlightMetrics, HighlightOutcome, Histogram, MetricsSnapshot, GLOBAL_METRICS,
};
