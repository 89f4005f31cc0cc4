// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Metrics collection for highlight calls.
//!
//! Atomic counters per outcome plus a latency histogram, cheap enough to
//! record on every call.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::{Duration, Instant};

use once_cell::sync::Lazy;

/// Global metrics instance.
pub static GLOBAL_METRICS: Lazy<Arc<HighlightMetrics>> =
    Lazy::new(|| Arc::new(HighlightMetrics::new()));

/// How a single highlight call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightOutcome {
    /// Rendered with the requested language's rules.
    Highlighted,
    /// The hint was not recognized; rendered as plain text.
    PlainText,
    /// The engine failed; the input was returned verbatim.
    Fallback,
}

/// Thread-safe counters for highlight calls.
#[derive(Debug)]
pub struct HighlightMetrics {
    highlighted: AtomicU64,
    plain_text: AtomicU64,
    fallbacks: AtomicU64,
    total_micros: AtomicU64,
    latency: RwLock<Histogram>,
    start_time: Instant,
}

impl HighlightMetrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            highlighted: AtomicU64::new(0),
            plain_text: AtomicU64::new(0),
            fallbacks: AtomicU64::new(0),
            total_micros: AtomicU64::new(0),
            latency: RwLock::new(Histogram::default()),
            start_time: Instant::now(),
        }
    }

    /// Record one highlight call.
    pub fn record(&self, outcome: HighlightOutcome, duration: Duration) {
        let counter = match outcome {
            HighlightOutcome::Highlighted => &self.highlighted,
            HighlightOutcome::PlainText => &self.plain_text,
            HighlightOutcome::Fallback => &self.fallbacks,
        };
        counter.fetch_add(1, Ordering::Relaxed);
        self.total_micros
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
        self.latency
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .record(duration);
    }

    /// Take a snapshot of all metrics.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            highlighted: self.highlighted.load(Ordering::Relaxed),
            plain_text: self.plain_text.load(Ordering::Relaxed),
            fallbacks: self.fallbacks.load(Ordering::Relaxed),
            total_duration: Duration::from_micros(self.total_micros.load(Ordering::Relaxed)),
            latency: self
                .latency
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .clone(),
            uptime: self.start_time.elapsed(),
        }
    }

    /// Reset all metrics.
    pub fn reset(&self) {
        self.highlighted.store(0, Ordering::Relaxed);
        self.plain_text.store(0, Ordering::Relaxed);
        self.fallbacks.store(0, Ordering::Relaxed);
        self.total_micros.store(0, Ordering::Relaxed);
        *self.latency.write().unwrap_or_else(PoisonError::into_inner) = Histogram::default();
    }
}

impl Default for HighlightMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Simple histogram with fixed buckets for latency tracking.
#[derive(Debug, Clone)]
pub struct Histogram {
    /// Bucket boundaries in microseconds.
    buckets: Vec<u64>,

    /// Count per bucket, plus one overflow bucket.
    counts: Vec<u64>,
}

impl Histogram {
    /// Create a histogram with custom bucket boundaries (in microseconds).
    fn with_buckets(buckets: Vec<u64>) -> Self {
        let counts = vec![0; buckets.len() + 1];
        Self { buckets, counts }
    }

    /// Record a duration value.
    pub fn record(&mut self, duration: Duration) {
        let micros = duration.as_micros() as u64;
        let bucket_idx = self
            .buckets
            .iter()
            .position(|&b| micros <= b)
            .unwrap_or(self.buckets.len());
        self.counts[bucket_idx] += 1;
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Calculate approximate percentile (p50, p90, p99, etc.).
    pub fn percentile(&self, p: f64) -> Duration {
        let total: u64 = self.counts.iter().sum();
        if total == 0 {
            return Duration::ZERO;
        }

        let target = (total as f64 * p / 100.0).ceil() as u64;
        let mut cumulative = 0u64;

        for (i, &count) in self.counts.iter().enumerate() {
            cumulative += count;
            if cumulative >= target {
                let micros = if i < self.buckets.len() {
                    self.buckets[i]
                } else {
                    self.buckets.last().copied().unwrap_or(0) * 10
                };
                return Duration::from_micros(micros);
            }
        }

        Duration::ZERO
    }

    pub fn p50(&self) -> Duration {
        self.percentile(50.0)
    }

    pub fn p99(&self) -> Duration {
        self.percentile(99.0)
    }
}

impl Default for Histogram {
    fn default() -> Self {
        // 10us, 100us, 1ms, 10ms, 100ms, 1s
        Self::with_buckets(vec![10, 100, 1_000, 10_000, 100_000, 1_000_000])
    }
}

/// A snapshot of highlight metrics at a point in time.
#[derive(Debug, Clone)]
pub struct MetricsSnapshot {
    pub highlighted: u64,
    pub plain_text: u64,
    pub fallbacks: u64,
    pub total_duration: Duration,
    pub latency: Histogram,
    pub uptime: Duration,
}

impl MetricsSnapshot {
    /// Total number of highlight calls.
    pub fn calls(&self) -> u64 {
        self.highlighted + self.plain_text + self.fallbacks
    }

    /// Calculate average call duration.
    pub fn avg_duration(&self) -> Duration {
        match self.calls() {
            0 => Duration::ZERO,
            n => Duration::from_nanos((self.total_duration.as_nanos() / n as u128) as u64),
        }
    }

    /// Format as a human-readable report.
    pub fn format_report(&self) -> String {
        let mut report = String::new();

        report.push_str("=== Highlight Metrics ===\n");
        report.push_str(&format!("Uptime: {:.2?}\n", self.uptime));
        report.push_str(&format!(
            "Calls: {} ({} highlighted, {} plain text, {} fallback)\n",
            self.calls(),
            self.highlighted,
            self.plain_text,
            self.fallbacks
        ));
        report.push_str(&format!(
            "Latency: avg {:.2?}, p50 {:.2?}, p99 {:.2?}\n",
            self.avg_duration(),
            self.latency.p50(),
            self.latency.p99()
        ));

        report
    }
}
