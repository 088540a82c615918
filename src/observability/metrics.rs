//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Define site metrics (page loads, renders, guard errors, preloads, sessions)
//! - Expose a Prometheus-compatible metrics endpoint when enabled
//!
//! # Metrics
//! - `site_page_loads_total` (counter): module loads by page, outcome
//! - `site_page_load_duration_seconds` (histogram): module load latency
//! - `site_render_duration_seconds` (histogram): page construction time by page
//! - `site_slow_renders_total` (counter): constructions over 16ms, by page
//! - `site_guard_errors_total` (counter): construction failures caught, by kind
//! - `site_diagnostics_total` (counter): diagnostics reported, by origin
//! - `site_preload_batches_total` (counter): preload batches fired
//! - `site_preload_failures_total` (counter): preload failures by page
//! - `site_active_sessions` (gauge): live visitor sessions
//!
//! # Design Decisions
//! - Recording is a no-op until `init_metrics` installs the exporter
//! - Labels are page keys, never raw locations, to bound cardinality

use std::net::SocketAddr;
use std::time::{Duration, Instant};

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

use crate::pages::PageKey;

/// One frame at 60fps.
pub const SLOW_RENDER_THRESHOLD: Duration = Duration::from_millis(16);

/// Install the Prometheus exporter with its own HTTP listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_page_load(key: PageKey, ok: bool, took: Duration) {
    let outcome = if ok { "ok" } else { "error" };
    counter!("site_page_loads_total", "page" => key.as_str(), "outcome" => outcome).increment(1);
    histogram!("site_page_load_duration_seconds", "page" => key.as_str()).record(took.as_secs_f64());
}

/// Times one page construction.
pub struct RenderTimer {
    key: PageKey,
    started: Instant,
}

impl RenderTimer {
    pub fn start(key: PageKey) -> Self {
        Self {
            key,
            started: Instant::now(),
        }
    }

    /// Record the elapsed time and return it.
    pub fn finish(self) -> Duration {
        let took = self.started.elapsed();
        histogram!("site_render_duration_seconds", "page" => self.key.as_str())
            .record(took.as_secs_f64());
        if took > SLOW_RENDER_THRESHOLD {
            counter!("site_slow_renders_total", "page" => self.key.as_str()).increment(1);
            tracing::warn!(
                page = %self.key,
                took_ms = took.as_millis() as u64,
                "Slow page construction"
            );
        }
        took
    }
}

pub fn record_guard_error(kind: &'static str) {
    counter!("site_guard_errors_total", "kind" => kind).increment(1);
}

/// A request handler panicked and the application error page was served.
pub fn record_handler_panic() {
    counter!("site_handler_panics_total").increment(1);
}

pub fn record_diagnostic(origin: &'static str) {
    counter!("site_diagnostics_total", "origin" => origin).increment(1);
}

pub fn record_preload_batch(started: usize) {
    counter!("site_preload_batches_total").increment(1);
    counter!("site_preload_modules_started_total").increment(started as u64);
}

pub fn record_preload_failure(key: PageKey) {
    counter!("site_preload_failures_total", "page" => key.as_str()).increment(1);
}

pub fn set_active_sessions(count: usize) {
    gauge!("site_active_sessions").set(count as f64);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_without_exporter_is_noop() {
        record_page_load(PageKey::Home, true, Duration::from_millis(3));
        record_guard_error("construction");
        set_active_sessions(2);
        let took = RenderTimer::start(PageKey::Home).finish();
        assert!(took < Duration::from_secs(1));
    }
}
