//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the site.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the site server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SiteConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Background route preloading.
    pub preload: PreloadConfig,

    /// Page module loading.
    pub pages: PageConfig,

    /// Visitor sessions.
    pub sessions: SessionConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Total request timeout in seconds.
    pub request_secs: u64,

    /// How long a page request waits for its module before the loading
    /// placeholder is served instead.
    pub suspense_ms: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            request_secs: 30,
            suspense_ms: 250,
        }
    }
}

/// Preloader configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PreloadConfig {
    pub enabled: bool,

    /// Delay after a navigation before candidates are preloaded.
    pub settle_delay_ms: u64,

    /// Paths worth warming after any navigation.
    pub candidates: Vec<String>,
}

impl Default for PreloadConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            settle_delay_ms: 1000,
            candidates: vec![
                "/services".to_string(),
                "/resources".to_string(),
                "/about".to_string(),
                "/client-portal".to_string(),
            ],
        }
    }
}

/// Page module loading.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PageConfig {
    /// Latency added to every module load.
    pub simulated_latency_ms: u64,

    /// Extra latency for the slow-load demonstration page.
    pub slow_load_delay_ms: u64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            simulated_latency_ms: 0,
            slow_load_delay_ms: 3000,
        }
    }
}

/// Visitor session settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SessionConfig {
    pub cookie_name: String,

    /// Sessions idle for longer than this are dropped.
    pub idle_ttl_secs: u64,

    /// How often the sweeper looks for idle sessions.
    pub sweep_interval_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: "probox_sid".to_string(),
            idle_ttl_secs: 1800,
            sweep_interval_secs: 60,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
