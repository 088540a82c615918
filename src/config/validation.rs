//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check that preload candidates name real routes
//! - Validate value ranges (timeouts > 0, addresses parse)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: SiteConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::SiteConfig;
use crate::routing::{site_table, Resolution};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

pub fn validate_config(config: &SiteConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::new(
            "listener.bind_address",
            format!("'{}' is not a socket address", config.listener.bind_address),
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::new(
            "timeouts.request_secs",
            "must be greater than 0",
        ));
    }
    if config.timeouts.suspense_ms >= config.timeouts.request_secs.saturating_mul(1000) {
        errors.push(ValidationError::new(
            "timeouts.suspense_ms",
            "must be shorter than the request timeout",
        ));
    }

    validate_preload(config, &mut errors);

    let cookie = &config.sessions.cookie_name;
    if cookie.is_empty()
        || !cookie
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        errors.push(ValidationError::new(
            "sessions.cookie_name",
            "must be a non-empty token of letters, digits, '_' or '-'",
        ));
    }
    if config.sessions.sweep_interval_secs == 0 {
        errors.push(ValidationError::new(
            "sessions.sweep_interval_secs",
            "must be greater than 0",
        ));
    }
    if config.sessions.idle_ttl_secs == 0 {
        errors.push(ValidationError::new(
            "sessions.idle_ttl_secs",
            "must be greater than 0",
        ));
    }

    if !LOG_LEVELS.contains(&config.observability.log_level.as_str()) {
        errors.push(ValidationError::new(
            "observability.log_level",
            format!("unknown level '{}'", config.observability.log_level),
        ));
    }
    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::new(
            "observability.metrics_address",
            format!(
                "'{}' is not a socket address",
                config.observability.metrics_address
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_preload(config: &SiteConfig, errors: &mut Vec<ValidationError>) {
    let table = match site_table() {
        Ok(table) => table,
        Err(e) => {
            errors.push(ValidationError::new("routes", e.to_string()));
            return;
        }
    };

    for candidate in &config.preload.candidates {
        let field = "preload.candidates";
        if !candidate.starts_with('/') {
            errors.push(ValidationError::new(
                field,
                format!("'{}' must start with '/'", candidate),
            ));
            continue;
        }
        match table.resolve(candidate) {
            Resolution::Matched(m) if !m.catch_all => {}
            _ => errors.push(ValidationError::new(
                field,
                format!("'{}' does not name a declared route", candidate),
            )),
        }
    }
}
