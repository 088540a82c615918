//! Diagnostic reporting.
//!
//! Failures that are caught rather than propagated still need to reach an
//! operator. Producers hand a [`Diagnostic`] to a [`DiagnosticSink`]; the
//! production sink writes structured log events, tests substitute a
//! recording sink.

use std::any::Any;

use serde::Serialize;

use crate::observability::metrics;

/// Where a diagnostic came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticOrigin {
    /// A page failed while being constructed and the render guard caught it.
    RenderGuard,
    /// A background preload failed; nobody was waiting on it.
    Preload,
    /// A failure outside construction (event handler, async callback).
    Unsupervised,
}

impl DiagnosticOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticOrigin::RenderGuard => "render_guard",
            DiagnosticOrigin::Preload => "preload",
            DiagnosticOrigin::Unsupervised => "unsupervised",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub origin: DiagnosticOrigin,
    /// Location or page the failure belongs to, when known.
    pub subject: Option<String>,
    pub message: String,
}

impl Diagnostic {
    pub fn new(origin: DiagnosticOrigin, subject: Option<String>, message: impl Into<String>) -> Self {
        Self {
            origin,
            subject,
            message: message.into(),
        }
    }
}

/// Best-effort text of a caught panic payload.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: Diagnostic);
}

/// Writes diagnostics to the tracing subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: Diagnostic) {
        metrics::record_diagnostic(diagnostic.origin.as_str());
        let subject = diagnostic.subject.as_deref().unwrap_or("-");
        match diagnostic.origin {
            DiagnosticOrigin::RenderGuard => tracing::error!(
                origin = diagnostic.origin.as_str(),
                subject,
                error = %diagnostic.message,
                "Render guard caught an error"
            ),
            DiagnosticOrigin::Preload => tracing::warn!(
                origin = diagnostic.origin.as_str(),
                subject,
                error = %diagnostic.message,
                "Failed to preload route"
            ),
            DiagnosticOrigin::Unsupervised => tracing::error!(
                origin = diagnostic.origin.as_str(),
                subject,
                error = %diagnostic.message,
                "Unhandled error outside page construction"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panic_message_payloads() {
        let payload: Box<dyn Any + Send> = Box::new("static str");
        assert_eq!(panic_message(payload.as_ref()), "static str");
        let payload: Box<dyn Any + Send> = Box::new(String::from("owned"));
        assert_eq!(panic_message(payload.as_ref()), "owned");
        let payload: Box<dyn Any + Send> = Box::new(42u32);
        assert_eq!(panic_message(payload.as_ref()), "unknown panic");
    }
}
