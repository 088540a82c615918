//! Render guard.
//!
//! # Responsibilities
//! - Supervise page construction and catch failures raised while building
//! - Replace the failed page with a diagnostic view until the visitor recovers
//! - Report every transition into the errored state
//!
//! # State Machine
//! ```text
//! Clean ──(construction fails or panics)──▶ Errored
//! Errored ──(reset: retry / go home)──────▶ Clean
//! ```
//!
//! # Design Decisions
//! - While errored the supervised closure is never called
//! - Panics are caught with `catch_unwind` and treated like `Err`
//! - Only construction is supervised; failures in actions or spawned tasks
//!   must be handled where they happen

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use leptos::prelude::*;
use serde::Serialize;

use crate::observability::diagnostics::{panic_message, Diagnostic, DiagnosticOrigin, DiagnosticSink};
use crate::observability::metrics;
use crate::pages::RenderError;
use crate::render::components::{ActionButton, Note};

pub const RETRY_ACTION: &str = "/_site/guard/retry";
pub const HOME_ACTION: &str = "/_site/guard/home";

/// What the guard remembers about the failure that tripped it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorInfo {
    pub location: String,
    pub message: String,
    /// The page module never loaded, as opposed to failing to build.
    pub load_failure: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum GuardState {
    #[default]
    Clean,
    Errored(ErrorInfo),
}

/// Outcome of a supervised build.
pub enum Guarded {
    Built(AnyView),
    Diagnostic(AnyView),
}

pub struct RenderGuard {
    state: GuardState,
    sink: Arc<dyn DiagnosticSink>,
}

impl RenderGuard {
    pub fn new(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            state: GuardState::Clean,
            sink,
        }
    }

    pub fn state(&self) -> &GuardState {
        &self.state
    }

    pub fn is_errored(&self) -> bool {
        matches!(self.state, GuardState::Errored(_))
    }

    /// Run `build` unless the guard is already errored.
    pub fn supervise<F>(&mut self, location: &str, build: F) -> Guarded
    where
        F: FnOnce() -> Result<AnyView, RenderError>,
    {
        if let GuardState::Errored(info) = &self.state {
            return Guarded::Diagnostic(diagnostic_view(info));
        }

        let outcome = match panic::catch_unwind(AssertUnwindSafe(build)) {
            Ok(result) => result,
            Err(payload) => Err(RenderError::Panicked(panic_message(payload.as_ref()))),
        };

        match outcome {
            Ok(markup) => Guarded::Built(markup),
            Err(error) => {
                let info = ErrorInfo {
                    location: location.to_string(),
                    message: error.to_string(),
                    load_failure: matches!(error, RenderError::Load(_)),
                };
                self.sink.report(Diagnostic::new(
                    DiagnosticOrigin::RenderGuard,
                    Some(info.location.clone()),
                    info.message.clone(),
                ));
                metrics::record_guard_error(error.kind());

                let view = diagnostic_view(&info);
                self.state = GuardState::Errored(info);
                Guarded::Diagnostic(view)
            }
        }
    }

    /// Return to `Clean`. Returns whether the guard was errored.
    pub fn reset(&mut self) -> bool {
        let was_errored = self.is_errored();
        if was_errored {
            tracing::info!("Render guard reset");
        }
        self.state = GuardState::Clean;
        was_errored
    }
}

/// The view shown in place of the failed page.
pub fn diagnostic_view(info: &ErrorInfo) -> AnyView {
    let lead = if info.load_failure {
        "This page could not be loaded."
    } else {
        "An unexpected error occurred while rendering this page."
    };
    let message = info.message.clone();
    let location = info.location.clone();

    view! {
        <div class="guard-diagnostic" role="alert">
            <h1>"Something went wrong"</h1>
            <p>{lead}</p>
            <Note kind="error" lead="Error:" body=message/>
            <p class="location">
                <span>"While rendering "</span>
                <code>{location}</code>
            </p>
            <div class="actions">
                <ActionButton action=RETRY_ACTION label="Try Again"/>
                <ActionButton action=HOME_ACTION label="Go Home"/>
            </div>
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::LoadError;
    use crate::pages::PageKey;
    use crate::test_support::RecordingSink;
    use std::cell::Cell;

    fn guard() -> (RenderGuard, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::default());
        (RenderGuard::new(sink.clone()), sink)
    }

    fn ok(text: &'static str) -> Result<AnyView, RenderError> {
        Ok(view! { <p>{text}</p> }.into_any())
    }

    #[test]
    fn test_clean_build_passes_through() {
        let (mut guard, sink) = guard();
        match guard.supervise("/", || ok("fine")) {
            Guarded::Built(view) => assert!(view.to_html().contains("fine")),
            Guarded::Diagnostic(_) => panic!("expected built view"),
        }
        assert_eq!(guard.state(), &GuardState::Clean);
        assert!(sink.reports().is_empty());
    }

    #[test]
    fn test_failure_enters_errored_and_reports() {
        let (mut guard, sink) = guard();
        let outcome = guard.supervise("/test/error", || {
            Err(RenderError::Construction("boom".into()))
        });
        let Guarded::Diagnostic(view) = outcome else {
            panic!("expected diagnostic view");
        };
        let html = view.to_html();
        assert!(html.contains("Something went wrong"));
        assert!(html.contains("An unexpected error occurred"));
        assert!(html.contains("boom"));
        assert!(html.contains(RETRY_ACTION));
        assert!(html.contains(HOME_ACTION));

        let reports = sink.reports();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].origin, DiagnosticOrigin::RenderGuard);
        assert_eq!(reports[0].subject.as_deref(), Some("/test/error"));
    }

    #[test]
    fn test_errored_guard_does_not_rebuild() {
        let (mut guard, sink) = guard();
        guard.supervise("/a", || Err(RenderError::Construction("boom".into())));

        let calls = Cell::new(0);
        let outcome = guard.supervise("/b", || {
            calls.set(calls.get() + 1);
            ok("fine")
        });
        assert!(matches!(outcome, Guarded::Diagnostic(_)));
        assert_eq!(calls.get(), 0);
        // Still the original failure, reported once.
        assert_eq!(sink.reports().len(), 1);
    }

    #[test]
    fn test_reset_rebuilds_from_scratch() {
        let (mut guard, _sink) = guard();
        let failing = Cell::new(true);
        let build = || {
            if failing.get() {
                Err(RenderError::Construction("boom".into()))
            } else {
                ok("recovered")
            }
        };

        assert!(matches!(guard.supervise("/x", build), Guarded::Diagnostic(_)));
        failing.set(false);
        assert!(guard.reset());
        assert!(!guard.reset());
        match guard.supervise("/x", build) {
            Guarded::Built(view) => assert!(view.to_html().contains("recovered")),
            Guarded::Diagnostic(_) => panic!("expected recovery"),
        }
    }

    #[test]
    fn test_panics_are_caught() {
        let (mut guard, _sink) = guard();
        let outcome = guard.supervise("/panic", || panic!("kaboom"));
        assert!(matches!(outcome, Guarded::Diagnostic(_)));
        match guard.state() {
            GuardState::Errored(info) => assert!(info.message.contains("kaboom")),
            GuardState::Clean => panic!("expected errored"),
        }
    }

    #[test]
    fn test_load_failure_messaging() {
        let (mut guard, _sink) = guard();
        let outcome = guard.supervise("/case-studies", || {
            Err(RenderError::Load(LoadError::Failed {
                key: PageKey::CaseStudies,
                reason: "chunk missing".into(),
            }))
        });
        let Guarded::Diagnostic(view) = outcome else {
            panic!("expected diagnostic view");
        };
        let html = view.to_html();
        assert!(html.contains("This page could not be loaded."));
        assert!(html.contains("chunk missing"));
    }

    #[test]
    fn test_diagnostic_view_escapes_message() {
        let view = diagnostic_view(&ErrorInfo {
            location: "/x".into(),
            message: "<img src=x onerror=alert(1)>".into(),
            load_failure: false,
        });
        let html = view.to_html();
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
        assert!(!html.contains("<img"));
    }
}
