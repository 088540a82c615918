//! Form actions posted from pages.
//!
//! Every action redirects (303) back to a page, so a browser refresh never
//! re-posts. Failures in here happen outside page construction: the render
//! guard never sees them, and each one is handled where it is raised.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;

use crate::http::server::AppState;
use crate::http::session::SessionHandle;
use crate::observability::diagnostics::{Diagnostic, DiagnosticOrigin, DiagnosticSink};

const TEST_ERROR_PATH: &str = "/test/error";
const CONTACT_PATH: &str = "/contact";

pub const EVENT_ERROR_MESSAGE: &str =
    "Event handler error - this is not caught by the render guard";
pub const ASYNC_ERROR_MESSAGE: &str = "Async error - this is not caught by the render guard";

fn redirect(state: &AppState, handle: &SessionHandle, to: &str) -> Response {
    let mut response = Redirect::to(to).into_response();
    state.sessions.attach_cookie(handle, &mut response);
    response
}

async fn current_location(handle: &SessionHandle) -> String {
    let session = handle.session.lock().await;
    session
        .navigator
        .current_location()
        .unwrap_or("/")
        .to_string()
}

/// Reset the render guard and rebuild the current page from scratch.
pub async fn guard_retry(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let handle = state.sessions.session_for(&headers);
    let target = {
        let mut session = handle.session.lock().await;
        session.recover();
        session
            .navigator
            .current_location()
            .unwrap_or("/")
            .to_string()
    };
    tracing::info!(session = %handle.id, location = %target, "Render guard retry");
    redirect(&state, &handle, &target)
}

/// Reset the render guard and go to the home page.
pub async fn guard_home(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let handle = state.sessions.session_for(&headers);
    handle.session.lock().await.recover();
    tracing::info!(session = %handle.id, "Render guard reset, going home");
    redirect(&state, &handle, "/")
}

/// Flip the error test page's "fail while rendering" switch.
pub async fn test_render_error(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let handle = state.sessions.session_for(&headers);
    let enabled = handle.session.lock().await.locals.toggle_throw_on_render();
    tracing::info!(session = %handle.id, enabled, "Render error switch toggled");
    redirect(&state, &handle, TEST_ERROR_PATH)
}

fn click_handler() -> Result<(), String> {
    Err(EVENT_ERROR_MESSAGE.to_string())
}

/// A failing event handler; the failure is handled right here.
pub async fn test_event_error(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let handle = state.sessions.session_for(&headers);
    if let Err(message) = click_handler() {
        state.sink.report(Diagnostic::new(
            DiagnosticOrigin::Unsupervised,
            Some(TEST_ERROR_PATH.to_string()),
            message,
        ));
    }
    redirect(&state, &handle, TEST_ERROR_PATH)
}

/// A background task that fails after the response has gone out.
pub async fn test_async_error(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let handle = state.sessions.session_for(&headers);
    spawn_failing_task(Arc::clone(&state.sink), Duration::from_millis(100));
    redirect(&state, &handle, TEST_ERROR_PATH)
}

fn spawn_failing_task(sink: Arc<dyn DiagnosticSink>, delay: Duration) {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let outcome: Result<(), String> = Err(ASYNC_ERROR_MESSAGE.to_string());
        if let Err(message) = outcome {
            sink.report(Diagnostic::new(
                DiagnosticOrigin::Unsupervised,
                Some(TEST_ERROR_PATH.to_string()),
                message,
            ));
        }
    });
}

#[derive(Debug, Deserialize)]
pub struct PreloadForm {
    pub path: String,
}

/// Preload one route on request, then return to the current page.
pub async fn preload(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<PreloadForm>,
) -> Response {
    let handle = state.sessions.session_for(&headers);
    let started = handle.session.lock().await.preloader.preload_now(&form.path);
    if started.is_none() {
        tracing::debug!(path = %form.path, "Nothing to preload");
    }
    let back = current_location(&handle).await;
    redirect(&state, &handle, &back)
}

#[derive(Debug, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub topic: String,
    pub message: String,
}

impl ContactForm {
    fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && self.email.contains('@')
            && !self.message.trim().is_empty()
    }
}

/// Accept the contact form.
pub async fn contact(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<ContactForm>,
) -> Response {
    let handle = state.sessions.session_for(&headers);
    if !form.is_complete() {
        tracing::warn!(session = %handle.id, "Incomplete contact form ignored");
        return redirect(&state, &handle, CONTACT_PATH);
    }

    tracing::info!(
        session = %handle.id,
        company = %form.company,
        topic = %form.topic,
        message_len = form.message.len(),
        "Contact form submitted"
    );
    handle
        .session
        .lock()
        .await
        .locals
        .record_contact(form.name.trim());
    redirect(&state, &handle, CONTACT_PATH)
}
