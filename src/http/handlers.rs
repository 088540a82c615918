//! Page request handling.
//!
//! A page request is one navigation: resolve the location, wait up to the
//! suspense window for the module, then commit and render under the
//! visitor's render guard. A request that loses a race to a newer
//! navigation of the same visitor is redirected to where the visitor is now.

use std::any::Any;

use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderName, HeaderValue, Method, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Redirect, Response};

use crate::http::server::AppState;
use crate::http::session::SessionHandle;
use crate::navigation::{check_location, RoutingError, Settled, Started};
use crate::observability::diagnostics::panic_message;
use crate::observability::metrics;
use crate::render::fallback::{self, FallbackCause};
use crate::render::{layout, spinner};
use crate::routing::Resolution;

/// Seconds before the loading placeholder asks for the page again.
const REFRESH_SECS: u64 = 1;

const REFRESH: HeaderName = HeaderName::from_static("refresh");

pub async fn page(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    if method == Method::HEAD {
        return head(&state, uri.path());
    }

    let handle = state.sessions.session_for(&headers);
    let mut response = navigate(&state, &handle, &method, uri.path()).await;
    state.sessions.attach_cookie(&handle, &mut response);
    response
}

async fn navigate(
    state: &AppState,
    handle: &SessionHandle,
    method: &Method,
    location: &str,
) -> Response {
    if method != Method::GET {
        let error = RoutingError::method_not_allowed(method.as_str());
        let mut response = fallback_response(&FallbackCause::from(&error), location);
        response
            .headers_mut()
            .insert(header::ALLOW, HeaderValue::from_static("GET, HEAD"));
        return response;
    }

    let pending = {
        let mut session = handle.session.lock().await;
        let started = match session.navigator.navigate(location) {
            Ok(started) => started,
            Err(error) => {
                tracing::debug!(location, status = error.status, error = %error, "Routing error");
                return fallback_response(&FallbackCause::from(&error), location);
            }
        };
        session.preloader.on_navigate(location);
        match started {
            Started::NotFound { location } => {
                let cause = FallbackCause::Unmatched {
                    location: location.clone(),
                };
                return fallback_response(&cause, &location);
            }
            Started::Pending(pending) => pending,
        }
    };

    let Some(result) = pending.wait(state.suspense).await else {
        tracing::debug!(
            session = %handle.id,
            location,
            page = %pending.matched().module,
            "Module still loading, serving placeholder"
        );
        return loading_response(location);
    };

    let mut session = handle.session.lock().await;
    match session.navigator.commit(pending, result) {
        Settled::Superseded { current } => {
            tracing::debug!(session = %handle.id, stale = location, current = %current, "Navigation superseded");
            Redirect::to(&current).into_response()
        }
        Settled::Committed {
            location,
            matched,
            result,
        } => {
            let rendered = session.render_committed(&location, &matched, result, &state.registry);
            let status = StatusCode::from_u16(rendered.status).unwrap_or(StatusCode::OK);
            let html = layout::document(rendered.title, &location, rendered.body);
            (status, Html(html)).into_response()
        }
    }
}

/// Answer `HEAD` with the status a `GET` would get.
///
/// Only the route table is consulted: no session is created, the visitor's
/// navigation and preloads are untouched and no module load starts.
fn head(state: &AppState, location: &str) -> Response {
    let status = match check_location(location) {
        Err(error) => StatusCode::from_u16(error.status).unwrap_or(StatusCode::BAD_REQUEST),
        Ok(()) => match state.table.resolve(location) {
            Resolution::Matched(matched) if !matched.catch_all => StatusCode::OK,
            _ => StatusCode::NOT_FOUND,
        },
    };
    let mut response = status.into_response();
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );
    response
}

/// A terminal fallback page inside the site chrome.
pub fn fallback_response(cause: &FallbackCause, location: &str) -> Response {
    let view = fallback::resolve(cause);
    let status = StatusCode::from_u16(view.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let html = layout::document(&view.heading, location, fallback::render(&view));
    (status, Html(html)).into_response()
}

fn loading_response(location: &str) -> Response {
    let html = spinner::loading_page(location);
    let mut response = Html(html).into_response();
    response
        .headers_mut()
        .insert(REFRESH, HeaderValue::from(REFRESH_SECS));
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    response
}

/// Turn a panic that escaped a handler into the application error page.
///
/// Installed through `CatchPanicLayer`; the connection stays usable and the
/// visitor gets a way back home.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = panic_message(payload.as_ref());
    tracing::error!(error = %message, "Request handler panicked");
    metrics::record_handler_panic();
    fallback_response(&FallbackCause::Error { message }, "/")
}
