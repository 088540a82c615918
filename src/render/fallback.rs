//! Fallback and not-found views.
//!
//! # Responsibilities
//! - Turn an unmatched location into "page not found"
//! - Turn a routing-layer error with a status into status-specific copy
//! - Turn any other error into a generic "application error"
//!
//! # Design Decisions
//! - Separate channel from the render guard: nothing here is a caught
//!   construction failure, and nothing here escalates
//! - Every view links back to `/`

use leptos::prelude::*;

/// Why the fallback view is being shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackCause {
    /// No route matched the location.
    Unmatched { location: String },
    /// The routing layer rejected the request with a status.
    Status { status: u16, message: Option<String> },
    /// Any other failure while routing.
    Error { message: String },
}

/// What the fallback page says.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackView {
    pub status: u16,
    pub heading: String,
    pub details: String,
}

const NOT_FOUND_DETAILS: &str = "The page you're looking for doesn't exist or has been moved.";

pub fn resolve(cause: &FallbackCause) -> FallbackView {
    match cause {
        FallbackCause::Unmatched { .. } | FallbackCause::Status { status: 404, .. } => FallbackView {
            status: 404,
            heading: "Page not found".to_string(),
            details: NOT_FOUND_DETAILS.to_string(),
        },
        FallbackCause::Status { status, message } => FallbackView {
            status: *status,
            heading: format!("Error {}", status),
            details: message
                .clone()
                .unwrap_or_else(|| "Something went wrong".to_string()),
        },
        FallbackCause::Error { message } => FallbackView {
            status: 500,
            heading: "Application Error".to_string(),
            details: message.clone(),
        },
    }
}

/// The fallback page body.
pub fn render(view: &FallbackView) -> AnyView {
    let status = view.status.to_string();
    let heading = view.heading.clone();
    let details = view.details.clone();
    view! {
        <div class="fallback">
            <div class="code">{status}</div>
            <h1>{heading}</h1>
            <p>{details}</p>
            <div class="card">
                <h2>"Let's get you back on track"</h2>
                <h3>"Popular Pages"</h3>
                <ul>
                    <li><a href="/">"Home"</a></li>
                    <li><a href="/services">"Services"</a></li>
                    <li><a href="/about">"About Us"</a></li>
                    <li><a href="/resources">"Resources"</a></li>
                </ul>
                <h3>"Quick Actions"</h3>
                <ul>
                    <li><a href="/client-portal">"Client Portal"</a></li>
                    <li><a href="/test">"Test Features"</a></li>
                </ul>
            </div>
            <div class="actions">
                <a class="btn-primary" href="/">"Go Home"</a>
            </div>
            <p class="hint">
                "Can't find what you're looking for? Try the navigation menu above or contact our support team."
            </p>
        </div>
    }
    .into_any()
}
