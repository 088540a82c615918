//! Loading placeholder.

use leptos::prelude::*;

use crate::render::layout;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerSize {
    Small,
    Medium,
    Large,
}

impl SpinnerSize {
    fn class(&self) -> &'static str {
        match self {
            SpinnerSize::Small => "spinner spinner-sm",
            SpinnerSize::Medium => "spinner spinner-md",
            SpinnerSize::Large => "spinner spinner-lg",
        }
    }
}

#[component]
pub fn Spinner(size: SpinnerSize, label: &'static str) -> impl IntoView {
    view! {
        <div class=size.class() role="status" aria-live="polite">
            <span class="spinner-ring"></span>
            <span class="spinner-label">{label}</span>
        </div>
    }
}

/// Full page shown while the module for `location` is still loading.
///
/// The response carries a `Refresh` header; the link covers clients that
/// ignore it.
pub fn loading_page(location: &str) -> String {
    let body = view! {
        <Spinner size=SpinnerSize::Large label="Loading..."/>
        <p class="hint">
            <a href=location.to_string()>"Still waiting? Reload the page."</a>
        </p>
    };
    layout::bare_document("Loading", body.into_any())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_page_links_same_location() {
        let html = loading_page("/test/slow-load");
        assert!(html.contains(r#"href="/test/slow-load""#));
        assert!(html.contains("spinner-lg"));
        assert!(html.contains("<title>Loading | ProBox InfoTech</title>"));
    }
}
