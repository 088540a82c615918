use leptos::prelude::AnyView;

use crate::pages::key::PageKey;
use crate::pages::page::{Page, RenderContext, RenderError};
use crate::render::fallback::{self, FallbackCause};

/// Shown by the catch-all route.
pub struct NotFound;

impl Page for NotFound {
    fn key(&self) -> PageKey {
        PageKey::NotFound
    }

    fn render(&self, cx: &RenderContext<'_>) -> Result<AnyView, RenderError> {
        let cause = FallbackCause::Unmatched {
            location: cx.location.to_string(),
        };
        Ok(fallback::render(&fallback::resolve(&cause)))
    }
}
