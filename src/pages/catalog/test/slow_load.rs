use leptos::prelude::*;

use crate::pages::key::PageKey;
use crate::pages::page::{Page, RenderContext, RenderError};
use crate::pages::registry::ModuleStatus;
use crate::render::components::{Note, Section};

/// A module whose provider takes noticeably longer to load.
pub struct TestSlowLoad;

impl Page for TestSlowLoad {
    fn key(&self) -> PageKey {
        PageKey::TestSlowLoad
    }

    fn render(&self, cx: &RenderContext<'_>) -> Result<AnyView, RenderError> {
        let load_ms = cx
            .registry
            .snapshot()
            .into_iter()
            .find(|m| m.key == PageKey::TestSlowLoad && m.status == ModuleStatus::Ready)
            .and_then(|m| m.load_ms);
        let took = match load_ms {
            Some(ms) => format!("This module took {} ms to load. Reload the page: it is cached now.", ms),
            None => "This module is cached.".to_string(),
        };

        Ok(view! {
            <Section title="Slow Loading Testing">
                <Note
                    kind="warning"
                    lead="Note:"
                    body="This page demonstrates how the app handles slow loading scenarios and suspension."
                />
                <p class="result">{took}</p>
                <p><a class="btn" href="/test/performance">"Next: Performance →"</a></p>
            </Section>
        }
        .into_any())
    }
}
