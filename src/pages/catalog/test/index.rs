use leptos::prelude::*;

use crate::pages::key::PageKey;
use crate::pages::page::{Page, RenderContext, RenderError};
use crate::render::components::{ActionButton, Grid, Note, PreloadButton, Section};

pub struct TestIndex;

const FEATURES: [(&str, &str, &str); 4] = [
    ("Error Boundaries", "Test how the app handles different types of errors gracefully", "/test/error"),
    ("Loading States", "Test loading spinners, suspension and different loading scenarios", "/test/loading"),
    ("Performance Monitoring", "Test performance utilities, heavy operations, and route preloading", "/test/performance"),
    ("Slow Loading", "Test how the app handles slow loading scenarios and multiple loading states", "/test/slow-load"),
];

impl Page for TestIndex {
    fn key(&self) -> PageKey {
        PageKey::TestIndex
    }

    fn render(&self, _cx: &RenderContext<'_>) -> Result<AnyView, RenderError> {
        let cards = FEATURES
            .into_iter()
            .map(|(title, description, path)| {
                view! {
                    <a class="card feature" href=path>
                        <h3>{title}</h3>
                        <p>{description}</p>
                    </a>
                }
            })
            .collect_view();

        Ok(view! {
            <Section title="Testing Suite">
                <Note
                    kind="info"
                    lead="Welcome to the Testing Suite!"
                    body="Use these pages to verify the render guard, loading states, performance monitoring and slow loading behave correctly."
                />
                <Grid columns=2>{cards}</Grid>
                <h2>"Quick Test Actions"</h2>
                <PreloadButton path="/test/loading" label="Preload Route"/>
                <ActionButton action="/_site/guard/retry" label="Reload Page"/>
                <p><a href="/">"← Back to Home"</a></p>
            </Section>
        }
        .into_any())
    }
}
