use leptos::prelude::*;

use crate::pages::key::PageKey;
use crate::pages::page::{Page, RenderContext, RenderError};
use crate::render::components::{BulletList, Grid, Note, Section};
use crate::render::spinner::{Spinner, SpinnerSize};

pub struct TestLoading;

static WHAT_TO_TEST: [&str; 3] = [
    "Open /test/slow-load in a fresh session to see the placeholder.",
    "Visit it again: the module is cached and renders immediately.",
    "Wait a second on any page: adjacent pages are preloaded in the background.",
];

impl Page for TestLoading {
    fn key(&self) -> PageKey {
        PageKey::TestLoading
    }

    fn render(&self, _cx: &RenderContext<'_>) -> Result<AnyView, RenderError> {
        let sizes = [
            (SpinnerSize::Small, "Small Spinner"),
            (SpinnerSize::Medium, "Medium Spinner"),
            (SpinnerSize::Large, "Large Spinner"),
        ]
        .into_iter()
        .map(|(size, label)| {
            view! {
                <div class="center">
                    <Spinner size=size label=label/>
                </div>
            }
        })
        .collect_view();

        Ok(view! {
            <Section title="Loading States Testing">
                <Note
                    kind="info"
                    lead="Note:"
                    body="Every page module loads lazily. The first visit to a page that takes longer than the suspense window shows the loading placeholder and refreshes once the module is ready."
                />
                <Grid columns=3>{sizes}</Grid>
                <h2>"What to Test"</h2>
                <BulletList items=&WHAT_TO_TEST/>
                <p><a class="btn" href="/test/slow-load">"Next: Slow Loading →"</a></p>
            </Section>
        }
        .into_any())
    }
}
