use leptos::prelude::*;

use crate::pages::key::PageKey;
use crate::pages::page::{Page, RenderContext, RenderError};
use crate::render::components::{Note, Section};

pub struct ClientPortal;

impl Page for ClientPortal {
    fn key(&self) -> PageKey {
        PageKey::ClientPortal
    }

    fn render(&self, _cx: &RenderContext<'_>) -> Result<AnyView, RenderError> {
        Ok(view! {
            <Section
                title="Client Portal"
                subtitle="Project dashboards, reports and support tickets in one place."
            >
                <Note
                    kind="info"
                    lead="Invitation only."
                    body="Portal access is provisioned by your engagement lead. Contact us if you need an account."
                />
                <a class="btn-primary" href="/contact">"Request Access"</a>
            </Section>
        }
        .into_any())
    }
}
