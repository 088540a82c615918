use leptos::prelude::*;

use crate::pages::key::PageKey;
use crate::pages::page::{Page, RenderContext, RenderError};
use crate::render::components::{Badge, Grid, Hero, Section};

pub struct Resources;

const LIBRARY: [(&str, &str, &str); 6] = [
    ("AI in Enterprise 2025", "Whitepaper", "Where machine learning pays off and where it does not."),
    ("Cloud Security Best Practices", "Guide", "Hardening checklists for AWS, Azure and GCP."),
    ("K8s Security", "Checklist", "Best practices for running Kubernetes in production."),
    ("AI Model Ops", "Guide", "Deployment tips for getting models out of notebooks."),
    ("ROI Calculator", "Tool", "Estimate your savings from a cloud migration."),
    ("Zero-Trust Primer", "Webinar", "A one-hour introduction for engineering leaders."),
];

impl Page for Resources {
    fn key(&self) -> PageKey {
        PageKey::Resources
    }

    fn render(&self, _cx: &RenderContext<'_>) -> Result<AnyView, RenderError> {
        let cards = LIBRARY
            .into_iter()
            .map(|(title, kind, blurb)| {
                view! {
                    <div class="card">
                        <Badge label=kind/>
                        <h3>{title}</h3>
                        <p>{blurb}</p>
                    </div>
                }
            })
            .collect_view();

        Ok(view! {
            <Hero
                heading="Knowledge"
                lead="Access comprehensive technical documentation, industry insights, and educational content that keeps you ahead of digital transformation trends."
            />
            <Section title="Innovation Lab">
                <Grid columns=3>{cards}</Grid>
            </Section>
        }
        .into_any())
    }
}
