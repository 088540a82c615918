use leptos::prelude::*;

use crate::pages::key::PageKey;
use crate::pages::page::{Page, RenderContext, RenderError};
use crate::render::components::{Badge, Grid, Hero, Metric, Section};

pub struct CaseStudies;

struct Study {
    client: &'static str,
    industry: &'static str,
    challenge: &'static str,
    solution: &'static str,
    results: &'static str,
}

static STUDIES: [Study; 3] = [
    Study {
        client: "TechFlow Solutions",
        industry: "SaaS",
        challenge: "Monolithic deployments took days and infrastructure spend grew faster than revenue.",
        solution: "Containerised the platform on Kubernetes with a GitOps delivery pipeline.",
        results: "40% cost reduction and 3x faster deployments.",
    },
    Study {
        client: "MedCore Health",
        industry: "Healthcare",
        challenge: "Unplanned equipment downtime disrupted patient scheduling.",
        solution: "Predictive maintenance models fed by existing telemetry.",
        results: "60% less downtime, 30% lower maintenance costs.",
    },
    Study {
        client: "FinSecure Bank",
        industry: "Financial Services",
        challenge: "Audit findings across a flat, perimeter-only network.",
        solution: "Zero-trust architecture with continuous compliance monitoring.",
        results: "100% compliance with no security incidents since rollout.",
    },
];

#[component]
fn StudyCard(study: &'static Study) -> impl IntoView {
    view! {
        <article class="card study">
            <h3>{study.client}</h3>
            <Badge label=study.industry/>
            <h4>"Challenge"</h4>
            <p>{study.challenge}</p>
            <h4>"Solution"</h4>
            <p>{study.solution}</p>
            <h4>"Results"</h4>
            <p class="result">{study.results}</p>
        </article>
    }
}

impl Page for CaseStudies {
    fn key(&self) -> PageKey {
        PageKey::CaseStudies
    }

    fn render(&self, _cx: &RenderContext<'_>) -> Result<AnyView, RenderError> {
        let studies = STUDIES
            .iter()
            .map(|study| view! { <StudyCard study=study/> })
            .collect_view();

        Ok(view! {
            <Hero
                heading="Success Stories"
                lead="Real outcomes from real partnerships across cloud, AI and security."
            />
            <Section>
                <Grid columns=3>{studies}</Grid>
            </Section>
            <Section title="By the Numbers">
                <Grid columns=4>
                    <Metric value="200+" label="Projects Completed"/>
                    <Metric value="98%" label="Client Satisfaction"/>
                    <Metric value="3x" label="Average Performance Gain"/>
                    <Metric value="24/7" label="Support Available"/>
                </Grid>
            </Section>
        }
        .into_any())
    }
}
