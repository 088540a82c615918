use leptos::prelude::*;

use crate::pages::key::PageKey;
use crate::pages::page::{Page, RenderContext, RenderError};
use crate::render::components::{Badge, BulletList, Grid, Hero, Section, Stat};

pub struct Services;

const PLATFORMS: [&str; 6] = ["AWS", "Microsoft Azure", "Google Cloud", "Kubernetes", "Docker", "Terraform"];

static BENEFITS: [&str; 3] = [
    "Cost Optimization: reduce infrastructure costs by 30-50%.",
    "Enhanced Security with enterprise-grade frameworks.",
    "Scalable Architecture that grows with your business.",
];

const PROCESS: [(&str, &str); 4] = [
    ("Discovery & Assessment", "Comprehensive infrastructure audit and migration planning."),
    ("Architecture Design", "Cloud-native architecture with security and compliance."),
    ("Migration & Testing", "Phased migration with minimal downtime and thorough testing."),
    ("Optimization & Support", "Continuous monitoring and performance optimization."),
];

const STORIES: [(&str, &str, &str); 3] = [
    ("Cloud Migration", "Migrated legacy infrastructure to AWS, reducing costs by 45% while improving performance and reliability.", "45% cost reduction"),
    ("AI Implementation", "Implemented predictive maintenance AI, reducing equipment downtime by 60% and maintenance costs by 30%.", "60% downtime reduction"),
    ("Cybersecurity", "Implemented zero-trust security framework, achieving 100% compliance and preventing security incidents.", "100% compliance"),
];

#[component]
fn ProcessStep(index: usize, title: &'static str, body: &'static str) -> impl IntoView {
    view! {
        <div class="step">
            <div class="step-index">{index.to_string()}</div>
            <div>
                <h4>{title}</h4>
                <p>{body}</p>
            </div>
        </div>
    }
}

impl Page for Services {
    fn key(&self) -> PageKey {
        PageKey::Services
    }

    fn render(&self, _cx: &RenderContext<'_>) -> Result<AnyView, RenderError> {
        let platforms = PLATFORMS
            .into_iter()
            .map(|label| view! { <Badge label=label/> })
            .collect_view();
        let steps = PROCESS
            .into_iter()
            .enumerate()
            .map(|(i, (title, body))| view! { <ProcessStep index={i + 1} title=title body=body/> })
            .collect_view();
        let stories = STORIES
            .into_iter()
            .map(|(tag, body, result)| {
                view! {
                    <div class="card">
                        <Badge label=tag/>
                        <p>{body}</p>
                        <div class="result">{result}</div>
                    </div>
                }
            })
            .collect_view();

        Ok(view! {
            <Hero
                heading="Comprehensive"
                lead="From cloud transformation to AI implementation, we deliver end-to-end digital solutions that drive measurable business outcomes."
            >
                <Grid columns=3>
                    <Stat value="6" label="Core Service Areas"/>
                    <Stat value="50+" label="Technology Partners"/>
                    <Stat value="200+" label="Successful Projects"/>
                </Grid>
            </Hero>
            <Section title="Cloud Transformation" subtitle="Migrate, optimize, and scale with confidence">
                <Grid columns=2>
                    <div class="card">
                        {platforms}
                        <BulletList items=&BENEFITS/>
                    </div>
                    <div class="card">
                        <h3>"Migration Process Workflow"</h3>
                        {steps}
                    </div>
                </Grid>
            </Section>
            <Section title="Success Stories">
                <Grid columns=3>{stories}</Grid>
            </Section>
        }
        .into_any())
    }
}
