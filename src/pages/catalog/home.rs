use leptos::prelude::*;

use crate::pages::key::PageKey;
use crate::pages::page::{Page, RenderContext, RenderError};
use crate::render::components::{Grid, Hero, InfoCard, Metric, Section, Stat};

pub struct Home;

impl Page for Home {
    fn key(&self) -> PageKey {
        PageKey::Home
    }

    fn render(&self, _cx: &RenderContext<'_>) -> Result<AnyView, RenderError> {
        Ok(view! {
            <Hero
                heading="Architecting"
                lead="Transform your business with cutting-edge technology solutions. We don't just deliver services, we architect digital transformations that drive measurable results."
            >
                <div class="actions">
                    <a class="btn-primary" href="/contact">"Schedule Consultation"</a>
                    <a class="btn-outline" href="/case-studies">"View Success Stories"</a>
                </div>
                <Grid columns=3>
                    <Stat value="128" label="Active Projects"/>
                    <Stat value="98%" label="Client Satisfaction"/>
                    <Stat value="$2.4M" label="Cost Savings Generated"/>
                </Grid>
            </Hero>
            <Section
                title="Comprehensive Technology Solutions"
                subtitle="From cloud migration to AI implementation, we deliver end-to-end digital transformation services that drive measurable business outcomes."
            >
                <Grid columns=3>
                    <InfoCard
                        title="Cloud Solutions"
                        body="Migrate, optimize, and scale your infrastructure to reduce costs while improving performance."
                        cta=("Learn More", "/services")
                    />
                    <InfoCard
                        title="AI & Automation"
                        body="Implement intelligent automation solutions to streamline operations and unlock value."
                        cta=("Learn More", "/services")
                    />
                    <InfoCard
                        title="Digital Infrastructure"
                        body="Build scalable, secure, and resilient digital foundations for growth."
                        cta=("Learn More", "/services")
                    />
                </Grid>
            </Section>
            <Section title="Trusted by Industry Leaders">
                <Grid columns=3>
                    <Metric value="40%" label="Infrastructure Cost Reduction"/>
                    <Metric value="3x" label="Deployment Speed Increase"/>
                    <Metric value="99.9%" label="System Uptime Achieved"/>
                </Grid>
            </Section>
            <Section
                title="Innovation Lab"
                subtitle="Stay ahead with our cutting-edge research, whitepapers, and tools."
            >
                <div class="stack">
                    <a class="card row" href="/resources">
                        <span>"AI in Enterprise 2025"</span>
                        <span class="badge">"Whitepaper"</span>
                    </a>
                    <a class="card row" href="/resources">
                        <span>"Cloud Security Best Practices"</span>
                        <span class="badge">"Guide"</span>
                    </a>
                    <a class="btn-primary" href="/resources">"Access Innovation Lab"</a>
                </div>
            </Section>
        }
        .into_any())
    }
}
