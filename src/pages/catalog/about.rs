use leptos::prelude::*;

use crate::pages::key::PageKey;
use crate::pages::page::{Page, RenderContext, RenderError};
use crate::render::components::{Grid, Hero, InfoCard, Section, Stat};

pub struct About;

impl Page for About {
    fn key(&self) -> PageKey {
        PageKey::About
    }

    fn render(&self, _cx: &RenderContext<'_>) -> Result<AnyView, RenderError> {
        Ok(view! {
            <Hero
                heading="Architecting Digital"
                lead="From traditional IT consulting to digital transformation leadership, discover the story behind ProBox InfoTech and the team driving innovation across industries."
            >
                <Grid columns=4>
                    <Stat value="12+" label="Years of Excellence"/>
                    <Stat value="200+" label="Projects"/>
                    <Stat value="95%" label="Client Satisfaction"/>
                    <Stat value="50+" label="Tech Partners"/>
                </Grid>
            </Hero>
            <Section
                title="Our Journey"
                subtitle="From humble beginnings to industry leadership, explore milestones that shaped ProBox InfoTech."
            >
                <InfoCard
                    title="Foundation & Vision, 2013"
                    body="ProBox InfoTech was founded to bridge the gap between business goals and technology execution. We began as a small team delivering modernization projects for SMEs and grew into a transformation partner."
                />
            </Section>
            <Section title="Our Core Values">
                <Grid columns=4>
                    <InfoCard title="Innovation" body="Continuously explore new ideas, solutions, and technologies."/>
                    <InfoCard title="Partnership" body="Win as a team with our clients to achieve long-term success."/>
                    <InfoCard title="Excellence" body="Deliver the highest standards of quality and reliability."/>
                    <InfoCard title="Integrity" body="Operate with transparency and accountability."/>
                </Grid>
            </Section>
            <Section title="Why Choose ProBox InfoTech?">
                <Grid columns=3>
                    <InfoCard
                        title="True Partnership"
                        body="We act as an extension of your team to achieve outcomes aligned to your strategy."
                    />
                    <InfoCard
                        title="Complete Transparency"
                        body="Clear pricing, reporting, and delivery with full visibility."
                    />
                    <InfoCard
                        title="Business Impact"
                        body="Focus on initiatives that deliver measurable impact and ROI."
                        cta=("Schedule Consultation", "/contact")
                    />
                </Grid>
            </Section>
        }
        .into_any())
    }
}
