use leptos::prelude::*;

use crate::pages::key::PageKey;
use crate::pages::page::{Page, RenderContext, RenderError};
use crate::render::components::{BulletList, Grid, Note, Section};

pub struct Contact;

const TOPICS: [&str; 6] = [
    "General Inquiry",
    "Cloud Solutions",
    "AI & Automation",
    "Digital Infrastructure",
    "Cybersecurity",
    "Consulting",
];

static OFFICE: [&str; 3] = [
    "San Francisco, CA",
    "www.proboxinfotech.com",
    "hello@proboxinfotech.com",
];

static SUPPORT: [&str; 3] = [
    "Phone Support: Mon-Fri, 9AM-6PM PST",
    "Live Chat: available on our website",
    "Email Support: support@proboxinfotech.com",
];

#[component]
fn ContactForm() -> impl IntoView {
    view! {
        <form method="post" action="/_site/contact" class="card form">
            <label>"Name" <input name="name" required=true/></label>
            <label>"Email" <input name="email" type="email" required=true/></label>
            <label>"Company" <input name="company"/></label>
            <label>
                "Topic"
                <select name="topic">
                    {TOPICS.into_iter().map(|topic| view! { <option>{topic}</option> }).collect_view()}
                </select>
            </label>
            <label>"Message" <textarea name="message" rows="5" required=true></textarea></label>
            <button type="submit" class="btn-primary">"Send Message"</button>
        </form>
    }
}

impl Page for Contact {
    fn key(&self) -> PageKey {
        PageKey::Contact
    }

    fn render(&self, cx: &RenderContext<'_>) -> Result<AnyView, RenderError> {
        let confirmation = cx.locals.contact_submitted_by().map(|name| {
            view! {
                <Note
                    kind="success"
                    lead=format!("Thanks, {}!", name)
                    body="We usually respond within 24 hours."
                />
            }
        });

        Ok(view! {
            <Section
                title="Let's Talk"
                subtitle="Tell us about your project and we'll get back to you within 24 hours."
            >
                {confirmation}
                <Grid columns=2>
                    <ContactForm/>
                    <div>
                        <BulletList items=&OFFICE/>
                        <BulletList items=&SUPPORT/>
                    </div>
                </Grid>
            </Section>
        }
        .into_any())
    }
}
