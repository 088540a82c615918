//! Shared page chrome.

use leptos::prelude::*;

const SITE_NAME: &str = "ProBox InfoTech";

const NAV: [(&str, &str); 6] = [
    ("/", "Home"),
    ("/services", "Services"),
    ("/case-studies", "Case Studies"),
    ("/about", "About"),
    ("/resources", "Resources"),
    ("/test", "Test"),
];

const STYLES: &str = "body{margin:0;font-family:system-ui,sans-serif;color:#0f172a}\
.container-default{max-width:72rem;margin:0 auto;padding:0 1rem}\
header,footer{border-color:#e2e8f0}nav a{padding:.5rem .75rem}nav a.active{color:#2563eb}\
.card{border:1px solid #e2e8f0;border-radius:.75rem;padding:1.5rem}\
.grid{display:grid;gap:1.5rem}.cols-2{grid-template-columns:repeat(2,1fr)}\
.cols-3{grid-template-columns:repeat(3,1fr)}.cols-4{grid-template-columns:repeat(4,1fr)}\
.gradient-hero{background:linear-gradient(135deg,#1e3a8a,#2563eb);color:#fff;padding:4rem 0}\
.spinner{display:flex;align-items:center;gap:.75rem;justify-content:center;padding:2rem}\
form.inline{display:inline-block;margin:.25rem}";

#[component]
fn NavItem(href: &'static str, label: &'static str, active: bool) -> impl IntoView {
    if active {
        view! { <a href=href class="active" aria-current="page">{label}</a> }.into_any()
    } else {
        view! { <a href=href>{label}</a> }.into_any()
    }
}

#[component]
fn Header(location: String) -> impl IntoView {
    view! {
        <header>
            <div class="container-default bar">
                <a href="/" class="brand" aria-label=format!("{} Home", SITE_NAME)>{SITE_NAME}</a>
                <nav aria-label="Main navigation">
                    {NAV
                        .iter()
                        .map(|(href, label)| view! { <NavItem href=*href label=*label active={*href == location}/> })
                        .collect_view()}
                </nav>
                <div class="actions">
                    <a href="/contact" class="btn">"Contact"</a>
                    <a href="/client-portal" class="btn-primary">"Client Portal"</a>
                </div>
            </div>
        </header>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer role="contentinfo">
            <div class="container-default grid cols-3">
                <div>
                    <h3>"ProBox InfoTech"</h3>
                    <p>"Architecting digital futures through innovative technology solutions."</p>
                </div>
                <div>
                    <h4>"Services"</h4>
                    <ul>
                        <li>"Cloud Solutions"</li>
                        <li>"AI & Automation"</li>
                        <li>"Digital Infrastructure"</li>
                        <li>"Cybersecurity"</li>
                    </ul>
                </div>
                <div>
                    <h4>"Company"</h4>
                    <ul>
                        <li><a href="/about">"About Us"</a></li>
                        <li><a href="/case-studies">"Case Studies"</a></li>
                        <li><a href="/resources">"Resources"</a></li>
                    </ul>
                </div>
            </div>
            <div class="copyright">"© 2025 ProBox InfoTech. All Rights Reserved."</div>
        </footer>
    }
}

#[component]
fn Head(title: String) -> impl IntoView {
    view! {
        <head>
            <meta charset="utf-8"/>
            <meta name="viewport" content="width=device-width, initial-scale=1"/>
            <title>{format!("{} | {}", title, SITE_NAME)}</title>
            <style>{STYLES}</style>
        </head>
    }
}

/// A page inside the site chrome.
pub fn document(title: &str, location: &str, body: AnyView) -> String {
    let page = view! {
        <html lang="en">
            <Head title=title.to_string()/>
            <body>
                <Header location=location.to_string()/>
                <main role="main">{body}</main>
                <Footer/>
            </body>
        </html>
    };
    format!("<!DOCTYPE html>{}", page.to_html())
}

/// A standalone page without chrome.
pub fn bare_document(title: &str, body: AnyView) -> String {
    let page = view! {
        <html lang="en">
            <Head title=title.to_string()/>
            <body>
                <main role="main">{body}</main>
            </body>
        </html>
    };
    format!("<!DOCTYPE html>{}", page.to_html())
}
