//! Shared page components: sections, cards, stats and badges.
//!
//! Text reaches the output through `view!`, which escapes it; nothing here
//! splices raw HTML.

use leptos::prelude::*;

/// A titled page section.
#[component]
pub fn Section(
    #[prop(optional)] title: Option<&'static str>,
    #[prop(optional)] subtitle: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="section">
            <div class="container-default">
                {title.map(|title| view! { <h2 class="text-center">{title}</h2> })}
                {subtitle.map(|subtitle| view! { <p class="subtitle">{subtitle}</p> })}
                <div class="section-body">{children()}</div>
            </div>
        </section>
    }
}

/// Page hero banner.
#[component]
pub fn Hero(
    heading: &'static str,
    lead: &'static str,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <section class="gradient-hero">
            <div class="container-default">
                <h1>{heading}</h1>
                <p class="lead">{lead}</p>
                {children.map(|children| children())}
            </div>
        </section>
    }
}

#[component]
pub fn Stat(value: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="stat">
            <div class="stat-value">{value}</div>
            <div class="stat-label">{label}</div>
        </div>
    }
}

#[component]
pub fn Metric(value: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="card metric">
            <div class="metric-value">{value}</div>
            <div class="metric-label">{label}</div>
        </div>
    }
}

/// Card with an optional call to action.
#[component]
pub fn InfoCard(
    title: &'static str,
    body: &'static str,
    #[prop(optional)] cta: Option<(&'static str, &'static str)>,
) -> impl IntoView {
    view! {
        <div class="card">
            <h3>{title}</h3>
            <p>{body}</p>
            {cta.map(|(label, href)| view! { <a class="cta" href=href>{format!("{} →", label)}</a> })}
        </div>
    }
}

#[component]
pub fn Badge(label: &'static str) -> impl IntoView {
    view! { <span class="badge">{label}</span> }
}

/// A grid of child views.
#[component]
pub fn Grid(columns: u8, children: Children) -> impl IntoView {
    view! { <div class=format!("grid cols-{}", columns)>{children()}</div> }
}

/// Bulleted list of plain text items.
#[component]
pub fn BulletList(items: &'static [&'static str]) -> impl IntoView {
    view! {
        <ul>
            {items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
        </ul>
    }
}

/// A button that POSTs to `action`; the only way pages trigger state changes.
#[component]
pub fn ActionButton(action: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <form method="post" action=action class="inline">
            <button type="submit" class="btn">{label}</button>
        </form>
    }
}

/// Asks the server to preload the module behind `path`.
#[component]
pub fn PreloadButton(path: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <form method="post" action="/_site/preload" class="inline">
            <input type="hidden" name="path" value=path/>
            <button type="submit" class="btn">{label}</button>
        </form>
    }
}

/// Callout box with a highlighted lead-in.
#[component]
pub fn Note(
    kind: &'static str,
    #[prop(into)] lead: String,
    #[prop(into)] body: String,
) -> impl IntoView {
    view! {
        <div class=format!("note note-{}", kind)>
            <p>
                <strong>{lead}</strong>
                <span>{body}</span>
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_components_escape_inputs() {
        let html = view! {
            <Note kind="error" lead="Error:" body="<script>alert(1)</script>"/>
        }
        .to_html();
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<script>"));

        let html = view! {
            <InfoCard title="Learn" body="body" cta=("More", "/x?a=1&b=2")/>
        }
        .to_html();
        assert!(html.contains("/x?a=1&amp;b=2"));
    }

    #[test]
    fn test_section_skips_missing_headings() {
        let html = view! {
            <Section title="Title"><p>"x"</p></Section>
        }
        .to_html();
        assert!(html.contains("Title</h2>"));
        assert!(!html.contains("class=\"subtitle\""));
        assert!(html.contains("<p>x</p>"));
    }

    #[test]
    fn test_action_button_posts() {
        let html = view! { <ActionButton action="/_site/guard/retry" label="Retry"/> }.to_html();
        assert!(html.contains(r#"method="post""#));
        assert!(html.contains(r#"action="/_site/guard/retry""#));
        assert!(html.contains("Retry</button>"));
    }
}
