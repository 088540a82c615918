use leptos::prelude::*;

use crate::pages::key::PageKey;
use crate::pages::page::{Page, RenderContext, RenderError};
use crate::render::components::{ActionButton, BulletList, Note, Section};

/// Lets a visitor make page construction fail on purpose.
pub struct TestError;

pub const RENDER_ERROR_MESSAGE: &str = "Intentional render error for testing error boundaries!";

static WHAT_TO_TEST: [&str; 4] = [
    "Render Error: the page fails while building and the render guard takes over.",
    "Event Error: the failure is handled where it happens; the guard is not involved.",
    "Async Error: a background task fails later; the guard cannot see it.",
    "Error Recovery: use the guard's retry button to rebuild the page.",
];

impl Page for TestError {
    fn key(&self) -> PageKey {
        PageKey::TestError
    }

    fn render(&self, cx: &RenderContext<'_>) -> Result<AnyView, RenderError> {
        if cx.locals.throw_on_render() {
            return Err(RenderError::Construction(RENDER_ERROR_MESSAGE.to_string()));
        }

        Ok(view! {
            <Section title="Error Boundary Testing">
                <Note
                    kind="warning"
                    lead="Note:"
                    body="This page is designed to test the render guard. Use the controls below to trigger different types of errors."
                />
                <ActionButton action="/_site/test/error/render" label="Enable Render Error"/>
                <ActionButton action="/_site/test/error/event" label="Trigger Event Error"/>
                <ActionButton action="/_site/test/error/async" label="Trigger Async Error"/>
                <h2>"What to Test"</h2>
                <BulletList items=&WHAT_TO_TEST/>
                <p><a class="btn" href="/test/loading">"Next: Test Loading States →"</a></p>
            </Section>
        }
        .into_any())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::{ModuleRegistry, PageLocals};
    use crate::test_support::ScriptedProvider;

    #[test]
    fn test_render_fails_while_switch_is_on() {
        let registry = ModuleRegistry::new(ScriptedProvider::new());
        let mut locals = PageLocals::default();
        locals.toggle_throw_on_render();
        let cx = RenderContext {
            location: "/test/error",
            locals: &locals,
            registry: &registry,
        };
        match TestError.render(&cx) {
            Err(error) => assert_eq!(
                error,
                RenderError::Construction(RENDER_ERROR_MESSAGE.to_string())
            ),
            Ok(_) => panic!("expected a construction failure"),
        }
    }
}
