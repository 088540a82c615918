//! Page-local state.
//!
//! State a page keeps between visits within one session (a toggled
//! switch, a submitted form). It belongs to the mounted page: committing a
//! navigation to a different page drops it, and render-guard recovery
//! drops all of it.

use std::collections::HashMap;

use crate::pages::key::PageKey;

#[derive(Debug, Clone, PartialEq, Eq)]
enum LocalState {
    TestError { throw_on_render: bool },
    Contact { submitted_by: String },
}

#[derive(Debug, Clone, Default)]
pub struct PageLocals {
    entries: HashMap<PageKey, LocalState>,
}

impl PageLocals {
    /// Whether the error test page should fail its next render.
    pub fn throw_on_render(&self) -> bool {
        matches!(
            self.entries.get(&PageKey::TestError),
            Some(LocalState::TestError { throw_on_render: true })
        )
    }

    /// Flip the error test page's render switch, returning the new value.
    pub fn toggle_throw_on_render(&mut self) -> bool {
        let next = !self.throw_on_render();
        self.entries.insert(
            PageKey::TestError,
            LocalState::TestError {
                throw_on_render: next,
            },
        );
        next
    }

    /// Name given on the last contact form submission.
    pub fn contact_submitted_by(&self) -> Option<&str> {
        match self.entries.get(&PageKey::Contact) {
            Some(LocalState::Contact { submitted_by }) => Some(submitted_by),
            _ => None,
        }
    }

    pub fn record_contact(&mut self, name: impl Into<String>) {
        self.entries.insert(
            PageKey::Contact,
            LocalState::Contact {
                submitted_by: name.into(),
            },
        );
    }

    /// Drop the state of every page except `mounted`.
    pub fn unmount_except(&mut self, mounted: PageKey) {
        self.entries.retain(|key, _| *key == mounted);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
