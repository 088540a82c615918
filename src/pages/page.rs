//! The page contract.

use leptos::prelude::AnyView;
use thiserror::Error;

use crate::pages::key::PageKey;
use crate::pages::locals::PageLocals;
use crate::pages::provider::LoadError;
use crate::pages::registry::ModuleRegistry;

/// A loaded page module.
///
/// `render` is the construction phase: it runs under the render guard on
/// every visit and may fail.
pub trait Page: Send + Sync {
    fn key(&self) -> PageKey;

    fn title(&self) -> &'static str {
        self.key().title()
    }

    fn render(&self, cx: &RenderContext<'_>) -> Result<AnyView, RenderError>;
}

/// Everything a page may read while it renders.
pub struct RenderContext<'a> {
    /// Location being rendered, as requested.
    pub location: &'a str,
    /// The visitor's page-local state.
    pub locals: &'a PageLocals,
    /// Module registry, for pages that report on loading.
    pub registry: &'a ModuleRegistry,
}

/// Failure while constructing the supervised subtree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The page refused to build.
    #[error("{0}")]
    Construction(String),

    /// The page module could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The page panicked while building.
    #[error("panicked while rendering: {0}")]
    Panicked(String),
}

impl RenderError {
    /// Metrics label for the failure class.
    pub fn kind(&self) -> &'static str {
        match self {
            RenderError::Construction(_) => "construction",
            RenderError::Load(_) => "load",
            RenderError::Panicked(_) => "panic",
        }
    }
}
