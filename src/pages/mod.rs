//! Page modules.
//!
//! # Data Flow
//! ```text
//! Navigator / Preloader
//!     → registry.rs (at most one load in flight per key, cached result)
//!     → provider.rs (async factory: PageKey → Arc<dyn Page>)
//!     → catalog/ (the site's pages)
//!
//! Render time:
//!     Arc<dyn Page> + RenderContext (location, page-local state)
//!     → Page::render → view | RenderError
//! ```
//!
//! # Design Decisions
//! - Loading a module and constructing its markup are separate steps;
//!   only construction runs under the render guard
//! - Page-local state lives in the visitor session, not in the page

pub mod catalog;
pub mod key;
pub mod locals;
pub mod page;
pub mod provider;
pub mod registry;

pub use key::PageKey;
pub use locals::PageLocals;
pub use page::{Page, RenderContext, RenderError};
pub use provider::{CatalogProvider, LoadError, LoadResult, PageProvider};
pub use registry::{ModuleRegistry, ModuleSnapshot, ModuleStatus};
