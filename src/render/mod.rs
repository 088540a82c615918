//! Rendering subsystem.
//!
//! # Data Flow
//! ```text
//! Navigator outcome
//!     → guard.rs (supervise page construction, diagnostic view on failure)
//!     → layout.rs (header / nav / footer chrome around the page)
//!     → leptos `to_html` → HTML response
//!
//! No route / routing error / handler panic:
//!     → fallback.rs (not found, status or application error view)
//!
//! Module still loading:
//!     → spinner.rs (loading placeholder that refreshes itself)
//! ```

pub mod components;
pub mod fallback;
pub mod guard;
pub mod layout;
pub mod spinner;

pub use fallback::{FallbackCause, FallbackView};
pub use guard::{ErrorInfo, GuardState, Guarded, RenderGuard};
