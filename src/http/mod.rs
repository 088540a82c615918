//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware: request ID, trace, timeout)
//!     → session.rs (cookie → visitor session)
//!     → handlers.rs (page requests: navigate, suspend, commit, render)
//!     → actions.rs (form posts: guard recovery, demo errors, preload, contact)
//!     → status.rs (JSON status and module reports)
//! ```

pub mod actions;
pub mod handlers;
pub mod server;
pub mod session;
pub mod status;

pub use server::{AppState, ServerError, SiteServer};
pub use session::{Session, SessionStore};
