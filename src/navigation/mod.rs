//! Navigation subsystem.
//!
//! # Data Flow
//! ```text
//! Location change
//!     → navigator.rs (resolve, request module, wait, commit or drop stale)
//!     → preloader.rs (after the settle delay, warm likely next pages)
//!
//! Both share the process-wide ModuleRegistry.
//! ```

pub mod navigator;
pub mod preloader;

pub use navigator::{
    check_location, NavigationState, Navigator, PendingNavigation, RoutingError, Settled, Started,
};
pub use preloader::Preloader;
