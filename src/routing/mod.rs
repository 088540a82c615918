//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Request location ("/test/error")
//!     → matcher.rs (split into segments, compare patterns)
//!     → table.rs (walk the route tree level by level)
//!     → Return: Matched(RouteMatch) or NotFound
//!
//! Route Compilation (at startup):
//!     site.rs declaration
//!     → RouteTable::new (structural validation)
//!     → Freeze as immutable table shared via Arc
//! ```
//!
//! # Design Decisions
//! - Routes declared once at startup, immutable at runtime
//! - Exact, case-sensitive segment comparison; no regex
//! - Deterministic: longest static prefix wins, ties by declaration order
//! - Catch-all is the match of last resort at every level

pub mod matcher;
pub mod site;
pub mod table;

pub use matcher::PathPattern;
pub use site::site_table;
pub use table::{Resolution, RouteEntry, RouteMatch, RouteTable, RouteTableError};
