//! Per-visitor navigator.
//!
//! # Responsibilities
//! - Resolve each location change against the route table
//! - Request the matched module from the shared registry
//! - Commit a settled load only if it still belongs to the current location
//!
//! # Design Decisions
//! - Navigation is split in two steps so the caller can wait for the
//!   module without holding the visitor's session
//! - In-flight loads are never aborted; a stale completion is dropped and
//!   the caller is told where the visitor is now
//! - Locations are compared with one trailing slash ignored, matching how
//!   the route table resolves them

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

use crate::pages::registry::LoadHandle;
use crate::pages::{LoadResult, ModuleRegistry};
use crate::render::FallbackCause;
use crate::routing::{Resolution, RouteMatch, RouteTable};

/// Longest location the navigator accepts.
pub const MAX_LOCATION_LEN: usize = 2048;

/// Failure of the routing layer itself, carrying an HTTP status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RoutingError {
    pub status: u16,
    pub message: String,
}

impl RoutingError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn method_not_allowed(method: &str) -> Self {
        Self::new(405, format!("Method {} is not allowed on pages", method))
    }
}

impl From<&RoutingError> for FallbackCause {
    fn from(error: &RoutingError) -> Self {
        FallbackCause::Status {
            status: error.status,
            message: Some(error.message.clone()),
        }
    }
}

/// Where the visitor is, and what matched there.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NavigationState {
    pub current_location: Option<String>,
    /// `None` while nothing has matched (not found, or no navigation yet).
    pub matched: Option<RouteMatch>,
}

/// Result of starting a navigation.
#[derive(Debug)]
pub enum Started {
    /// No route matched; render the fallback view.
    NotFound { location: String },
    /// A module was requested; wait on it, then commit.
    Pending(PendingNavigation),
}

/// A navigation waiting for its module.
pub struct PendingNavigation {
    location: String,
    matched: RouteMatch,
    handle: LoadHandle,
}

impl fmt::Debug for PendingNavigation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingNavigation")
            .field("location", &self.location)
            .field("matched", &self.matched)
            .finish_non_exhaustive()
    }
}

impl PendingNavigation {
    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn matched(&self) -> &RouteMatch {
        &self.matched
    }

    /// Wait up to `window` for the module to settle.
    ///
    /// `None` means it is still loading; the load keeps running.
    pub async fn wait(&self, window: Duration) -> Option<LoadResult> {
        tokio::time::timeout(window, self.handle.clone()).await.ok()
    }
}

/// Outcome of committing a settled navigation.
pub enum Settled {
    Committed {
        location: String,
        matched: RouteMatch,
        result: LoadResult,
    },
    /// The visitor moved on while the module loaded.
    Superseded { current: String },
}

pub struct Navigator {
    table: Arc<RouteTable>,
    registry: Arc<ModuleRegistry>,
    state: NavigationState,
}

impl Navigator {
    pub fn new(table: Arc<RouteTable>, registry: Arc<ModuleRegistry>) -> Self {
        Self {
            table,
            registry,
            state: NavigationState::default(),
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn current_location(&self) -> Option<&str> {
        self.state.current_location.as_deref()
    }

    /// Process a location change.
    pub fn navigate(&mut self, location: &str) -> Result<Started, RoutingError> {
        check_location(location)?;

        self.state.current_location = Some(location.to_string());
        match self.table.resolve(location) {
            Resolution::NotFound => {
                tracing::debug!(location, "No route matched");
                self.state.matched = None;
                Ok(Started::NotFound {
                    location: location.to_string(),
                })
            }
            Resolution::Matched(matched) => {
                tracing::debug!(
                    location,
                    page = %matched.module,
                    pattern = %matched.pattern,
                    "Route matched"
                );
                let handle = self.registry.request(matched.module);
                self.state.matched = Some(matched.clone());
                Ok(Started::Pending(PendingNavigation {
                    location: location.to_string(),
                    matched,
                    handle,
                }))
            }
        }
    }

    /// Commit a settled load if the visitor is still where it started.
    pub fn commit(&self, pending: PendingNavigation, result: LoadResult) -> Settled {
        let current = self.state.current_location.as_deref().unwrap_or("/");
        if same_location(current, &pending.location) {
            Settled::Committed {
                location: pending.location,
                matched: pending.matched,
                result,
            }
        } else {
            tracing::debug!(
                stale = %pending.location,
                current,
                "Dropping stale navigation result"
            );
            Settled::Superseded {
                current: current.to_string(),
            }
        }
    }
}

/// Reject locations the site never serves.
///
/// Accepted locations are later echoed into `Location` headers, so anything
/// a browser could read as another origin (`//host`, `/\host`) is refused.
pub fn check_location(location: &str) -> Result<(), RoutingError> {
    if !location.starts_with('/') {
        return Err(RoutingError::new(400, "Locations must start with '/'"));
    }
    if location.starts_with("//") {
        return Err(RoutingError::new(400, "Locations may not start with '//'"));
    }
    if location.contains('\\') {
        return Err(RoutingError::new(400, "Locations may not contain '\\'"));
    }
    if location.len() > MAX_LOCATION_LEN {
        return Err(RoutingError::new(414, "Location is too long"));
    }
    if location.chars().any(char::is_control) {
        return Err(RoutingError::new(
            400,
            "Locations may not contain control characters",
        ));
    }
    Ok(())
}

/// Compare locations with one trailing slash ignored.
pub(crate) fn same_location(a: &str, b: &str) -> bool {
    trim_slash(a) == trim_slash(b)
}

fn trim_slash(location: &str) -> &str {
    if location.len() > 1 {
        location.strip_suffix('/').unwrap_or(location)
    } else {
        location
    }
}
