//! Page module registry.
//!
//! # Responsibilities
//! - Start a module load on first reference, from the Navigator or the Preloader
//! - Keep at most one load in flight per key; later requesters share it
//! - Cache the settled result for the lifetime of the process
//! - Let a navigation retry a module whose load failed
//!
//! # Design Decisions
//! - Loads are driven by a spawned task, so a fire-and-forget prefetch
//!   settles even when nobody awaits it
//! - The completion step is the only writer of a settled slot, and it only
//!   writes over the attempt that started it
//! - Preloads never retry a failed module; navigations do
//! - A provider that panics counts as a failed load, so the slot still
//!   settles and the next navigation can retry it

use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use futures_util::future::{self, BoxFuture, FutureExt, Shared};
use serde::{Deserialize, Serialize};

use crate::observability::diagnostics::panic_message;
use crate::observability::metrics;
use crate::pages::key::PageKey;
use crate::pages::page::Page;
use crate::pages::provider::{LoadError, LoadResult, PageProvider};

/// Handle on a module load; every clone resolves to the same outcome.
pub type LoadHandle = Shared<BoxFuture<'static, LoadResult>>;

/// Externally visible state of one module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleStatus {
    Unloaded,
    Loading,
    Ready,
    Failed,
}

/// Point-in-time view of one module, for status pages and the CLI.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleSnapshot {
    pub key: PageKey,
    pub status: ModuleStatus,
    /// Duration of the last settled load.
    pub load_ms: Option<u64>,
    /// Number of loads started for this key.
    pub attempts: u64,
    pub error: Option<String>,
}

enum SlotState {
    Loading { attempt: u64, handle: LoadHandle },
    Ready { page: Arc<dyn Page>, took: Duration },
    Failed { error: LoadError, took: Duration },
}

struct Slot {
    state: SlotState,
    attempts: u64,
}

/// Shared, process-wide registry of page modules.
pub struct ModuleRegistry {
    provider: Arc<dyn PageProvider>,
    slots: Arc<DashMap<PageKey, Slot>>,
    next_attempt: AtomicU64,
}

impl ModuleRegistry {
    pub fn new(provider: Arc<dyn PageProvider>) -> Self {
        Self {
            provider,
            slots: Arc::new(DashMap::new()),
            next_attempt: AtomicU64::new(1),
        }
    }

    /// Request a module for display.
    ///
    /// Unloaded and Failed modules start a fresh load; Loading modules hand
    /// out the in-flight handle; Ready modules resolve immediately.
    pub fn request(&self, key: PageKey) -> LoadHandle {
        match self.slots.entry(key) {
            Entry::Occupied(mut occupied) => {
                let slot = occupied.get_mut();
                match &slot.state {
                    SlotState::Ready { page, .. } => ready(Ok(page.clone())),
                    SlotState::Loading { handle, .. } => handle.clone(),
                    SlotState::Failed { error, .. } => {
                        tracing::info!(page = %key, error = %error, "Retrying failed page module");
                        let (attempt, handle) = self.start(key);
                        slot.state = SlotState::Loading {
                            attempt,
                            handle: handle.clone(),
                        };
                        slot.attempts += 1;
                        handle
                    }
                }
            }
            Entry::Vacant(vacant) => {
                let (attempt, handle) = self.start(key);
                vacant.insert(Slot {
                    state: SlotState::Loading {
                        attempt,
                        handle: handle.clone(),
                    },
                    attempts: 1,
                });
                handle
            }
        }
    }

    /// Start loading a module only if it has never been referenced.
    ///
    /// Returns the handle when this call started the load.
    pub fn prefetch(&self, key: PageKey) -> Option<LoadHandle> {
        match self.slots.entry(key) {
            Entry::Occupied(_) => None,
            Entry::Vacant(vacant) => {
                let (attempt, handle) = self.start(key);
                vacant.insert(Slot {
                    state: SlotState::Loading {
                        attempt,
                        handle: handle.clone(),
                    },
                    attempts: 1,
                });
                Some(handle)
            }
        }
    }

    pub fn status(&self, key: PageKey) -> ModuleStatus {
        match self.slots.get(&key) {
            None => ModuleStatus::Unloaded,
            Some(slot) => match slot.state {
                SlotState::Loading { .. } => ModuleStatus::Loading,
                SlotState::Ready { .. } => ModuleStatus::Ready,
                SlotState::Failed { .. } => ModuleStatus::Failed,
            },
        }
    }

    /// Snapshot of every known page module, in declaration order.
    pub fn snapshot(&self) -> Vec<ModuleSnapshot> {
        PageKey::ALL
            .iter()
            .map(|&key| match self.slots.get(&key) {
                None => ModuleSnapshot {
                    key,
                    status: ModuleStatus::Unloaded,
                    load_ms: None,
                    attempts: 0,
                    error: None,
                },
                Some(slot) => {
                    let (status, took, error) = match &slot.state {
                        SlotState::Loading { .. } => (ModuleStatus::Loading, None, None),
                        SlotState::Ready { took, .. } => (ModuleStatus::Ready, Some(*took), None),
                        SlotState::Failed { error, took } => {
                            (ModuleStatus::Failed, Some(*took), Some(error.to_string()))
                        }
                    };
                    ModuleSnapshot {
                        key,
                        status,
                        load_ms: took.map(|d| d.as_millis() as u64),
                        attempts: slot.attempts,
                        error,
                    }
                }
            })
            .collect()
    }

    /// Kick off a load. Must be called with the slot's entry held so no
    /// second load can start for the same key.
    fn start(&self, key: PageKey) -> (u64, LoadHandle) {
        let attempt = self.next_attempt.fetch_add(1, Ordering::Relaxed);
        let slots = Arc::clone(&self.slots);
        let load = self.provider.load(key);
        let started = Instant::now();

        tracing::debug!(page = %key, attempt, "Loading page module");

        let handle = async move {
            let result = match AssertUnwindSafe(load).catch_unwind().await {
                Ok(result) => result,
                Err(payload) => Err(LoadError::Failed {
                    key,
                    reason: format!("provider panicked: {}", panic_message(payload.as_ref())),
                }),
            };
            let took = started.elapsed();
            metrics::record_page_load(key, result.is_ok(), took);

            if let Some(mut slot) = slots.get_mut(&key) {
                let current = matches!(
                    slot.state,
                    SlotState::Loading { attempt: a, .. } if a == attempt
                );
                if current {
                    slot.state = match &result {
                        Ok(page) => SlotState::Ready {
                            page: page.clone(),
                            took,
                        },
                        Err(error) => SlotState::Failed {
                            error: error.clone(),
                            took,
                        },
                    };
                }
            }

            match &result {
                Ok(_) => tracing::debug!(page = %key, took_ms = took.as_millis() as u64, "Page module ready"),
                Err(e) => tracing::warn!(page = %key, error = %e, "Page module failed to load"),
            }
            result
        }
        .boxed()
        .shared();

        tokio::spawn(handle.clone());
        (attempt, handle)
    }
}

fn ready(result: LoadResult) -> LoadHandle {
    future::ready(result).boxed().shared()
}
