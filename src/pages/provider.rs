//! Page module providers.
//!
//! A provider turns a [`PageKey`] into a deferred page. The registry
//! treats the returned future as opaque: it settles exactly once, with the
//! page or an error.

use std::sync::Arc;
use std::time::Duration;

use futures_util::future::{BoxFuture, FutureExt};
use thiserror::Error;

use crate::config::PageConfig;
use crate::pages::catalog;
use crate::pages::key::PageKey;
use crate::pages::page::Page;

/// Result of loading one page module.
pub type LoadResult = Result<Arc<dyn Page>, LoadError>;

/// Errors from loading a page module.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The load ran and failed.
    #[error("page module {key} failed to load: {reason}")]
    Failed { key: PageKey, reason: String },
}

/// Async factory for page modules.
pub trait PageProvider: Send + Sync {
    fn load(&self, key: PageKey) -> BoxFuture<'static, LoadResult>;
}

/// Serves the built-in page catalogue.
///
/// Latency is simulated so the loading placeholder and the preloader have
/// something to hide; `/test/slow-load` gets an extra delay on top.
#[derive(Debug, Clone)]
pub struct CatalogProvider {
    latency: Duration,
    slow_load_delay: Duration,
}

impl CatalogProvider {
    pub fn new(config: &PageConfig) -> Self {
        Self {
            latency: Duration::from_millis(config.simulated_latency_ms),
            slow_load_delay: Duration::from_millis(config.slow_load_delay_ms),
        }
    }

    fn delay_for(&self, key: PageKey) -> Duration {
        match key {
            PageKey::TestSlowLoad => self.latency + self.slow_load_delay,
            _ => self.latency,
        }
    }
}

impl PageProvider for CatalogProvider {
    fn load(&self, key: PageKey) -> BoxFuture<'static, LoadResult> {
        let delay = self.delay_for(key);
        async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            Ok(catalog::page(key))
        }
        .boxed()
    }
}
