//! Opportunistic route preloading.
//!
//! # Responsibilities
//! - After a navigation settles, warm the modules of likely next pages
//! - Replace, never stack, the pending task when the visitor moves on
//! - Report preload failures without surfacing them to the visitor
//!
//! # Design Decisions
//! - One pending task per visitor, cancelled with `JoinHandle::abort`
//! - Only Unloaded modules are started; a Failed module is left for the
//!   next real navigation to retry
//! - Candidates are resolved through the route table once, up front

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::config::PreloadConfig;
use crate::navigation::navigator::same_location;
use crate::observability::diagnostics::{Diagnostic, DiagnosticOrigin, DiagnosticSink};
use crate::observability::metrics;
use crate::pages::{ModuleRegistry, PageKey};
use crate::pages::registry::LoadHandle;
use crate::routing::{Resolution, RouteTable};

pub struct Preloader {
    registry: Arc<ModuleRegistry>,
    table: Arc<RouteTable>,
    sink: Arc<dyn DiagnosticSink>,
    enabled: bool,
    delay: Duration,
    candidates: Vec<(String, PageKey)>,
    pending: Option<JoinHandle<()>>,
    fired: Arc<AtomicU64>,
}

impl Preloader {
    pub fn new(
        config: &PreloadConfig,
        table: Arc<RouteTable>,
        registry: Arc<ModuleRegistry>,
        sink: Arc<dyn DiagnosticSink>,
    ) -> Self {
        let candidates = config
            .candidates
            .iter()
            .filter_map(|path| match table.resolve(path) {
                Resolution::Matched(m) if !m.catch_all => Some((path.clone(), m.module)),
                _ => {
                    tracing::warn!(path = %path, "Ignoring preload candidate without a route");
                    None
                }
            })
            .collect();

        Self {
            registry,
            table,
            sink,
            enabled: config.enabled,
            delay: Duration::from_millis(config.settle_delay_ms),
            candidates,
            pending: None,
            fired: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Schedule a preload batch for the visitor now at `location`.
    pub fn on_navigate(&mut self, location: &str) {
        self.cancel();
        if !self.enabled {
            return;
        }

        let targets: Vec<PageKey> = self
            .candidates
            .iter()
            .filter(|(path, _)| !same_location(path, location))
            .map(|(_, key)| *key)
            .collect();
        if targets.is_empty() {
            return;
        }

        let registry = Arc::clone(&self.registry);
        let sink = Arc::clone(&self.sink);
        let fired = Arc::clone(&self.fired);
        let delay = self.delay;

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            fired.fetch_add(1, Ordering::Relaxed);

            let mut started = 0;
            for key in targets {
                if let Some(handle) = registry.prefetch(key) {
                    started += 1;
                    watch(key, handle, Arc::clone(&sink));
                }
            }
            metrics::record_preload_batch(started);
            tracing::debug!(started, "Preload batch fired");
        }));
    }

    /// Start loading the module behind `location` right away.
    ///
    /// Returns the page key when a load was started.
    pub fn preload_now(&self, location: &str) -> Option<PageKey> {
        let key = match self.table.resolve(location) {
            Resolution::Matched(m) if !m.catch_all => m.module,
            _ => return None,
        };
        let handle = self.registry.prefetch(key)?;
        tracing::info!(location, page = %key, "Preloading route");
        watch(key, handle, Arc::clone(&self.sink));
        Some(key)
    }

    /// Cancel the pending batch, if it has not fired yet.
    pub fn cancel(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }

    /// Number of batches that fired.
    pub fn fired(&self) -> u64 {
        self.fired.load(Ordering::Relaxed)
    }
}

impl Drop for Preloader {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Report the outcome of a load nobody is waiting on.
fn watch(key: PageKey, handle: LoadHandle, sink: Arc<dyn DiagnosticSink>) {
    tokio::spawn(async move {
        if let Err(e) = handle.await {
            metrics::record_preload_failure(key);
            sink.report(Diagnostic::new(
                DiagnosticOrigin::Preload,
                Some(key.to_string()),
                e.to_string(),
            ));
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::ModuleStatus;
    use crate::routing::site_table;
    use crate::test_support::{RecordingSink, ScriptedProvider};

    struct Fixture {
        preloader: Preloader,
        registry: Arc<ModuleRegistry>,
        provider: Arc<ScriptedProvider>,
        sink: Arc<RecordingSink>,
    }

    fn fixture(config: PreloadConfig) -> Fixture {
        let provider = ScriptedProvider::new();
        let registry = Arc::new(ModuleRegistry::new(provider.clone()));
        let sink = Arc::new(RecordingSink::default());
        let preloader = Preloader::new(
            &config,
            Arc::new(site_table().unwrap()),
            registry.clone(),
            sink.clone(),
        );
        Fixture {
            preloader,
            registry,
            provider,
            sink,
        }
    }

    async fn settle() {
        for _ in 0..20 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_settle_delay() {
        let mut f = fixture(PreloadConfig::default());
        f.preloader.on_navigate("/");

        tokio::time::sleep(Duration::from_millis(999)).await;
        assert_eq!(f.preloader.fired(), 0);
        assert_eq!(f.registry.status(PageKey::Services), ModuleStatus::Unloaded);

        tokio::time::sleep(Duration::from_millis(2)).await;
        settle().await;
        assert_eq!(f.preloader.fired(), 1);
        for key in [
            PageKey::Services,
            PageKey::Resources,
            PageKey::About,
            PageKey::ClientPortal,
        ] {
            assert_eq!(f.registry.status(key), ModuleStatus::Ready);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_skips_current_location() {
        let mut f = fixture(PreloadConfig::default());
        f.preloader.on_navigate("/about/");
        tokio::time::sleep(Duration::from_millis(1001)).await;
        settle().await;
        assert_eq!(f.registry.status(PageKey::About), ModuleStatus::Unloaded);
        assert_eq!(f.registry.status(PageKey::Services), ModuleStatus::Ready);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_navigation_replaces_pending_task() {
        let mut f = fixture(PreloadConfig::default());
        f.preloader.on_navigate("/");
        tokio::time::sleep(Duration::from_millis(500)).await;
        f.preloader.on_navigate("/services");
        tokio::time::sleep(Duration::from_millis(500)).await;
        f.preloader.on_navigate("/about");

        tokio::time::sleep(Duration::from_millis(1001)).await;
        settle().await;
        assert_eq!(f.preloader.fired(), 1);
        // Only the batch scheduled for /about ran.
        assert_eq!(f.registry.status(PageKey::About), ModuleStatus::Unloaded);
        assert_eq!(f.provider.loads(PageKey::Services), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failures_are_reported_not_retried() {
        let mut f = fixture(PreloadConfig::default());
        f.provider.fail(PageKey::Resources, "offline");
        f.preloader.on_navigate("/");
        tokio::time::sleep(Duration::from_millis(1001)).await;
        settle().await;

        assert_eq!(f.registry.status(PageKey::Resources), ModuleStatus::Failed);
        let reports = f.sink.reports();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].origin, DiagnosticOrigin::Preload);
        assert_eq!(reports[0].subject.as_deref(), Some("resources"));

        // A second batch leaves the failed module alone.
        f.preloader.on_navigate("/services");
        tokio::time::sleep(Duration::from_millis(1001)).await;
        settle().await;
        assert_eq!(f.provider.loads(PageKey::Resources), 1);

        // A real request retries it.
        f.provider.heal(PageKey::Resources);
        assert!(f.registry.request(PageKey::Resources).await.is_ok());
        assert_eq!(f.provider.loads(PageKey::Resources), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_disabled_preloader_never_fires() {
        let mut f = fixture(PreloadConfig {
            enabled: false,
            ..PreloadConfig::default()
        });
        f.preloader.on_navigate("/");
        tokio::time::sleep(Duration::from_millis(2000)).await;
        assert_eq!(f.preloader.fired(), 0);
    }

    #[tokio::test]
    async fn test_preload_now() {
        let f = fixture(PreloadConfig::default());
        assert_eq!(f.preloader.preload_now("/test/loading"), Some(PageKey::TestLoading));
        assert_eq!(f.preloader.preload_now("/test/loading"), None);
        assert_eq!(f.preloader.preload_now("/nowhere"), None);
        assert_ne!(f.registry.status(PageKey::TestLoading), ModuleStatus::Unloaded);
    }
}
