//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures_util::future::{BoxFuture, FutureExt};
use probox_site::config::SiteConfig;
use probox_site::observability::{Diagnostic, DiagnosticOrigin, DiagnosticSink};
use probox_site::pages::{CatalogProvider, LoadError, LoadResult, PageKey, PageProvider};
use probox_site::{Shutdown, SiteServer};
use reqwest::redirect::Policy;
use tokio::net::TcpListener;

/// Catalogue pages with per-page delays and switchable failures.
pub struct TestProvider {
    inner: CatalogProvider,
    delays: HashMap<PageKey, Duration>,
    failing: Mutex<HashSet<PageKey>>,
    panicking: Mutex<HashSet<PageKey>>,
}

impl TestProvider {
    pub fn new() -> Self {
        let mut config = SiteConfig::default().pages;
        config.slow_load_delay_ms = 0;
        Self {
            inner: CatalogProvider::new(&config),
            delays: HashMap::new(),
            failing: Mutex::new(HashSet::new()),
            panicking: Mutex::new(HashSet::new()),
        }
    }

    pub fn delay(mut self, key: PageKey, delay: Duration) -> Self {
        self.delays.insert(key, delay);
        self
    }

    pub fn fail(&self, key: PageKey) {
        self.failing.lock().unwrap().insert(key);
    }

    /// Make the loader itself panic for `key`.
    pub fn explode(&self, key: PageKey) {
        self.panicking.lock().unwrap().insert(key);
    }

    pub fn heal(&self, key: PageKey) {
        self.failing.lock().unwrap().remove(&key);
        self.panicking.lock().unwrap().remove(&key);
    }
}

impl PageProvider for TestProvider {
    fn load(&self, key: PageKey) -> BoxFuture<'static, LoadResult> {
        let delay = self.delays.get(&key).copied();
        let failing = self.failing.lock().unwrap().contains(&key);
        let explode = self.panicking.lock().unwrap().contains(&key);
        let load = self.inner.load(key);
        async move {
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            if explode {
                panic!("loader exploded for {}", key);
            }
            if failing {
                return Err(LoadError::Failed {
                    key,
                    reason: "injected failure".into(),
                });
            }
            load.await
        }
        .boxed()
    }
}

/// Collects every diagnostic the server reports.
#[derive(Default)]
pub struct CollectingSink {
    reports: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn count(&self, origin: DiagnosticOrigin) -> usize {
        self.reports
            .lock()
            .unwrap()
            .iter()
            .filter(|d| d.origin == origin)
            .count()
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: Diagnostic) {
        self.reports.lock().unwrap().push(diagnostic);
    }
}

pub struct TestSite {
    pub base: String,
    pub provider: Arc<TestProvider>,
    pub sink: Arc<CollectingSink>,
    shutdown: Shutdown,
}

impl TestSite {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// A browser-like client: keeps cookies, follows redirects.
    pub fn browser(&self) -> reqwest::Client {
        reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .unwrap()
    }

    /// Keeps cookies but reports redirects instead of following them.
    pub fn raw_client(&self) -> reqwest::Client {
        reqwest::Client::builder()
            .cookie_store(true)
            .redirect(Policy::none())
            .build()
            .unwrap()
    }
}

impl Drop for TestSite {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Config suited to tests: no preloading unless a test opts in.
pub fn test_config() -> SiteConfig {
    let mut config = SiteConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.preload.enabled = false;
    config.timeouts.suspense_ms = 2000;
    config
}

/// Start a site on an ephemeral port.
pub async fn start_site(config: SiteConfig, provider: TestProvider) -> TestSite {
    let provider = Arc::new(provider);
    let sink = Arc::new(CollectingSink::default());
    let server = SiteServer::with_provider(config, provider.clone(), sink.clone()).unwrap();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    TestSite {
        base: format!("http://{}", addr),
        provider,
        sink,
        shutdown,
    }
}

pub fn title(body: &str) -> &str {
    body.split_once("<title>")
        .and_then(|(_, rest)| rest.split_once(" | "))
        .map(|(title, _)| title)
        .unwrap_or("")
}
