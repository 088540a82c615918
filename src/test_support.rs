//! Fakes shared by unit tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use futures_util::future::{BoxFuture, FutureExt};
use tokio::sync::watch;

use crate::observability::diagnostics::{Diagnostic, DiagnosticSink};
use crate::pages::catalog;
use crate::pages::{LoadError, LoadResult, PageKey, PageProvider};

/// Holds a module load until opened.
#[derive(Clone)]
pub struct Gate {
    tx: Arc<watch::Sender<bool>>,
}

impl Gate {
    pub fn open(&self) {
        self.tx.send_replace(true);
    }
}

#[derive(Default)]
struct Script {
    gates: HashMap<PageKey, watch::Receiver<bool>>,
    failing: HashMap<PageKey, String>,
    panicking: HashMap<PageKey, String>,
    loads: HashMap<PageKey, usize>,
}

/// Serves catalogue pages, with per-key gates and injected failures.
#[derive(Default)]
pub struct ScriptedProvider {
    script: Mutex<Script>,
}

impl ScriptedProvider {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Hold loads of `key` until the returned gate opens.
    pub fn gate(&self, key: PageKey) -> Gate {
        let (tx, rx) = watch::channel(false);
        self.script.lock().unwrap().gates.insert(key, rx);
        Gate { tx: Arc::new(tx) }
    }

    /// Make loads of `key` started from now on fail.
    pub fn fail(&self, key: PageKey, reason: &str) {
        self.script
            .lock()
            .unwrap()
            .failing
            .insert(key, reason.to_string());
    }

    /// Make loads of `key` started from now on panic inside the provider.
    pub fn panic_on_load(&self, key: PageKey, message: &str) {
        self.script
            .lock()
            .unwrap()
            .panicking
            .insert(key, message.to_string());
    }

    pub fn heal(&self, key: PageKey) {
        let mut script = self.script.lock().unwrap();
        script.failing.remove(&key);
        script.panicking.remove(&key);
    }

    /// Number of loads started for `key`.
    pub fn loads(&self, key: PageKey) -> usize {
        self.script
            .lock()
            .unwrap()
            .loads
            .get(&key)
            .copied()
            .unwrap_or(0)
    }
}

impl PageProvider for ScriptedProvider {
    fn load(&self, key: PageKey) -> BoxFuture<'static, LoadResult> {
        let mut script = self.script.lock().unwrap();
        *script.loads.entry(key).or_insert(0) += 1;
        let gate = script.gates.get(&key).cloned();
        let failure = script.failing.get(&key).cloned();
        let explode = script.panicking.get(&key).cloned();
        drop(script);

        async move {
            if let Some(mut gate) = gate {
                let _ = gate.wait_for(|open| *open).await;
            }
            if let Some(message) = explode {
                panic!("{}", message);
            }
            match failure {
                Some(reason) => Err(LoadError::Failed { key, reason }),
                None => Ok(catalog::page(key)),
            }
        }
        .boxed()
    }
}

/// Keeps every diagnostic it receives.
#[derive(Default)]
pub struct RecordingSink {
    reports: Mutex<Vec<Diagnostic>>,
}

impl RecordingSink {
    pub fn reports(&self) -> Vec<Diagnostic> {
        self.reports.lock().unwrap().clone()
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, diagnostic: Diagnostic) {
        self.reports.lock().unwrap().push(diagnostic);
    }
}

