//! Visitor sessions.
//!
//! # Responsibilities
//! - Identify visitors by cookie and hand out their session
//! - Own each visitor's navigator, render guard, preloader and page-local state
//! - Sweep sessions that have been idle too long
//!
//! # Design Decisions
//! - Sessions live in a DashMap; each one sits behind its own async mutex
//!   so one visitor's requests are applied in arrival order
//! - Unknown or swept cookies get a fresh id rather than being adopted
//! - The sweeper follows the shutdown broadcast like every background task

use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, HeaderMap, HeaderValue};
use axum::response::Response;
use dashmap::DashMap;
use leptos::prelude::AnyView;
use tokio::sync::{broadcast, Mutex};
use tokio::time::{self, Instant};
use uuid::Uuid;

use crate::config::{PreloadConfig, SessionConfig};
use crate::navigation::{Navigator, Preloader};
use crate::observability::diagnostics::DiagnosticSink;
use crate::observability::metrics::{self, RenderTimer};
use crate::pages::{LoadResult, ModuleRegistry, PageLocals, RenderContext};
use crate::render::guard::{Guarded, RenderGuard};
use crate::routing::{RouteMatch, RouteTable};

/// One visitor's view of the site.
pub struct Session {
    pub navigator: Navigator,
    pub guard: RenderGuard,
    pub preloader: Preloader,
    pub locals: PageLocals,
}

/// A page built for a committed navigation.
pub struct RenderedPage {
    pub status: u16,
    pub title: &'static str,
    pub body: AnyView,
}

impl Session {
    /// Build the committed page under the render guard.
    ///
    /// A failed module load counts as a construction failure, so the
    /// guard's retry re-requests it.
    pub fn render_committed(
        &mut self,
        location: &str,
        matched: &RouteMatch,
        result: LoadResult,
        registry: &ModuleRegistry,
    ) -> RenderedPage {
        self.locals.unmount_except(matched.module);

        let locals = &self.locals;
        let outcome = self.guard.supervise(location, || {
            let page = result?;
            let cx = RenderContext {
                location,
                locals,
                registry,
            };
            let timer = RenderTimer::start(page.key());
            let built = page.render(&cx);
            let took = timer.finish();
            tracing::debug!(
                page = %page.key(),
                took_us = took.as_micros() as u64,
                "Page constructed"
            );
            built
        });

        match outcome {
            Guarded::Built(body) => RenderedPage {
                status: if matched.catch_all { 404 } else { 200 },
                title: matched.module.title(),
                body,
            },
            Guarded::Diagnostic(body) => RenderedPage {
                status: 500,
                title: "Error",
                body,
            },
        }
    }

    /// Reset the guard and drop every page's local state.
    pub fn recover(&mut self) -> bool {
        self.locals.clear();
        self.guard.reset()
    }
}

struct Entry {
    session: Arc<Mutex<Session>>,
    last_seen: Instant,
}

/// A resolved session for one request.
pub struct SessionHandle {
    pub id: Uuid,
    pub session: Arc<Mutex<Session>>,
    created: bool,
}

pub struct SessionStore {
    entries: DashMap<Uuid, Entry>,
    cookie_name: String,
    idle_ttl: Duration,
    preload: PreloadConfig,
    table: Arc<RouteTable>,
    registry: Arc<ModuleRegistry>,
    sink: Arc<dyn DiagnosticSink>,
}

impl SessionStore {
    pub fn new(
        config: &SessionConfig,
        preload: &PreloadConfig,
        table: Arc<RouteTable>,
        registry: Arc<ModuleRegistry>,
        sink: Arc<dyn DiagnosticSink>,
    ) -> Self {
        Self {
            entries: DashMap::new(),
            cookie_name: config.cookie_name.clone(),
            idle_ttl: Duration::from_secs(config.idle_ttl_secs),
            preload: preload.clone(),
            table,
            registry,
            sink,
        }
    }

    /// The visitor's session, creating one if the cookie is missing or stale.
    pub fn session_for(&self, headers: &HeaderMap) -> SessionHandle {
        let known = cookie_value(headers, &self.cookie_name)
            .and_then(|v| Uuid::parse_str(v).ok())
            .and_then(|id| {
                let mut entry = self.entries.get_mut(&id)?;
                entry.last_seen = Instant::now();
                Some((id, Arc::clone(&entry.session)))
            });

        if let Some((id, session)) = known {
            return SessionHandle {
                id,
                session,
                created: false,
            };
        }

        let id = Uuid::new_v4();
        let session = Arc::new(Mutex::new(self.new_session()));
        self.entries.insert(
            id,
            Entry {
                session: Arc::clone(&session),
                last_seen: Instant::now(),
            },
        );
        metrics::set_active_sessions(self.entries.len());
        tracing::debug!(session = %id, "Session created");

        SessionHandle {
            id,
            session,
            created: true,
        }
    }

    fn new_session(&self) -> Session {
        Session {
            navigator: Navigator::new(Arc::clone(&self.table), Arc::clone(&self.registry)),
            guard: RenderGuard::new(Arc::clone(&self.sink)),
            preloader: Preloader::new(
                &self.preload,
                Arc::clone(&self.table),
                Arc::clone(&self.registry),
                Arc::clone(&self.sink),
            ),
            locals: PageLocals::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop idle sessions. Returns how many were removed.
    pub fn sweep(&self) -> usize {
        let before = self.entries.len();
        let ttl = self.idle_ttl;
        self.entries.retain(|_, entry| entry.last_seen.elapsed() < ttl);
        let removed = before.saturating_sub(self.entries.len());
        metrics::set_active_sessions(self.entries.len());
        removed
    }

    /// Attach the session cookie to a response for a new session.
    pub fn attach_cookie(&self, handle: &SessionHandle, response: &mut Response) {
        if !handle.created {
            return;
        }
        let cookie = format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax",
            self.cookie_name, handle.id
        );
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            Err(e) => tracing::error!(error = %e, "Invalid session cookie"),
        }
    }
}

fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

/// Periodically drop idle sessions until shutdown.
pub async fn run_sweeper(
    store: Arc<SessionStore>,
    interval: Duration,
    mut shutdown: broadcast::Receiver<()>,
) {
    tracing::info!(interval_secs = interval.as_secs(), "Session sweeper starting");
    let mut ticker = time::interval(interval);
    // The first tick completes immediately.
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let removed = store.sweep();
                if removed > 0 {
                    tracing::info!(removed, remaining = store.len(), "Swept idle sessions");
                }
            }
            _ = shutdown.recv() => {
                tracing::info!("Session sweeper received shutdown signal, exiting loop");
                break;
            }
        }
    }
}
