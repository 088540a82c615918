//! JSON status endpoints.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::http::server::AppState;
use crate::pages::{ModuleStatus, PageKey};

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusReport {
    pub name: String,
    pub version: String,
    pub status: String,
    pub uptime_secs: u64,
    pub sessions: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ModuleReport {
    pub key: PageKey,
    /// Route that serves the module; `None` for the catch-all page.
    pub path: Option<String>,
    pub status: ModuleStatus,
    pub load_ms: Option<u64>,
    pub attempts: u64,
    pub error: Option<String>,
}

pub async fn status(State(state): State<AppState>) -> Json<StatusReport> {
    Json(StatusReport {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "ok".to_string(),
        uptime_secs: state.started.elapsed().as_secs(),
        sessions: state.sessions.len(),
    })
}

pub async fn modules(State(state): State<AppState>) -> Json<Vec<ModuleReport>> {
    let reports = state
        .registry
        .snapshot()
        .into_iter()
        .map(|snapshot| ModuleReport {
            key: snapshot.key,
            path: state.table.path_of(snapshot.key),
            status: snapshot.status,
            load_ms: snapshot.load_ms,
            attempts: snapshot.attempts,
            error: snapshot.error,
        })
        .collect();
    Json(reports)
}
