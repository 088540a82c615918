//! ProBox InfoTech site server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Browser request
//!     ─────────────────▶ http::server ──▶ http::session (cookie → visitor)
//!                                              │
//!                                              ▼
//!                       navigation::navigator ──▶ routing::table (resolve)
//!                              │
//!                              ▼
//!                       pages::registry ◀── navigation::preloader (warm-up)
//!                              │  (one load in flight per page module)
//!                              ▼
//!                       render::guard ──▶ page construction ──▶ render::layout
//!                              │
//!                              └─ on failure: diagnostic view + observability
//!
//!     No route / routing error ──▶ render::fallback
//!     Module still loading     ──▶ render::spinner (refreshing placeholder)
//! ```

use std::path::PathBuf;

use clap::Parser;

use probox_site::config::{load_config, validate_config, SiteConfig};
use probox_site::lifecycle::startup;
use probox_site::observability::logging;
use probox_site::Shutdown;

#[derive(Parser)]
#[command(name = "probox-site")]
#[command(about = "Server for the ProBox InfoTech website", long_about = None)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => SiteConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
        if let Err(errors) = validate_config(&config) {
            for error in &errors {
                eprintln!("invalid configuration: {}", error);
            }
            return Err("invalid configuration".into());
        }
    }

    logging::init_logging(&config.observability.log_level)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "probox-site starting");

    startup::run(config, Shutdown::new()).await?;
    Ok(())
}
