//! ProBox InfoTech site server library.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod navigation;
pub mod observability;
pub mod pages;
pub mod render;
pub mod routing;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::SiteConfig;
pub use http::SiteServer;
pub use lifecycle::Shutdown;
