//! Page module identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies one lazily-loaded page module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageKey {
    Home,
    Services,
    CaseStudies,
    Resources,
    About,
    Contact,
    ClientPortal,
    TestIndex,
    TestError,
    TestLoading,
    TestPerformance,
    TestSlowLoad,
    NotFound,
}

impl PageKey {
    pub const ALL: [PageKey; 13] = [
        PageKey::Home,
        PageKey::Services,
        PageKey::CaseStudies,
        PageKey::Resources,
        PageKey::About,
        PageKey::Contact,
        PageKey::ClientPortal,
        PageKey::TestIndex,
        PageKey::TestError,
        PageKey::TestLoading,
        PageKey::TestPerformance,
        PageKey::TestSlowLoad,
        PageKey::NotFound,
    ];

    /// Stable identifier used in logs, metrics labels and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            PageKey::Home => "home",
            PageKey::Services => "services",
            PageKey::CaseStudies => "case-studies",
            PageKey::Resources => "resources",
            PageKey::About => "about",
            PageKey::Contact => "contact",
            PageKey::ClientPortal => "client-portal",
            PageKey::TestIndex => "test-index",
            PageKey::TestError => "test-error",
            PageKey::TestLoading => "test-loading",
            PageKey::TestPerformance => "test-performance",
            PageKey::TestSlowLoad => "test-slow-load",
            PageKey::NotFound => "not-found",
        }
    }

    /// Document title.
    pub fn title(&self) -> &'static str {
        match self {
            PageKey::Home => "Home",
            PageKey::Services => "Services",
            PageKey::CaseStudies => "Case Studies",
            PageKey::Resources => "Resources",
            PageKey::About => "About",
            PageKey::Contact => "Contact",
            PageKey::ClientPortal => "Client Portal",
            PageKey::TestIndex => "Testing Suite",
            PageKey::TestError => "Error Boundary Testing",
            PageKey::TestLoading => "Loading States Testing",
            PageKey::TestPerformance => "Performance Testing",
            PageKey::TestSlowLoad => "Slow Loading Testing",
            PageKey::NotFound => "Page not found",
        }
    }
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
