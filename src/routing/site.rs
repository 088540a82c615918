//! The site's route declaration.

use crate::pages::PageKey;
use crate::routing::table::{RouteEntry, RouteTable, RouteTableError};

/// Build the route table served by the site.
///
/// Everything hangs off the `/` layout so every page shares the chrome;
/// the catch-all must stay last in declaration order for readability,
/// though matching does not depend on it.
pub fn site_table() -> Result<RouteTable, RouteTableError> {
    RouteTable::new(vec![RouteEntry::layout(
        "/",
        vec![
            RouteEntry::index(PageKey::Home),
            RouteEntry::page("services", PageKey::Services),
            RouteEntry::page("case-studies", PageKey::CaseStudies),
            RouteEntry::page("resources", PageKey::Resources),
            RouteEntry::page("about", PageKey::About),
            RouteEntry::page("contact", PageKey::Contact),
            RouteEntry::page("client-portal", PageKey::ClientPortal),
            // Demonstration pages
            RouteEntry::group(
                "test",
                vec![
                    RouteEntry::index(PageKey::TestIndex),
                    RouteEntry::page("error", PageKey::TestError),
                    RouteEntry::page("loading", PageKey::TestLoading),
                    RouteEntry::page("performance", PageKey::TestPerformance),
                    RouteEntry::page("slow-load", PageKey::TestSlowLoad),
                ],
            ),
            RouteEntry::catch_all(PageKey::NotFound),
        ],
    )])
}
