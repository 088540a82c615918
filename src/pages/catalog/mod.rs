//! The site's page catalogue.

use std::sync::Arc;

use crate::pages::key::PageKey;
use crate::pages::page::Page;

mod about;
mod case_studies;
mod client_portal;
mod contact;
mod home;
mod not_found;
mod resources;
mod services;
mod test;

/// Construct the page module for `key`.
pub fn page(key: PageKey) -> Arc<dyn Page> {
    match key {
        PageKey::Home => Arc::new(home::Home),
        PageKey::Services => Arc::new(services::Services),
        PageKey::CaseStudies => Arc::new(case_studies::CaseStudies),
        PageKey::Resources => Arc::new(resources::Resources),
        PageKey::About => Arc::new(about::About),
        PageKey::Contact => Arc::new(contact::Contact),
        PageKey::ClientPortal => Arc::new(client_portal::ClientPortal),
        PageKey::TestIndex => Arc::new(test::TestIndex),
        PageKey::TestError => Arc::new(test::TestError),
        PageKey::TestLoading => Arc::new(test::TestLoading),
        PageKey::TestPerformance => Arc::new(test::TestPerformance),
        PageKey::TestSlowLoad => Arc::new(test::TestSlowLoad),
        PageKey::NotFound => Arc::new(not_found::NotFound),
    }
}
