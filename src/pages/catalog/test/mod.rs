//! Demonstration pages for error handling, loading states and
//! performance instrumentation.

mod error;
mod index;
mod loading;
mod slow_load;

pub use error::TestError;
pub use index::TestIndex;
pub use loading::TestLoading;
pub use performance::TestPerformance;
pub use slow_load::TestSlowLoad;
