pub mod config;
pub mod error;
pub mod job;
pub mod posted;
pub mod search;
pub mod selectors;
pub mod store;

pub use config::ScraperConfig;
pub use error::{Error, Result};
pub use job::{JobFields, JobRecord};
pub use posted::estimate_posted_date;
pub use search::build_search_url;
pub use selectors::SelectorSet;
pub use store::JobStore;
