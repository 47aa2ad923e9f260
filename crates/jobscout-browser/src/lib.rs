mod chrome_finder;
mod chrome_session;
mod driver;
mod error;
mod hardening;
mod launcher;
mod pipeline;
mod profile;

pub use chrome_finder::ChromeFinder;
pub use chrome_session::ChromeSession;
pub use driver::DriverSession;
pub use error::{Error, RESULTS_NOT_LOADED, Result};
pub use hardening::{NoHardening, SessionHardening, StealthHardening};
pub use launcher::{ChromeLauncher, VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
pub use pipeline::{JobsScraper, PassState};
pub use profile::ProfileManager;
