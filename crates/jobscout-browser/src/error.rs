use thiserror::Error;

/// Message used whenever the results container never shows up
pub const RESULTS_NOT_LOADED: &str = "Failed to load jobs or solve CAPTCHA";

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to launch browser: {0}")]
    Launch(String),

    #[error("Failed to navigate to {url}: {reason}")]
    Navigation { url: String, reason: String },

    #[error("{0}")]
    Extraction(String),

    #[error("Browser error: {0}")]
    Browser(String),

    #[error("CDP error: {0}")]
    Cdp(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] jobscout_core::Error),
}

impl Error {
    /// The ambiguous "page never showed results" failure
    pub fn results_not_loaded() -> Self {
        Error::Extraction(RESULTS_NOT_LOADED.to_string())
    }
}

impl From<chromiumoxide::error::CdpError> for Error {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        Error::Cdp(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
