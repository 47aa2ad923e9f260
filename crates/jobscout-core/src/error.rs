use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid scraper configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid selector table: {0}")]
    InvalidSelectors(String),
}

pub type Result<T> = std::result::Result<T, Error>;
