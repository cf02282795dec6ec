//! Error types for session construction

use thiserror::Error;

/// Result type alias for driver operations
pub type DriverResult<T> = std::result::Result<T, DriverError>;

#[derive(Error, Debug)]
pub enum DriverError {
    #[error("Failed to spawn chromedriver: {0}")]
    Spawn(String),

    #[error("chromedriver not ready after {attempts} status checks")]
    Startup { attempts: usize },

    #[error("Invalid WebDriver endpoint: {0}")]
    Endpoint(#[from] url::ParseError),

    #[error("Invalid configuration value for {name}: {value}")]
    InvalidConfig { name: String, value: String },

    #[error("WebDriver session could not be created: {0}")]
    NewSession(#[from] fantoccini::error::NewSessionError),

    #[error("WebDriver command failed: {0}")]
    WebDriver(#[from] fantoccini::error::CmdError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
