//! Driver configuration

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{DriverError, DriverResult};

/// Configuration for one browser session.
///
/// Resolved once before the factory is built and never mutated afterwards;
/// the factory takes it by value, so callers compose the object graph
/// explicitly instead of reading process-wide state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverConfig {
    /// Launch the browser without a visible display surface
    pub headless: bool,

    /// Negotiate the W3C WebDriver protocol. When `false`, the legacy
    /// protocol override is merged into the capability set.
    pub w3c_protocol: bool,

    /// Remote WebDriver server to route session creation through.
    /// `None` spawns a local chromedriver instead.
    pub remote_url: Option<Url>,

    /// Target viewport width, applied after session creation
    pub window_width: u32,

    /// Target viewport height, applied after session creation
    pub window_height: u32,

    /// chromedriver binary for the local transport
    pub chromedriver_binary: PathBuf,

    /// How long to wait for a locally spawned chromedriver to report ready
    pub startup_timeout: Duration,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            headless: false,
            w3c_protocol: true,
            remote_url: None,
            window_width: 1920,
            window_height: 1080,
            chromedriver_binary: PathBuf::from("chromedriver"),
            startup_timeout: Duration::from_secs(15),
        }
    }
}

impl DriverConfig {
    /// Load configuration from `E2E_*` environment variables.
    ///
    /// Unset or empty variables keep their defaults. An unset
    /// `E2E_REMOTE_DRIVER_URL` selects the local transport.
    pub fn from_env() -> DriverResult<Self> {
        let mut config = Self::default();

        if let Some(v) = env_var("E2E_HEADLESS") {
            config.headless = parse_bool("E2E_HEADLESS", &v)?;
        }
        if let Some(v) = env_var("E2E_W3C_PROTOCOL") {
            config.w3c_protocol = parse_bool("E2E_W3C_PROTOCOL", &v)?;
        }
        if let Some(v) = env_var("E2E_REMOTE_DRIVER_URL") {
            config.remote_url = Some(Url::parse(&v)?);
        }
        if let Some(v) = env_var("E2E_RESOLUTION_WIDTH") {
            config.window_width = parse_u32("E2E_RESOLUTION_WIDTH", &v)?;
        }
        if let Some(v) = env_var("E2E_RESOLUTION_HEIGHT") {
            config.window_height = parse_u32("E2E_RESOLUTION_HEIGHT", &v)?;
        }
        if let Some(v) = env_var("E2E_CHROMEDRIVER_BINARY") {
            config.chromedriver_binary = PathBuf::from(v);
        }
        if let Some(v) = env_var("E2E_CHROMEDRIVER_STARTUP_TIMEOUT_SECS") {
            let secs = parse_u64("E2E_CHROMEDRIVER_STARTUP_TIMEOUT_SECS", &v)?;
            config.startup_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn parse_bool(name: &str, value: &str) -> DriverResult<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(DriverError::InvalidConfig {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}

fn parse_u32(name: &str, value: &str) -> DriverResult<u32> {
    value.parse().map_err(|_| DriverError::InvalidConfig {
        name: name.to_string(),
        value: value.to_string(),
    })
}

fn parse_u64(name: &str, value: &str) -> DriverResult<u64> {
    value.parse().map_err(|_| DriverError::InvalidConfig {
        name: name.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DriverConfig::default();
        assert!(!config.headless);
        assert!(config.w3c_protocol);
        assert!(config.remote_url.is_none());
        assert_eq!(config.window_width, 1920);
        assert_eq!(config.window_height, 1080);
    }

    #[test]
    fn test_parse_bool_values() {
        assert!(parse_bool("X", "true").unwrap());
        assert!(parse_bool("X", "1").unwrap());
        assert!(!parse_bool("X", "FALSE").unwrap());
        assert!(!parse_bool("X", "0").unwrap());
        assert!(parse_bool("X", "maybe").is_err());
    }

    #[test]
    fn test_parse_dimensions() {
        assert_eq!(parse_u32("X", "1280").unwrap(), 1280);
        assert!(parse_u32("X", "wide").is_err());
    }

    // Single test touching process environment; parallel tests must not
    // also call from_env.
    #[test]
    fn test_from_env() {
        std::env::set_var("E2E_RESOLUTION_WIDTH", "1280");
        std::env::set_var("E2E_RESOLUTION_HEIGHT", "800");
        let config = DriverConfig::from_env().unwrap();
        assert_eq!(config.window_width, 1280);
        assert_eq!(config.window_height, 800);

        std::env::set_var("E2E_REMOTE_DRIVER_URL", "not a url");
        assert!(DriverConfig::from_env().is_err());

        std::env::set_var("E2E_REMOTE_DRIVER_URL", "http://grid:4444");
        let config = DriverConfig::from_env().unwrap();
        assert_eq!(
            config.remote_url.as_ref().map(Url::as_str),
            Some("http://grid:4444/")
        );

        std::env::remove_var("E2E_RESOLUTION_WIDTH");
        std::env::remove_var("E2E_RESOLUTION_HEIGHT");
        std::env::remove_var("E2E_REMOTE_DRIVER_URL");
    }
}
