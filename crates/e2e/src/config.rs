//! Suite configuration

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{SuiteError, SuiteResult};

/// Configuration for the suite as a whole: where the IDE lives, how long
/// UI waits are allowed to take, where scenarios and artifacts go.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteConfig {
    /// Root URL of the IDE dashboard
    pub base_url: String,

    /// Long waits: workspace startup, project import, task runs
    pub load_page_timeout: Duration,

    /// Ordinary element waits
    pub default_timeout: Duration,

    /// Poll period inside wait loops
    pub polling_interval: Duration,

    /// Directory holding YAML scenarios
    pub scenarios_dir: PathBuf,

    /// Output directory for reports and failure screenshots
    pub artifact_dir: PathBuf,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            load_page_timeout: Duration::from_secs(240),
            default_timeout: Duration::from_secs(20),
            polling_interval: Duration::from_millis(500),
            scenarios_dir: PathBuf::from("crates/e2e/scenarios"),
            artifact_dir: PathBuf::from("test-results"),
        }
    }
}

impl SuiteConfig {
    /// Load configuration from `E2E_*` environment variables, keeping
    /// defaults for anything unset.
    pub fn from_env() -> SuiteResult<Self> {
        let mut config = Self::default();

        if let Some(v) = env_var("E2E_BASE_URL") {
            config.base_url = v.trim_end_matches('/').to_string();
        }
        if let Some(v) = env_var("E2E_LOAD_PAGE_TIMEOUT_SECS") {
            config.load_page_timeout = Duration::from_secs(parse_secs("E2E_LOAD_PAGE_TIMEOUT_SECS", &v)?);
        }
        if let Some(v) = env_var("E2E_DEFAULT_TIMEOUT_SECS") {
            config.default_timeout = Duration::from_secs(parse_secs("E2E_DEFAULT_TIMEOUT_SECS", &v)?);
        }
        if let Some(v) = env_var("E2E_SCENARIOS_DIR") {
            config.scenarios_dir = PathBuf::from(v);
        }
        if let Some(v) = env_var("E2E_ARTIFACT_DIR") {
            config.artifact_dir = PathBuf::from(v);
        }

        Ok(config)
    }

    /// Absolute URL for a path under the IDE base
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn parse_secs(name: &str, value: &str) -> SuiteResult<u64> {
    value.parse().map_err(|_| {
        SuiteError::ScenarioParse(format!("invalid {}: {}", name, value))
    })
}
