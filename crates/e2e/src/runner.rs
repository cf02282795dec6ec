//! Suite runner: orchestrates sessions, scenarios and reporting

use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use ide_e2e_driver::{DriverConfig, SessionFactory};
use serde::{Deserialize, Serialize};
use tokio::time::sleep;
use tracing::{error, info, warn};

use crate::config::SuiteConfig;
use crate::error::{SuiteError, SuiteResult};
use crate::executor::{ScenarioExecutor, StepResult};
use crate::scenario::Scenario;

/// Result of running a single scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub name: String,
    pub success: bool,
    pub duration_ms: u64,
    pub steps: Vec<StepResult>,
    pub error: Option<String>,
    pub failure_screenshot: Option<PathBuf>,
}

/// Result of running the whole suite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteReport {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub duration_ms: u64,
    pub finished_at: DateTime<Utc>,
    pub results: Vec<ScenarioResult>,
}

/// Runs scenarios, one fresh browser session each
pub struct SuiteRunner {
    driver_config: DriverConfig,
    suite_config: SuiteConfig,
}

impl SuiteRunner {
    pub fn new(driver_config: DriverConfig, suite_config: SuiteConfig) -> Self {
        Self {
            driver_config,
            suite_config,
        }
    }

    /// Wait until the IDE answers HTTP requests at its base URL
    pub async fn wait_ide_reachable(&self, timeout: Duration) -> SuiteResult<()> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .danger_accept_invalid_certs(true)
            .build()?;

        let start = Instant::now();
        let mut attempts = 0;

        while start.elapsed() < timeout {
            attempts += 1;

            match client.get(&self.suite_config.base_url).send().await {
                Ok(resp) if resp.status().is_success() => return Ok(()),
                Ok(resp) => warn!("IDE returned {}", resp.status()),
                Err(e) => {
                    if attempts == 1 {
                        info!("Waiting for IDE at {}...", self.suite_config.base_url);
                    }
                    if !e.is_connect() {
                        warn!("IDE reachability error: {}", e);
                    }
                }
            }

            sleep(Duration::from_millis(500)).await;
        }

        Err(SuiteError::IdeHealthCheck(attempts))
    }

    /// Run all scenarios from the scenarios directory
    pub async fn run_all(&self) -> SuiteResult<SuiteReport> {
        let scenarios = Scenario::load_all(&self.suite_config.scenarios_dir)?;
        self.run_scenarios(&scenarios).await
    }

    /// Run scenarios matching a tag
    pub async fn run_tagged(&self, tag: &str) -> SuiteResult<SuiteReport> {
        let scenarios = Scenario::load_all(&self.suite_config.scenarios_dir)?;
        let filtered: Vec<Scenario> = scenarios
            .into_iter()
            .filter(|s| s.tags.iter().any(|t| t == tag))
            .collect();
        self.run_scenarios(&filtered).await
    }

    /// Run a specific scenario by name
    pub async fn run_named(&self, name: &str) -> SuiteResult<SuiteReport> {
        let scenarios = Scenario::load_all(&self.suite_config.scenarios_dir)?;
        let scenario = scenarios
            .into_iter()
            .find(|s| s.name == name)
            .ok_or_else(|| SuiteError::ScenarioParse(format!("scenario not found: {}", name)))?;
        self.run_scenarios(&[scenario]).await
    }

    /// Run a list of scenarios
    pub async fn run_scenarios(&self, scenarios: &[Scenario]) -> SuiteResult<SuiteReport> {
        let start = Instant::now();
        let mut results = Vec::new();
        let mut passed = 0;
        let mut failed = 0;

        info!("Running {} scenario(s)...", scenarios.len());

        for scenario in scenarios {
            match self.run_scenario(scenario).await {
                Ok(result) => {
                    if result.success {
                        passed += 1;
                        info!("PASS {} ({} ms)", result.name, result.duration_ms);
                    } else {
                        failed += 1;
                        error!(
                            "FAIL {} - {}",
                            result.name,
                            result.error.as_deref().unwrap_or("unknown error")
                        );
                    }
                    results.push(result);
                }
                Err(e) => {
                    // Session construction failed; no steps ran
                    failed += 1;
                    error!("FAIL {} - {}", scenario.name, e);
                    results.push(ScenarioResult {
                        name: scenario.name.clone(),
                        success: false,
                        duration_ms: 0,
                        steps: vec![],
                        error: Some(e.to_string()),
                        failure_screenshot: None,
                    });
                }
            }
        }

        let duration_ms = start.elapsed().as_millis() as u64;

        info!(
            "Suite finished: {} passed, {} failed ({} ms)",
            passed, failed, duration_ms
        );

        Ok(SuiteReport {
            total: scenarios.len(),
            passed,
            failed,
            duration_ms,
            finished_at: Utc::now(),
            results,
        })
    }

    /// Run one scenario in a fresh browser session.
    ///
    /// Stops at the first failing step, captures a failure screenshot, and
    /// always tries to clean up a workspace the scenario created.
    pub async fn run_scenario(&self, scenario: &Scenario) -> SuiteResult<ScenarioResult> {
        let start = Instant::now();
        info!("Scenario: {}", scenario.name);

        let mut driver_config = self.driver_config.clone();
        driver_config.window_width = scenario.viewport.width;
        driver_config.window_height = scenario.viewport.height;

        let session = SessionFactory::new(driver_config).create().await?;
        let mut executor = ScenarioExecutor::new(&session, &self.suite_config);

        let mut steps: Vec<StepResult> = Vec::new();
        let mut scenario_error: Option<String> = None;
        let mut failure_screenshot: Option<PathBuf> = None;

        for step in &scenario.steps {
            let result = executor.execute_step(step).await;

            if !result.success {
                scenario_error = result.error.clone();

                let shot_name = format!("{}-failure", scenario.name);
                match executor.save_screenshot(&shot_name).await {
                    Ok(path) => failure_screenshot = Some(path),
                    Err(e) => warn!("Could not capture failure screenshot: {}", e),
                }

                steps.push(result);
                break;
            }

            steps.push(result);
        }

        // Leave no workspace behind, even on failure
        if let Some(name) = executor.workspace().map(str::to_string) {
            if let Err(e) = crate::library::WorkspaceHandling::new(session.client(), &self.suite_config)
                .stop_and_remove(&name)
                .await
            {
                warn!("Workspace cleanup for '{}' failed: {}", name, e);
            }
        }

        if let Err(e) = session.close().await {
            warn!("Session close failed: {}", e);
        }

        let duration_ms = start.elapsed().as_millis() as u64;
        let success = scenario_error.is_none();

        Ok(ScenarioResult {
            name: scenario.name.clone(),
            success,
            duration_ms,
            steps,
            error: scenario_error,
            failure_screenshot,
        })
    }

    /// Write the suite report as JSON into the artifact directory
    pub fn write_report(&self, report: &SuiteReport) -> SuiteResult<PathBuf> {
        std::fs::create_dir_all(&self.suite_config.artifact_dir)?;

        let path = self.suite_config.artifact_dir.join("report.json");
        let json = serde_json::to_string_pretty(report)?;
        std::fs::write(&path, json)?;

        info!("Report written to: {}", path.display());
        Ok(path)
    }
}
