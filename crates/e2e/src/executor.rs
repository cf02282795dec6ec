//! Scenario step execution

use std::path::PathBuf;
use std::time::{Duration, Instant};

use fantoccini::Locator;
use ide_e2e_driver::SessionHandle;
use serde::{Deserialize, Serialize};
use tokio::time::sleep;
use tracing::debug;

use crate::config::SuiteConfig;
use crate::error::{SuiteError, SuiteResult};
use crate::ide::wait_present;
use crate::library::{CodeExecution, LanguageServer, ProjectAndFile, WorkspaceHandling};
use crate::scenario::Step;

/// Result of executing a single step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepResult {
    pub success: bool,
    pub label: String,
    pub duration_ms: u64,
    pub error: Option<String>,
    pub screenshot_path: Option<PathBuf>,
}

/// Executes scenario steps against one session.
///
/// Tracks the workspace created during the scenario so it can be cleaned
/// up afterwards.
pub struct ScenarioExecutor<'a> {
    session: &'a SessionHandle,
    config: &'a SuiteConfig,
    workspace: Option<String>,
}

impl<'a> ScenarioExecutor<'a> {
    pub fn new(session: &'a SessionHandle, config: &'a SuiteConfig) -> Self {
        Self {
            session,
            config,
            workspace: None,
        }
    }

    /// Name of the workspace created by an earlier step, if any
    pub fn workspace(&self) -> Option<&str> {
        self.workspace.as_deref()
    }

    /// Execute one step, converting failures into a recorded result
    pub async fn execute_step(&mut self, step: &Step) -> StepResult {
        let start = Instant::now();
        let label = step.label();

        debug!("Executing step: {}", label);

        let result = self.dispatch(step).await;
        let duration_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(screenshot_path) => StepResult {
                success: true,
                label,
                duration_ms,
                error: None,
                screenshot_path,
            },
            Err(e) => StepResult {
                success: false,
                label,
                duration_ms,
                error: Some(e.to_string()),
                screenshot_path: None,
            },
        }
    }

    async fn dispatch(&mut self, step: &Step) -> SuiteResult<Option<PathBuf>> {
        let client = self.session.client();

        match step {
            Step::Navigate { path } => {
                client.goto(&self.config.url(path)).await?;
            }
            Step::Click { selector } => {
                wait_present(
                    client,
                    Locator::Css(selector),
                    self.config.default_timeout,
                    self.config.polling_interval,
                    selector,
                )
                .await?
                .click()
                .await?;
            }
            Step::WaitFor { selector, timeout_secs } => {
                wait_present(
                    client,
                    Locator::Css(selector),
                    Duration::from_secs(*timeout_secs),
                    self.config.polling_interval,
                    selector,
                )
                .await?;
            }
            Step::TypeText { selector, text } => {
                let elem = wait_present(
                    client,
                    Locator::Css(selector),
                    self.config.default_timeout,
                    self.config.polling_interval,
                    selector,
                )
                .await?;
                elem.send_keys(text).await?;
            }
            Step::Sleep { ms } => {
                sleep(Duration::from_millis(*ms)).await;
            }
            Step::AssertText { selector, contains } => {
                let elem = wait_present(
                    client,
                    Locator::Css(selector),
                    self.config.default_timeout,
                    self.config.polling_interval,
                    selector,
                )
                .await?;
                let text = elem.text().await?;
                if !text.contains(contains.as_str()) {
                    return Err(SuiteError::AssertionFailed(format!(
                        "{} text '{}' does not contain '{}'",
                        selector, text, contains
                    )));
                }
            }
            Step::Screenshot { name } => {
                return Ok(Some(self.save_screenshot(name).await?));
            }
            Step::CreateWorkspace { stack } => {
                let workspaces = WorkspaceHandling::new(client, self.config);
                workspaces.create_and_open(stack).await?;
                self.workspace = Some(workspaces.obtain_workspace_name().await?);
            }
            Step::WaitWorkspaceReady { sample, subfolder } => {
                ProjectAndFile::new(client, self.config)
                    .wait_workspace_readiness(sample, subfolder.as_deref())
                    .await?;
            }
            Step::OpenFile { path, tab } => {
                ProjectAndFile::new(client, self.config)
                    .open_file(path, tab)
                    .await?;
            }
            Step::RunTask { task, timeout_secs, expect_output } => {
                let tasks = CodeExecution::new(client, self.config);
                tasks
                    .run_task(task, Duration::from_secs(*timeout_secs))
                    .await?;
                if let Some(expected) = expect_output {
                    tasks
                        .expect_output(expected, self.config.default_timeout)
                        .await?;
                }
            }
            Step::ExpectErrorMarker { tab, text, line } => {
                LanguageServer::new(client, self.config)
                    .error_highlighting(tab, text, *line)
                    .await?;
            }
            Step::Autocomplete { tab, line, column, expected } => {
                LanguageServer::new(client, self.config)
                    .autocomplete(tab, *line, *column, expected)
                    .await?;
            }
            Step::ExpectSuggestion { tab, line, column, expected } => {
                LanguageServer::new(client, self.config)
                    .suggestion_invoking(tab, *line, *column, expected)
                    .await?;
            }
            Step::ExpectHover { tab, line, column, expected } => {
                LanguageServer::new(client, self.config)
                    .hover(tab, *line, *column, expected)
                    .await?;
            }
            Step::StopAndRemoveWorkspace => {
                let name = self.workspace.take().ok_or_else(|| SuiteError::StepFailed {
                    step: step.label(),
                    reason: "no workspace was created in this scenario".to_string(),
                })?;
                WorkspaceHandling::new(client, self.config)
                    .stop_and_remove(&name)
                    .await?;
            }
        }

        Ok(None)
    }

    /// Save a PNG screenshot into the artifact directory
    pub async fn save_screenshot(&self, name: &str) -> SuiteResult<PathBuf> {
        let dir = self.config.artifact_dir.join("screenshots");
        std::fs::create_dir_all(&dir)?;

        let png = self.session.screenshot().await?;
        let path = dir.join(format!("{}.png", name));
        std::fs::write(&path, png)?;

        Ok(path)
    }
}
