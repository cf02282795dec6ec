//! Workspace dashboard: creation, naming, stop and delete

use std::time::Instant;

use fantoccini::{Client, Locator};
use tokio::time::sleep;
use url::Url;

use crate::config::SuiteConfig;
use crate::error::{SuiteError, SuiteResult};

use super::wait_present;

const CREATE_WORKSPACE_PATH: &str = "dashboard/#/create-workspace";
const WORKSPACES_PATH: &str = "dashboard/#/workspaces";
const CREATE_AND_OPEN_BUTTON: &str = "#create-and-open-button";
const DELETE_BUTTON: &str = "#delete-item-button";

pub struct Dashboard<'a> {
    client: &'a Client,
    config: &'a SuiteConfig,
}

impl<'a> Dashboard<'a> {
    pub fn new(client: &'a Client, config: &'a SuiteConfig) -> Self {
        Self { client, config }
    }

    /// Create a workspace from a stack tile and open it
    pub async fn create_and_open_workspace(&self, stack: &str) -> SuiteResult<()> {
        self.client
            .goto(&self.config.url(CREATE_WORKSPACE_PATH))
            .await?;

        let tile = format!(
            "//div[contains(@class,'stack-selector-item') and contains(.,'{}')]",
            stack
        );
        wait_present(
            self.client,
            Locator::XPath(&tile),
            self.config.default_timeout,
            self.config.polling_interval,
            &format!("stack tile '{}'", stack),
        )
        .await?
        .click()
        .await?;

        wait_present(
            self.client,
            Locator::Css(CREATE_AND_OPEN_BUTTON),
            self.config.default_timeout,
            self.config.polling_interval,
            CREATE_AND_OPEN_BUTTON,
        )
        .await?
        .click()
        .await?;

        Ok(())
    }

    /// Read the generated workspace name from the starting-page URL.
    ///
    /// Polls because the dashboard redirects into the workspace a moment
    /// after creation.
    pub async fn obtain_workspace_name(&self) -> SuiteResult<String> {
        let start = Instant::now();
        loop {
            let url = self.client.current_url().await?;
            if let Some(name) = workspace_name_from_url(&url) {
                return Ok(name);
            }
            if start.elapsed() >= self.config.default_timeout {
                return Err(SuiteError::Timeout(format!(
                    "workspace name in URL {}",
                    url
                )));
            }
            sleep(self.config.polling_interval).await;
        }
    }

    /// Stop and delete a workspace from the workspace list
    pub async fn stop_and_remove_workspace(&self, name: &str) -> SuiteResult<()> {
        self.client.goto(&self.config.url(WORKSPACES_PATH)).await?;

        let checkbox = format!(
            "//div[contains(@class,'workspace-item') and contains(.,'{}')]//input[@type='checkbox']",
            name
        );
        wait_present(
            self.client,
            Locator::XPath(&checkbox),
            self.config.default_timeout,
            self.config.polling_interval,
            &format!("workspace row '{}'", name),
        )
        .await?
        .click()
        .await?;

        wait_present(
            self.client,
            Locator::Css(DELETE_BUTTON),
            self.config.default_timeout,
            self.config.polling_interval,
            DELETE_BUTTON,
        )
        .await?
        .click()
        .await?;

        // Confirmation dialog
        let confirm = "//button[contains(.,'Delete')]";
        wait_present(
            self.client,
            Locator::XPath(confirm),
            self.config.default_timeout,
            self.config.polling_interval,
            "delete confirmation",
        )
        .await?
        .click()
        .await?;

        Ok(())
    }
}

/// Extract the workspace name from an IDE or workspace-loader URL.
///
/// Recognizes `#/ide/<namespace>/<name>` fragments and
/// `/<loader>/<namespace>/<name>` paths.
fn workspace_name_from_url(url: &Url) -> Option<String> {
    if let Some(fragment) = url.fragment() {
        if let Some(rest) = fragment.split("/ide/").nth(1) {
            return rest
                .split('/')
                .nth(1)
                .filter(|s| !s.is_empty())
                .map(str::to_string);
        }
    }

    let segments: Vec<&str> = url.path_segments()?.filter(|s| !s.is_empty()).collect();
    if segments.len() >= 3 {
        return Some(segments[segments.len() - 1].to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_from_ide_fragment() {
        let url = Url::parse("https://ide.example.com/dashboard/#/ide/dev/wksp-a1b2").unwrap();
        assert_eq!(workspace_name_from_url(&url).as_deref(), Some("wksp-a1b2"));
    }

    #[test]
    fn test_name_from_loader_path() {
        let url = Url::parse("https://ide.example.com/workspace-loader/dev/wksp-a1b2").unwrap();
        assert_eq!(workspace_name_from_url(&url).as_deref(), Some("wksp-a1b2"));
    }

    #[test]
    fn test_no_name_on_dashboard() {
        let url = Url::parse("https://ide.example.com/dashboard/").unwrap();
        assert_eq!(workspace_name_from_url(&url), None);
    }
}
