//! Workspace lifecycle: create, name, stop and remove

use fantoccini::Client;
use tracing::info;

use crate::config::SuiteConfig;
use crate::error::SuiteResult;
use crate::ide::Dashboard;

pub struct WorkspaceHandling<'a> {
    client: &'a Client,
    config: &'a SuiteConfig,
}

impl<'a> WorkspaceHandling<'a> {
    pub fn new(client: &'a Client, config: &'a SuiteConfig) -> Self {
        Self { client, config }
    }

    /// Create a workspace from a stack and open it
    pub async fn create_and_open(&self, stack: &str) -> SuiteResult<()> {
        info!("Creating workspace from stack '{}'", stack);
        Dashboard::new(self.client, self.config)
            .create_and_open_workspace(stack)
            .await
    }

    /// Read the generated workspace name from the starting page
    pub async fn obtain_workspace_name(&self) -> SuiteResult<String> {
        let name = Dashboard::new(self.client, self.config)
            .obtain_workspace_name()
            .await?;
        info!("Workspace name: {}", name);
        Ok(name)
    }

    /// Stop and delete a workspace
    pub async fn stop_and_remove(&self, name: &str) -> SuiteResult<()> {
        info!("Stopping and removing workspace '{}'", name);
        Dashboard::new(self.client, self.config)
            .stop_and_remove_workspace(name)
            .await
    }
}
