//! Running workspace tasks and checking their outcome

use std::time::Duration;

use fantoccini::Client;
use tracing::info;

use crate::config::SuiteConfig;
use crate::error::SuiteResult;
use crate::ide::{IdeShell, Terminal, TopMenu};

pub struct CodeExecution<'a> {
    client: &'a Client,
    config: &'a SuiteConfig,
}

impl<'a> CodeExecution<'a> {
    pub fn new(client: &'a Client, config: &'a SuiteConfig) -> Self {
        Self { client, config }
    }

    /// Run a task from the top menu and wait for its success notification
    pub async fn run_task(&self, task: &str, timeout: Duration) -> SuiteResult<()> {
        info!("Running task '{}'", task);

        TopMenu::new(self.client, self.config).run_task(task).await?;

        // The task runs in its own terminal tab; the shell raises a
        // notification once it exits.
        Terminal::new(self.client, self.config)
            .wait_tab(task, self.config.default_timeout)
            .await?;

        IdeShell::new(self.client, self.config)
            .wait_notification_matching(&[task, "exited with code 0"], timeout)
            .await
    }

    /// Wait for a fragment of output in the task terminal
    pub async fn expect_output(&self, expected: &str, timeout: Duration) -> SuiteResult<()> {
        Terminal::new(self.client, self.config)
            .wait_text_contains(expected, timeout)
            .await
    }

    /// Close the terminal tab a task ran in
    pub async fn close_task_terminal(&self, task: &str) -> SuiteResult<()> {
        Terminal::new(self.client, self.config).close_tab(task).await
    }
}
