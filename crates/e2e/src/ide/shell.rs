//! IDE shell: application frame, status bar, notifications

use std::time::Duration;

use fantoccini::{Client, Locator};

use crate::config::SuiteConfig;
use crate::error::SuiteResult;

use super::wait_present;

const APP_SHELL: &str = "#theia-app-shell";
const STATUS_BAR: &str = "div.theia-statusBar";

pub struct IdeShell<'a> {
    client: &'a Client,
    config: &'a SuiteConfig,
}

impl<'a> IdeShell<'a> {
    pub fn new(client: &'a Client, config: &'a SuiteConfig) -> Self {
        Self { client, config }
    }

    /// Wait until the IDE frame is loaded and the status bar is up.
    ///
    /// Workspace startup can take minutes, so the shell wait uses the long
    /// page timeout.
    pub async fn wait_ide_ready(&self) -> SuiteResult<()> {
        wait_present(
            self.client,
            Locator::Css(APP_SHELL),
            self.config.load_page_timeout,
            self.config.polling_interval,
            APP_SHELL,
        )
        .await?;
        wait_present(
            self.client,
            Locator::Css(STATUS_BAR),
            self.config.default_timeout,
            self.config.polling_interval,
            STATUS_BAR,
        )
        .await?;
        Ok(())
    }

    /// Wait for a notification whose text contains every given fragment
    pub async fn wait_notification_matching(
        &self,
        fragments: &[&str],
        timeout: Duration,
    ) -> SuiteResult<()> {
        let conditions: Vec<String> = fragments
            .iter()
            .map(|f| format!("contains(.,'{}')", f))
            .collect();
        let xpath = format!(
            "//div[contains(@class,'theia-notification-message') and {}]",
            conditions.join(" and ")
        );
        wait_present(
            self.client,
            Locator::XPath(&xpath),
            timeout,
            self.config.polling_interval,
            &format!("notification matching {:?}", fragments),
        )
        .await?;
        Ok(())
    }
}
