//! Terminal panel interaction

use std::time::Duration;

use fantoccini::{Client, Locator};

use crate::config::SuiteConfig;
use crate::error::SuiteResult;

use super::wait_present;

pub struct Terminal<'a> {
    client: &'a Client,
    config: &'a SuiteConfig,
}

impl<'a> Terminal<'a> {
    pub fn new(client: &'a Client, config: &'a SuiteConfig) -> Self {
        Self { client, config }
    }

    fn tab_xpath(title: &str) -> String {
        format!(
            "//li[contains(@class,'p-TabBar-tab') and contains(.,'{}')]",
            title
        )
    }

    /// Wait for a terminal tab with the given title
    pub async fn wait_tab(&self, title: &str, timeout: Duration) -> SuiteResult<()> {
        let xpath = Self::tab_xpath(title);
        wait_present(
            self.client,
            Locator::XPath(&xpath),
            timeout,
            self.config.polling_interval,
            &format!("terminal tab '{}'", title),
        )
        .await?;
        Ok(())
    }

    /// Wait until the visible terminal output contains the given text
    pub async fn wait_text_contains(&self, expected: &str, timeout: Duration) -> SuiteResult<()> {
        let xpath = format!(
            "//div[contains(@class,'xterm-rows') and contains(.,'{}')]",
            expected
        );
        wait_present(
            self.client,
            Locator::XPath(&xpath),
            timeout,
            self.config.polling_interval,
            &format!("terminal output '{}'", expected),
        )
        .await?;
        Ok(())
    }

    /// Close a terminal tab via its close icon
    pub async fn close_tab(&self, title: &str) -> SuiteResult<()> {
        let xpath = format!(
            "{}//div[contains(@class,'p-TabBar-tabCloseIcon')]",
            Self::tab_xpath(title)
        );
        wait_present(
            self.client,
            Locator::XPath(&xpath),
            self.config.default_timeout,
            self.config.polling_interval,
            &format!("close icon of '{}'", title),
        )
        .await?
        .click()
        .await?;
        Ok(())
    }
}
