//! Top menu bar and quick-open input

use fantoccini::key::Key;
use fantoccini::{Client, Locator};

use crate::config::SuiteConfig;
use crate::error::SuiteResult;

use super::{press_key, wait_present};

const QUICK_OPEN_INPUT: &str = ".quick-open-input input";

pub struct TopMenu<'a> {
    client: &'a Client,
    config: &'a SuiteConfig,
}

impl<'a> TopMenu<'a> {
    pub fn new(client: &'a Client, config: &'a SuiteConfig) -> Self {
        Self { client, config }
    }

    /// Click a top-level menu bar entry
    pub async fn click_menu(&self, label: &str) -> SuiteResult<()> {
        let xpath = format!(
            "//div[contains(@class,'p-MenuBar-itemLabel') and text()='{}']",
            label
        );
        wait_present(
            self.client,
            Locator::XPath(&xpath),
            self.config.default_timeout,
            self.config.polling_interval,
            &format!("menu '{}'", label),
        )
        .await?
        .click()
        .await?;
        Ok(())
    }

    /// Click an entry in the currently open dropdown menu
    pub async fn click_menu_entry(&self, label: &str) -> SuiteResult<()> {
        let xpath = format!(
            "//div[contains(@class,'p-Menu-itemLabel') and text()='{}']",
            label
        );
        wait_present(
            self.client,
            Locator::XPath(&xpath),
            self.config.default_timeout,
            self.config.polling_interval,
            &format!("menu entry '{}'", label),
        )
        .await?
        .click()
        .await?;
        Ok(())
    }

    /// Run a named task via Terminal -> Run Task... and the quick-open input
    pub async fn run_task(&self, task: &str) -> SuiteResult<()> {
        self.click_menu("Terminal").await?;
        self.click_menu_entry("Run Task...").await?;

        let input = wait_present(
            self.client,
            Locator::Css(QUICK_OPEN_INPUT),
            self.config.default_timeout,
            self.config.polling_interval,
            "quick-open input",
        )
        .await?;
        input.send_keys(task).await?;
        press_key(self.client, Key::Enter.into()).await
    }
}
