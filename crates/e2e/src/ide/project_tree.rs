//! Project tree (files view) interaction

use std::time::Duration;

use fantoccini::key::Key;
use fantoccini::{Client, Locator};

use crate::config::SuiteConfig;
use crate::error::SuiteResult;

use super::{press_key, wait_present};

const FILES_VIEW: &str = "#files";

pub struct ProjectTree<'a> {
    client: &'a Client,
    config: &'a SuiteConfig,
}

impl<'a> ProjectTree<'a> {
    pub fn new(client: &'a Client, config: &'a SuiteConfig) -> Self {
        Self { client, config }
    }

    /// Tree items carry their workspace-absolute path as element id
    fn item_selector(path: &str) -> String {
        format!("div[id='/projects/{}']", path.trim_start_matches('/'))
    }

    /// Wait for the files view panel
    pub async fn wait_files_view(&self) -> SuiteResult<()> {
        wait_present(
            self.client,
            Locator::Css(FILES_VIEW),
            self.config.default_timeout,
            self.config.polling_interval,
            FILES_VIEW,
        )
        .await?;
        Ok(())
    }

    /// Wait for a tree item to appear
    pub async fn wait_item(&self, path: &str, timeout: Duration) -> SuiteResult<()> {
        let selector = Self::item_selector(path);
        wait_present(
            self.client,
            Locator::Css(&selector),
            timeout,
            self.config.polling_interval,
            &format!("tree item '{}'", path),
        )
        .await?;
        Ok(())
    }

    /// Open a tree item: select it, then confirm with Enter.
    ///
    /// Enter both expands folders and opens files, and avoids depending on
    /// double-click timing.
    pub async fn open_item(&self, path: &str) -> SuiteResult<()> {
        let selector = Self::item_selector(path);
        wait_present(
            self.client,
            Locator::Css(&selector),
            self.config.default_timeout,
            self.config.polling_interval,
            &format!("tree item '{}'", path),
        )
        .await?
        .click()
        .await?;
        press_key(self.client, Key::Enter.into()).await
    }

    /// Wait until the imported project shows up in the tree
    pub async fn wait_project_imported(
        &self,
        sample: &str,
        subfolder: Option<&str>,
        timeout: Duration,
    ) -> SuiteResult<()> {
        self.wait_item(sample, timeout).await?;

        if let Some(sub) = subfolder {
            self.open_item(sample).await?;
            let nested = format!("{}/{}", sample, sub);
            self.wait_item(&nested, self.config.default_timeout).await?;
        }

        Ok(())
    }
}
