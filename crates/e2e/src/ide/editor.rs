//! Monaco editor interaction

use std::time::Duration;

use fantoccini::key::Key;
use fantoccini::{Client, Locator};
use tokio::time::sleep;

use crate::config::SuiteConfig;
use crate::error::SuiteResult;

use super::{key_chord, press_key, press_key_times, wait_gone, wait_present};

const INPUT_AREA: &str = ".monaco-editor textarea.inputarea";
const VIEW_LINES: &str = ".monaco-editor .view-lines";
const ERROR_MARKER: &str = ".monaco-editor .squiggly-error";
const SUGGEST_WIDGET: &str = ".monaco-editor .suggest-widget";

pub struct Editor<'a> {
    client: &'a Client,
    config: &'a SuiteConfig,
}

impl<'a> Editor<'a> {
    pub fn new(client: &'a Client, config: &'a SuiteConfig) -> Self {
        Self { client, config }
    }

    fn tab_xpath(tab: &str) -> String {
        format!(
            "//li[contains(@class,'p-TabBar-tab') and contains(@title,'{}')]",
            tab
        )
    }

    /// Wait for the editor tab to appear
    pub async fn wait_tab(&self, tab: &str, timeout: Duration) -> SuiteResult<()> {
        let xpath = Self::tab_xpath(tab);
        wait_present(
            self.client,
            Locator::XPath(&xpath),
            timeout,
            self.config.polling_interval,
            &format!("editor tab '{}'", tab),
        )
        .await?;
        Ok(())
    }

    /// Bring a tab to the foreground
    pub async fn select_tab(&self, tab: &str) -> SuiteResult<()> {
        let xpath = Self::tab_xpath(tab);
        wait_present(
            self.client,
            Locator::XPath(&xpath),
            self.config.default_timeout,
            self.config.polling_interval,
            &format!("editor tab '{}'", tab),
        )
        .await?
        .click()
        .await?;
        Ok(())
    }

    /// Wait for the tab plus an initialized Monaco surface
    pub async fn wait_editor_available(&self, tab: &str, timeout: Duration) -> SuiteResult<()> {
        self.wait_tab(tab, timeout).await?;
        wait_present(
            self.client,
            Locator::Css(INPUT_AREA),
            self.config.default_timeout,
            self.config.polling_interval,
            "editor input area",
        )
        .await?;
        Ok(())
    }

    /// Give the editor keyboard focus
    pub async fn focus(&self) -> SuiteResult<()> {
        wait_present(
            self.client,
            Locator::Css(VIEW_LINES),
            self.config.default_timeout,
            self.config.polling_interval,
            "editor text surface",
        )
        .await?
        .click()
        .await?;
        Ok(())
    }

    /// Place the cursor at a 1-based line and column.
    ///
    /// Jumps to the document start and walks down and right with arrow
    /// keys, which is viewport-independent (no pixel math against the
    /// virtualized line list).
    pub async fn move_cursor_to(&self, line: u32, column: u32) -> SuiteResult<()> {
        self.focus().await?;
        key_chord(self.client, Key::Control.into(), Key::Home.into()).await?;
        press_key_times(self.client, Key::Down.into(), line.saturating_sub(1) as usize).await?;
        press_key_times(self.client, Key::Right.into(), column.saturating_sub(1) as usize).await?;
        Ok(())
    }

    /// Type text at the current cursor position
    pub async fn type_text(&self, text: &str) -> SuiteResult<()> {
        let input = wait_present(
            self.client,
            Locator::Css(INPUT_AREA),
            self.config.default_timeout,
            self.config.polling_interval,
            "editor input area",
        )
        .await?;
        input.send_keys(text).await?;
        Ok(())
    }

    /// Undo the last edit
    pub async fn undo(&self) -> SuiteResult<()> {
        key_chord(self.client, Key::Control.into(), 'z').await?;
        Ok(())
    }

    /// Wait for an error squiggle to show up
    pub async fn wait_error_marker(&self, timeout: Duration) -> SuiteResult<()> {
        wait_present(
            self.client,
            Locator::Css(ERROR_MARKER),
            timeout,
            self.config.polling_interval,
            "error marker",
        )
        .await?;
        Ok(())
    }

    /// Wait for all error squiggles to clear
    pub async fn wait_error_marker_gone(&self, timeout: Duration) -> SuiteResult<()> {
        wait_gone(
            self.client,
            Locator::Css(ERROR_MARKER),
            timeout,
            self.config.polling_interval,
            "error marker",
        )
        .await
    }

    /// Open the completion widget with Ctrl+Space
    pub async fn invoke_completion(&self) -> SuiteResult<()> {
        key_chord(self.client, Key::Control.into(), ' ').await?;
        Ok(())
    }

    /// Wait for a completion proposal containing the given text
    pub async fn wait_suggestion_contains(
        &self,
        expected: &str,
        timeout: Duration,
    ) -> SuiteResult<()> {
        let xpath = format!(
            "//div[contains(@class,'suggest-widget')]//div[contains(@class,'monaco-list-row') and contains(.,'{}')]",
            expected
        );
        wait_present(
            self.client,
            Locator::XPath(&xpath),
            timeout,
            self.config.polling_interval,
            &format!("suggestion '{}'", expected),
        )
        .await?;
        Ok(())
    }

    /// Wait for the suggestion widget itself
    pub async fn wait_suggestion_widget(&self, timeout: Duration) -> SuiteResult<()> {
        wait_present(
            self.client,
            Locator::Css(SUGGEST_WIDGET),
            timeout,
            self.config.polling_interval,
            "suggestion widget",
        )
        .await?;
        Ok(())
    }

    /// Accept the highlighted completion proposal
    pub async fn accept_suggestion(&self) -> SuiteResult<()> {
        press_key(self.client, Key::Enter.into()).await
    }

    /// Dismiss any open editor widget
    pub async fn dismiss_widget(&self) -> SuiteResult<()> {
        press_key(self.client, Key::Escape.into()).await
    }

    /// Show the hover widget at the cursor (Ctrl+K Ctrl+I)
    pub async fn open_hover(&self) -> SuiteResult<()> {
        key_chord(self.client, Key::Control.into(), 'k').await?;
        // Chord pairs land quickly; Monaco needs both within its timeout
        sleep(Duration::from_millis(100)).await;
        key_chord(self.client, Key::Control.into(), 'i').await?;
        Ok(())
    }

    /// Wait for hover contents containing the given text
    pub async fn wait_hover_contains(&self, expected: &str, timeout: Duration) -> SuiteResult<()> {
        let xpath = format!(
            "//div[contains(@class,'monaco-hover-content') and contains(.,'{}')]",
            expected
        );
        wait_present(
            self.client,
            Locator::XPath(&xpath),
            timeout,
            self.config.polling_interval,
            &format!("hover containing '{}'", expected),
        )
        .await?;
        Ok(())
    }

    /// Wait until some visible line contains the given fragment
    pub async fn wait_line_contains(&self, fragment: &str, timeout: Duration) -> SuiteResult<()> {
        let xpath = format!(
            "//div[contains(@class,'view-line') and contains(.,'{}')]",
            fragment
        );
        wait_present(
            self.client,
            Locator::XPath(&xpath),
            timeout,
            self.config.polling_interval,
            &format!("editor line containing '{}'", fragment),
        )
        .await?;
        Ok(())
    }
}
