//! Language-server checks: diagnostics, completion, hover

use fantoccini::Client;
use tracing::info;

use crate::config::SuiteConfig;
use crate::error::SuiteResult;
use crate::ide::Editor;

pub struct LanguageServer<'a> {
    client: &'a Client,
    config: &'a SuiteConfig,
}

impl<'a> LanguageServer<'a> {
    pub fn new(client: &'a Client, config: &'a SuiteConfig) -> Self {
        Self { client, config }
    }

    /// Type broken text at a line and expect an error marker, then undo
    /// and expect the marker to clear.
    pub async fn error_highlighting(&self, tab: &str, text: &str, line: u32) -> SuiteResult<()> {
        info!("Checking error highlighting in {} at line {}", tab, line);

        let editor = Editor::new(self.client, self.config);
        editor.select_tab(tab).await?;
        editor.move_cursor_to(line, 1).await?;
        editor.type_text(text).await?;
        editor.wait_error_marker(self.config.default_timeout).await?;

        editor.undo().await?;
        editor
            .wait_error_marker_gone(self.config.default_timeout)
            .await
    }

    /// Invoke completion at a position and expect a proposal to be listed
    pub async fn suggestion_invoking(
        &self,
        tab: &str,
        line: u32,
        column: u32,
        expected: &str,
    ) -> SuiteResult<()> {
        info!("Checking suggestions in {} at {}:{}", tab, line, column);

        let editor = Editor::new(self.client, self.config);
        editor.select_tab(tab).await?;
        editor.move_cursor_to(line, column).await?;
        editor.invoke_completion().await?;
        editor
            .wait_suggestion_contains(expected, self.config.default_timeout)
            .await?;
        editor.dismiss_widget().await
    }

    /// Invoke completion at a position, accept the expected proposal and
    /// verify it landed in the document.
    pub async fn autocomplete(
        &self,
        tab: &str,
        line: u32,
        column: u32,
        expected: &str,
    ) -> SuiteResult<()> {
        info!("Checking autocomplete in {} at {}:{}", tab, line, column);

        let editor = Editor::new(self.client, self.config);
        editor.select_tab(tab).await?;
        editor.move_cursor_to(line, column).await?;
        editor.invoke_completion().await?;
        editor
            .wait_suggestion_widget(self.config.default_timeout)
            .await?;
        editor
            .wait_suggestion_contains(expected, self.config.default_timeout)
            .await?;
        editor.accept_suggestion().await?;
        editor
            .wait_line_contains(expected, self.config.default_timeout)
            .await
    }

    /// Show the hover at a position and expect it to contain text
    pub async fn hover(
        &self,
        tab: &str,
        line: u32,
        column: u32,
        expected: &str,
    ) -> SuiteResult<()> {
        info!("Checking hover in {} at {}:{}", tab, line, column);

        let editor = Editor::new(self.client, self.config);
        editor.select_tab(tab).await?;
        editor.move_cursor_to(line, column).await?;
        editor.open_hover().await?;
        editor
            .wait_hover_contains(expected, self.config.default_timeout)
            .await?;
        editor.dismiss_widget().await
    }
}
