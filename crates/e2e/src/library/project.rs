//! Project import and file opening

use fantoccini::Client;
use tracing::info;

use crate::config::SuiteConfig;
use crate::error::SuiteResult;
use crate::ide::{Editor, IdeShell, ProjectTree};

pub struct ProjectAndFile<'a> {
    client: &'a Client,
    config: &'a SuiteConfig,
}

impl<'a> ProjectAndFile<'a> {
    pub fn new(client: &'a Client, config: &'a SuiteConfig) -> Self {
        Self { client, config }
    }

    /// Wait until the IDE shell is up and the sample project is imported
    pub async fn wait_workspace_readiness(
        &self,
        sample: &str,
        subfolder: Option<&str>,
    ) -> SuiteResult<()> {
        info!("Waiting for workspace readiness ({})", sample);

        IdeShell::new(self.client, self.config).wait_ide_ready().await?;

        let tree = ProjectTree::new(self.client, self.config);
        tree.wait_files_view().await?;
        tree.wait_project_imported(sample, subfolder, self.config.load_page_timeout)
            .await
    }

    /// Open a file from a project folder into an editor tab
    pub async fn open_file(&self, folder: &str, tab: &str) -> SuiteResult<()> {
        info!("Opening {}/{}", folder, tab);

        let tree = ProjectTree::new(self.client, self.config);
        tree.open_item(folder).await?;

        let file_path = format!("{}/{}", folder.trim_end_matches('/'), tab);
        tree.wait_item(&file_path, self.config.default_timeout).await?;
        tree.open_item(&file_path).await?;

        Editor::new(self.client, self.config)
            .wait_editor_available(tab, self.config.default_timeout)
            .await
    }
}
