//! C/C++ workspace flow against a live IDE
//!
//! Needs chromedriver on PATH and an IDE at `E2E_BASE_URL`; ignored in
//! normal test runs.

use std::time::Duration;

use ide_e2e::ide::Editor;
use ide_e2e::library::{CodeExecution, LanguageServer, ProjectAndFile, WorkspaceHandling};
use ide_e2e::SuiteConfig;
use ide_e2e_driver::{DriverConfig, SessionFactory};

const STACK: &str = "C/C++";
const SAMPLE: &str = "cpp-hello-world";
const TAB: &str = "hello.cpp";

#[tokio::test]
#[ignore] // Requires chromedriver and a running IDE
async fn cpp_workspace_end_to_end() {
    let driver_config = DriverConfig::from_env().expect("driver config");
    let suite_config = SuiteConfig::from_env().expect("suite config");

    let session = SessionFactory::new(driver_config)
        .create()
        .await
        .expect("browser session");
    let client = session.client();

    let workspaces = WorkspaceHandling::new(client, &suite_config);
    workspaces.create_and_open(STACK).await.expect("create workspace");
    let workspace = workspaces
        .obtain_workspace_name()
        .await
        .expect("workspace name");

    let project = ProjectAndFile::new(client, &suite_config);
    project
        .wait_workspace_readiness(SAMPLE, None)
        .await
        .expect("workspace ready");
    project.open_file(SAMPLE, TAB).await.expect("open file");

    // Prepare the file so the language-server checks below have targets
    let editor = Editor::new(client, &suite_config);
    editor.move_cursor_to(6, 1).await.expect("cursor");
    editor.type_text("#include <cstdio>\n").await.expect("type");
    editor.move_cursor_to(10, 1).await.expect("cursor");
    editor
        .type_text("\nchar const *test = \"test\";\n")
        .await
        .expect("type");
    editor.move_cursor_to(15, 5).await.expect("cursor");
    editor
        .type_text("printf(\"%s\\n\", test);\n")
        .await
        .expect("type");

    let tasks = CodeExecution::new(client, &suite_config);
    tasks
        .run_task("build", Duration::from_secs(30))
        .await
        .expect("build task");
    tasks
        .run_task("run", Duration::from_secs(30))
        .await
        .expect("run task");

    let ls = LanguageServer::new(client, &suite_config);
    ls.error_highlighting(TAB, "error_text;", 12)
        .await
        .expect("diagnostics");
    ls.suggestion_invoking(TAB, 15, 22, "test")
        .await
        .expect("suggestions");
    ls.autocomplete(TAB, 15, 9, "printf")
        .await
        .expect("autocomplete");

    workspaces.stop_and_remove(&workspace).await.expect("cleanup");
    session.close().await.expect("close session");
}
