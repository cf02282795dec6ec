//! Page objects for the IDE surface
//!
//! Thin structs over the driver's automation interface. Selectors target a
//! Theia-based IDE shell with Monaco editors; every wait goes through the
//! poll-based helpers below so timeouts stay caller-controlled.

pub mod dashboard;
pub mod editor;
pub mod project_tree;
pub mod shell;
pub mod terminal;
pub mod top_menu;

pub use dashboard::Dashboard;
pub use editor::Editor;
pub use project_tree::ProjectTree;
pub use shell::IdeShell;
pub use terminal::Terminal;
pub use top_menu::TopMenu;

use std::time::{Duration, Instant};

use fantoccini::actions::{InputSource, KeyAction, KeyActions};
use fantoccini::elements::Element;
use fantoccini::{Client, Locator};
use tokio::time::sleep;

use crate::error::{SuiteError, SuiteResult};

/// Poll until the element is present, or time out.
pub(crate) async fn wait_present(
    client: &Client,
    locator: Locator<'_>,
    timeout: Duration,
    poll: Duration,
    what: &str,
) -> SuiteResult<Element> {
    let start = Instant::now();
    loop {
        match client.find(locator).await {
            Ok(elem) => return Ok(elem),
            Err(e) if e.is_no_such_element() => {}
            Err(e) => return Err(e.into()),
        }
        if start.elapsed() >= timeout {
            return Err(SuiteError::Timeout(what.to_string()));
        }
        sleep(poll).await;
    }
}

/// Poll until the element is gone, or time out.
pub(crate) async fn wait_gone(
    client: &Client,
    locator: Locator<'_>,
    timeout: Duration,
    poll: Duration,
    what: &str,
) -> SuiteResult<()> {
    let start = Instant::now();
    loop {
        match client.find(locator).await {
            Ok(_) => {}
            Err(e) if e.is_no_such_element() => return Ok(()),
            Err(e) => return Err(e.into()),
        }
        if start.elapsed() >= timeout {
            return Err(SuiteError::Timeout(format!("{} to disappear", what)));
        }
        sleep(poll).await;
    }
}

/// Press a single key
pub(crate) async fn press_key(client: &Client, key: char) -> SuiteResult<()> {
    press_key_times(client, key, 1).await
}

/// Press a key a number of times in one action sequence
pub(crate) async fn press_key_times(client: &Client, key: char, times: usize) -> SuiteResult<()> {
    if times == 0 {
        return Ok(());
    }
    let mut actions = KeyActions::new("keyboard".to_string());
    for _ in 0..times {
        actions = actions
            .then(KeyAction::Down { value: key })
            .then(KeyAction::Up { value: key });
    }
    client.perform_actions(actions).await?;
    Ok(())
}

/// Press a key while holding a modifier
pub(crate) async fn key_chord(client: &Client, modifier: char, key: char) -> SuiteResult<()> {
    let actions = KeyActions::new("keyboard".to_string())
        .then(KeyAction::Down { value: modifier })
        .then(KeyAction::Down { value: key })
        .then(KeyAction::Up { value: key })
        .then(KeyAction::Up { value: modifier });
    client.perform_actions(actions).await?;
    Ok(())
}
