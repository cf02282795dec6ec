//! Declarative YAML test scenarios

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::SuiteResult;

/// A complete scenario parsed from YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Unique name for this scenario
    pub name: String,

    /// Human-readable description
    #[serde(default)]
    pub description: String,

    /// Tags for filtering
    #[serde(default)]
    pub tags: Vec<String>,

    /// Viewport the session is resized to before the first step
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,

    /// Steps to execute in order
    pub steps: Vec<Step>,
}

fn default_viewport() -> Viewport {
    Viewport { width: 1920, height: 1080 }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

/// A single step in a scenario.
///
/// The first group maps directly onto the automation interface; the second
/// group drives IDE-level flows through the page objects.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    /// Navigate to a path relative to the IDE base URL
    Navigate {
        path: String,
    },

    /// Click an element
    Click {
        selector: String,
    },

    /// Wait for an element to be present
    WaitFor {
        selector: String,
        #[serde(default = "default_wait_secs")]
        timeout_secs: u64,
    },

    /// Type text into an element
    TypeText {
        selector: String,
        text: String,
    },

    /// Wait for a fixed amount of time (use sparingly)
    Sleep {
        ms: u64,
    },

    /// Assert an element's text contains a fragment
    AssertText {
        selector: String,
        contains: String,
    },

    /// Take a screenshot into the artifact directory
    Screenshot {
        name: String,
    },

    /// Create a workspace from a stack and open it
    CreateWorkspace {
        stack: String,
    },

    /// Wait until the workspace IDE is ready and the project is imported
    WaitWorkspaceReady {
        sample: String,
        #[serde(default)]
        subfolder: Option<String>,
    },

    /// Open a file from the project tree into an editor tab
    OpenFile {
        path: String,
        tab: String,
    },

    /// Run a task via the top menu and wait for it to exit successfully
    RunTask {
        task: String,
        #[serde(default = "default_task_secs")]
        timeout_secs: u64,
        /// Optionally require a fragment in the task terminal output
        #[serde(default)]
        expect_output: Option<String>,
    },

    /// Type text at a position and expect an error marker to appear
    ExpectErrorMarker {
        tab: String,
        text: String,
        line: u32,
    },

    /// Invoke completion at a position and expect a proposal
    Autocomplete {
        tab: String,
        line: u32,
        column: u32,
        expected: String,
    },

    /// Open the suggestion widget at a position and expect an entry
    ExpectSuggestion {
        tab: String,
        line: u32,
        column: u32,
        expected: String,
    },

    /// Hover at a position and expect the hover widget to contain text
    ExpectHover {
        tab: String,
        line: u32,
        column: u32,
        expected: String,
    },

    /// Stop and delete the workspace created earlier in this scenario
    StopAndRemoveWorkspace,
}

fn default_wait_secs() -> u64 {
    20
}

fn default_task_secs() -> u64 {
    30
}

impl Step {
    /// Short label used in logs and step results
    pub fn label(&self) -> String {
        match self {
            Step::Navigate { path } => format!("navigate:{}", path),
            Step::Click { selector } => format!("click:{}", selector),
            Step::WaitFor { selector, .. } => format!("wait_for:{}", selector),
            Step::TypeText { selector, .. } => format!("type_text:{}", selector),
            Step::Sleep { ms } => format!("sleep:{}ms", ms),
            Step::AssertText { selector, .. } => format!("assert_text:{}", selector),
            Step::Screenshot { name } => format!("screenshot:{}", name),
            Step::CreateWorkspace { stack } => format!("create_workspace:{}", stack),
            Step::WaitWorkspaceReady { sample, .. } => {
                format!("wait_workspace_ready:{}", sample)
            }
            Step::OpenFile { tab, .. } => format!("open_file:{}", tab),
            Step::RunTask { task, .. } => format!("run_task:{}", task),
            Step::ExpectErrorMarker { tab, line, .. } => {
                format!("expect_error_marker:{}:{}", tab, line)
            }
            Step::Autocomplete { expected, .. } => format!("autocomplete:{}", expected),
            Step::ExpectSuggestion { expected, .. } => {
                format!("expect_suggestion:{}", expected)
            }
            Step::ExpectHover { expected, .. } => format!("expect_hover:{}", expected),
            Step::StopAndRemoveWorkspace => "stop_and_remove_workspace".to_string(),
        }
    }
}

impl Scenario {
    /// Parse a scenario from a YAML string
    pub fn from_yaml(yaml: &str) -> SuiteResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse a scenario from a YAML file
    pub fn from_file(path: &Path) -> SuiteResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Load all scenarios from a directory
    pub fn load_all(dir: &Path) -> SuiteResult<Vec<Self>> {
        let mut scenarios = Vec::new();

        for entry in walkdir::WalkDir::new(dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| {
                e.path()
                    .extension()
                    .map(|ext| ext == "yaml" || ext == "yml")
                    .unwrap_or(false)
            })
        {
            scenarios.push(Self::from_file(entry.path())?);
        }

        Ok(scenarios)
    }

    /// Filter scenarios by tag
    pub fn filter_by_tag<'a>(scenarios: &'a [Self], tag: &str) -> Vec<&'a Self> {
        scenarios
            .iter()
            .filter(|s| s.tags.iter().any(|t| t == tag))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_scenario() {
        let yaml = r#"
name: open-editor
description: Open a file and check the editor comes up
tags:
  - smoke
steps:
  - action: navigate
    path: /dashboard
  - action: wait_for
    selector: '#theia-app-shell'
  - action: screenshot
    name: shell
"#;
        let scenario = Scenario::from_yaml(yaml).unwrap();
        assert_eq!(scenario.name, "open-editor");
        assert_eq!(scenario.steps.len(), 3);
        assert_eq!(scenario.viewport.width, 1920);
    }

    #[test]
    fn test_parse_workspace_scenario() {
        let yaml = r#"
name: cpp-flow
viewport:
  width: 1280
  height: 800
steps:
  - action: create_workspace
    stack: C/C++
  - action: wait_workspace_ready
    sample: cpp-hello-world
  - action: open_file
    path: cpp-hello-world
    tab: hello.cpp
  - action: run_task
    task: build
    timeout_secs: 30
  - action: stop_and_remove_workspace
"#;
        let scenario = Scenario::from_yaml(yaml).unwrap();
        assert_eq!(scenario.viewport.width, 1280);
        assert_eq!(scenario.steps.len(), 5);
        match &scenario.steps[3] {
            Step::RunTask { task, timeout_secs, expect_output } => {
                assert_eq!(task, "build");
                assert_eq!(*timeout_secs, 30);
                assert!(expect_output.is_none());
            }
            other => panic!("unexpected step: {:?}", other),
        }
    }

    #[test]
    fn test_default_timeouts_applied() {
        let yaml = r#"
name: defaults
steps:
  - action: wait_for
    selector: '#files'
  - action: run_task
    task: run
"#;
        let scenario = Scenario::from_yaml(yaml).unwrap();
        match &scenario.steps[0] {
            Step::WaitFor { timeout_secs, .. } => assert_eq!(*timeout_secs, 20),
            other => panic!("unexpected step: {:?}", other),
        }
        match &scenario.steps[1] {
            Step::RunTask { timeout_secs, .. } => assert_eq!(*timeout_secs, 30),
            other => panic!("unexpected step: {:?}", other),
        }
    }

    #[test]
    fn test_parse_language_server_steps() {
        let yaml = r#"
name: ls-checks
steps:
  - action: expect_suggestion
    tab: hello.cpp
    line: 15
    column: 22
    expected: test
  - action: expect_hover
    tab: hello.cpp
    line: 15
    column: 9
    expected: printf
  - action: run_task
    task: run
    expect_output: Hello World
"#;
        let scenario = Scenario::from_yaml(yaml).unwrap();
        assert!(matches!(scenario.steps[1], Step::ExpectHover { .. }));
        match &scenario.steps[2] {
            Step::RunTask { expect_output, .. } => {
                assert_eq!(expect_output.as_deref(), Some("Hello World"));
            }
            other => panic!("unexpected step: {:?}", other),
        }
    }

    #[test]
    fn test_filter_by_tag() {
        let yaml_a = "name: a\ntags: [smoke]\nsteps: []";
        let yaml_b = "name: b\ntags: [languageserver]\nsteps: []";
        let scenarios = vec![
            Scenario::from_yaml(yaml_a).unwrap(),
            Scenario::from_yaml(yaml_b).unwrap(),
        ];

        let smoke = Scenario::filter_by_tag(&scenarios, "smoke");
        assert_eq!(smoke.len(), 1);
        assert_eq!(smoke[0].name, "a");
    }

    #[test]
    fn test_step_labels() {
        let step = Step::RunTask { task: "build".into(), timeout_secs: 30, expect_output: None };
        assert_eq!(step.label(), "run_task:build");

        let step = Step::ExpectErrorMarker {
            tab: "hello.cpp".into(),
            text: "error_text;".into(),
            line: 12,
        };
        assert_eq!(step.label(), "expect_error_marker:hello.cpp:12");
    }
}
