//! End-to-end browser test suite for the web IDE
//!
//! Drives the IDE through a WebDriver session built by `ide-e2e-driver`,
//! verifying workspace creation, file editing, task execution and
//! language-server features via UI interactions.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      SuiteRunner                            │
//! │    ├── SessionFactory::create() -> SessionHandle            │
//! │    ├── run_scenario(scenario) -> ScenarioResult             │
//! │    └── write_report() -> report.json                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Scenario (YAML)                                            │
//! │    ├── name, tags, viewport                                 │
//! │    └── steps: [Step]                                        │
//! │          ├── navigate / click / wait_for / assert_text      │
//! │          ├── create_workspace { stack }                     │
//! │          ├── open_file { path, tab }                        │
//! │          ├── run_task { task }                              │
//! │          └── expect_error_marker / autocomplete / hover     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Page objects (ide::*) and test library (library::*)       │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod executor;
pub mod ide;
pub mod library;
pub mod runner;
pub mod scenario;

pub use config::SuiteConfig;
pub use error::{SuiteError, SuiteResult};
pub use executor::{ScenarioExecutor, StepResult};
pub use runner::{ScenarioResult, SuiteReport, SuiteRunner};
pub use scenario::{Scenario, Step};
