//! Test library: IDE-level flows composed from page objects
//!
//! Each group borrows the automation client plus the suite configuration
//! and exposes the operations scenarios are written against.

pub mod code_execution;
pub mod language_server;
pub mod project;
pub mod workspace;

pub use code_execution::CodeExecution;
pub use language_server::LanguageServer;
pub use project::ProjectAndFile;
pub use workspace::WorkspaceHandling;
