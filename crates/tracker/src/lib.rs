//! Issue lifecycle and pagination core.
//!
//! This library tracks issue records through a three-valued workflow status
//! and a separate one-way archival flag, exposed through validated
//! create / read / update / list / status-change / archive operations. It
//! owns the entity invariants, the validation rules, and the handler
//! orchestration; persistence lives behind the [`storage::IssueRepository`]
//! trait, and transport is the embedding application's concern.

pub mod commands;
pub mod domain;
pub mod error;
pub mod storage;
pub mod validation;

// Re-export commonly used types
pub use commands::{CommandExecutor, PageOfIssues};
pub use domain::{Issue, IssueStatus, Label};
pub use error::{Error, FieldError, Result, StorageError, ValidationErrors};
pub use storage::{InMemoryIssueRepository, IssueRepository};
pub use validation::{
    CreateIssueCommand, DeleteIssueCommand, GetIssueQuery, ListIssuesQuery, UpdateIssueCommand,
    UpdateIssueStatusCommand,
};
