//! Command execution logic for all issue operations.
//!
//! The `CommandExecutor` orchestrates every operation the same way:
//! validate the command, load current state when a rule needs it, apply the
//! domain transition, persist through the repository, and shape the result.
//! It holds no state of its own beyond the repository handle, so one
//! executor can serve any number of concurrent callers.
//!
//! Organized into submodules by functional area:
//! - `issue`: create, update, status change, and archival
//! - `query`: point lookups, unbounded reads, and paginated listing

mod issue;
mod query;

use std::sync::Arc;

use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::domain::Issue;
use crate::error::{Error, Result, ValidationErrors};
use crate::storage::IssueRepository;

/// One page of non-archived issues plus the figures needed to render a
/// pager.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageOfIssues {
    pub items: Vec<Issue>,
    /// Total count of non-archived issues across all pages
    pub total: u64,
    /// The 1-indexed page that was requested
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

impl PageOfIssues {
    fn new(items: Vec<Issue>, total: u64, page: u32, page_size: u32) -> Self {
        let total_pages = total.div_ceil(page_size as u64) as u32;
        Self {
            items,
            total,
            page,
            page_size,
            total_pages,
        }
    }
}

/// Executes validated commands and queries against a repository.
///
/// Stateless and cheap to clone; all issue state lives behind the
/// repository boundary. Every method takes a [`CancellationToken`] and
/// honors it before and between repository calls — a repository call that
/// has already started is one atomic write and is never torn.
#[derive(Debug)]
pub struct CommandExecutor<R: IssueRepository> {
    repository: Arc<R>,
}

impl<R: IssueRepository> Clone for CommandExecutor<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: IssueRepository> CommandExecutor<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Fail fast with `Cancelled` once the caller's token has fired.
    fn checkpoint(&self, cancel: &CancellationToken) -> Result<()> {
        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }
        Ok(())
    }

    /// Turn a failing validation report into the `Validation` error,
    /// carrying every collected violation.
    fn ensure_valid(&self, report: ValidationErrors) -> Result<()> {
        if report.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation(report))
        }
    }
}
