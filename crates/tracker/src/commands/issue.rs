//! Issue mutation handlers: create, edit, status change, and archival.

use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::CommandExecutor;
use crate::domain::{Issue, Label};
use crate::error::{Error, Result};
use crate::storage::IssueRepository;
use crate::validation::{
    validate_create, validate_delete, validate_update, validate_update_status,
    CreateIssueCommand, DeleteIssueCommand, UpdateIssueCommand, UpdateIssueStatusCommand,
};

impl<R: IssueRepository> CommandExecutor<R> {
    /// Create a new issue.
    ///
    /// Validates the command, builds labels from the given names with the
    /// default color, and issues exactly one repository write. Creation has
    /// no read-before-write and cannot conflict.
    pub async fn create_issue(
        &self,
        command: CreateIssueCommand,
        cancel: &CancellationToken,
    ) -> Result<Issue> {
        self.ensure_valid(validate_create(&command))?;
        self.checkpoint(cancel)?;

        let labels = command
            .labels
            .into_iter()
            .map(Label::named)
            .collect::<Result<Vec<_>>>()?;

        let issue = Issue::create(command.title, command.description, labels)?;
        debug!(issue_id = %issue.id, "creating issue");
        Ok(self.repository.create(issue).await?)
    }

    /// Edit an issue's title and description.
    ///
    /// Absence is `NotFound`; an archived target is `Conflict` and nothing
    /// is written. A repository update that reports the target vanished
    /// (lost race with a concurrent removal) also surfaces as `NotFound`.
    pub async fn update_issue(
        &self,
        command: UpdateIssueCommand,
        cancel: &CancellationToken,
    ) -> Result<Issue> {
        self.ensure_valid(validate_update(&command))?;
        self.checkpoint(cancel)?;

        let existing = self
            .repository
            .get_by_id(&command.id)
            .await?
            .ok_or_else(|| Error::NotFound(command.id.clone()))?;

        if existing.is_archived {
            debug!(issue_id = %command.id, "rejecting edit of archived issue");
            return Err(Error::Conflict(command.id));
        }

        self.checkpoint(cancel)?;
        let updated = existing.update(command.title, command.description);
        self.repository
            .update(updated)
            .await?
            .ok_or(Error::NotFound(command.id))
    }

    /// Change an issue's workflow status.
    ///
    /// Returns `Ok(None)` when the issue does not exist; callers map
    /// absence to their own not-found response. Archived issues reject
    /// status changes with `Conflict`, the same rule as edits. Setting the
    /// current status again persists the unchanged snapshot without
    /// bumping `updated_at`.
    pub async fn update_issue_status(
        &self,
        command: UpdateIssueStatusCommand,
        cancel: &CancellationToken,
    ) -> Result<Option<Issue>> {
        self.ensure_valid(validate_update_status(&command))?;
        self.checkpoint(cancel)?;

        let existing = match self.repository.get_by_id(&command.issue_id).await? {
            Some(issue) => issue,
            None => return Ok(None),
        };

        if existing.is_archived {
            debug!(issue_id = %command.issue_id, "rejecting status change of archived issue");
            return Err(Error::Conflict(command.issue_id));
        }

        self.checkpoint(cancel)?;
        let updated = existing.update_status(command.status);
        Ok(self.repository.update(updated).await?)
    }

    /// Archive (soft-delete) an issue.
    ///
    /// Absence is `NotFound`. Archiving an already-archived issue succeeds
    /// without any further write — no timestamp bump, no repository call
    /// beyond the initial read. The record is never removed from the store.
    pub async fn delete_issue(
        &self,
        command: DeleteIssueCommand,
        cancel: &CancellationToken,
    ) -> Result<bool> {
        self.ensure_valid(validate_delete(&command))?;
        self.checkpoint(cancel)?;

        let existing = self
            .repository
            .get_by_id(&command.id)
            .await?
            .ok_or_else(|| Error::NotFound(command.id.clone()))?;

        if existing.is_archived {
            debug!(issue_id = %command.id, "issue already archived, nothing to do");
            return Ok(true);
        }

        self.checkpoint(cancel)?;
        debug!(issue_id = %command.id, "archiving issue");
        Ok(self
            .repository
            .archive(&command.id, command.archived_by.as_deref())
            .await?)
    }
}
