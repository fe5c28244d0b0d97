//! Core domain types for the issue tracker.
//!
//! This module defines the `Issue` aggregate, its three-valued workflow
//! status, and the labels attached for categorization. All transitions are
//! pure: they take a snapshot and return a new one, leaving the input
//! untouched. Archival enforcement lives in the command executor, since the
//! entity itself has no view of which mutations a caller is allowed to make.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};

/// Workflow status of an issue, independent of archival.
///
/// Any status may transition to any other; there is no workflow engine here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueStatus {
    /// Newly created, not yet picked up
    Open,
    /// Currently being worked on
    InProgress,
    /// Work finished
    Closed,
}

impl IssueStatus {
    /// Parse a status from its stored string form.
    ///
    /// Returns `InvalidArgument` for anything other than the three defined
    /// values. Callers that receive statuses as text (transport layers,
    /// store drivers) funnel through this instead of guessing.
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "Open" => Ok(IssueStatus::Open),
            "InProgress" => Ok(IssueStatus::InProgress),
            "Closed" => Ok(IssueStatus::Closed),
            other => Err(Error::InvalidArgument(format!(
                "unknown issue status: {other}"
            ))),
        }
    }

    /// The stored string form of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueStatus::Open => "Open",
            IssueStatus::InProgress => "InProgress",
            IssueStatus::Closed => "Closed",
        }
    }
}

/// A label attached to an issue for categorization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Label name; never empty
    pub name: String,
    /// Display color in hex form, e.g. "#000000"; never empty
    pub color: String,
}

/// Default color assigned when a label is created from a bare name.
pub const DEFAULT_LABEL_COLOR: &str = "#000000";

impl Label {
    /// Create a label, rejecting empty or whitespace-only fields.
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let color = color.into();
        if name.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "label name cannot be empty".to_string(),
            ));
        }
        if color.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "label color cannot be empty".to_string(),
            ));
        }
        Ok(Self { name, color })
    }

    /// Create a label from a bare name with the default color.
    pub fn named(name: impl Into<String>) -> Result<Self> {
        Self::new(name, DEFAULT_LABEL_COLOR)
    }
}

/// An issue record: the aggregate root of this crate.
///
/// The workflow status and the archival flag are orthogonal. Archival is a
/// one-way soft delete: once `is_archived` flips to true the snapshot is
/// frozen for every ordinary mutation path, and the status it held at that
/// moment is preserved rather than overwritten by a fourth status value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Unique identifier (UUID); never empty, immutable after creation
    pub id: String,
    /// Short summary; never empty
    pub title: String,
    /// Detailed description, if any
    pub description: Option<String>,
    /// Current workflow status
    pub status: IssueStatus,
    /// When the issue was created; immutable
    pub created_at: DateTime<Utc>,
    /// Refreshed on every accepted mutation
    pub updated_at: DateTime<Utc>,
    /// One-way soft-delete flag
    pub is_archived: bool,
    /// Who archived the issue, when known
    pub archived_by: Option<String>,
    /// When the issue was archived
    pub archived_at: Option<DateTime<Utc>>,
    /// Labels for categorization; duplicates are permitted
    #[serde(default)]
    pub labels: Vec<Label>,
}

impl Issue {
    /// Create a new issue with a fresh id, `Open` status, and both
    /// timestamps set to the same instant.
    pub fn create(
        title: impl Into<String>,
        description: Option<String>,
        labels: Vec<Label>,
    ) -> Result<Self> {
        let now = Utc::now();
        Self::from_parts(
            Uuid::new_v4().to_string(),
            title.into(),
            description,
            IssueStatus::Open,
            now,
            now,
            labels,
        )
    }

    /// Rehydrate an issue from stored fields, enforcing the id/title
    /// invariants. Store drivers use this when mapping rows/documents back
    /// into the domain.
    pub fn from_parts(
        id: String,
        title: String,
        description: Option<String>,
        status: IssueStatus,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        labels: Vec<Label>,
    ) -> Result<Self> {
        if id.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "issue id cannot be empty".to_string(),
            ));
        }
        if title.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "issue title cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            id,
            title,
            description,
            status,
            created_at,
            updated_at,
            is_archived: false,
            archived_by: None,
            archived_at: None,
            labels,
        })
    }

    /// Return a snapshot with the given status.
    ///
    /// Setting the current status again is a no-op: the returned snapshot is
    /// identical to `self`, `updated_at` included.
    pub fn update_status(&self, new_status: IssueStatus) -> Issue {
        if self.status == new_status {
            return self.clone();
        }
        Issue {
            status: new_status,
            updated_at: Utc::now(),
            ..self.clone()
        }
    }

    /// Return a snapshot with the given title and description and a
    /// refreshed `updated_at`.
    ///
    /// Field constraints belong to the validation layer and the archival
    /// guard belongs to the executor; this method applies the edit as given.
    pub fn update(&self, title: impl Into<String>, description: Option<String>) -> Issue {
        Issue {
            title: title.into(),
            description,
            updated_at: Utc::now(),
            ..self.clone()
        }
    }

    /// Return an archived snapshot, recording who archived it and when.
    ///
    /// The executor guarantees this is only called on live snapshots; the
    /// idempotent re-archive case never reaches here.
    pub fn archive(&self, archived_by: Option<String>) -> Issue {
        let now = Utc::now();
        Issue {
            is_archived: true,
            archived_by,
            archived_at: Some(now),
            updated_at: now,
            ..self.clone()
        }
    }
}
