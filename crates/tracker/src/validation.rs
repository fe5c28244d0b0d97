//! Command and query shapes, and the field rules enforced before any
//! persistence is attempted.
//!
//! Validators are pure: they never touch the repository, and they collect
//! every violation rather than stopping at the first so callers can render
//! a complete report. The executor turns a failing report into
//! [`Error::Validation`](crate::error::Error::Validation).

use serde::{Deserialize, Serialize};

use crate::domain::IssueStatus;
use crate::error::{FieldError, ValidationErrors};

/// Title bounds at creation time.
pub const CREATE_TITLE_MIN: usize = 3;
pub const CREATE_TITLE_MAX: usize = 200;
/// Title bounds on edit; wider than creation, kept as the original system
/// shipped them.
pub const UPDATE_TITLE_MIN: usize = 3;
pub const UPDATE_TITLE_MAX: usize = 256;
pub const CREATE_DESCRIPTION_MAX: usize = 5000;
pub const UPDATE_DESCRIPTION_MAX: usize = 4096;
pub const LABEL_NAME_MAX: usize = 50;
pub const PAGE_SIZE_MAX: u32 = 100;

/// Command to create a new issue.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIssueCommand {
    pub title: String,
    pub description: Option<String>,
    /// Bare label names; the executor assigns the default color
    #[serde(default)]
    pub labels: Vec<String>,
}

/// Command to edit an existing issue's title and description.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIssueCommand {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
}

/// Command to change an issue's workflow status.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIssueStatusCommand {
    pub issue_id: String,
    pub status: IssueStatus,
}

/// Command to archive (soft-delete) an issue.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteIssueCommand {
    pub id: String,
    /// Recorded on the snapshot when the archive actually happens
    pub archived_by: Option<String>,
}

/// Query for one page of non-archived issues.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListIssuesQuery {
    /// 1-indexed page number
    pub page: u32,
    pub page_size: u32,
}

/// Query for a single issue by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetIssueQuery {
    pub issue_id: String,
}

fn require(errors: &mut Vec<FieldError>, field: &str, value: &str, label: &str) -> bool {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, format!("{label} is required.")));
        false
    } else {
        true
    }
}

fn check_title(errors: &mut Vec<FieldError>, title: &str, min: usize, max: usize) {
    if !require(errors, "title", title, "Title") {
        return;
    }
    let len = title.chars().count();
    if len < min {
        errors.push(FieldError::new(
            "title",
            format!("Title must be at least {min} characters long."),
        ));
    }
    if len > max {
        errors.push(FieldError::new(
            "title",
            format!("Title cannot exceed {max} characters."),
        ));
    }
}

fn check_description(errors: &mut Vec<FieldError>, description: Option<&str>, max: usize) {
    if let Some(description) = description {
        if description.chars().count() > max {
            errors.push(FieldError::new(
                "description",
                format!("Description cannot exceed {max} characters."),
            ));
        }
    }
}

/// Validate a create command: title 3–200, description ≤5000 when present,
/// each label name non-empty and ≤50 characters.
pub fn validate_create(command: &CreateIssueCommand) -> ValidationErrors {
    let mut errors = Vec::new();
    check_title(&mut errors, &command.title, CREATE_TITLE_MIN, CREATE_TITLE_MAX);
    check_description(
        &mut errors,
        command.description.as_deref(),
        CREATE_DESCRIPTION_MAX,
    );
    for label in &command.labels {
        if label.trim().is_empty() {
            errors.push(FieldError::new("labels", "Label name cannot be empty."));
        } else if label.chars().count() > LABEL_NAME_MAX {
            errors.push(FieldError::new(
                "labels",
                format!("Label name cannot exceed {LABEL_NAME_MAX} characters."),
            ));
        }
    }
    ValidationErrors { errors }
}

/// Validate an update command: id required, title 3–256, description ≤4096.
pub fn validate_update(command: &UpdateIssueCommand) -> ValidationErrors {
    let mut errors = Vec::new();
    require(&mut errors, "id", &command.id, "Issue ID");
    check_title(&mut errors, &command.title, UPDATE_TITLE_MIN, UPDATE_TITLE_MAX);
    check_description(
        &mut errors,
        command.description.as_deref(),
        UPDATE_DESCRIPTION_MAX,
    );
    ValidationErrors { errors }
}

/// Validate a status-change command. The status field is typed, so enum
/// membership is guaranteed by construction; only the id can be wrong.
pub fn validate_update_status(command: &UpdateIssueStatusCommand) -> ValidationErrors {
    let mut errors = Vec::new();
    require(&mut errors, "issueId", &command.issue_id, "Issue ID");
    ValidationErrors { errors }
}

/// Validate a delete (archive) command: id required.
pub fn validate_delete(command: &DeleteIssueCommand) -> ValidationErrors {
    let mut errors = Vec::new();
    require(&mut errors, "id", &command.id, "Issue ID");
    ValidationErrors { errors }
}

/// Validate a list query: page ≥ 1, page size in [1, 100].
pub fn validate_list(query: &ListIssuesQuery) -> ValidationErrors {
    let mut errors = Vec::new();
    if query.page < 1 {
        errors.push(FieldError::new(
            "page",
            "Page must be greater than or equal to 1.",
        ));
    }
    if query.page_size < 1 || query.page_size > PAGE_SIZE_MAX {
        errors.push(FieldError::new(
            "pageSize",
            format!("Page size must be between 1 and {PAGE_SIZE_MAX}."),
        ));
    }
    ValidationErrors { errors }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_valid_command_passes() {
        let command = CreateIssueCommand {
            title: "Fix login redirect".to_string(),
            description: Some("Users bounce back to /".to_string()),
            labels: vec!["bug".to_string()],
        };
        assert!(validate_create(&command).is_empty());
    }

    #[test]
    fn test_create_title_too_short() {
        let command = CreateIssueCommand {
            title: "AB".to_string(),
            ..Default::default()
        };
        let report = validate_create(&command);
        assert!(report.has_field("title"));
        assert_eq!(report.errors.len(), 1);
    }

    #[test]
    fn test_create_title_boundaries() {
        let at_min = CreateIssueCommand {
            title: "abc".to_string(),
            ..Default::default()
        };
        assert!(validate_create(&at_min).is_empty());

        let at_max = CreateIssueCommand {
            title: "x".repeat(CREATE_TITLE_MAX),
            ..Default::default()
        };
        assert!(validate_create(&at_max).is_empty());

        let over = CreateIssueCommand {
            title: "x".repeat(CREATE_TITLE_MAX + 1),
            ..Default::default()
        };
        assert!(validate_create(&over).has_field("title"));
    }

    #[test]
    fn test_create_collects_all_violations() {
        let command = CreateIssueCommand {
            title: "ab".to_string(),
            description: Some("d".repeat(CREATE_DESCRIPTION_MAX + 1)),
            labels: vec!["".to_string(), "l".repeat(LABEL_NAME_MAX + 1)],
        };
        let report = validate_create(&command);
        assert_eq!(report.errors.len(), 4);
        assert!(report.has_field("title"));
        assert!(report.has_field("description"));
        assert!(report.has_field("labels"));
    }

    #[test]
    fn test_create_missing_description_is_fine() {
        let command = CreateIssueCommand {
            title: "Valid title".to_string(),
            description: None,
            labels: Vec::new(),
        };
        assert!(validate_create(&command).is_empty());
    }

    #[test]
    fn test_update_bounds_differ_from_create() {
        // 256-char titles pass on update but would fail on create
        let command = UpdateIssueCommand {
            id: "some-id".to_string(),
            title: "x".repeat(UPDATE_TITLE_MAX),
            description: Some("d".repeat(UPDATE_DESCRIPTION_MAX)),
        };
        assert!(validate_update(&command).is_empty());

        let over = UpdateIssueCommand {
            id: "some-id".to_string(),
            title: "x".repeat(UPDATE_TITLE_MAX + 1),
            description: Some("d".repeat(UPDATE_DESCRIPTION_MAX + 1)),
        };
        let report = validate_update(&over);
        assert!(report.has_field("title"));
        assert!(report.has_field("description"));
    }

    #[test]
    fn test_update_requires_id() {
        let command = UpdateIssueCommand {
            id: "  ".to_string(),
            title: "Valid title".to_string(),
            description: None,
        };
        assert!(validate_update(&command).has_field("id"));
    }

    #[test]
    fn test_delete_requires_id() {
        let command = DeleteIssueCommand::default();
        assert!(validate_delete(&command).has_field("id"));

        let ok = DeleteIssueCommand {
            id: "abc".to_string(),
            archived_by: None,
        };
        assert!(validate_delete(&ok).is_empty());
    }

    #[test]
    fn test_update_status_requires_issue_id() {
        let command = UpdateIssueStatusCommand {
            issue_id: "".to_string(),
            status: IssueStatus::Closed,
        };
        assert!(validate_update_status(&command).has_field("issueId"));
    }

    #[test]
    fn test_list_query_bounds() {
        assert!(validate_list(&ListIssuesQuery { page: 1, page_size: 1 }).is_empty());
        assert!(validate_list(&ListIssuesQuery {
            page: 1,
            page_size: PAGE_SIZE_MAX
        })
        .is_empty());

        let report = validate_list(&ListIssuesQuery {
            page: 0,
            page_size: 0,
        });
        assert!(report.has_field("page"));
        assert!(report.has_field("pageSize"));

        assert!(validate_list(&ListIssuesQuery {
            page: 1,
            page_size: PAGE_SIZE_MAX + 1
        })
        .has_field("pageSize"));
    }
}
