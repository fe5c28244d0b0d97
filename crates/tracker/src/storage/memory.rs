//! In-memory repository implementation.
//!
//! Stores all issues in a RAM map behind a read-write lock. Clones share
//! the same underlying data, so an executor and a test can observe the same
//! store. Each trait call takes the lock exactly once, which gives every
//! operation the single-consistent-snapshot behavior the repository
//! contract asks for.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;

use crate::domain::Issue;
use crate::error::StorageError;
use crate::storage::IssueRepository;

/// In-memory storage backend using a shared HashMap.
///
/// All data is lost when the last clone is dropped. Used as the test
/// backend and as the reference implementation of the repository contract.
#[derive(Debug, Clone, Default)]
pub struct InMemoryIssueRepository {
    issues: Arc<RwLock<HashMap<String, Issue>>>,
}

impl InMemoryIssueRepository {
    /// Create a new, empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored issues, archived ones included.
    pub fn len(&self) -> usize {
        self.issues.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.read().is_empty()
    }
}

/// Newest-first by `created_at`; descending id breaks creation-time ties so
/// page boundaries stay stable under a static dataset.
fn newest_first(a: &Issue, b: &Issue) -> std::cmp::Ordering {
    b.created_at
        .cmp(&a.created_at)
        .then_with(|| b.id.cmp(&a.id))
}

#[async_trait]
impl IssueRepository for InMemoryIssueRepository {
    async fn create(&self, issue: Issue) -> Result<Issue, StorageError> {
        debug!(issue_id = %issue.id, "storing new issue");
        self.issues.write().insert(issue.id.clone(), issue.clone());
        Ok(issue)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Issue>, StorageError> {
        Ok(self.issues.read().get(id).cloned())
    }

    async fn update(&self, issue: Issue) -> Result<Option<Issue>, StorageError> {
        let mut issues = self.issues.write();
        if !issues.contains_key(&issue.id) {
            debug!(issue_id = %issue.id, "update target vanished");
            return Ok(None);
        }
        issues.insert(issue.id.clone(), issue.clone());
        Ok(Some(issue))
    }

    async fn archive(
        &self,
        id: &str,
        archived_by: Option<&str>,
    ) -> Result<bool, StorageError> {
        let mut issues = self.issues.write();
        match issues.get_mut(id) {
            Some(issue) => {
                *issue = issue.archive(archived_by.map(str::to_string));
                debug!(issue_id = %id, "archived issue");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn get_all(&self) -> Result<Vec<Issue>, StorageError> {
        Ok(self.issues.read().values().cloned().collect())
    }

    async fn get_page(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<(Vec<Issue>, u64), StorageError> {
        let issues = self.issues.read();
        let mut live: Vec<&Issue> = issues.values().filter(|i| !i.is_archived).collect();
        live.sort_by(|a, b| newest_first(a, b));

        let total = live.len() as u64;
        let skip = (page.saturating_sub(1) as usize).saturating_mul(page_size as usize);
        let items = live
            .into_iter()
            .skip(skip)
            .take(page_size as usize)
            .cloned()
            .collect();

        Ok((items, total))
    }

    async fn count(&self) -> Result<u64, StorageError> {
        Ok(self.issues.read().len() as u64)
    }
}
