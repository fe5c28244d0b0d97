//! Read-side handlers: point lookup, unbounded reads, and the paginated
//! listing.

use tokio_util::sync::CancellationToken;

use super::{CommandExecutor, PageOfIssues};
use crate::domain::Issue;
use crate::error::{Error, Result};
use crate::storage::IssueRepository;
use crate::validation::{validate_list, GetIssueQuery, ListIssuesQuery};

impl<R: IssueRepository> CommandExecutor<R> {
    /// Look up a single issue by id. Pure lookup; archived issues are
    /// returned like any other.
    ///
    /// An empty or whitespace id is `InvalidArgument` — it bypassed command
    /// validation, so the handler guards it directly.
    pub async fn get_issue(
        &self,
        query: GetIssueQuery,
        cancel: &CancellationToken,
    ) -> Result<Option<Issue>> {
        if query.issue_id.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "issue id cannot be empty".to_string(),
            ));
        }
        self.checkpoint(cancel)?;
        Ok(self.repository.get_by_id(&query.issue_id).await?)
    }

    /// Every issue, archived ones included, with no pagination.
    ///
    /// Only suitable where an unbounded read is acceptable (small admin
    /// views, tests); user-facing listings go through [`Self::list_issues`].
    pub async fn get_all_issues(&self, cancel: &CancellationToken) -> Result<Vec<Issue>> {
        self.checkpoint(cancel)?;
        Ok(self.repository.get_all().await?)
    }

    /// Total number of issues, archived ones included.
    pub async fn count_issues(&self, cancel: &CancellationToken) -> Result<u64> {
        self.checkpoint(cancel)?;
        Ok(self.repository.count().await?)
    }

    /// One page of non-archived issues, newest-first by creation time.
    ///
    /// A page beyond the last returns an empty item list with `total` and
    /// `total_pages` still populated. Items and total come from one
    /// repository read; a write racing the listing may shift the figures of
    /// the next call, which is the documented limit of the contract.
    pub async fn list_issues(
        &self,
        query: ListIssuesQuery,
        cancel: &CancellationToken,
    ) -> Result<PageOfIssues> {
        self.ensure_valid(validate_list(&query))?;
        self.checkpoint(cancel)?;

        let (items, total) = self.repository.get_page(query.page, query.page_size).await?;
        Ok(PageOfIssues::new(items, total, query.page, query.page_size))
    }
}
