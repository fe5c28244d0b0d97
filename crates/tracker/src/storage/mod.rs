//! Storage abstraction layer: the single persistence boundary of the core.
//!
//! Handlers depend only on the [`IssueRepository`] trait, never on
//! store-specific query types, so any document or relational store can be
//! substituted — the shipped in-memory backend doubles as the test fake.
//! Every method is one atomic operation from the core's point of view;
//! last-write-wins is the concurrency contract, with no compare-and-swap
//! token anywhere in the design.

use async_trait::async_trait;

use crate::domain::Issue;
use crate::error::StorageError;

pub mod memory;

pub use memory::InMemoryIssueRepository;

/// Trait for storage backends that persist issues.
///
/// Implementations report infrastructure problems as [`StorageError`];
/// the core propagates them unchanged and never retries.
#[async_trait]
pub trait IssueRepository: Send + Sync {
    /// Insert a new issue and return the persisted snapshot.
    async fn create(&self, issue: Issue) -> Result<Issue, StorageError>;

    /// Look up an issue by id. `None` means absent, not an error.
    async fn get_by_id(&self, id: &str) -> Result<Option<Issue>, StorageError>;

    /// Replace an existing issue wholesale.
    ///
    /// Returns `None` when the target no longer exists — the caller lost a
    /// race with a concurrent removal path.
    async fn update(&self, issue: Issue) -> Result<Option<Issue>, StorageError>;

    /// Set the archival flag, the archival metadata, and `updated_at` in one
    /// write. Returns whether a record was modified.
    async fn archive(
        &self,
        id: &str,
        archived_by: Option<&str>,
    ) -> Result<bool, StorageError>;

    /// Every issue, archived ones included, in no guaranteed order.
    ///
    /// Unbounded; meant for small admin views and tests, not user-facing
    /// listings.
    async fn get_all(&self) -> Result<Vec<Issue>, StorageError>;

    /// One 1-indexed page of non-archived issues, newest-first by
    /// `created_at` (descending id as tie-break), plus the total count of
    /// non-archived issues.
    ///
    /// The item slice and the count come from the same consistent snapshot;
    /// consistency across separate calls is not promised.
    async fn get_page(&self, page: u32, page_size: u32)
        -> Result<(Vec<Issue>, u64), StorageError>;

    /// Total number of issues, archived ones included.
    async fn count(&self) -> Result<u64, StorageError>;
}
