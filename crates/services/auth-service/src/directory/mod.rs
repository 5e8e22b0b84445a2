//! User directory seam.
//!
//! Persistence is an external collaborator. The flows only ever see this
//! trait; `InMemoryDirectory` is the reference implementation used by the
//! gateway binary and the tests.

mod memory;

use async_trait::async_trait;

use domain::{BriefUser, DirectoryError, User, UserId, UserPatch};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

pub use memory::InMemoryDirectory;

/// Directory result alias
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// User directory trait for dependency injection.
///
/// Implementations must make each mutation atomic per record and must enforce
/// identifier (email) and id uniqueness themselves.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Persist a new record
    async fn create_user(&self, user: User) -> DirectoryResult<()>;

    /// Find a record by identifier (email)
    async fn find_by_identifier(&self, email: &str) -> DirectoryResult<User>;

    /// Find a record by id
    async fn find_by_id(&self, id: UserId) -> DirectoryResult<User>;

    /// List summaries ordered by id
    async fn list_brief(&self, limit: u64, offset: u64) -> DirectoryResult<Vec<BriefUser>>;

    /// Apply a partial update to an existing record
    async fn update_user(&self, id: UserId, patch: UserPatch) -> DirectoryResult<()>;

    /// Remove a record permanently
    async fn delete_user(&self, id: UserId) -> DirectoryResult<()>;
}
