use async_trait::async_trait;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use crate::domain::{Post, User};
use crate::error::RepoError;

/// User persistence.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user. Storage assigns `id` and the timestamps.
    async fn create(&self, user: User) -> Result<User, RepoError>;

    async fn find_all(&self) -> Result<Vec<User>, RepoError>;

    /// `Ok(None)` is the only not-found signal.
    async fn find_by_uid(&self, uid: &str) -> Result<Option<User>, RepoError>;

    /// Write back an existing user.
    async fn save(&self, user: User) -> Result<User, RepoError>;
}

/// Post repository.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create(&self, post: Post) -> Result<Post, RepoError>;

    async fn find_all(&self) -> Result<Vec<Post>, RepoError>;
}
