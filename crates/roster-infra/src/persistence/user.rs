use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use roster_core::domain::User;
use roster_core::error::RepoError;
use roster_core::ports::{Logger, UserRepository};

/// Fixture-backed user repository.
///
/// Reads come from the seeded fixtures; `create` and `save` hand the user
/// back without storing it.
pub struct DummyUserRepository {
    fixtures: Vec<User>,
    logger: Arc<dyn Logger>,
}

impl DummyUserRepository {
    /// Repository seeded with the default fixtures.
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self::with_fixtures(seed_users(), logger)
    }

    pub fn with_fixtures(fixtures: Vec<User>, logger: Arc<dyn Logger>) -> Self {
        Self { fixtures, logger }
    }

    fn next_id(&self) -> i64 {
        self.fixtures.iter().map(|u| u.id).max().unwrap_or(0) + 1
    }
}

fn seed_users() -> Vec<User> {
    vec![
        seed_user(1, "xxxx-xxxx-xxxx-0001", "Tanaka", "Taro", "t.tanaka@example.com"),
        seed_user(2, "xxxx-xxxx-xxxx-0002", "Sato", "Ichiro", "i.sato@example.com"),
    ]
}

fn seed_user(id: i64, uid: &str, last_name: &str, first_name: &str, email: &str) -> User {
    User {
        id,
        uid: uid.to_string(),
        last_name: last_name.to_string(),
        first_name: first_name.to_string(),
        email: email.to_string(),
        created_at: DateTime::<Utc>::default(),
        updated_at: DateTime::<Utc>::default(),
        deleted_at: None,
    }
}

#[async_trait]
impl UserRepository for DummyUserRepository {
    async fn create(&self, user: User) -> Result<User, RepoError> {
        let now = Utc::now();
        tracing::debug!(uid = %user.uid, "Creating user");

        Ok(User {
            id: self.next_id(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
            ..user
        })
    }

    async fn find_all(&self) -> Result<Vec<User>, RepoError> {
        if self.fixtures.is_empty() {
            self.logger.error("no users found");
        }
        Ok(self.fixtures.clone())
    }

    async fn find_by_uid(&self, uid: &str) -> Result<Option<User>, RepoError> {
        Ok(self.fixtures.iter().find(|u| u.uid == uid).cloned())
    }

    async fn save(&self, user: User) -> Result<User, RepoError> {
        tracing::debug!(uid = %user.uid, "Saving user");
        Ok(user)
    }
}
