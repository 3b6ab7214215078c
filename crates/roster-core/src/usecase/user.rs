//! User use-cases.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::User;
use crate::error::DomainError;
use crate::ports::{Logger, UserRepository};

/// Orchestrates user entity logic over a [`UserRepository`].
#[derive(Clone)]
pub struct UserUsecase {
    users: Arc<dyn UserRepository>,
    logger: Arc<dyn Logger>,
}

impl UserUsecase {
    pub fn new(users: Arc<dyn UserRepository>, logger: Arc<dyn Logger>) -> Self {
        Self { users, logger }
    }

    /// Register a user under a freshly generated uid.
    ///
    /// Blank fields are not rejected here; that check belongs to the caller.
    pub async fn create(
        &self,
        last_name: &str,
        first_name: &str,
        email: &str,
    ) -> Result<User, DomainError> {
        let uid = Uuid::new_v4().to_string();
        let user = User::new(uid, last_name, first_name, email);

        Ok(self.users.create(user).await?)
    }

    pub async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        Ok(self.users.find_all().await?)
    }

    /// `Ok(None)` when no user has this uid.
    pub async fn find_by_uid(&self, uid: &str) -> Result<Option<User>, DomainError> {
        Ok(self.users.find_by_uid(uid).await?)
    }

    pub async fn update(
        &self,
        uid: &str,
        last_name: &str,
        first_name: &str,
        email: &str,
    ) -> Result<User, DomainError> {
        let mut user = self.find_existing(uid).await?;
        user.update_profile(last_name, first_name, email)?;

        Ok(self.users.save(user).await?)
    }

    /// Logical delete; the record stays readable.
    pub async fn delete(&self, uid: &str) -> Result<User, DomainError> {
        let mut user = self.find_existing(uid).await?;
        user.set_delete();

        Ok(self.users.save(user).await?)
    }

    async fn find_existing(&self, uid: &str) -> Result<User, DomainError> {
        match self.users.find_by_uid(uid).await? {
            Some(user) => Ok(user),
            None => {
                let err = DomainError::UserNotFound {
                    uid: uid.to_string(),
                };
                self.logger.error(&err.to_string());
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{MissingField, RepoError};
    use crate::ports::{MockLogger, MockUserRepository};
    use chrono::{DateTime, Utc};
    use mockall::predicate::eq;

    fn stored_user() -> User {
        User {
            id: 1,
            uid: "u1".to_string(),
            last_name: "Tanaka".to_string(),
            first_name: "Taro".to_string(),
            email: "t.tanaka@example.com".to_string(),
            created_at: DateTime::<Utc>::default(),
            updated_at: DateTime::<Utc>::default(),
            deleted_at: None,
        }
    }

    fn usecase(repo: MockUserRepository, logger: MockLogger) -> UserUsecase {
        UserUsecase::new(Arc::new(repo), Arc::new(logger))
    }

    #[tokio::test]
    async fn test_create_generates_uid() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .withf(|user| {
                Uuid::parse_str(&user.uid).is_ok()
                    && user.id == 0
                    && user.last_name == "Tanaka"
                    && user.first_name == "Taro"
                    && user.email == "t.tanaka@example.com"
            })
            .times(1)
            .returning(|mut user| {
                user.id = 1;
                Ok(user)
            });

        let created = usecase(repo, MockLogger::new())
            .create("Tanaka", "Taro", "t.tanaka@example.com")
            .await
            .unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(Uuid::parse_str(&created.uid).unwrap().get_version_num(), 4);
    }

    #[tokio::test]
    async fn test_create_propagates_repo_error() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .returning(|_| Err(RepoError::Connection("down".to_string())));

        let err = usecase(repo, MockLogger::new())
            .create("Tanaka", "Taro", "t.tanaka@example.com")
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Repository(RepoError::Connection(_))));
    }

    #[tokio::test]
    async fn test_find_all() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_all()
            .times(1)
            .returning(|| Ok(vec![stored_user(), stored_user()]));

        let users = usecase(repo, MockLogger::new()).find_all().await.unwrap();

        assert_eq!(users.len(), 2);
    }

    #[tokio::test]
    async fn test_find_by_uid_not_found_is_not_an_error() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_uid()
            .with(eq("nobody"))
            .returning(|_| Ok(None));

        let found = usecase(repo, MockLogger::new())
            .find_by_uid("nobody")
            .await
            .unwrap();

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_update_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_uid()
            .with(eq("u1"))
            .times(1)
            .returning(|_| Ok(Some(stored_user())));
        repo.expect_save().times(1).returning(Ok);

        let before = stored_user().updated_at;
        let user = usecase(repo, MockLogger::new())
            .update("u1", "Sato", "Jiro", "z@example.com")
            .await
            .unwrap();

        assert_eq!(user.uid, "u1");
        assert_eq!(user.last_name, "Sato");
        assert_eq!(user.first_name, "Jiro");
        assert_eq!(user.email, "z@example.com");
        assert!(user.updated_at > before);
        assert!(user.deleted_at.is_none());
    }

    #[tokio::test]
    async fn test_update_not_found_logs_and_skips_save() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_uid().returning(|_| Ok(None));
        repo.expect_save().never();

        let mut logger = MockLogger::new();
        logger
            .expect_error()
            .withf(|message| message.contains("missing"))
            .times(1)
            .return_const(());

        let err = usecase(repo, logger)
            .update("missing", "Sato", "Jiro", "z@example.com")
            .await
            .unwrap_err();

        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_update_find_error_propagates() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_uid()
            .returning(|_| Err(RepoError::Query("timeout".to_string())));
        repo.expect_save().never();

        let err = usecase(repo, MockLogger::new())
            .update("u1", "Sato", "Jiro", "z@example.com")
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Repository(RepoError::Query(_))));
    }

    #[tokio::test]
    async fn test_update_validation_error_skips_save() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_uid()
            .returning(|_| Ok(Some(stored_user())));
        repo.expect_save().never();

        let err = usecase(repo, MockLogger::new())
            .update("u1", "", "Jiro", "")
            .await
            .unwrap_err();

        match err {
            DomainError::Profile(e) => {
                assert_eq!(e.missing, vec![MissingField::LastName, MissingField::Email]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_update_save_error_propagates() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_uid()
            .returning(|_| Ok(Some(stored_user())));
        repo.expect_save()
            .returning(|_| Err(RepoError::Constraint("email taken".to_string())));

        let err = usecase(repo, MockLogger::new())
            .update("u1", "Sato", "Jiro", "z@example.com")
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Repository(RepoError::Constraint(_))));
    }

    #[tokio::test]
    async fn test_delete_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_uid()
            .with(eq("u1"))
            .returning(|_| Ok(Some(stored_user())));
        repo.expect_save()
            .withf(|user| user.deleted_at.is_some())
            .times(1)
            .returning(Ok);

        let user = usecase(repo, MockLogger::new()).delete("u1").await.unwrap();

        assert!(user.is_deleted());
        assert_eq!(user.deleted_at, Some(user.updated_at));
        assert!(user.email.starts_with("t.tanaka@example.com"));
        assert_ne!(user.email, "t.tanaka@example.com");
    }

    #[tokio::test]
    async fn test_delete_not_found_logs_and_skips_save() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_uid().returning(|_| Ok(None));
        repo.expect_save().never();

        let mut logger = MockLogger::new();
        logger
            .expect_error()
            .withf(|message| message.contains("gone"))
            .times(1)
            .return_const(());

        let err = usecase(repo, logger).delete("gone").await.unwrap_err();

        assert!(matches!(err, DomainError::UserNotFound { ref uid } if uid == "gone"));
    }

    #[tokio::test]
    async fn test_delete_find_error_propagates() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_uid()
            .returning(|_| Err(RepoError::Query("timeout".to_string())));
        repo.expect_save().never();

        let err = usecase(repo, MockLogger::new()).delete("u1").await.unwrap_err();

        assert!(matches!(err, DomainError::Repository(RepoError::Query(_))));
    }

    #[tokio::test]
    async fn test_delete_save_error_propagates() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_uid()
            .returning(|_| Ok(Some(stored_user())));
        repo.expect_save()
            .times(1)
            .returning(|_| Err(RepoError::Constraint("email taken".to_string())));

        let err = usecase(repo, MockLogger::new()).delete("u1").await.unwrap_err();

        assert!(matches!(err, DomainError::Repository(RepoError::Constraint(_))));
    }
}
