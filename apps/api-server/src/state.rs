//! Application state - shared across all handlers.

use std::sync::Arc;

use roster_core::ports::{Logger, PostRepository, UserRepository};
use roster_core::usecase::{PostUsecase, UserUsecase};
use roster_infra::{DummyPostRepository, DummyUserRepository, TracingLogger};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: UserUsecase,
    pub posts: PostUsecase,
}

impl AppState {
    /// Wire the use-cases to their adapters.
    pub fn new(config: &AppConfig) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger::new());

        let user_repo: Arc<dyn UserRepository> =
            Arc::new(DummyUserRepository::new(logger.clone()));
        let post_repo: Arc<dyn PostRepository> = Arc::new(DummyPostRepository::new());

        let users = UserUsecase::new(user_repo, logger.clone());
        let posts = PostUsecase::new(post_repo, logger.clone())
            .with_text_limit(config.post_text_max_len);

        logger.info("Application state initialized");

        Self { users, posts }
    }
}
