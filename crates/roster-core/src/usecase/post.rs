//! Post use-cases.

use std::sync::Arc;

use crate::domain::{Post, Text};
use crate::error::DomainError;
use crate::ports::{Logger, PostRepository};

#[derive(Clone)]
pub struct PostUsecase {
    posts: Arc<dyn PostRepository>,
    logger: Arc<dyn Logger>,
    text_limit: usize,
}

impl PostUsecase {
    pub fn new(posts: Arc<dyn PostRepository>, logger: Arc<dyn Logger>) -> Self {
        Self {
            posts,
            logger,
            text_limit: Text::MAX_LEN,
        }
    }

    /// Override the byte bound applied to new post text.
    pub fn with_text_limit(mut self, limit: usize) -> Self {
        self.text_limit = limit;
        self
    }

    /// Validate and store a new post.
    ///
    /// Rejected input is logged at warn level: it is the caller's mistake,
    /// not a service fault.
    pub async fn create(&self, text: &str) -> Result<Post, DomainError> {
        let post = match Post::with_limit(text, self.text_limit) {
            Ok(post) => post,
            Err(e) => {
                let err = DomainError::from(e);
                self.logger.warn(&err.to_string());
                return Err(err);
            }
        };

        Ok(self.posts.create(post).await?)
    }

    pub async fn find_all(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.find_all().await?)
    }
}
