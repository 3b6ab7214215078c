use async_trait::async_trait;

use roster_core::domain::Post;
use roster_core::error::RepoError;
use roster_core::ports::PostRepository;

/// Stored texts. Longer than the default bound on purpose: stored rows are
/// trusted and rebuilt without validation.
const SEED_TEXTS: [&str; 2] = ["first stored post", "second stored post"];

/// Fixture-backed post repository.
pub struct DummyPostRepository {
    texts: Vec<String>,
}

impl DummyPostRepository {
    pub fn new() -> Self {
        Self::with_texts(SEED_TEXTS.iter().map(|t| t.to_string()).collect())
    }

    pub fn with_texts(texts: Vec<String>) -> Self {
        Self { texts }
    }
}

impl Default for DummyPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for DummyPostRepository {
    async fn create(&self, post: Post) -> Result<Post, RepoError> {
        tracing::debug!(text = %post.text_value(), "Creating post");
        Ok(post)
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.texts.iter().map(Post::reconstitute).collect())
    }
}
